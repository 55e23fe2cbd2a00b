// Copyright 2026 Sift Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::SearchError;
use crate::model::Query;
use crate::model::SearchRequest;
use crate::model::TopK;

/// Turns raw form input into a request, restricted to a fixed set of result
/// counts.
#[derive(Debug, Clone)]
pub struct InputValidator {
    choices: Vec<u32>,
}

impl InputValidator {
    pub fn new(choices: Vec<u32>) -> Self {
        Self { choices }
    }

    pub fn choices(&self) -> &[u32] {
        &self.choices
    }

    /// The query is checked first so an empty query never reports a top-k
    /// problem.
    pub fn validate(&self, raw_query: &str, raw_top_k: &str) -> Result<SearchRequest, SearchError> {
        let query = Query::parse(raw_query).ok_or(SearchError::EmptyQuery)?;
        let top_k = self.parse_top_k(raw_top_k)?;
        Ok(SearchRequest { query, top_k })
    }

    pub fn parse_top_k(&self, raw: &str) -> Result<TopK, SearchError> {
        let invalid = || SearchError::InvalidTopK {
            value: raw.to_string(),
            choices: self.choices.clone(),
        };
        let value: u32 = raw.trim().parse().map_err(|_| invalid())?;
        if !self.choices.contains(&value) {
            return Err(invalid());
        }
        TopK::new(value).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> InputValidator {
        InputValidator::new(vec![3, 5, 10, 20])
    }

    #[test]
    fn trims_query() {
        let request = validator().validate("  machine learning\n", "5").expect("valid");
        assert_eq!(request.query.as_str(), "machine learning");
        assert_eq!(request.top_k.get(), 5);
    }

    #[test]
    fn rejects_blank_queries() {
        for raw in ["", " ", "\t\n", "   \r\n  "] {
            assert_eq!(
                validator().validate(raw, "3").unwrap_err(),
                SearchError::EmptyQuery
            );
        }
    }

    #[test]
    fn empty_query_wins_over_bad_top_k() {
        assert_eq!(
            validator().validate("", "abc").unwrap_err(),
            SearchError::EmptyQuery
        );
    }

    #[test]
    fn rejects_top_k_outside_choices() {
        for raw in ["abc", "0", "-3", "4", "3.5", ""] {
            let err = validator().validate("q", raw).unwrap_err();
            assert_eq!(err.code(), "invalid_top_k", "input {raw:?}");
        }
    }

    #[test]
    fn accepts_padded_top_k() {
        assert_eq!(validator().parse_top_k(" 10 ").expect("valid").get(), 10);
    }
}
