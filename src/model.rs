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

//! Wire types exchanged with the search service.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Non-empty, trimmed query text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Query(String);

impl Query {
    /// Returns `None` when the trimmed input is empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Query {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| "query must be a non-empty string".to_string())
    }
}

impl From<Query> for String {
    fn from(value: Query) -> Self {
        value.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Positive result count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TopK(u32);

impl TopK {
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for TopK {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "top_k must be a positive integer".to_string())
    }
}

impl From<TopK> for u32 {
    fn from(value: TopK) -> Self {
        value.0
    }
}

impl fmt::Display for TopK {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: Query,
    pub top_k: TopK,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub rank: u32,
    pub document_id: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Body of a non-success response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub documents_loaded: u64,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_round_trips_through_wire_format() {
        let request = SearchRequest {
            query: Query::parse("  database systems ").expect("query"),
            top_k: TopK::new(5).expect("top_k"),
        };
        let wire = serde_json::to_string(&request).expect("encode");
        assert_eq!(wire, r#"{"query":"database systems","top_k":5}"#);
        let decoded: SearchRequest = serde_json::from_str(&wire).expect("decode");
        assert_eq!(decoded, request);
    }

    #[test]
    fn request_rejects_empty_query_and_zero_top_k() {
        let err = serde_json::from_value::<SearchRequest>(json!({"query": "   ", "top_k": 3}));
        assert!(err.is_err());
        let err = serde_json::from_value::<SearchRequest>(json!({"query": "x", "top_k": 0}));
        assert!(err.is_err());
    }

    #[test]
    fn response_without_results_decodes_empty() {
        let resp: SearchResponse =
            serde_json::from_value(json!({"query": "q", "count": 0})).expect("decode");
        assert!(resp.is_empty());
    }

    #[test]
    fn response_preserves_result_order() {
        let resp: SearchResponse = serde_json::from_value(json!({
            "query": "q",
            "count": 2,
            "results": [
                {"rank": 1, "document_id": "b", "score": 0.9},
                {"rank": 2, "document_id": "a", "score": 0.4}
            ]
        }))
        .expect("decode");
        let ids: Vec<&str> = resp.results.iter().map(|h| h.document_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn health_reports_unhealthy_status() {
        let health: HealthStatus = serde_json::from_value(json!({
            "status": "unhealthy",
            "message": "Index not loaded",
            "documents_loaded": 0
        }))
        .expect("decode");
        assert!(!health.is_healthy());
    }
}
