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

use anyhow::Result;
use serde::Serialize;

use crate::model::ApiInfo;
use crate::model::HealthStatus;
use crate::model::TopK;
use crate::render::Card;
use crate::render::View;

#[derive(Debug, Clone, Serialize)]
pub struct QueryOut {
    pub text: String,
    /// Absent when the requested count was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<TopK>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorOut {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct JsonResponse {
    pub ok: bool,
    pub schema_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Card>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<ApiInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorOut>,
}

impl JsonResponse {
    pub fn ok() -> Self {
        Self {
            ok: true,
            schema_version: "1".to_string(),
            ..Default::default()
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            ok: false,
            schema_version: "1".to_string(),
            error: Some(ErrorOut {
                code: code.to_string(),
                message: message.to_string(),
            }),
            ..Default::default()
        }
    }

    pub fn from_view(view: &View) -> Self {
        match view {
            View::Results(results) => {
                let mut resp = Self::ok();
                resp.count = Some(results.count);
                resp.count_label = Some(results.count_label.clone());
                resp.results = Some(results.cards.clone());
                resp
            }
            View::Error(err) => Self::error(err.code, &err.message),
            View::Blank | View::Loading => Self::ok(),
        }
    }

    pub fn with_query(mut self, text: &str, top_k: Option<TopK>) -> Self {
        self.query = Some(QueryOut {
            text: text.to_string(),
            top_k,
        });
        self
    }

    pub fn with_health(mut self, health: HealthStatus) -> Self {
        self.health = Some(health);
        self
    }

    pub fn with_info(mut self, info: ApiInfo) -> Self {
        self.info = Some(info);
        self
    }
}

pub fn print_json(resp: &JsonResponse) -> Result<()> {
    let text = serde_json::to_string_pretty(resp)?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::SearchError;
    use crate::model::SearchHit;
    use crate::model::SearchResponse;
    use crate::render::render;
    use crate::state::UiState;

    #[test]
    fn results_view_serializes_cards() {
        let state = UiState::ShowingResults(SearchResponse {
            query: "q".to_string(),
            count: 1,
            results: vec![SearchHit {
                rank: 1,
                document_id: "doc42".to_string(),
                score: 0.8765,
            }],
        });
        let resp = JsonResponse::from_view(&render(&state)).with_query("q", TopK::new(3));
        let value = serde_json::to_value(&resp).expect("json");
        assert_eq!(
            value,
            json!({
                "ok": true,
                "schema_version": "1",
                "query": {"text": "q", "top_k": 3},
                "count": 1,
                "count_label": "1 result",
                "results": [{
                    "rank": 1,
                    "document_id": "doc42",
                    "score": 0.8765,
                    "score_label": "87.65%",
                    "tier": "primary"
                }]
            })
        );
    }

    #[test]
    fn error_view_serializes_code_and_message() {
        let state = UiState::ShowingError(SearchError::Application(
            "index unavailable".to_string(),
        ));
        let resp = JsonResponse::from_view(&render(&state)).with_query("q", None);
        let value = serde_json::to_value(&resp).expect("json");
        assert_eq!(
            value,
            json!({
                "ok": false,
                "schema_version": "1",
                "query": {"text": "q"},
                "error": {"code": "application", "message": "index unavailable"}
            })
        );
    }
}
