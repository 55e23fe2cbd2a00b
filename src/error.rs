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

//! Errors surfaced to the user by a search submission.
//!
//! `Display` is the exact text shown in the error view, so the wording here is
//! part of the user-facing contract.

use thiserror::Error;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query";
pub const REQUEST_FAILED_MESSAGE: &str = "Search request failed";
pub const NO_DOCUMENTS_MESSAGE: &str =
    "No documents found matching your query. Try different search terms.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("{}", EMPTY_QUERY_MESSAGE)]
    EmptyQuery,

    #[error("Invalid result count {value:?}; expected one of {choices:?}")]
    InvalidTopK { value: String, choices: Vec<u32> },

    /// The service could not be reached at all.
    #[error(
        "Failed to connect to the search server. Please ensure the search service is running at {origin}"
    )]
    Transport { origin: String, detail: String },

    /// The service answered with a non-success status.
    #[error("{0}")]
    Application(String),

    #[error("The search server returned an unreadable response: {0}")]
    InvalidResponse(String),

    #[error("{}", NO_DOCUMENTS_MESSAGE)]
    EmptyResultSet,
}

impl SearchError {
    /// Stable machine-readable code used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "empty_query",
            Self::InvalidTopK { .. } => "invalid_top_k",
            Self::Transport { .. } => "transport",
            Self::Application(_) => "application",
            Self::InvalidResponse(_) => "invalid_response",
            Self::EmptyResultSet => "empty_result_set",
        }
    }

    /// Builds an application error from the optional `error` field of a
    /// failed response, falling back to a generic message.
    pub fn application(server_message: Option<String>) -> Self {
        match server_message {
            Some(message) if !message.is_empty() => Self::Application(message),
            _ => Self::Application(REQUEST_FAILED_MESSAGE.to_string()),
        }
    }
}
