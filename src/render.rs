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

//! Pure rendering of a [`UiState`] into a view.
//!
//! A view is rebuilt from scratch on every call, so nothing carries over from
//! a previous render.

use std::fmt;

use serde::Serialize;

use crate::model::SearchHit;
use crate::model::SearchResponse;
use crate::state::UiState;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Blank,
    Loading,
    Results(ResultsView),
    Error(ErrorView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub query: String,
    pub count: usize,
    pub count_label: String,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorView {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub rank: u32,
    pub document_id: String,
    pub score: f64,
    pub score_label: String,
    pub tier: Tier,
}

/// Visual emphasis by position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Primary,
    Secondary,
    Tertiary,
}

impl Tier {
    fn for_position(index: usize) -> Self {
        match index {
            0 => Tier::Primary,
            1 => Tier::Secondary,
            _ => Tier::Tertiary,
        }
    }
}

pub fn render(state: &UiState) -> View {
    match state {
        UiState::Idle => View::Blank,
        UiState::Loading => View::Loading,
        UiState::ShowingResults(response) => View::Results(results_view(response)),
        UiState::ShowingError(err) => View::Error(ErrorView {
            code: err.code(),
            message: err.to_string(),
        }),
    }
}

fn results_view(response: &SearchResponse) -> ResultsView {
    ResultsView {
        query: response.query.clone(),
        count: response.count,
        count_label: count_label(response.count),
        cards: response
            .results
            .iter()
            .enumerate()
            .map(|(index, hit)| card(index, hit))
            .collect(),
    }
}

fn card(index: usize, hit: &SearchHit) -> Card {
    Card {
        rank: hit.rank,
        document_id: hit.document_id.clone(),
        score: hit.score,
        score_label: score_label(hit.score),
        tier: Tier::for_position(index),
    }
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{count} results")
    }
}

/// `0.8765` becomes `87.65%`.
pub fn score_label(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Blank => Ok(()),
            View::Loading => writeln!(f, "Searching..."),
            View::Error(err) => writeln!(f, "error: {}", err.message),
            View::Results(results) => {
                writeln!(
                    f,
                    "Results for \"{}\": {} found",
                    results.query, results.count_label
                )?;
                for card in &results.cards {
                    writeln!(f)?;
                    writeln!(f, "#{}  Document ID: {}", card.rank, card.document_id)?;
                    writeln!(f, "    Similarity Score: {}", card.score_label)?;
                }
                Ok(())
            }
        }
    }
}
