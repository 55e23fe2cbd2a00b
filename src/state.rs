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

//! Search session state machine and the loading indicator.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use crate::error::SearchError;
use crate::model::SearchResponse;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    ShowingResults(SearchResponse),
    ShowingError(SearchError),
}

#[derive(Debug, Clone)]
pub enum Event {
    /// A valid request was dispatched.
    Submitted,
    /// Input failed validation; nothing was sent.
    Rejected(SearchError),
    /// The outstanding request finished.
    Settled(Result<SearchResponse, SearchError>),
    /// The user changed the query text.
    InputEdited,
    /// The user dismissed the current view.
    Cleared,
    /// The outstanding request was dropped before it finished.
    Abandoned,
}

impl UiState {
    pub fn apply(self, event: Event) -> UiState {
        match (self, event) {
            (_, Event::Submitted) => UiState::Loading,
            (_, Event::Rejected(err)) => UiState::ShowingError(err),
            (_, Event::Settled(Ok(response))) if response.is_empty() => {
                UiState::ShowingError(SearchError::EmptyResultSet)
            }
            (_, Event::Settled(Ok(response))) => UiState::ShowingResults(response),
            (_, Event::Settled(Err(err))) => UiState::ShowingError(err),
            // Results survive an edit; only the error view clears.
            (UiState::ShowingError(_), Event::InputEdited) => UiState::Idle,
            (UiState::ShowingError(_) | UiState::ShowingResults(_), Event::Cleared) => {
                UiState::Idle
            }
            (UiState::Loading, Event::Abandoned) => UiState::Idle,
            (state, Event::InputEdited | Event::Cleared | Event::Abandoned) => state,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}

/// Shared flag that is raised while a request is outstanding.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    active: Arc<AtomicBool>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Returns `None` when a request already holds the indicator.
    pub fn acquire(&self) -> Option<LoadingGuard> {
        self.active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| LoadingGuard {
                active: Arc::clone(&self.active),
            })
    }
}

/// Lowers the indicator when dropped.
#[derive(Debug)]
pub struct LoadingGuard {
    active: Arc<AtomicBool>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

/// An outstanding request. Holds the state cell in `Loading` together with
/// the indicator, and leaves both together: `settle` applies the outcome,
/// dropping it unsettled moves the state back to `Idle`.
#[derive(Debug)]
pub struct InFlight<'a> {
    state: &'a mut UiState,
    _guard: LoadingGuard,
}

impl<'a> InFlight<'a> {
    pub fn begin(state: &'a mut UiState, guard: LoadingGuard) -> Self {
        transition(state, Event::Submitted);
        Self {
            state,
            _guard: guard,
        }
    }

    pub fn settle(self, outcome: Result<SearchResponse, SearchError>) {
        transition(self.state, Event::Settled(outcome));
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.state.is_loading() {
            transition(self.state, Event::Abandoned);
        }
    }
}

/// Applies `event` to the state held in `cell`.
pub fn transition(cell: &mut UiState, event: Event) {
    let state = std::mem::take(cell);
    *cell = state.apply(event);
}
