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

//! One search session: validate, call the backend, keep the current state.

use tracing::debug;
use tracing::warn;

use crate::gateway::SearchBackend;
use crate::input::InputValidator;
use crate::render::View;
use crate::render::render;
use crate::state::Event;
use crate::state::InFlight;
use crate::state::LoadingIndicator;
use crate::state::UiState;
use crate::state::transition;

pub struct SearchClient<B> {
    backend: B,
    validator: InputValidator,
    loading: LoadingIndicator,
    state: UiState,
}

impl<B: SearchBackend> SearchClient<B> {
    pub fn new(backend: B, validator: InputValidator) -> Self {
        Self::with_indicator(backend, validator, LoadingIndicator::new())
    }

    pub fn with_indicator(backend: B, validator: InputValidator, loading: LoadingIndicator) -> Self {
        Self {
            backend,
            validator,
            loading,
            state: UiState::Idle,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    pub fn view(&self) -> View {
        render(&self.state)
    }

    /// Runs one submission to completion and returns the settled state.
    pub async fn submit(&mut self, raw_query: &str, raw_top_k: &str) -> &UiState {
        let request = match self.validator.validate(raw_query, raw_top_k) {
            Ok(request) => request,
            Err(err) => {
                debug!(error = %err, "submission rejected");
                self.apply(Event::Rejected(err));
                return &self.state;
            }
        };

        let Some(guard) = self.loading.acquire() else {
            warn!("search already in flight; submission ignored");
            return &self.state;
        };
        let in_flight = InFlight::begin(&mut self.state, guard);
        let outcome = self.backend.search(&request).await;
        in_flight.settle(outcome);
        &self.state
    }

    pub fn edit_input(&mut self) {
        self.apply(Event::InputEdited);
    }

    pub fn clear(&mut self) {
        self.apply(Event::Cleared);
    }

    fn apply(&mut self, event: Event) {
        transition(&mut self.state, event);
    }
}
