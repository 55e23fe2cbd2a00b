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

//! HTTP access to the remote search service.

use anyhow::Context as _;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use tracing::warn;

use crate::config::Config;
use crate::config::Endpoints;
use crate::error::SearchError;
use crate::model::ApiInfo;
use crate::model::ErrorBody;
use crate::model::HealthStatus;
use crate::model::SearchRequest;
use crate::model::SearchResponse;

#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}

pub struct HttpGateway {
    client: Client,
    endpoints: Endpoints,
}

impl HttpGateway {
    pub fn new(config: &Config) -> Result<Self> {
        let endpoints = config.endpoints()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("build http client")?;
        Ok(Self { client, endpoints })
    }

    pub fn origin(&self) -> &str {
        &self.endpoints.origin
    }

    /// A 503 carrying a health body decodes as an unhealthy status rather
    /// than an error.
    pub async fn health(&self) -> Result<HealthStatus, SearchError> {
        debug!(url = %self.endpoints.health, "health check");
        let response = self
            .client
            .get(self.endpoints.health.clone())
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| self.transport_error(err))?;
        match serde_json::from_slice::<HealthStatus>(&body) {
            Ok(health) => Ok(health),
            Err(_) if !status.is_success() => Err(application_error(status, &body)),
            Err(err) => Err(SearchError::InvalidResponse(err.to_string())),
        }
    }

    pub async fn info(&self) -> Result<ApiInfo, SearchError> {
        debug!(url = %self.endpoints.info, "fetch api info");
        let response = self
            .client
            .get(self.endpoints.info.clone())
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;
        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, SearchError> {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| self.transport_error(err))?;
        if !status.is_success() {
            let err = application_error(status, &body);
            warn!(status = status.as_u16(), error = %err, "search service returned failure");
            return Err(err);
        }
        serde_json::from_slice(&body).map_err(|err| {
            warn!(error = %err, "undecodable response body");
            SearchError::InvalidResponse(err.to_string())
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> SearchError {
        warn!(origin = %self.endpoints.origin, error = %err, "search service unreachable");
        SearchError::Transport {
            origin: self.endpoints.origin.clone(),
            detail: err.to_string(),
        }
    }
}

#[async_trait]
impl SearchBackend for HttpGateway {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        debug!(
            url = %self.endpoints.search,
            query = %request.query,
            top_k = request.top_k.get(),
            "dispatch search"
        );
        let response = self
            .client
            .post(self.endpoints.search.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;
        self.decode(response).await
    }
}

fn application_error(status: StatusCode, body: &[u8]) -> SearchError {
    let server_message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error);
    debug!(status = status.as_u16(), "application failure");
    SearchError::application(server_message)
}
