// ABOUTME: Authenticated HTTP request client over reqwest with outcome classification
// ABOUTME: Attaches the current session token and maps transport/status failures to FetchOutcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::ClientConfig;
use crate::constants::project;
use crate::errors::{AppError, AppResult, FetchOutcome};
use crate::models::ApiErrorBody;
use crate::session::SessionStore;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// HTTP client for the directory API
///
/// Every call reads the current token from the [`SessionStore`]; an absent
/// token short-circuits to `Unauthenticated` before any network traffic, so
/// doomed requests are never issued. The client never writes the store: a
/// 401/403 response maps to `Unauthenticated` and leaves the persisted
/// session untouched, since clearing is a caller decision.
///
/// There is no retry. Each failure is classified once and surfaced.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Builds a client against the configured base origin
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(project::user_agent())
            .default_headers(headers)
            .timeout(config.http_timeout)
            .connect_timeout(config.http_connect_timeout)
            .build()
            .map_err(AppError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.directory_base_url.trim_end_matches('/').to_owned(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Issues an authenticated request and classifies the response
    #[instrument(skip(self, body), fields(service = "directory"))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> FetchOutcome<Value> {
        let Some(token) = self.session.get() else {
            debug!("no session token present, skipping request");
            return FetchOutcome::Unauthenticated;
        };

        let mut builder = self
            .http
            .request(method, self.url(path))
            .header(AUTHORIZATION, format!("Bearer {token}"));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        Self::dispatch(builder).await
    }

    /// Issues an unauthenticated POST, used only for the credential exchange
    ///
    /// Bypasses the token-read short-circuit because no session exists yet.
    #[instrument(skip(self, body), fields(service = "directory"))]
    pub async fn post_public(&self, path: &str, body: &Value) -> FetchOutcome<Value> {
        Self::dispatch(self.http.post(self.url(path)).json(body)).await
    }

    /// Sends a prepared request and maps the response into the outcome taxonomy
    async fn dispatch(builder: RequestBuilder) -> FetchOutcome<Value> {
        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::NetworkFailure(e.to_string()),
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return FetchOutcome::Unauthenticated;
        }
        if status == StatusCode::NOT_FOUND {
            return FetchOutcome::NotFound;
        }
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("server returned status {status}"));
            return FetchOutcome::ServerRejected(message);
        }

        match response.json::<Value>().await {
            Ok(parsed) => FetchOutcome::Ok(parsed),
            Err(e) => FetchOutcome::ServerRejected(format!("unparseable response body: {e}")),
        }
    }
}
