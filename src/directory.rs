// ABOUTME: Directory API operations built on the authenticated request client
// ABOUTME: Stateless login, paginated listing, and single-record lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::client::ApiClient;
use crate::constants::endpoints;
use crate::errors::FetchOutcome;
use crate::models::{Credentials, LoginResponse, UserEnvelope, UserListEnvelope, UserRecord};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;

/// Domain-specific directory calls
///
/// Holds no state of its own; every operation is a pure function of
/// (session, request). In particular, [`DirectoryService::login`] never
/// writes the session store: persisting the returned token is the
/// composition root's job, keeping single-writer discipline.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    client: Arc<ApiClient>,
}

impl DirectoryService {
    /// Wraps an authenticated request client
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Exchanges credentials for an opaque session token
    ///
    /// Posts unauthenticated; the caller decides what to do with the token.
    #[instrument(skip_all, fields(service = "directory", operation = "login"))]
    pub async fn login(&self, credentials: &Credentials) -> FetchOutcome<String> {
        let body = json!({
            "username": credentials.username,
            "password": credentials.password,
        });
        self.client
            .post_public(endpoints::LOGIN, &body)
            .await
            .decode::<LoginResponse>()
            .map(|response| response.token)
    }

    /// Fetches a page of directory records
    ///
    /// `skip` and `limit` are passed through verbatim; the server owns
    /// bounds enforcement. An empty page is a valid `Ok`, distinct from
    /// `NotFound`.
    #[instrument(skip(self), fields(service = "directory"))]
    pub async fn list_users(&self, skip: u32, limit: u32) -> FetchOutcome<Vec<UserRecord>> {
        let path = format!("{}?skip={skip}&limit={limit}", endpoints::USER_LIST);
        self.client
            .request(Method::GET, &path, None)
            .await
            .decode::<UserListEnvelope>()
            .map(|envelope| envelope.data)
    }

    /// Fetches a single record by its opaque identifier
    ///
    /// The server is the source of truth for existence; an unknown id
    /// surfaces as `NotFound`.
    #[instrument(skip(self), fields(service = "directory"))]
    pub async fn get_user(&self, id: &str) -> FetchOutcome<UserRecord> {
        let path = format!("{}/{id}", endpoints::USER);
        self.client
            .request(Method::GET, &path, None)
            .await
            .decode::<UserEnvelope>()
            .map(|envelope| envelope.data)
    }
}
