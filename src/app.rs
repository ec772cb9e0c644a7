// ABOUTME: Composition root wiring the session store, request client, and services
// ABOUTME: Owns the explicit session lifecycle; the only writer of the token store
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::detail::DetailService;
use crate::directory::DirectoryService;
use crate::errors::{AppResult, FetchOutcome};
use crate::geocoding::GeocodingResolver;
use crate::models::{AggregatedDetail, Credentials, UserRecord};
use crate::session::SessionStore;
use std::sync::Arc;
use tracing::info;

/// Assembled directory client with an explicit session lifecycle
///
/// The session store is initialized here at construction, written on
/// [`DirectoryApp::sign_in`], cleared on [`DirectoryApp::sign_out`], and
/// never torn down beyond process exit. No other component mutates it; the
/// services only read the token. A rejected token (`Unauthenticated`
/// outcome) does not clear the store automatically — re-login is left to
/// the caller.
#[derive(Debug, Clone)]
pub struct DirectoryApp {
    session: Arc<SessionStore>,
    directory: DirectoryService,
    detail: DetailService,
}

impl DirectoryApp {
    /// Wires all components from a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the session store location cannot be determined
    /// or an HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let session = Arc::new(match &config.session_file {
            Some(path) => SessionStore::with_path(path.clone()),
            None => SessionStore::new()?,
        });

        let client = Arc::new(ApiClient::new(config, Arc::clone(&session))?);
        let directory = DirectoryService::new(client);
        let geocoder = GeocodingResolver::new(config)?;
        let detail = DetailService::new(directory.clone(), geocoder);

        Ok(Self {
            session,
            directory,
            detail,
        })
    }

    /// Wires all components from environment configuration
    ///
    /// # Errors
    ///
    /// Same failure modes as [`DirectoryApp::new`].
    pub fn from_env() -> AppResult<Self> {
        Self::new(&ClientConfig::from_env())
    }

    /// Whether a session token is currently persisted
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.get().is_some()
    }

    /// Logs in and persists the returned token on success
    ///
    /// This is the single place a login outcome reaches the session store.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be persisted; the login outcome
    /// itself is carried in the `FetchOutcome`.
    pub async fn sign_in(&self, credentials: &Credentials) -> AppResult<FetchOutcome<()>> {
        match self.directory.login(credentials).await.into_result() {
            Ok(token) => {
                self.session.set(&token)?;
                info!("session established");
                Ok(FetchOutcome::Ok(()))
            }
            Err(failure) => Ok(failure),
        }
    }

    /// Clears the persisted session
    ///
    /// # Errors
    ///
    /// Returns an error if an existing token file cannot be removed.
    pub fn sign_out(&self) -> AppResult<()> {
        self.session.clear()?;
        info!("session cleared");
        Ok(())
    }

    /// Lists directory records; see [`DirectoryService::list_users`]
    pub async fn list_users(&self, skip: u32, limit: u32) -> FetchOutcome<Vec<UserRecord>> {
        self.directory.list_users(skip, limit).await
    }

    /// Fetches a single record; see [`DirectoryService::get_user`]
    pub async fn get_user(&self, id: &str) -> FetchOutcome<UserRecord> {
        self.directory.get_user(id).await
    }

    /// Fetches a record with its resolved location; see [`DetailService::get_detail`]
    pub async fn get_detail(&self, id: &str) -> FetchOutcome<AggregatedDetail> {
        self.detail.get_detail(id).await
    }
}
