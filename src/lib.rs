// ABOUTME: Main library entry point for the directory-client SDK
// ABOUTME: Session-gated directory API access with best-effort address geocoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Directory Client
//!
//! A client SDK for a user-directory service: authenticate a user, list
//! directory records, fetch a single record, and resolve its free-text
//! address into map coordinates via an external geocoding service.
//!
//! Every network-backed operation returns a closed [`errors::FetchOutcome`]
//! instead of raising; callers pattern-match on it. Geocoding is a soft
//! dependency: when an address cannot be resolved, the detail payload is
//! degraded (`coordinate: None`) rather than failed.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use directory_client::app::DirectoryApp;
//! use directory_client::errors::FetchOutcome;
//! use directory_client::models::Credentials;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = DirectoryApp::from_env()?;
//!
//!     if let FetchOutcome::Ok(()) = app
//!         .sign_in(&Credentials::new("jane", "hunter2"))
//!         .await?
//!     {
//!         let detail = app.get_detail("42").await;
//!         println!("{detail:?}");
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Composition root wiring the session store and services together
pub mod app;

/// Authenticated HTTP request client with outcome classification
pub mod client;

/// Environment-based client configuration
pub mod config;

/// Application constants and endpoint paths
pub mod constants;

/// Detail aggregation composing directory and geocoding lookups
pub mod detail;

/// Directory API operations (`login`, `list_users`, `get_user`)
pub mod directory;

/// Outcome taxonomy and internal error types
pub mod errors;

/// Free-text address geocoding resolver
pub mod geocoding;

/// Structured logging setup
pub mod logging;

/// Data model and wire schemas
pub mod models;

/// Durable single-token session store
pub mod session;

pub use app::DirectoryApp;
pub use errors::{AppError, AppResult, FetchOutcome};
