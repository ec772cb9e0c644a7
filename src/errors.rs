// ABOUTME: Unified outcome taxonomy for network-backed operations and internal error types
// ABOUTME: Defines FetchOutcome, the closed result shape callers pattern-match on
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Outcome and Error Types
//!
//! Two layers of failure live here:
//!
//! - [`FetchOutcome`] is the closed variant every network-backed operation
//!   returns. Nothing in the orchestration layer raises across its own
//!   boundary; callers match on the outcome and own the user-visible
//!   messaging.
//! - [`AppError`] covers the few operations that are not network outcomes:
//!   session-store writes, configuration handling, and HTTP client
//!   construction.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Internal error type for non-network operations
#[derive(Debug, Error)]
pub enum AppError {
    /// Session storage read/write failure
    #[error("storage error: {0}")]
    Storage(#[source] std::io::Error),

    /// Configuration problem (missing platform directory, bad value)
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client construction failure
    #[error("http client error: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Closed result shape for every network-backed operation
///
/// The taxonomy is deliberately small and terminal per attempt: there is no
/// automatic retry anywhere in this layer, and `Unauthenticated` never clears
/// the stored session (re-login is a caller decision).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// The operation succeeded with a parsed payload
    Ok(T),
    /// No session token was present, or the server rejected the one sent
    Unauthenticated,
    /// The requested resource does not exist
    NotFound,
    /// Transport-level failure (DNS, timeout, connection refused)
    NetworkFailure(String),
    /// Non-2xx business rejection, with the server message when one was sent
    ServerRejected(String),
}

impl<T> FetchOutcome<T> {
    /// Returns `true` for the `Ok` variant
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Converts the outcome into an `Option`, discarding failure detail
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            _ => None,
        }
    }

    /// Maps the success payload, carrying every failure variant through
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchOutcome<U> {
        match self.into_result() {
            Ok(value) => FetchOutcome::Ok(f(value)),
            Err(failure) => failure,
        }
    }

    /// Splits the outcome into the success value or the same failure
    /// re-typed for a downstream operation
    ///
    /// This is the seam that lets a composite operation propagate a primary
    /// failure unchanged while producing a differently-typed result.
    pub fn into_result<U>(self) -> Result<T, FetchOutcome<U>> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Unauthenticated => Err(FetchOutcome::Unauthenticated),
            Self::NotFound => Err(FetchOutcome::NotFound),
            Self::NetworkFailure(message) => Err(FetchOutcome::NetworkFailure(message)),
            Self::ServerRejected(message) => Err(FetchOutcome::ServerRejected(message)),
        }
    }
}

impl FetchOutcome<serde_json::Value> {
    /// Decodes a raw JSON success payload against an explicit endpoint schema
    ///
    /// Unparseable bodies fail closed as `ServerRejected` rather than
    /// propagating untyped data upward.
    pub fn decode<T: DeserializeOwned>(self) -> FetchOutcome<T> {
        match self.into_result() {
            Ok(value) => match serde_json::from_value(value) {
                Ok(parsed) => FetchOutcome::Ok(parsed),
                Err(e) => {
                    FetchOutcome::ServerRejected(format!("response did not match schema: {e}"))
                }
            },
            Err(failure) => failure,
        }
    }
}
