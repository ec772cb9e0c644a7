// ABOUTME: Durable single-token session store backed by a file in the platform data directory
// ABOUTME: Sole owner and writer of the opaque auth token; services only read it
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::session;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Persistent store for the single opaque session token
///
/// Exactly one live session exists per process. The store is created on
/// successful login, destroyed on logout, and read before every
/// authenticated call. A present token is treated as valid until a call
/// using it is rejected as unauthorized; nothing pre-validates tokens.
///
/// Concurrent writes are last-write-wins, which is acceptable for a
/// single-session-per-device model.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store at the platform default location
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no data directory.
    pub fn new() -> AppResult<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| AppError::Config("no platform data directory available".into()))?;
        Ok(Self {
            path: base.join(session::APP_DIR).join(session::TOKEN_FILE),
        })
    }

    /// Creates a store backed by an explicit file path
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the current token, if any
    ///
    /// Unreadable storage is reported as a missing session: the caller's
    /// contract is "treat missing storage as missing session," so no storage
    /// error crosses this boundary.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_owned())
                }
            }
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("session storage unreadable, treating as no session: {e}");
                }
                None
            }
        }
    }

    /// Persists a token, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the token file or its parent directory cannot be
    /// written.
    pub fn set(&self, token: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(AppError::Storage)?;
        }
        fs::write(&self.path, token).map_err(AppError::Storage)?;
        debug!("session token persisted");
        Ok(())
    }

    /// Removes the persisted token; idempotent
    ///
    /// # Errors
    ///
    /// Returns an error if an existing token file cannot be removed.
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("session token cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(e)),
        }
    }
}
