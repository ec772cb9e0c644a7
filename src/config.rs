// ABOUTME: Environment-based configuration for base origins, timeouts, and session storage
// ABOUTME: Unset variables fall back to defaults; unparseable values warn and default
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::{defaults, env_config};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Runtime configuration for the directory client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Fixed base origin of the directory API
    pub directory_base_url: String,
    /// Base origin of the geocoding service
    pub geocoder_base_url: String,
    /// Per-request timeout
    pub http_timeout: Duration,
    /// Connection-establishment timeout
    pub http_connect_timeout: Duration,
    /// Optional override for the session token file location
    pub session_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            directory_base_url: defaults::DIRECTORY_BASE_URL.into(),
            geocoder_base_url: defaults::GEOCODER_BASE_URL.into(),
            http_timeout: Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
            http_connect_timeout: Duration::from_secs(defaults::HTTP_CONNECT_TIMEOUT_SECS),
            session_file: None,
        }
    }
}

impl ClientConfig {
    /// Builds configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            directory_base_url: env::var(env_config::DIRECTORY_BASE_URL)
                .unwrap_or_else(|_| defaults::DIRECTORY_BASE_URL.into()),
            geocoder_base_url: env::var(env_config::GEOCODER_BASE_URL)
                .unwrap_or_else(|_| defaults::GEOCODER_BASE_URL.into()),
            http_timeout: Duration::from_secs(parse_secs(
                env_config::HTTP_TIMEOUT_SECS,
                defaults::HTTP_TIMEOUT_SECS,
            )),
            http_connect_timeout: Duration::from_secs(parse_secs(
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                defaults::HTTP_CONNECT_TIMEOUT_SECS,
            )),
            session_file: env::var(env_config::SESSION_FILE).ok().map(PathBuf::from),
        }
    }
}

/// Parses a seconds-valued environment variable with a warn-and-default fallback
fn parse_secs(var: &str, default: u64) -> u64 {
    match env::var(var) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("invalid value for {var}: {raw:?}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}
