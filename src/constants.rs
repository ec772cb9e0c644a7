// ABOUTME: Application constants, endpoint paths, and environment variable names
// ABOUTME: Centralizes defaults shared between the library, the CLI, and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Project metadata constants
pub mod project {
    /// Project name (synced from Cargo.toml at compile time)
    pub const NAME: &str = env!("CARGO_PKG_NAME");
    /// Project version (synced from Cargo.toml at compile time)
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Builds the HTTP User-Agent string for outbound requests
    ///
    /// The geocoding provider's usage policy requires an identifying client
    /// label on every request; this is that label. It is not a credential.
    #[must_use]
    pub fn user_agent() -> String {
        format!("{NAME}/{VERSION}")
    }
}

/// Directory API endpoint paths, relative to the configured base origin
pub mod endpoints {
    /// Unauthenticated credential exchange
    pub const LOGIN: &str = "/login";
    /// Paginated user listing
    pub const USER_LIST: &str = "/user/list";
    /// Single user lookup prefix (`{USER}/{id}`)
    pub const USER: &str = "/user";
    /// Geocoder free-text search
    pub const GEOCODE_SEARCH: &str = "/search";
}

/// Environment variable names read by [`crate::config::ClientConfig`]
pub mod env_config {
    /// Base origin of the directory API
    pub const DIRECTORY_BASE_URL: &str = "DIRECTORY_BASE_URL";
    /// Base origin of the geocoding service
    pub const GEOCODER_BASE_URL: &str = "GEOCODER_BASE_URL";
    /// Per-request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
    /// Connection-establishment timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "HTTP_CONNECT_TIMEOUT_SECS";
    /// Override path for the persisted session token file
    pub const SESSION_FILE: &str = "SESSION_FILE";
}

/// Default configuration values used when environment variables are unset
pub mod defaults {
    /// Directory API base origin
    pub const DIRECTORY_BASE_URL: &str = "https://dev.softwareco.com/interview";
    /// Geocoding service base origin
    pub const GEOCODER_BASE_URL: &str = "https://nominatim.openstreetmap.org";
    /// Per-request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Connection-establishment timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Session persistence constants
pub mod session {
    /// Application directory under the platform data directory
    pub const APP_DIR: &str = "directory-client";
    /// File name holding the single opaque session token
    pub const TOKEN_FILE: &str = "session-token";
}
