// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides mock HTTP servers on ephemeral ports, test configs, and session stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(dead_code)]

use axum::Router;
use directory_client::config::ClientConfig;
use directory_client::session::SessionStore;
use std::sync::{Arc, Once};
use std::time::Duration;
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Serves a router on an ephemeral local port, returning its base URL
pub async fn spawn_server(router: Router) -> String {
    init_test_logging();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("mock server local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });
    format!("http://{addr}")
}

/// Builds a config pointed at mock servers with short timeouts
pub fn test_config(directory_base_url: &str, geocoder_base_url: &str) -> ClientConfig {
    ClientConfig {
        directory_base_url: directory_base_url.to_owned(),
        geocoder_base_url: geocoder_base_url.to_owned(),
        http_timeout: Duration::from_secs(5),
        http_connect_timeout: Duration::from_secs(2),
        session_file: None,
    }
}

/// Session store inside a temp directory, with no token persisted
pub fn empty_store(dir: &TempDir) -> Arc<SessionStore> {
    Arc::new(SessionStore::with_path(dir.path().join("session-token")))
}

/// Session store inside a temp directory, pre-seeded with a token
pub fn store_with_token(dir: &TempDir, token: &str) -> Arc<SessionStore> {
    let store = SessionStore::with_path(dir.path().join("session-token"));
    store.set(token).expect("seed session token");
    Arc::new(store)
}
