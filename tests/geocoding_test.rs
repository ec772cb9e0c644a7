// ABOUTME: Geocoding resolver tests for candidate selection and graceful degradation
// ABOUTME: Every failure mode must collapse to "no coordinate," never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0

mod common;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use directory_client::geocoding::GeocodingResolver;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn resolver_for(base: &str) -> GeocodingResolver {
    GeocodingResolver::new(&common::test_config(base, base)).expect("build resolver")
}

fn search_router(candidates: serde_json::Value) -> Router {
    Router::new().route("/search", get(move || async move { Json(candidates) }))
}

#[tokio::test]
async fn empty_address_resolves_to_none_without_a_network_call() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let router = Router::new().route(
        "/search",
        get(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!([]))
            }
        }),
    );
    let base = common::spawn_server(router).await;
    let resolver = resolver_for(&base);

    assert_eq!(resolver.resolve("").await, None);
    assert_eq!(resolver.resolve("   \t ").await, None);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn first_candidate_in_server_order_wins() {
    let base = common::spawn_server(search_router(json!([
        {"lat": "48.8584", "lon": "2.2945", "display_name": "Tour Eiffel"},
        {"lat": "40.7484", "lon": "-73.9857", "display_name": "somewhere else"},
    ])))
    .await;
    let resolver = resolver_for(&base);

    let coordinate = resolver.resolve("Eiffel Tower, Paris").await.unwrap();
    assert!((coordinate.latitude - 48.8584).abs() < 1e-9);
    assert!((coordinate.longitude - 2.2945).abs() < 1e-9);
}

#[tokio::test]
async fn empty_candidate_list_resolves_to_none() {
    let base = common::spawn_server(search_router(json!([]))).await;
    let resolver = resolver_for(&base);

    assert_eq!(resolver.resolve("Atlantis").await, None);
}

#[tokio::test]
async fn malformed_response_resolves_to_none() {
    let router = Router::new().route("/search", get(|| async { "not json at all" }));
    let base = common::spawn_server(router).await;
    let resolver = resolver_for(&base);

    assert_eq!(resolver.resolve("221B Baker Street").await, None);
}

#[tokio::test]
async fn unparseable_coordinates_resolve_to_none() {
    let base = common::spawn_server(search_router(json!([
        {"lat": "north-ish", "lon": "2.2945"},
    ])))
    .await;
    let resolver = resolver_for(&base);

    assert_eq!(resolver.resolve("somewhere vague").await, None);
}

#[tokio::test]
async fn server_error_resolves_to_none() {
    let router = Router::new().route(
        "/search",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, Json(json!([]))) }),
    );
    let base = common::spawn_server(router).await;
    let resolver = resolver_for(&base);

    assert_eq!(resolver.resolve("Eiffel Tower").await, None);
}

#[tokio::test]
async fn transport_failure_resolves_to_none() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let resolver = resolver_for(&base);
    assert_eq!(resolver.resolve("Eiffel Tower").await, None);
}

#[tokio::test]
async fn lookup_carries_the_query_and_an_identifying_client_label() {
    let seen: Arc<Mutex<Option<(HashMap<String, String>, Option<String>)>>> =
        Arc::new(Mutex::new(None));
    let capture = Arc::clone(&seen);
    let router = Router::new().route(
        "/search",
        get(
            move |Query(params): Query<HashMap<String, String>>, headers: HeaderMap| {
                let capture = Arc::clone(&capture);
                async move {
                    let agent = headers
                        .get("user-agent")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_owned);
                    *capture.lock().unwrap() = Some((params, agent));
                    Json(json!([{"lat": "51.5237", "lon": "-0.1586"}]))
                }
            },
        ),
    );
    let base = common::spawn_server(router).await;
    let resolver = resolver_for(&base);

    let coordinate = resolver.resolve("221B Baker Street, London").await;
    assert!(coordinate.is_some());

    let (params, agent) = seen.lock().unwrap().clone().expect("lookup seen");
    assert_eq!(
        params.get("q").map(String::as_str),
        Some("221B Baker Street, London")
    );
    assert_eq!(params.get("format").map(String::as_str), Some("json"));
    // Provider policy: an identifying label, never the session token.
    assert!(agent.unwrap().contains("directory-client"));
}
