// ABOUTME: Common data models and per-endpoint wire schemas for the directory API
// ABOUTME: Defines credentials, user records, coordinates, and the aggregated detail payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Login credentials, transient and never persisted
///
/// `Debug` redacts the password so the struct can never leak secrets through
/// logging, even accidentally. Deliberately not serializable; the login call
/// builds its wire body explicitly.
#[derive(Clone)]
pub struct Credentials {
    /// Account user name
    pub username: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Creates credentials from owned or borrowed string inputs
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Immutable snapshot of a directory record at fetch time
///
/// Identity is `id`; records are not cached across screens, so two fetches
/// of the same id may legitimately differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque server-assigned identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Free-text postal address, input to geocoding
    pub address: String,
}

/// A parsed geographic coordinate pair
///
/// Only constructed from values that parse as finite floats; "no coordinate"
/// is represented as `Option::None` at the call sites, never as a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Parses a string-encoded coordinate pair as returned by the geocoder
    ///
    /// Returns `None` when either component fails to parse or is non-finite.
    #[must_use]
    pub fn from_strings(lat: &str, lon: &str) -> Option<Self> {
        let latitude: f64 = lat.trim().parse().ok()?;
        let longitude: f64 = lon.trim().parse().ok()?;
        if latitude.is_finite() && longitude.is_finite() {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }
}

/// View-ready composition of a directory record and its resolved location
///
/// `coordinate: None` means geocoding found no match or failed; by design
/// that degrades the payload without failing the aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedDetail {
    /// The primary directory record
    pub user: UserRecord,
    /// Best-effort resolved location of `user.address`
    pub coordinate: Option<GeoCoordinate>,
}

// ── Wire schemas ────────────────────────────────────────────────────────
// One explicit schema per endpoint, validated at the client boundary.

/// `POST /login` success body
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token; no claims are parsed locally
    pub token: String,
}

/// `GET /user/list` success body
#[derive(Debug, Deserialize)]
pub struct UserListEnvelope {
    /// Page of records; empty is a valid result, distinct from `NotFound`
    pub data: Vec<UserRecord>,
}

/// `GET /user/{id}` success body
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    /// The requested record
    pub data: UserRecord,
}

/// Optional body carried by non-2xx directory responses
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    /// Server-provided rejection detail, used as the `ServerRejected` message
    pub message: Option<String>,
}
