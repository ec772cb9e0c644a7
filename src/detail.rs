// ABOUTME: Detail aggregation composing the directory fetch with best-effort geocoding
// ABOUTME: The single place encoding the hard/soft dependency asymmetry between the two calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::directory::DirectoryService;
use crate::errors::FetchOutcome;
use crate::geocoding::GeocodingResolver;
use crate::models::AggregatedDetail;
use tracing::{debug, instrument};

/// Phase of a single detail fetch
///
/// Progression per request: `Idle → FetchingUser → {Failed |
/// FetchingLocation → Done}`. `Failed` and `Done` are terminal; there is no
/// retry transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    /// Nothing in flight
    Idle,
    /// Waiting on the primary directory fetch
    FetchingUser,
    /// Primary fetch done, waiting on the geocoding lookup
    FetchingLocation,
    /// Terminal: payload ready, with or without a coordinate
    Done,
    /// Terminal: the primary fetch failed
    Failed,
}

impl DetailPhase {
    /// Stable label for tracing fields
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::FetchingUser => "fetching_user",
            Self::FetchingLocation => "fetching_location",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

/// Composes a directory record with its resolved location
///
/// The two sub-calls carry different failure semantics: the directory fetch
/// is a hard dependency whose failure propagates unchanged, while geocoding
/// is soft and degrades to `coordinate: None`. Encoding that asymmetry here,
/// once, spares every caller from re-deriving it.
#[derive(Debug, Clone)]
pub struct DetailService {
    directory: DirectoryService,
    geocoder: GeocodingResolver,
}

impl DetailService {
    /// Wires the two sub-services together
    #[must_use]
    pub fn new(directory: DirectoryService, geocoder: GeocodingResolver) -> Self {
        Self {
            directory,
            geocoder,
        }
    }

    /// Fetches one record and resolves its address
    ///
    /// Concurrent invocations for the same id are not deduplicated: the
    /// session store is read-only during the operation and both sub-services
    /// are stateless, so independent requests are safe.
    #[instrument(skip(self), fields(service = "detail"))]
    pub async fn get_detail(&self, id: &str) -> FetchOutcome<AggregatedDetail> {
        debug!(phase = DetailPhase::FetchingUser.as_str(), "fetching record");
        let user = match self.directory.get_user(id).await.into_result() {
            Ok(user) => user,
            Err(failure) => {
                debug!(phase = DetailPhase::Failed.as_str(), "primary fetch failed");
                return failure;
            }
        };

        debug!(
            phase = DetailPhase::FetchingLocation.as_str(),
            "resolving address"
        );
        let coordinate = self.geocoder.resolve(&user.address).await;

        debug!(
            phase = DetailPhase::Done.as_str(),
            located = coordinate.is_some(),
            "detail ready"
        );
        FetchOutcome::Ok(AggregatedDetail { user, coordinate })
    }
}
