// ABOUTME: Free-text address geocoding against a Nominatim-style lookup service
// ABOUTME: Every failure mode collapses to "no coordinate"; the caller never catches errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::ClientConfig;
use crate::constants::{endpoints, project};
use crate::errors::{AppError, AppResult};
use crate::models::GeoCoordinate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

/// One candidate match from the lookup service
///
/// Coordinates arrive string-encoded; parsing happens in
/// [`GeoCoordinate::from_strings`].
#[derive(Debug, Deserialize)]
struct GeocodeCandidate {
    lat: String,
    lon: String,
}

/// Resolves free-text addresses into coordinates
///
/// Independent of the directory session: requests carry an identifying
/// User-Agent per the provider's usage policy, never the bearer token.
/// Stateless by design; there is no response cache.
#[derive(Debug, Clone)]
pub struct GeocodingResolver {
    client: Client,
    base_url: String,
}

impl GeocodingResolver {
    /// Builds a resolver against the configured lookup service
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(project::user_agent())
            .timeout(config.http_timeout)
            .connect_timeout(config.http_connect_timeout)
            .build()
            .map_err(AppError::HttpClient)?;

        Ok(Self {
            client,
            base_url: config.geocoder_base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Resolves an address to a coordinate, or `None` when it cannot
    ///
    /// Not every free-text address is geocodable, so "no answer" is a data
    /// state rather than an error: transport failures, non-2xx statuses,
    /// malformed bodies, and empty candidate lists all resolve to `None`.
    /// The first candidate in server order wins; there is no local ranking.
    #[instrument(skip(self), fields(service = "geocoder", api_call = "search"))]
    pub async fn resolve(&self, address: &str) -> Option<GeoCoordinate> {
        let query = address.trim();
        if query.is_empty() {
            debug!("empty address, skipping lookup");
            return None;
        }

        let url = format!(
            "{}{}?q={}&format=json",
            self.base_url,
            endpoints::GEOCODE_SEARCH,
            urlencoding::encode(query)
        );

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("geocoding request failed: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("geocoding lookup returned status {}", response.status());
            return None;
        }

        let candidates: Vec<GeocodeCandidate> = match response.json().await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("unparseable geocoding response: {e}");
                return None;
            }
        };

        let Some(first) = candidates.first() else {
            debug!("no geocoding candidates for address");
            return None;
        };

        GeoCoordinate::from_strings(&first.lat, &first.lon)
    }
}
