// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Geocoding client.

use std::time::Duration;

use reqwest::{Client, Response};

use crate::config::GeoConfig;
use crate::error::GeoError;
use crate::types::Place;

/// Client for forward and reverse geocoding.
///
/// Reverse lookups resolve a coordinate to a country name; forward lookups
/// turn free text into candidate places biased toward a coordinate.
#[derive(Debug, Clone)]
pub struct GeoClient {
    client: Client,
    config: GeoConfig,
}

impl GeoClient {
    /// Creates a new geocoding client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: GeoConfig) -> Result<Self, GeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| GeoError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// The configured coordinate to anchor searches at when the caller has
    /// no position fix.
    #[must_use]
    pub fn fallback_position(&self) -> (f64, f64) {
        (self.config.fallback_lat, self.config.fallback_lon)
    }

    /// Resolves the country name at a coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response carries no
    /// country.
    pub async fn reverse_country(&self, lat: f64, lon: f64) -> Result<String, GeoError> {
        let response = self
            .client
            .get(&self.config.reverse_url)
            .query(&[("format", "json")])
            .query(&[("lat", lat), ("lon", lon)])
            .send()
            .await?;
        let response = check_status(response).await?;

        let body: ReverseResponse = response.json().await?;
        body.address
            .country
            .filter(|c| !c.is_empty())
            .ok_or_else(|| GeoError::InvalidResponse("no country at coordinate".to_string()))
    }

    /// Searches for places matching `query`, biased toward a coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn forward_search(
        &self,
        query: &str,
        lat: f64,
        lon: f64,
    ) -> Result<Vec<Place>, GeoError> {
        let response = self
            .client
            .get(&self.config.forward_url)
            .query(&[("q", query)])
            .query(&[("lat", lat), ("lon", lon)])
            .send()
            .await?;
        let response = check_status(response).await?;

        let body: FeatureCollection = response.json().await?;
        Ok(body.features.into_iter().map(Feature::into_place).collect())
    }
}

async fn check_status(response: Response) -> Result<Response, GeoError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read response".to_string());
    Err(GeoError::Http(format!("{status}: {text}")))
}

#[derive(Debug, serde::Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: ReverseAddress,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ReverseAddress {
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, serde::Deserialize)]
struct Feature {
    #[serde(default)]
    properties: FeatureProperties,
    #[serde(default)]
    geometry: FeatureGeometry,
}

impl Feature {
    fn into_place(self) -> Place {
        // GeoJSON coordinates are [lon, lat].
        let lon = self.geometry.coordinates.first().copied().unwrap_or(0.0);
        let lat = self.geometry.coordinates.get(1).copied().unwrap_or(0.0);
        Place {
            name: self.properties.name.unwrap_or_default(),
            state: self.properties.state.unwrap_or_default(),
            country: self.properties.country.unwrap_or_default(),
            lat,
            lon,
        }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
struct FeatureProperties {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct FeatureGeometry {
    #[serde(default)]
    coordinates: Vec<f64>,
}
