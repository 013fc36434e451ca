// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Geocoding configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GeoConfig {
    /// Forward geocoding endpoint (Photon compatible).
    #[serde(default = "default_forward_url")]
    pub forward_url: String,
    /// Reverse geocoding endpoint (Nominatim compatible).
    #[serde(default = "default_reverse_url")]
    pub reverse_url: String,
    /// Latitude used when the caller has no position fix.
    #[serde(default = "default_fallback_lat")]
    pub fallback_lat: f64,
    /// Longitude used when the caller has no position fix.
    #[serde(default = "default_fallback_lon")]
    pub fallback_lon: f64,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_forward_url() -> String {
    "https://photon.komoot.io/api/".to_string()
}

fn default_reverse_url() -> String {
    "https://nominatim.openstreetmap.org/reverse".to_string()
}

// Kuala Lumpur, where most of our merchants are.
const fn default_fallback_lat() -> f64 {
    3.139
}

const fn default_fallback_lon() -> f64 {
    101.6869
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("sanding-geo/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            forward_url: default_forward_url(),
            reverse_url: default_reverse_url(),
            fallback_lat: default_fallback_lat(),
            fallback_lon: default_fallback_lon(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
