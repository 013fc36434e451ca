// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// A resolved place suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Place name.
    pub name: String,
    /// State or region.
    pub state: String,
    /// Country name.
    pub country: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
}

impl Place {
    /// Human-readable address, the way schedule rows render it.
    #[must_use]
    pub fn display_address(&self) -> String {
        format!("{}, {}, {}", self.name, self.state, self.country)
    }

    /// Google Maps link for the coordinate.
    #[must_use]
    pub fn map_url(&self) -> String {
        format!("https://maps.google.com/?q={},{}", self.lat, self.lon)
    }
}
