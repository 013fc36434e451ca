// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Venue address suggestions for schedule rows.

use std::sync::atomic::{AtomicU64, Ordering};

use sanding_geo::{GeoClient, Place};

use crate::draft::EventDraft;

/// Queries shorter than this never hit the network.
const MIN_QUERY_LEN: usize = 3;

/// Suggests venue addresses while the merchant types.
///
/// Suggestions are biased toward a position, default the service's
/// fallback position, and optionally filtered to the country resolved
/// from that position. Responses can arrive out of order; each query
/// takes a ticket and only the newest ticket may publish results, so a
/// slow early response never overwrites a fresh one.
#[derive(Debug)]
pub struct AddressLookup {
    geo: GeoClient,
    lat: f64,
    lon: f64,
    country: Option<String>,
    issued: AtomicU64,
    applied: AtomicU64,
}

impl AddressLookup {
    /// Creates a lookup biased toward `position`, or the fallback
    /// position when none is known.
    #[must_use]
    pub fn new(geo: GeoClient, position: Option<(f64, f64)>) -> Self {
        let (lat, lon) = position.unwrap_or_else(|| geo.fallback_position());
        Self {
            geo,
            lat,
            lon,
            country: None,
            issued: AtomicU64::new(0),
            applied: AtomicU64::new(0),
        }
    }

    /// Country name suggestions are currently restricted to, if any.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Resolves the country at the bias position and restricts future
    /// suggestions to it.
    ///
    /// Best effort: on failure the filter stays off and every result is
    /// kept.
    pub async fn resolve_country(&mut self) {
        match self.geo.reverse_country(self.lat, self.lon).await {
            Ok(country) => self.country = Some(country),
            Err(e) => {
                tracing::debug!(%e, "reverse geocode failed, keeping all countries");
                self.country = None;
            }
        }
    }

    /// Looks up suggestions for `query`.
    ///
    /// Returns `None` when a newer query has already published results,
    /// `Some(vec![])` for short queries and failed lookups.
    pub async fn suggest(&self, query: &str) -> Option<Vec<Place>> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        if query.chars().count() < MIN_QUERY_LEN {
            return self.publish(ticket, Vec::new());
        }

        let places = match self.geo.forward_search(query, self.lat, self.lon).await {
            Ok(places) => places,
            Err(e) => {
                tracing::debug!(%e, query, "address search failed");
                Vec::new()
            }
        };

        let places = match &self.country {
            Some(country) => places
                .into_iter()
                .filter(|place| &place.country == country)
                .collect(),
            None => places,
        };

        self.publish(ticket, places)
    }

    /// Copies a chosen suggestion into the schedule row at `index`.
    ///
    /// Returns false when the row does not exist.
    pub fn apply(place: &Place, draft: &mut EventDraft, index: usize) -> bool {
        draft.set_schedule_venue(index, place.display_address(), place.map_url())
    }

    // Publishes under `ticket` unless a newer ticket already did.
    fn publish(&self, ticket: u64, places: Vec<Place>) -> Option<Vec<Place>> {
        let mut current = self.applied.load(Ordering::SeqCst);
        loop {
            if ticket < current {
                return None;
            }
            match self
                .applied
                .compare_exchange(current, ticket, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return Some(places),
                Err(actual) => current = actual,
            }
        }
    }
}
