// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! This module provides helper functions to create test data including
//! configurations, drafts and sample server responses.

use std::path::Path;

use sanding_core::{
    ApiConfig, Config, Contact, EventDraft, GeoConfig, Schedule, Session, SessionStore,
    ValidationPolicy,
};

/// Creates a temporary state directory for one test.
///
/// The directory is removed when the returned guard drops.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn setup_state_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("failed to create temp state dir")
}

/// Creates a test configuration pointing at a mock server.
///
/// # Example
///
/// ```ignore
/// let state = setup_state_dir();
/// let config = test_config(&server.uri(), state.path());
/// ```
#[must_use]
pub fn test_config(base_url: &str, state_dir: &Path) -> Config {
    Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        },
        geo: GeoConfig::default(),
        state_dir: Some(state_dir.to_path_buf()),
        validation: ValidationPolicy::default(),
    }
}

/// Creates a session the way a successful login would.
#[must_use]
pub fn test_session() -> Session {
    Session {
        token: "token-123".to_string(),
        merchant_id: "m-42".to_string(),
        name: Some("Studio Kenduri".to_string()),
        email: Some("studio@example.com".to_string()),
    }
}

/// Persists [`test_session`] into `state_dir`, as if a login had
/// happened on a previous run.
///
/// # Panics
///
/// Panics if the session file cannot be written.
pub async fn write_session(state_dir: &Path) -> Session {
    let session = test_session();
    SessionStore::new(state_dir)
        .save(&session)
        .await
        .expect("failed to write session fixture");
    session
}

/// Creates a draft that passes validation.
#[must_use]
pub fn valid_draft() -> EventDraft {
    EventDraft {
        template_id: Some(4),
        groom_name: "Ahmad bin Abu".to_string(),
        groom_father_name: "Abu bin Ali".to_string(),
        bride_name: "Siti binti Salleh".to_string(),
        bride_father_name: "Salleh bin Omar".to_string(),
        email: "ahmad.siti@example.com".to_string(),
        schedules: vec![Schedule {
            title: "Akad Nikah".to_string(),
            start_time: "2026-03-14T09:00".to_string(),
            end_time: "2026-03-14T11:30".to_string(),
            address: "Masjid Wilayah, Kuala Lumpur, Malaysia".to_string(),
            address_url: "https://maps.google.com/?q=3.17,101.67".to_string(),
        }],
        contacts: vec![Contact {
            name: "Ahmad".to_string(),
            phone_number: "+60123456789".to_string(),
        }],
        ..Default::default()
    }
}

/// Returns a stored event record the way old deployments serve it, with
/// legacy field names and second-precision datetimes.
#[must_use]
pub fn sample_event_json() -> serde_json::Value {
    serde_json::json!({
        "id": 9,
        "name": "Ahmad & Siti",
        "groom_name": "Ahmad bin Abu",
        "groom_father_name": "Abu bin Ali",
        "bride_name": "Siti binti Salleh",
        "bride_father_name": "Salleh bin Omar",
        "email": "ahmad.siti@example.com",
        "opening_text": "Dengan segala hormatnya",
        "events_description": "Walimatul urus",
        "gifts_bank_name": "Maybank",
        "templateId": 4,
        "showSalamOpening": true,
        "events": [
            {
                "title": "Akad Nikah",
                "date": "2026-03-14T09:00:00.000Z",
                "end_time": "2026-03-14T11:30:00.000Z",
                "address": "Masjid Wilayah",
            }
        ],
        "contacts": [
            { "name": "Ahmad", "phone_number": "+60123456789" }
        ],
        "gallery_images": ["https://cdn.example.com/a.jpg"],
        "gifts": ["Dinner set", { "name": "Rice cooker", "link": "https://x" }],
    })
}

/// Returns a subscription response body.
#[must_use]
pub fn sample_subscription_json() -> serde_json::Value {
    serde_json::json!({
        "package_name": "Premium",
        "start_date": "2026-01-01T00:00:00.000Z",
        "end_date": "2026-12-31T00:00:00.000Z",
        "total_credits": 50,
        "event_credits_remaining": 37,
        "history": [
            {
                "id": 1,
                "createdAt": "2026-01-01T00:00:00.000Z",
                "transaction_type": "purchase",
                "amount": 499.0,
            }
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanding_core::validate;

    #[test]
    fn test_valid_draft_passes_validation() {
        let errors = validate(&valid_draft(), &ValidationPolicy::default());
        assert!(errors.is_empty(), "unexpected errors: {errors}");
    }

    #[test]
    fn test_sample_event_json_deserializes() {
        let record: sanding_core::EventRecord =
            serde_json::from_value(sample_event_json()).unwrap();
        assert_eq!(record.id, Some(9));
        assert_eq!(record.schedules.len(), 1);
    }
}
