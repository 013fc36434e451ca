// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Turning a draft into a submission and tracking its lifecycle.

use sanding_api::SubmissionPayload;

use crate::draft::{EventDraft, MediaRef};
use crate::error::Error;

/// Whether a submission creates a new event or updates a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// Create a new event.
    Create,
    /// Update the event being edited.
    Update,
}

/// Where a submission currently stands.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A submission is in flight.
    Submitting,
    /// The last submission was accepted.
    Succeeded,
    /// The last submission was rejected.
    Failed {
        /// Why it was rejected.
        message: String,
    },
}

impl SubmissionStatus {
    /// Whether a new submission may start from this state.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed { .. })
    }
}

/// Tracks one draft's submission lifecycle.
///
/// `begin` refuses to start while a submission is in flight, so a
/// double invocation cannot issue two requests for the same draft.
#[derive(Debug, Default)]
pub struct SubmissionTracker {
    status: SubmissionStatus,
}

impl SubmissionTracker {
    /// Creates a tracker in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current status.
    #[must_use]
    pub const fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Marks a submission as started. Returns false if one is already
    /// in flight or has already succeeded.
    pub fn begin(&mut self) -> bool {
        if !self.status.can_submit() {
            return false;
        }
        self.status = SubmissionStatus::Submitting;
        true
    }

    /// Marks the in-flight submission as accepted.
    pub fn succeed(&mut self) {
        if self.status == SubmissionStatus::Submitting {
            self.status = SubmissionStatus::Succeeded;
        }
    }

    /// Marks the in-flight submission as rejected.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.status == SubmissionStatus::Submitting {
            self.status = SubmissionStatus::Failed {
                message: message.into(),
            };
        }
    }
}

impl EventDraft {
    /// Encodes the draft as a multipart submission payload.
    ///
    /// Field names and their order follow what the server has always
    /// received: snake_case names with the one historical camelCase
    /// holdout `showSalamOpening`, repeatable sections as JSON-encoded
    /// fields, and queued files as binary parts. In update mode every
    /// kept stored file is sent as an `existing_*` marker; the gallery
    /// marker is sent even when empty, since the server deletes stored
    /// images missing from it. Create mode never emits `existing_*`
    /// markers.
    ///
    /// Blank itinerary and gift rows are dropped here rather than
    /// validated, matching how the sections behave as optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a repeatable section cannot be JSON-encoded.
    pub fn to_payload(&self, mode: SubmitMode) -> Result<SubmissionPayload, Error> {
        let mut payload = SubmissionPayload::new();

        payload.text("groom_name", &self.groom_name);
        payload.text("groom_short_name", &self.groom_short_name);
        payload.text("groom_father_name", &self.groom_father_name);
        payload.text("bride_name", &self.bride_name);
        payload.text("bride_short_name", &self.bride_short_name);
        payload.text("bride_father_name", &self.bride_father_name);
        payload.text("email", &self.email);
        payload.text("hashtag", &self.hashtag);
        payload.text("opening_message", &self.opening_message);
        payload.text("parent_opening", &self.parent_opening);
        payload.text("event_description", &self.event_description);
        payload.text("closing_message", &self.closing_message);
        payload.text("gifts_description", &self.gifts_description);
        payload.text("wishes_description", &self.wishes_description);
        payload.text("account_bank_name", &self.account_bank_name);
        payload.text("account_bank_number", &self.account_bank_number);
        payload.text("account_beneficiary_name", &self.account_beneficiary_name);
        payload.text("language", self.language.as_ref());
        payload.text("rsvp_mode", self.rsvp_mode.as_ref());
        payload.text(
            "rsvp_closed_date",
            self.rsvp_closed_date.clone().unwrap_or_default(),
        );

        payload.flag("show_money_gift", self.show_gift_info);
        payload.flag("show_wishlist", self.show_wishlist);
        payload.flag("hide_not_sure", self.hide_not_sure);
        payload.flag("allow_checkin", self.allow_checkin);
        payload.flag("use_custom_template", self.use_custom_template);

        // A submission carries a template id or a custom theme, never both.
        if self.use_custom_template {
            match &self.custom_theme {
                Some(MediaRef::Pending(upload)) => {
                    payload.file("custom_theme", &upload.path, &upload.mime);
                }
                Some(MediaRef::Remote { url }) if mode == SubmitMode::Update => {
                    payload.existing("existing_custom_theme", url);
                }
                _ => {}
            }
        } else if let Some(id) = self.template_id {
            payload.text("template_id", id.to_string());
        }

        payload.flag("showSalamOpening", self.show_salam_opening);

        payload.json("schedules", &self.schedules)?;
        let itinerary: Vec<_> = self
            .itinerary
            .iter()
            .filter(|item| !item.activity_name.trim().is_empty())
            .collect();
        payload.json("itineraries", &itinerary)?;
        payload.json("contacts", &self.contacts)?;

        let mut kept_images = Vec::new();
        for image in &self.gallery {
            match image {
                MediaRef::Remote { url } => kept_images.push(url.clone()),
                MediaRef::Pending(upload) => {
                    payload.file("gallery_images", &upload.path, &upload.mime);
                }
            }
        }
        if mode == SubmitMode::Update {
            payload.existing_json("existing_gallery_images", &kept_images)?;
        }

        let gifts: Vec<_> = self
            .gifts
            .iter()
            .filter(|gift| !gift.gift_name.trim().is_empty())
            .collect();
        payload.json("gifts", &gifts)?;

        match &self.payment_qr_code {
            Some(MediaRef::Pending(upload)) => {
                payload.file("payment_qr_code", &upload.path, &upload.mime);
            }
            Some(MediaRef::Remote { url }) if mode == SubmitMode::Update => {
                payload.existing("existing_payment_qr_code_url", url);
            }
            _ => {}
        }
        match &self.song {
            Some(MediaRef::Pending(upload)) => {
                payload.file("song", &upload.path, &upload.mime);
            }
            Some(MediaRef::Remote { url }) if mode == SubmitMode::Update => {
                payload.existing("existing_song_url", url);
            }
            _ => {}
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use sanding_api::PayloadPart;

    use super::*;
    use crate::draft::{Contact, Gift, ItineraryItem, Schedule};
    use crate::upload::PendingUpload;

    fn valid_draft() -> EventDraft {
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

    fn pending_image(name: &str) -> PendingUpload {
        PendingUpload::from_parts(format!("/tmp/{name}"), 1024, "image/jpeg")
    }

    fn names(payload: &SubmissionPayload) -> Vec<&str> {
        payload.parts().iter().map(PayloadPart::name).collect()
    }

    #[test]
    fn test_tracker_refuses_double_submit() {
        let mut tracker = SubmissionTracker::new();
        assert!(tracker.begin());
        assert!(!tracker.begin());

        tracker.fail("Server error (500): boom");
        assert!(matches!(
            tracker.status(),
            SubmissionStatus::Failed { message } if message.contains("boom")
        ));
        assert!(tracker.begin());

        tracker.succeed();
        assert_eq!(tracker.status(), &SubmissionStatus::Succeeded);
        assert!(!tracker.begin());
    }

    #[test]
    fn test_tracker_ignores_outcomes_when_not_submitting() {
        let mut tracker = SubmissionTracker::new();
        tracker.succeed();
        assert_eq!(tracker.status(), &SubmissionStatus::Idle);
        tracker.fail("late response");
        assert_eq!(tracker.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_create_payload_never_emits_existing_markers() {
        let mut draft = valid_draft();
        draft.gallery = vec![
            MediaRef::remote("https://cdn.example.com/a.jpg"),
            MediaRef::Pending(pending_image("b.jpg")),
        ];
        draft.payment_qr_code = Some(MediaRef::remote("https://cdn.example.com/qr.png"));

        let payload = draft.to_payload(SubmitMode::Create).unwrap();
        assert!(
            payload
                .parts()
                .iter()
                .all(|p| !matches!(p, PayloadPart::ExistingRef { .. }))
        );
        assert!(names(&payload).contains(&"gallery_images"));
    }

    #[test]
    fn test_update_payload_marks_kept_files() {
        let mut draft = valid_draft();
        draft.gallery = vec![
            MediaRef::remote("https://cdn.example.com/a.jpg"),
            MediaRef::Pending(pending_image("b.jpg")),
        ];
        draft.payment_qr_code = Some(MediaRef::remote("https://cdn.example.com/qr.png"));
        draft.song = Some(MediaRef::remote("https://cdn.example.com/song.mp3"));

        let payload = draft.to_payload(SubmitMode::Update).unwrap();

        match payload.part("existing_gallery_images") {
            Some(PayloadPart::ExistingRef { value, .. }) => {
                assert_eq!(value, r#"["https://cdn.example.com/a.jpg"]"#);
            }
            other => panic!("expected existing gallery marker, got {other:?}"),
        }
        assert!(matches!(
            payload.part("existing_payment_qr_code_url"),
            Some(PayloadPart::ExistingRef { value, .. }) if value == "https://cdn.example.com/qr.png"
        ));
        assert!(matches!(
            payload.part("existing_song_url"),
            Some(PayloadPart::ExistingRef { .. })
        ));
        assert!(matches!(
            payload.part("gallery_images"),
            Some(PayloadPart::File { mime, .. }) if mime == "image/jpeg"
        ));
    }

    #[test]
    fn test_update_sends_gallery_marker_even_when_empty() {
        let payload = valid_draft().to_payload(SubmitMode::Update).unwrap();
        assert!(matches!(
            payload.part("existing_gallery_images"),
            Some(PayloadPart::ExistingRef { value, .. }) if value == "[]"
        ));
    }

    #[test]
    fn test_schedules_encode_with_wire_names() {
        let payload = valid_draft().to_payload(SubmitMode::Create).unwrap();

        let Some(PayloadPart::Json { value, .. }) = payload.part("schedules") else {
            panic!("expected schedules as a JSON part");
        };
        let rows: Vec<serde_json::Value> = serde_json::from_str(value).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["date"], "2026-03-14T09:00");
        assert_eq!(rows[0]["title"], "Akad Nikah");
        assert!(rows[0].get("start_time").is_none());
    }

    #[test]
    fn test_blank_optional_rows_are_dropped() {
        let mut draft = valid_draft();
        draft.itinerary = vec![
            ItineraryItem::default(),
            ItineraryItem {
                activity_name: "Persandingan".to_string(),
                time: "14:00".to_string(),
            },
            ItineraryItem {
                activity_name: "   ".to_string(),
                time: "15:00".to_string(),
            },
        ];
        draft.gifts = vec![
            Gift::default(),
            Gift {
                gift_name: "Dinner set".to_string(),
                ..Default::default()
            },
        ];

        let payload = draft.to_payload(SubmitMode::Create).unwrap();

        let Some(PayloadPart::Json { value, .. }) = payload.part("itineraries") else {
            panic!("expected itineraries as a JSON part");
        };
        let rows: Vec<serde_json::Value> = serde_json::from_str(value).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "Persandingan");

        let Some(PayloadPart::Json { value, .. }) = payload.part("gifts") else {
            panic!("expected gifts as a JSON part");
        };
        let rows: Vec<serde_json::Value> = serde_json::from_str(value).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["gift_name"], "Dinner set");
    }

    #[test]
    fn test_template_and_custom_theme_are_exclusive() {
        let stock = valid_draft().to_payload(SubmitMode::Create).unwrap();
        assert!(matches!(
            stock.part("template_id"),
            Some(PayloadPart::Text { value, .. }) if value == "4"
        ));
        assert!(stock.part("custom_theme").is_none());

        let mut custom = valid_draft();
        custom.use_custom_template = true;
        custom.custom_theme = Some(MediaRef::Pending(PendingUpload::from_parts(
            "/tmp/theme.png",
            2048,
            "image/png",
        )));
        let payload = custom.to_payload(SubmitMode::Create).unwrap();
        assert!(payload.part("template_id").is_none());
        assert!(matches!(
            payload.part("custom_theme"),
            Some(PayloadPart::File { .. })
        ));
    }

    #[test]
    fn test_kept_custom_theme_survives_update() {
        let mut draft = valid_draft();
        draft.use_custom_template = true;
        draft.custom_theme = Some(MediaRef::remote("https://cdn.example.com/theme.png"));

        let update = draft.to_payload(SubmitMode::Update).unwrap();
        assert!(matches!(
            update.part("existing_custom_theme"),
            Some(PayloadPart::ExistingRef { .. })
        ));

        let create = draft.to_payload(SubmitMode::Create).unwrap();
        assert!(create.part("existing_custom_theme").is_none());
        assert!(create.part("custom_theme").is_none());
    }

    #[test]
    fn test_salam_flag_keeps_legacy_name() {
        let payload = valid_draft().to_payload(SubmitMode::Create).unwrap();
        assert!(matches!(
            payload.part("showSalamOpening"),
            Some(PayloadPart::Text { value, .. }) if value == "true"
        ));

        let mut draft = valid_draft();
        draft.show_salam_opening = false;
        let payload = draft.to_payload(SubmitMode::Create).unwrap();
        assert!(matches!(
            payload.part("showSalamOpening"),
            Some(PayloadPart::Text { value, .. }) if value == "false"
        ));
    }

    #[test]
    fn test_identity_fields_come_first() {
        let payload = valid_draft().to_payload(SubmitMode::Create).unwrap();
        let names = names(&payload);
        assert_eq!(names[0], "groom_name");
        assert_eq!(names[3], "bride_name");

        let gallery = names.iter().position(|n| *n == "contacts").unwrap();
        let gifts = names.iter().position(|n| *n == "gifts").unwrap();
        assert!(gallery < gifts);
    }
}
