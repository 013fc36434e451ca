// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! TOML draft files, the authoring surface of `event new` and `event edit`.
//!
//! A draft file only names the fields it wants to change: scalars overlay
//! the current draft one by one, a non-empty section list replaces the
//! stored rows wholesale, and file-path fields are probed through the
//! upload gates before they enter the draft.

use std::{
    error::Error,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tokio::fs;

use sanding_core::{
    CONTACTS_MAX, Contact, EventDraft, Gift, ItineraryItem, Language, PendingUpload, RsvpMode,
    Schedule, truncate_to_minute,
};

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DraftFile {
    pub template_id: Option<i64>,
    pub custom_theme: Option<PathBuf>,

    pub groom_name: Option<String>,
    pub groom_short_name: Option<String>,
    pub groom_father_name: Option<String>,
    pub bride_name: Option<String>,
    pub bride_short_name: Option<String>,
    pub bride_father_name: Option<String>,
    pub email: Option<String>,
    pub hashtag: Option<String>,

    pub opening_message: Option<String>,
    pub parent_opening: Option<String>,
    pub event_description: Option<String>,
    pub closing_message: Option<String>,
    pub gifts_description: Option<String>,
    pub wishes_description: Option<String>,

    pub show_salam_opening: Option<bool>,
    pub show_wishlist: Option<bool>,
    pub show_gift_info: Option<bool>,
    pub hide_not_sure: Option<bool>,
    pub allow_checkin: Option<bool>,

    pub language: Option<Language>,
    pub rsvp_mode: Option<RsvpMode>,
    pub rsvp_closed_date: Option<String>,

    pub schedules: Vec<ScheduleEntry>,
    pub itinerary: Vec<ItineraryEntry>,
    pub contacts: Vec<ContactEntry>,
    pub gifts: Vec<GiftEntry>,

    pub account_bank_name: Option<String>,
    pub account_bank_number: Option<String>,
    pub account_beneficiary_name: Option<String>,

    pub gallery: Vec<PathBuf>,
    pub clear_gallery: bool,
    pub payment_qr_code: Option<PathBuf>,
    pub song: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleEntry {
    pub title: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub address: Option<String>,
    pub address_url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItineraryEntry {
    pub activity_name: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactEntry {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GiftEntry {
    pub gift_name: Option<String>,
    pub gift_link: Option<String>,
    pub address: Option<String>,
}

impl DraftFile {
    pub async fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read draft file at {}: {}", path.display(), e))?;
        toml::from_str(&raw)
            .map_err(|e| format!("Failed to parse draft file at {}: {}", path.display(), e).into())
    }

    /// Overlays the file's set fields onto `draft`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file names both a stock template and a
    /// custom theme, lists more contacts than a card carries, or when a
    /// media path fails its upload gate.
    pub async fn apply(self, draft: &mut EventDraft) -> Result<(), Box<dyn Error>> {
        match (self.template_id, self.custom_theme) {
            (Some(_), Some(_)) => {
                return Err("the draft file sets both template_id and custom_theme".into());
            }
            (Some(template_id), None) => {
                draft.template_id = Some(template_id);
                draft.use_custom_template = false;
            }
            (None, Some(path)) => {
                draft.set_custom_theme(PendingUpload::probe(path).await?)?;
                draft.use_custom_template = true;
            }
            (None, None) => {}
        }

        overlay(&mut draft.groom_name, self.groom_name);
        overlay(&mut draft.groom_short_name, self.groom_short_name);
        overlay(&mut draft.groom_father_name, self.groom_father_name);
        overlay(&mut draft.bride_name, self.bride_name);
        overlay(&mut draft.bride_short_name, self.bride_short_name);
        overlay(&mut draft.bride_father_name, self.bride_father_name);
        overlay(&mut draft.email, self.email);
        overlay(&mut draft.hashtag, self.hashtag);

        overlay(&mut draft.opening_message, self.opening_message);
        overlay(&mut draft.parent_opening, self.parent_opening);
        overlay(&mut draft.event_description, self.event_description);
        overlay(&mut draft.closing_message, self.closing_message);
        overlay(&mut draft.gifts_description, self.gifts_description);
        overlay(&mut draft.wishes_description, self.wishes_description);

        overlay(&mut draft.show_salam_opening, self.show_salam_opening);
        overlay(&mut draft.show_wishlist, self.show_wishlist);
        overlay(&mut draft.show_gift_info, self.show_gift_info);
        overlay(&mut draft.hide_not_sure, self.hide_not_sure);
        overlay(&mut draft.allow_checkin, self.allow_checkin);

        overlay(&mut draft.language, self.language);
        overlay(&mut draft.rsvp_mode, self.rsvp_mode);
        if let Some(closed) = self.rsvp_closed_date {
            draft.rsvp_closed_date = (!closed.is_empty()).then(|| truncate_to_minute(&closed));
        }

        overlay(&mut draft.account_bank_name, self.account_bank_name);
        overlay(&mut draft.account_bank_number, self.account_bank_number);
        overlay(
            &mut draft.account_beneficiary_name,
            self.account_beneficiary_name,
        );

        if !self.schedules.is_empty() {
            draft.schedules = self.schedules.into_iter().map(ScheduleEntry::into_row).collect();
        }
        if !self.itinerary.is_empty() {
            draft.itinerary = self.itinerary.into_iter().map(ItineraryEntry::into_row).collect();
        }
        if !self.contacts.is_empty() {
            if self.contacts.len() > CONTACTS_MAX {
                return Err(format!(
                    "a card carries at most {CONTACTS_MAX} contacts, the draft file lists {}",
                    self.contacts.len()
                )
                .into());
            }
            draft.contacts = self.contacts.into_iter().map(ContactEntry::into_row).collect();
        }
        if !self.gifts.is_empty() {
            draft.gifts = self.gifts.into_iter().map(GiftEntry::into_row).collect();
        }

        if self.clear_gallery {
            draft.gallery.clear();
        }
        for path in self.gallery {
            draft.add_gallery_image(PendingUpload::probe(path).await?)?;
        }
        if let Some(path) = self.payment_qr_code {
            draft.set_payment_qr_code(PendingUpload::probe(path).await?)?;
        }
        if let Some(path) = self.song {
            draft.set_song(PendingUpload::probe(path).await?)?;
        }

        Ok(())
    }
}

impl ScheduleEntry {
    fn into_row(self) -> Schedule {
        Schedule {
            title: self.title.unwrap_or_default(),
            start_time: self
                .start_time
                .as_deref()
                .map(truncate_to_minute)
                .unwrap_or_default(),
            end_time: self
                .end_time
                .as_deref()
                .map(truncate_to_minute)
                .unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            address_url: self.address_url.unwrap_or_default(),
        }
    }
}

impl ItineraryEntry {
    fn into_row(self) -> ItineraryItem {
        ItineraryItem {
            activity_name: self.activity_name.unwrap_or_default(),
            time: self.time.unwrap_or_default(),
        }
    }
}

impl ContactEntry {
    fn into_row(self) -> Contact {
        Contact {
            name: self.name.unwrap_or_default(),
            phone_number: self.phone_number.unwrap_or_default(),
        }
    }
}

impl GiftEntry {
    fn into_row(self) -> Gift {
        Gift {
            gift_name: self.gift_name.unwrap_or_default(),
            gift_link: self.gift_link.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
        }
    }
}

fn overlay<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
