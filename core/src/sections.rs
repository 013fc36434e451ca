// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Section editors: the only mutation paths into a draft's repeatable lists.
//!
//! Every editor returns whether it changed anything. Out-of-range indices
//! and moves that would break a list bound are refused, never panicked on.

use crate::draft::{Contact, EventDraft, Gift, ItineraryItem, MediaRef, Schedule};
use crate::upload::{self, PendingUpload, UploadError};

/// A draft always keeps at least one schedule row.
pub const SCHEDULES_MIN: usize = 1;

/// A draft always keeps at least one contact row.
pub const CONTACTS_MIN: usize = 1;

/// A draft never holds more than six contact rows.
pub const CONTACTS_MAX: usize = 6;

/// One field of a schedule row, with its replacement value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleField {
    /// Schedule title.
    Title(String),
    /// Start datetime, minute precision.
    StartTime(String),
    /// End datetime, minute precision.
    EndTime(String),
    /// Venue address.
    Address(String),
    /// Map link for the venue.
    AddressUrl(String),
}

/// One field of an itinerary row, with its replacement value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItineraryField {
    /// Activity name.
    ActivityName(String),
    /// Time of the activity.
    Time(String),
}

/// One field of a contact row, with its replacement value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactField {
    /// Contact name.
    Name(String),
    /// Phone number.
    PhoneNumber(String),
}

/// One field of a gift row, with its replacement value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GiftField {
    /// Gift name.
    GiftName(String),
    /// Link to the item.
    GiftLink(String),
    /// Delivery address.
    Address(String),
}

impl EventDraft {
    /// Appends an empty schedule row.
    pub fn add_schedule(&mut self) {
        self.schedules.push(Schedule::default());
    }

    /// Removes the schedule at `index`.
    ///
    /// Refused for out-of-range indices and for the last remaining row.
    pub fn remove_schedule(&mut self, index: usize) -> bool {
        if self.schedules.len() <= SCHEDULES_MIN || index >= self.schedules.len() {
            return false;
        }
        self.schedules.remove(index);
        true
    }

    /// Replaces one field of the schedule at `index` with a fresh row.
    pub fn update_schedule(&mut self, index: usize, field: ScheduleField) -> bool {
        let Some(entry) = self.schedules.get(index) else {
            return false;
        };
        let mut next = entry.clone();
        match field {
            ScheduleField::Title(value) => next.title = value,
            ScheduleField::StartTime(value) => next.start_time = value,
            ScheduleField::EndTime(value) => next.end_time = value,
            ScheduleField::Address(value) => next.address = value,
            ScheduleField::AddressUrl(value) => next.address_url = value,
        }
        self.schedules[index] = next;
        true
    }

    /// Writes a venue's address and map link into the schedule at `index`
    /// as one update, so the pair can never be observed half-applied.
    pub fn set_schedule_venue(
        &mut self,
        index: usize,
        address: String,
        address_url: String,
    ) -> bool {
        let Some(entry) = self.schedules.get(index) else {
            return false;
        };
        let mut next = entry.clone();
        next.address = address;
        next.address_url = address_url;
        self.schedules[index] = next;
        true
    }

    /// Appends an empty itinerary row.
    pub fn add_itinerary_item(&mut self) {
        self.itinerary.push(ItineraryItem::default());
    }

    /// Removes the itinerary row at `index`.
    pub fn remove_itinerary_item(&mut self, index: usize) -> bool {
        if index >= self.itinerary.len() {
            return false;
        }
        self.itinerary.remove(index);
        true
    }

    /// Replaces one field of the itinerary row at `index` with a fresh row.
    pub fn update_itinerary_item(&mut self, index: usize, field: ItineraryField) -> bool {
        let Some(entry) = self.itinerary.get(index) else {
            return false;
        };
        let mut next = entry.clone();
        match field {
            ItineraryField::ActivityName(value) => next.activity_name = value,
            ItineraryField::Time(value) => next.time = value,
        }
        self.itinerary[index] = next;
        true
    }

    /// Appends an empty contact row. Refused at six rows.
    pub fn add_contact(&mut self) -> bool {
        if self.contacts.len() >= CONTACTS_MAX {
            return false;
        }
        self.contacts.push(Contact::default());
        true
    }

    /// Removes the contact at `index`.
    ///
    /// Refused for out-of-range indices and for the last remaining row.
    pub fn remove_contact(&mut self, index: usize) -> bool {
        if self.contacts.len() <= CONTACTS_MIN || index >= self.contacts.len() {
            return false;
        }
        self.contacts.remove(index);
        true
    }

    /// Replaces one field of the contact at `index` with a fresh row.
    pub fn update_contact(&mut self, index: usize, field: ContactField) -> bool {
        let Some(entry) = self.contacts.get(index) else {
            return false;
        };
        let mut next = entry.clone();
        match field {
            ContactField::Name(value) => next.name = value,
            ContactField::PhoneNumber(value) => next.phone_number = value,
        }
        self.contacts[index] = next;
        true
    }

    /// Appends an empty gift row.
    pub fn add_gift(&mut self) {
        self.gifts.push(Gift::default());
    }

    /// Removes the gift row at `index`.
    pub fn remove_gift(&mut self, index: usize) -> bool {
        if index >= self.gifts.len() {
            return false;
        }
        self.gifts.remove(index);
        true
    }

    /// Replaces one field of the gift row at `index` with a fresh row.
    pub fn update_gift(&mut self, index: usize, field: GiftField) -> bool {
        let Some(entry) = self.gifts.get(index) else {
            return false;
        };
        let mut next = entry.clone();
        match field {
            GiftField::GiftName(value) => next.gift_name = value,
            GiftField::GiftLink(value) => next.gift_link = value,
            GiftField::Address(value) => next.address = value,
        }
        self.gifts[index] = next;
        true
    }

    /// Adds a gallery image after the image gate.
    ///
    /// # Errors
    ///
    /// Returns the gate's rejection; the gallery is left untouched.
    pub fn add_gallery_image(&mut self, upload: PendingUpload) -> Result<(), UploadError> {
        upload::check_image(&upload)?;
        self.gallery.push(MediaRef::Pending(upload));
        Ok(())
    }

    /// Removes the gallery entry at `index`, stored or pending.
    pub fn remove_gallery_image(&mut self, index: usize) -> bool {
        if index >= self.gallery.len() {
            return false;
        }
        self.gallery.remove(index);
        true
    }

    /// Stages a payment QR code after the image gate.
    ///
    /// # Errors
    ///
    /// Returns the gate's rejection; the previous value is kept.
    pub fn set_payment_qr_code(&mut self, upload: PendingUpload) -> Result<(), UploadError> {
        upload::check_image(&upload)?;
        self.payment_qr_code = Some(MediaRef::Pending(upload));
        Ok(())
    }

    /// Stages a custom theme image after the image gate.
    ///
    /// # Errors
    ///
    /// Returns the gate's rejection; the previous value is kept.
    pub fn set_custom_theme(&mut self, upload: PendingUpload) -> Result<(), UploadError> {
        upload::check_image(&upload)?;
        self.custom_theme = Some(MediaRef::Pending(upload));
        Ok(())
    }

    /// Stages a background song after the audio gate.
    ///
    /// # Errors
    ///
    /// Returns the gate's rejection; the previous value is kept.
    pub fn set_song(&mut self, upload: PendingUpload) -> Result<(), UploadError> {
        upload::check_audio(&upload)?;
        self.song = Some(MediaRef::Pending(upload));
        Ok(())
    }
}

/// Converts legacy gift values into canonical rows.
///
/// Three historical shapes exist: a bare string, an object keyed
/// `name`/`link`, and the canonical `gift_name`/`gift_link`. Running the
/// conversion over its own output changes nothing.
#[must_use]
pub fn normalize_gifts(values: &[serde_json::Value]) -> Vec<Gift> {
    values.iter().map(normalize_gift).collect()
}

fn normalize_gift(value: &serde_json::Value) -> Gift {
    if let Some(name) = value.as_str() {
        return Gift {
            gift_name: name.to_string(),
            gift_link: String::new(),
            address: String::new(),
        };
    }

    let field = |key: &str| {
        value
            .get(key)
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let legacy_name = value
        .get("name")
        .and_then(serde_json::Value::as_str)
        .filter(|name| !name.is_empty());
    match legacy_name {
        Some(name) => {
            let link = field("link");
            Gift {
                gift_name: name.to_string(),
                gift_link: if link.is_empty() { field("gift_link") } else { link },
                address: field("address"),
            }
        }
        None => Gift {
            gift_name: field("gift_name"),
            gift_link: field("gift_link"),
            address: field("address"),
        },
    }
}
