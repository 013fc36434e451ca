// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Building a draft from a persisted record.

use sanding_api::{ContactRecord, EventRecord, ItineraryRecord, ScheduleRecord};

use crate::datetime::truncate_to_minute;
use crate::draft::{Contact, EventDraft, ItineraryItem, MediaRef, Schedule};
use crate::sections::normalize_gifts;

impl EventDraft {
    /// Builds an editable draft from a stored record.
    ///
    /// [`EventRecord`]'s deserialization already maps legacy field names;
    /// this applies the remaining shaping: datetimes cut to minute
    /// precision, absent repeatable sections replaced with one empty row,
    /// legacy gift shapes normalized, stored media turned into remote
    /// references, and the custom-template flag read from the
    /// `theme_style` discriminator.
    #[must_use]
    pub fn hydrate(record: EventRecord) -> Self {
        let use_custom_template = record.theme_style.as_deref() == Some("custom");
        let custom_theme = if use_custom_template {
            record
                .custom_url
                .filter(|url| !url.is_empty())
                .map(MediaRef::remote)
        } else {
            None
        };

        let schedules = or_placeholder(
            record
                .schedules
                .into_iter()
                .map(schedule_from_record)
                .collect(),
        );
        let itinerary = or_placeholder(
            record
                .itineraries
                .into_iter()
                .map(itinerary_from_record)
                .collect(),
        );
        let contacts = or_placeholder(
            record
                .contacts
                .into_iter()
                .map(contact_from_record)
                .collect(),
        );

        Self {
            use_custom_template,
            template_id: record.template_id,
            custom_theme,
            groom_name: record.groom_name.unwrap_or_default(),
            groom_short_name: record.groom_short_name.unwrap_or_default(),
            groom_father_name: record.groom_father_name.unwrap_or_default(),
            bride_name: record.bride_name.unwrap_or_default(),
            bride_short_name: record.bride_short_name.unwrap_or_default(),
            bride_father_name: record.bride_father_name.unwrap_or_default(),
            email: record.email.unwrap_or_default(),
            hashtag: record.hashtag.unwrap_or_default(),
            opening_message: record.opening_message.unwrap_or_default(),
            parent_opening: record.parent_opening.unwrap_or_default(),
            event_description: record.event_description.unwrap_or_default(),
            closing_message: record.closing_message.unwrap_or_default(),
            gifts_description: record.gifts_description.unwrap_or_default(),
            wishes_description: record.wishes_description.unwrap_or_default(),
            // Off only when the record says so explicitly.
            show_salam_opening: record.show_salam_opening != Some(false),
            show_wishlist: record.show_wishlist.unwrap_or(false),
            show_gift_info: record.show_money_gift.unwrap_or(false),
            hide_not_sure: record.hide_not_sure.unwrap_or(false),
            allow_checkin: record.allow_checkin.unwrap_or(false),
            language: record
                .language
                .as_deref()
                .and_then(|value| value.parse().ok())
                .unwrap_or_default(),
            rsvp_mode: record
                .rsvp_mode
                .as_deref()
                .and_then(|value| value.parse().ok())
                .unwrap_or_default(),
            rsvp_closed_date: record
                .rsvp_closed_date
                .filter(|value| !value.is_empty())
                .map(|value| truncate_to_minute(&value)),
            schedules,
            itinerary,
            gallery: record
                .gallery_images
                .into_iter()
                .filter(|url| !url.is_empty())
                .map(MediaRef::remote)
                .collect(),
            contacts,
            gifts: normalize_gifts(&record.gifts),
            account_bank_name: record.account_bank_name.unwrap_or_default(),
            account_bank_number: record.account_bank_number.unwrap_or_default(),
            account_beneficiary_name: record.account_beneficiary_name.unwrap_or_default(),
            payment_qr_code: record
                .payment_qr_code_url
                .filter(|url| !url.is_empty())
                .map(MediaRef::remote),
            song: record
                .song_url
                .filter(|url| !url.is_empty())
                .map(MediaRef::remote),
        }
    }
}

fn or_placeholder<T: Default>(rows: Vec<T>) -> Vec<T> {
    if rows.is_empty() {
        vec![T::default()]
    } else {
        rows
    }
}

fn schedule_from_record(record: ScheduleRecord) -> Schedule {
    Schedule {
        title: record.title.unwrap_or_default(),
        start_time: truncate_to_minute(&record.date.unwrap_or_default()),
        end_time: truncate_to_minute(&record.end_time.unwrap_or_default()),
        address: record.address.unwrap_or_default(),
        address_url: record.address_url.unwrap_or_default(),
    }
}

fn itinerary_from_record(record: ItineraryRecord) -> ItineraryItem {
    ItineraryItem {
        activity_name: record.name.unwrap_or_default(),
        time: record.time.unwrap_or_default(),
    }
}

fn contact_from_record(record: ContactRecord) -> Contact {
    Contact {
        name: record.name.unwrap_or_default(),
        phone_number: record.phone_number.unwrap_or_default(),
    }
}
