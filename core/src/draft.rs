// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The event draft: the in-memory record being authored or edited.

use std::fmt::Display;
use std::str::FromStr;

use crate::upload::PendingUpload;

/// A draft invitation card event.
///
/// A fresh draft starts with one empty schedule row and one empty contact
/// row; those lists never go below one entry. Mutations to the repeatable
/// sections go through the editors in [`crate::sections`].
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    /// Use an uploaded theme instead of a catalogue template.
    pub use_custom_template: bool,

    /// Selected catalogue template, when not using a custom theme.
    pub template_id: Option<i64>,

    /// The uploaded custom theme, when using one.
    pub custom_theme: Option<MediaRef>,

    /// Groom's full name.
    pub groom_name: String,

    /// Groom's short name for headings.
    pub groom_short_name: String,

    /// Groom's father's name.
    pub groom_father_name: String,

    /// Bride's full name.
    pub bride_name: String,

    /// Bride's short name for headings.
    pub bride_short_name: String,

    /// Bride's father's name.
    pub bride_father_name: String,

    /// Contact email for the event.
    pub email: String,

    /// Social media hashtag.
    pub hashtag: String,

    /// Opening message on the card.
    pub opening_message: String,

    /// Parents' invitation line.
    pub parent_opening: String,

    /// Free-text description of the event.
    pub event_description: String,

    /// Closing message on the card.
    pub closing_message: String,

    /// Text shown above the gift registry.
    pub gifts_description: String,

    /// Text shown above the wishes wall.
    pub wishes_description: String,

    /// Show the salam greeting in the opening. On unless switched off.
    pub show_salam_opening: bool,

    /// Show the wishlist section.
    pub show_wishlist: bool,

    /// Show the money gift section.
    pub show_gift_info: bool,

    /// Hide the "not sure" RSVP option.
    pub hide_not_sure: bool,

    /// Allow guest check-in at the venue.
    pub allow_checkin: bool,

    /// Invitation language.
    pub language: Language,

    /// RSVP collection mode.
    pub rsvp_mode: RsvpMode,

    /// Minute-precision datetime RSVP closes, if any.
    pub rsvp_closed_date: Option<String>,

    /// Schedule rows. Never empty.
    pub schedules: Vec<Schedule>,

    /// Itinerary rows. Empty-named rows are dropped at submission.
    pub itinerary: Vec<ItineraryItem>,

    /// Gallery images, stored or pending.
    pub gallery: Vec<MediaRef>,

    /// Contact rows. Between one and six entries.
    pub contacts: Vec<Contact>,

    /// Gift registry rows. Empty-named rows are dropped at submission.
    pub gifts: Vec<Gift>,

    /// Bank name for money gifts.
    pub account_bank_name: String,

    /// Account number for money gifts.
    pub account_bank_number: String,

    /// Beneficiary name for money gifts.
    pub account_beneficiary_name: String,

    /// Payment QR code image, stored or pending.
    pub payment_qr_code: Option<MediaRef>,

    /// Background song, stored or pending.
    pub song: Option<MediaRef>,
}

impl EventDraft {
    /// Creates an empty draft with the placeholder rows in place.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            use_custom_template: false,
            template_id: None,
            custom_theme: None,
            groom_name: String::new(),
            groom_short_name: String::new(),
            groom_father_name: String::new(),
            bride_name: String::new(),
            bride_short_name: String::new(),
            bride_father_name: String::new(),
            email: String::new(),
            hashtag: String::new(),
            opening_message: String::new(),
            parent_opening: String::new(),
            event_description: String::new(),
            closing_message: String::new(),
            gifts_description: String::new(),
            wishes_description: String::new(),
            show_salam_opening: true,
            show_wishlist: false,
            show_gift_info: false,
            hide_not_sure: false,
            allow_checkin: false,
            language: Language::default(),
            rsvp_mode: RsvpMode::default(),
            rsvp_closed_date: None,
            schedules: vec![Schedule::default()],
            itinerary: vec![ItineraryItem::default()],
            gallery: Vec::new(),
            contacts: vec![Contact::default()],
            gifts: Vec::new(),
            account_bank_name: String::new(),
            account_bank_number: String::new(),
            account_beneficiary_name: String::new(),
            payment_qr_code: None,
            song: None,
        }
    }
}

/// One schedule row (akad nikah, reception, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Schedule {
    /// Schedule title.
    #[serde(default)]
    pub title: String,

    /// Start, minute precision (`YYYY-MM-DDTHH:MM`). The wire name has
    /// always been `date`.
    #[serde(rename = "date", default)]
    pub start_time: String,

    /// End, minute precision.
    #[serde(default)]
    pub end_time: String,

    /// Venue address.
    #[serde(default)]
    pub address: String,

    /// Map link for the venue.
    #[serde(default)]
    pub address_url: String,
}

/// One itinerary row.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ItineraryItem {
    /// Activity name. The wire name is `name`.
    #[serde(rename = "name", default)]
    pub activity_name: String,

    /// Time of the activity, free text.
    #[serde(default)]
    pub time: String,
}

/// One contact row.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Contact {
    /// Contact name.
    #[serde(default)]
    pub name: String,

    /// Phone number.
    #[serde(default)]
    pub phone_number: String,
}

/// One gift registry row.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Gift {
    /// Gift name.
    #[serde(default)]
    pub gift_name: String,

    /// Link to the item.
    #[serde(default)]
    pub gift_link: String,

    /// Delivery address for the gift.
    #[serde(default)]
    pub address: String,
}

/// A media slot: either a file already stored by the platform or a local
/// file queued for upload.
///
/// Holding both cases in one type removes the string-vs-object sniffing
/// legacy records needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaRef {
    /// File already stored by the platform.
    Remote {
        /// Public URL of the stored file.
        url: String,
    },

    /// Local file queued for upload.
    Pending(PendingUpload),
}

impl MediaRef {
    /// A reference to an already-stored file.
    #[must_use]
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote { url: url.into() }
    }

    /// Whether this refers to an already-stored file.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Whether this is a local file queued for upload.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// The stored URL, if this is a remote reference.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Remote { url } => Some(url),
            Self::Pending(_) => None,
        }
    }
}

/// The invitation language.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Language {
    /// English.
    #[default]
    En,

    /// Malay.
    Ms,

    /// Indonesian.
    Id,
}

const LANGUAGE_EN: &str = "en";
const LANGUAGE_MS: &str = "ms";
const LANGUAGE_ID: &str = "id";

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        match self {
            Language::En => LANGUAGE_EN,
            Language::Ms => LANGUAGE_MS,
            Language::Id => LANGUAGE_ID,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            LANGUAGE_EN => Ok(Language::En),
            LANGUAGE_MS => Ok(Language::Ms),
            LANGUAGE_ID => Ok(Language::Id),
            _ => Err(()),
        }
    }
}

impl serde::Serialize for Language {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> serde::Deserialize<'de> for Language {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value
            .parse()
            .map_err(|()| serde::de::Error::custom(format!("unknown language: {value}")))
    }
}

/// How RSVPs are collected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RsvpMode {
    /// RSVP disabled. Serialized as the empty string.
    #[default]
    #[cfg_attr(feature = "clap", clap(name = "off"))]
    Off,

    /// Guests respond without a headcount.
    Relaxed,

    /// Responses require full details.
    Strict,
}

const RSVP_OFF: &str = "";
const RSVP_RELAXED: &str = "relaxed";
const RSVP_STRICT: &str = "strict";

impl AsRef<str> for RsvpMode {
    fn as_ref(&self) -> &str {
        match self {
            RsvpMode::Off => RSVP_OFF,
            RsvpMode::Relaxed => RSVP_RELAXED,
            RsvpMode::Strict => RSVP_STRICT,
        }
    }
}

impl Display for RsvpMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for RsvpMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            RSVP_OFF => Ok(RsvpMode::Off),
            RSVP_RELAXED => Ok(RsvpMode::Relaxed),
            RSVP_STRICT => Ok(RsvpMode::Strict),
            _ => Err(()),
        }
    }
}

impl serde::Serialize for RsvpMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> serde::Deserialize<'de> for RsvpMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value
            .parse()
            .map_err(|()| serde::de::Error::custom(format!("unknown RSVP mode: {value}")))
    }
}
