// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod address;
mod config;
mod datetime;
mod draft;
mod error;
mod hydrate;
mod sanding;
mod sections;
mod session;
mod submit;
mod upload;
mod validate;

pub use crate::address::AddressLookup;
pub use crate::config::{APP_NAME, Config};
pub use crate::datetime::{days_until, truncate_to_minute};
pub use crate::draft::{
    Contact, EventDraft, Gift, ItineraryItem, Language, MediaRef, RsvpMode, Schedule,
};
pub use crate::error::Error;
pub use crate::sanding::Sanding;
pub use crate::sections::{
    CONTACTS_MAX, CONTACTS_MIN, ContactField, GiftField, ItineraryField, SCHEDULES_MIN,
    ScheduleField,
};
pub use crate::session::SessionStore;
pub use crate::submit::{SubmissionStatus, SubmissionTracker, SubmitMode};
pub use crate::upload::{MAX_AUDIO_BYTES, MAX_IMAGE_BYTES, PendingUpload, UploadError};
pub use crate::validate::{ErrorMap, ValidationPolicy, validate};

// Wire and service types, re-exported so callers depend on one crate.
pub use sanding_api::{
    ApiConfig, ApiError, ContactRecord, DailyActivity, DashboardData, EventCredentials,
    EventRecord, EventSummary, ItineraryRecord, LicenseInfo, MerchantApi, Pager, Paginated,
    Pagination, PayloadPart, ScheduleRecord, Session, Subscription, SubmissionPayload,
    TemplateSummary, TemplateTrend, Transaction, UpcomingEvent,
};
pub use sanding_geo::{GeoClient, GeoConfig, GeoError, Place};
