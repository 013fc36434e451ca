// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed client for the merchant REST API of the invitation-card platform.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::option_option,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool
)]

mod client;
mod config;
mod error;
mod http;
mod payload;
mod types;

pub use crate::client::MerchantApi;
pub use crate::config::ApiConfig;
pub use crate::error::ApiError;
pub use crate::payload::{PayloadPart, SubmissionPayload};
pub use crate::types::{
    ContactRecord, DailyActivity, DashboardData, EventCredentials, EventRecord, EventSummary,
    ItineraryRecord, LicenseInfo, Pager, Paginated, Pagination, ScheduleRecord, Session,
    Subscription, TemplateSummary, TemplateTrend, Transaction, UpcomingEvent,
};
