// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Wire types for the merchant REST API.
//!
//! Several endpoints predate the current field naming, so the records here
//! carry serde aliases for the historical keys. Deserialization is the one
//! place those old names are allowed to exist.

/// An authenticated merchant session.
///
/// Returned by the login endpoint and attached as a bearer token to every
/// authenticated call. Callers pass the session explicitly instead of
/// reading a process-global "current user".
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    /// Bearer token for the Authorization header.
    pub token: String,
    /// Merchant identifier, used to build endpoint paths.
    #[serde(rename = "merchantId", alias = "merchant_id")]
    pub merchant_id: String,
    /// Display name of the merchant account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A pagination request: page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub limit: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl From<(u32, u32)> for Pager {
    fn from((page, limit): (u32, u32)) -> Self {
        Self { page, limit }
    }
}

/// One page of results plus pagination metadata.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Paginated<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Pagination metadata.
    #[serde(default)]
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    /// An empty page, used when the server has nothing for this merchant.
    #[must_use]
    pub fn empty(limit: u32) -> Self {
        Self {
            data: Vec::new(),
            pagination: Pagination {
                page: 1,
                limit,
                total: 0,
                total_pages: 0,
            },
        }
    }

    /// Builds a page from a bare array response.
    ///
    /// Older deployments return list endpoints as plain arrays without
    /// pagination metadata; the metadata is reconstructed from the length.
    #[must_use]
    pub fn from_bare(data: Vec<T>, pager: Pager) -> Self {
        let total = data.len() as u64;
        let total_pages = if pager.limit == 0 {
            1
        } else {
            total.div_ceil(u64::from(pager.limit)) as u32
        };
        Self {
            data,
            pagination: Pagination {
                page: pager.page,
                limit: pager.limit,
                total,
                total_pages: total_pages.max(1),
            },
        }
    }
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Pagination {
    /// 1-based page number.
    #[serde(default)]
    pub page: u32,
    /// Items per page.
    #[serde(default)]
    pub limit: u32,
    /// Total items across all pages.
    #[serde(default)]
    pub total: u64,
    /// Total number of pages.
    #[serde(default, rename = "totalPages", alias = "total_pages")]
    pub total_pages: u32,
}

/// The merchant's subscription: package, credits, and billing history.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Subscription {
    /// Name of the subscribed package.
    #[serde(default)]
    pub package_name: String,
    /// ISO datetime the subscription started.
    #[serde(default)]
    pub start_date: Option<String>,
    /// ISO datetime the subscription ends.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Credits included in the package.
    #[serde(default)]
    pub total_credits: i64,
    /// Credits still available for new events.
    #[serde(default)]
    pub event_credits_remaining: i64,
    /// Billing history, newest first.
    #[serde(default)]
    pub history: Vec<Transaction>,
}

/// One billing history entry.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Transaction {
    /// Transaction identifier.
    pub id: i64,
    /// ISO datetime the transaction was recorded.
    #[serde(default, rename = "createdAt", alias = "created_at")]
    pub created_at: Option<String>,
    /// Kind of transaction (purchase, topup, ...).
    #[serde(default)]
    pub transaction_type: String,
    /// Signed credit amount.
    #[serde(default)]
    pub amount: f64,
}

/// A card template as listed by the template catalogue.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct TemplateSummary {
    /// Template identifier.
    pub id: i64,
    /// Display name of the theme.
    #[serde(default)]
    pub theme: String,
}

/// An event as listed by the event index.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct EventSummary {
    /// Event identifier.
    pub id: i64,
    /// Event name.
    #[serde(default)]
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Guest-site credentials for an event.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct EventCredentials {
    /// Login email for the event site.
    #[serde(default)]
    pub email: String,
    /// Current password.
    #[serde(default)]
    pub password: String,
}

/// Everything the merchant dashboard shows in one response.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct DashboardData {
    /// License summary.
    #[serde(default)]
    pub license: LicenseInfo,
    /// Events with the nearest upcoming schedules.
    #[serde(default, rename = "upcomingEvents", alias = "upcoming_events")]
    pub upcoming_events: Vec<UpcomingEvent>,
    /// Most used templates, descending.
    #[serde(default, rename = "trendyTemplates", alias = "trendy_templates")]
    pub trendy_templates: Vec<TemplateTrend>,
    /// Per-day activity counts for the chart.
    #[serde(default)]
    pub daily_chart_data: Vec<DailyActivity>,
}

/// License summary shown on the dashboard.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct LicenseInfo {
    /// Name of the subscribed package.
    #[serde(default)]
    pub package_name: String,
    /// Credits included in the package.
    #[serde(default)]
    pub total_credits: i64,
    /// Credits still available for new events.
    #[serde(default)]
    pub event_credits_remaining: i64,
    /// ISO datetime the license ends.
    #[serde(default)]
    pub end_date: Option<String>,
}

/// An event surfaced in the dashboard's upcoming list.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct UpcomingEvent {
    /// Event identifier.
    pub id: i64,
    /// Event name.
    #[serde(default)]
    pub name: String,
    /// Title of the nearest schedule.
    #[serde(default)]
    pub latest_schedule_title: Option<String>,
    /// ISO datetime of the nearest schedule.
    #[serde(default)]
    pub latest_schedule_date: Option<String>,
}

/// Template usage count for the dashboard trends.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct TemplateTrend {
    /// Display name of the theme.
    #[serde(default)]
    pub theme: String,
    /// Number of events using it.
    #[serde(default)]
    pub usage_count: u64,
}

/// Daily activity counts for the dashboard chart.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct DailyActivity {
    /// ISO date of the bucket.
    #[serde(default)]
    pub date: String,
    /// Events created that day.
    #[serde(default)]
    pub events: u64,
    /// Wishes received that day.
    #[serde(default)]
    pub wishes: u64,
}

/// A persisted event record as returned by the single-event endpoint.
///
/// Optional everywhere: old records miss fields freely, and absent
/// sections are given placeholder rows during hydration rather than here.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct EventRecord {
    /// Event identifier.
    #[serde(default)]
    pub id: Option<i64>,
    /// Event name.
    #[serde(default)]
    pub name: Option<String>,
    /// Groom's full name.
    #[serde(default)]
    pub groom_name: Option<String>,
    /// Groom's short name for headings.
    #[serde(default)]
    pub groom_short_name: Option<String>,
    /// Groom's father's name.
    #[serde(default)]
    pub groom_father_name: Option<String>,
    /// Bride's full name.
    #[serde(default)]
    pub bride_name: Option<String>,
    /// Bride's short name for headings.
    #[serde(default)]
    pub bride_short_name: Option<String>,
    /// Bride's father's name.
    #[serde(default)]
    pub bride_father_name: Option<String>,
    /// Contact email for the event.
    #[serde(default)]
    pub email: Option<String>,
    /// Social media hashtag.
    #[serde(default)]
    pub hashtag: Option<String>,
    /// Opening message. Historically `opening_text`.
    #[serde(default, alias = "opening_text")]
    pub opening_message: Option<String>,
    /// Parents' invitation line.
    #[serde(default)]
    pub parent_opening: Option<String>,
    /// Event description. Historically `events_description`.
    #[serde(default, alias = "events_description")]
    pub event_description: Option<String>,
    /// Closing message. Historically `closing_description`.
    #[serde(default, alias = "closing_description")]
    pub closing_message: Option<String>,
    /// Description shown above the gift registry.
    #[serde(default)]
    pub gifts_description: Option<String>,
    /// Description shown above the wishes wall.
    #[serde(default)]
    pub wishes_description: Option<String>,
    /// Bank name for money gifts. Historically `gifts_bank_name`.
    #[serde(default, alias = "gifts_bank_name")]
    pub account_bank_name: Option<String>,
    /// Account number. Historically `gifts_account_number`.
    #[serde(default, alias = "gifts_account_number")]
    pub account_bank_number: Option<String>,
    /// Beneficiary name. Historically `gifts_account_name`.
    #[serde(default, alias = "gifts_account_name")]
    pub account_beneficiary_name: Option<String>,
    /// Show the salam greeting in the opening. Absent means on.
    #[serde(default, rename = "showSalamOpening", alias = "show_salam_opening")]
    pub show_salam_opening: Option<bool>,
    /// Show the money gift section.
    #[serde(default)]
    pub show_money_gift: Option<bool>,
    /// Show the wishlist section.
    #[serde(default)]
    pub show_wishlist: Option<bool>,
    /// Hide the "not sure" RSVP option.
    #[serde(default)]
    pub hide_not_sure: Option<bool>,
    /// Allow guest check-in.
    #[serde(default)]
    pub allow_checkin: Option<bool>,
    /// Invitation language code.
    #[serde(default)]
    pub language: Option<String>,
    /// RSVP collection mode.
    #[serde(default)]
    pub rsvp_mode: Option<String>,
    /// ISO datetime RSVP closes.
    #[serde(default)]
    pub rsvp_closed_date: Option<String>,
    /// Selected template, when not using a custom theme.
    #[serde(default, rename = "templateId", alias = "template_id")]
    pub template_id: Option<i64>,
    /// Theme discriminator; `custom` means an uploaded theme.
    #[serde(default)]
    pub theme_style: Option<String>,
    /// URL of the uploaded custom theme.
    #[serde(default)]
    pub custom_url: Option<String>,
    /// URL of the stored payment QR code.
    #[serde(default)]
    pub payment_qr_code_url: Option<String>,
    /// URL of the stored background song.
    #[serde(default)]
    pub song_url: Option<String>,
    /// Schedule rows. The record key has always been `events`.
    #[serde(default, rename = "events", alias = "schedules")]
    pub schedules: Vec<ScheduleRecord>,
    /// Itinerary rows.
    #[serde(default)]
    pub itineraries: Vec<ItineraryRecord>,
    /// URLs of stored gallery images.
    #[serde(default)]
    pub gallery_images: Vec<String>,
    /// Contact rows.
    #[serde(default)]
    pub contacts: Vec<ContactRecord>,
    /// Raw gift values; legacy records mix strings and objects.
    #[serde(default)]
    pub gifts: Vec<serde_json::Value>,
}

/// A stored schedule row.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ScheduleRecord {
    /// Schedule title.
    #[serde(default)]
    pub title: Option<String>,
    /// Start datetime; may carry seconds or more.
    #[serde(default)]
    pub date: Option<String>,
    /// End datetime; may carry seconds or more.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Venue address.
    #[serde(default)]
    pub address: Option<String>,
    /// Map link for the venue.
    #[serde(default)]
    pub address_url: Option<String>,
}

/// A stored itinerary row.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ItineraryRecord {
    /// Activity name.
    #[serde(default)]
    pub name: Option<String>,
    /// Time of the activity.
    #[serde(default)]
    pub time: Option<String>,
}

/// A stored contact row.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ContactRecord {
    /// Contact name.
    #[serde(default)]
    pub name: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
}
