// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Read-only browsing workflow tests.
//!
//! These tests cover the dashboard, billing history and the edit flow
//! that loads a stored event back into a draft.

use sanding_core::{Pager, Sanding};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{
    sample_event_json, sample_subscription_json, setup_state_dir, test_config, write_session,
};

async fn logged_in_sanding(server: &MockServer, state: &tempfile::TempDir) -> Sanding {
    write_session(state.path()).await;
    Sanding::new(test_config(&server.uri(), state.path()))
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "require network"]
async fn browsing_dashboard_decodes_summary() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/merchant/m-42/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "license": {
                "package_name": "Premium",
                "total_credits": 50,
                "event_credits_remaining": 37,
                "end_date": "2026-12-31T00:00:00.000Z",
            },
            "upcomingEvents": [
                {
                    "id": 9,
                    "name": "Ahmad & Siti",
                    "latest_schedule_title": "Akad Nikah",
                    "latest_schedule_date": "2026-03-14T09:00:00.000Z",
                }
            ],
            "trendyTemplates": [
                { "theme": "Rustic", "usage_count": 12 }
            ],
            "daily_chart_data": [
                { "date": "2026-02-01", "events": 2, "wishes": 31 }
            ],
        })))
        .mount(&server)
        .await;
    let state = setup_state_dir();
    let mut sanding = logged_in_sanding(&server, &state).await;

    // Act
    let dashboard = sanding.dashboard().await.unwrap();

    // Assert
    assert_eq!(dashboard.license.event_credits_remaining, 37);
    assert_eq!(dashboard.upcoming_events.len(), 1);
    assert_eq!(dashboard.upcoming_events[0].name, "Ahmad & Siti");
    assert_eq!(dashboard.trendy_templates[0].theme, "Rustic");
    assert_eq!(dashboard.daily_chart_data[0].wishes, 31);
}

#[tokio::test]
#[ignore = "require network"]
async fn browsing_missing_billing_history_is_empty_page() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/merchant/m-42/transactions"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let state = setup_state_dir();
    let mut sanding = logged_in_sanding(&server, &state).await;

    // Act
    let page = sanding.transactions(Pager::default()).await.unwrap();

    // Assert - a merchant without history gets an empty page, not an error
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total, 0);
    // And the session survives; only 401 tears it down.
    assert!(sanding.session().is_some());
}

#[tokio::test]
#[ignore = "require network"]
async fn browsing_template_catalogue_pages() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/merchant/templates"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "id": 11, "theme": "Rustic" },
                { "id": 12, "theme": "Floral" },
            ],
            "pagination": { "page": 2, "limit": 10, "total": 34, "totalPages": 4 },
        })))
        .mount(&server)
        .await;
    let state = setup_state_dir();
    let mut sanding = logged_in_sanding(&server, &state).await;

    // Act
    let page = sanding.templates(Pager::from((2, 10))).await.unwrap();

    // Assert
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.pagination.total_pages, 4);
}

#[tokio::test]
#[ignore = "require network"]
async fn browsing_open_for_edit_hydrates_stored_event() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/m-42/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_event_json()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/merchant/m-42/subscription"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_subscription_json()))
        .mount(&server)
        .await;
    let state = setup_state_dir();
    let mut sanding = logged_in_sanding(&server, &state).await;

    // Act
    let (draft, subscription) = sanding.open_for_edit(9).await.unwrap();

    // Assert - legacy names mapped and datetimes cut to the minute
    assert_eq!(draft.groom_name, "Ahmad bin Abu");
    assert_eq!(draft.opening_message, "Dengan segala hormatnya");
    assert_eq!(draft.template_id, Some(4));
    assert_eq!(draft.schedules[0].start_time, "2026-03-14T09:00");
    assert_eq!(draft.gifts.len(), 2);
    assert_eq!(draft.gifts[1].gift_name, "Rice cooker");
    assert_eq!(subscription.event_credits_remaining, 37);
}
