// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Draft submission workflow tests.
//!
//! These tests validate the full submit pipeline: validation first,
//! then a multipart request carrying the draft.

use sanding_core::{MediaRef, Sanding};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{
    assert_validation_error, setup_state_dir, test_config, valid_draft, write_session,
};

async fn logged_in_sanding(server: &MockServer, state: &tempfile::TempDir) -> Sanding {
    write_session(state.path()).await;
    Sanding::new(test_config(&server.uri(), state.path()))
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "require network"]
async fn submission_create_flow_sends_multipart() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/merchant/m-42/events"))
        .and(body_string_contains("name=\"groom_name\""))
        .and(body_string_contains("Ahmad bin Abu"))
        .and(body_string_contains("name=\"schedules\""))
        .and(body_string_contains("name=\"showSalamOpening\""))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    let state = setup_state_dir();
    let mut sanding = logged_in_sanding(&server, &state).await;

    // Act + Assert
    sanding.create_event(&valid_draft()).await.unwrap();
}

#[tokio::test]
#[ignore = "require network"]
async fn submission_invalid_draft_never_reaches_network() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/merchant/m-42/events"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let state = setup_state_dir();
    let mut sanding = logged_in_sanding(&server, &state).await;

    // Act
    let err = sanding
        .create_event(&sanding_core::EventDraft::default())
        .await
        .unwrap_err();

    // Assert - per-field messages, no request issued
    assert_validation_error(&err, "template");
    assert_validation_error(&err, "groom_name");
    assert_validation_error(&err, "schedule_title_0");
    assert_validation_error(&err, "contact_name_0");
}

#[tokio::test]
#[ignore = "require network"]
async fn submission_update_flow_marks_kept_files() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/merchant/m-42/events/9"))
        .and(body_string_contains("name=\"existing_gallery_images\""))
        .and(body_string_contains("https://cdn.example.com/a.jpg"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let state = setup_state_dir();
    let mut sanding = logged_in_sanding(&server, &state).await;

    let mut draft = valid_draft();
    draft.gallery = vec![MediaRef::remote("https://cdn.example.com/a.jpg")];

    // Act + Assert
    sanding.update_event(9, &draft).await.unwrap();
}

#[tokio::test]
#[ignore = "require network"]
async fn submission_server_rejection_surfaces_message() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/merchant/m-42/events/9"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "message": "Schedule dates overlap",
        })))
        .mount(&server)
        .await;
    let state = setup_state_dir();
    let mut sanding = logged_in_sanding(&server, &state).await;

    // Act
    let err = sanding.update_event(9, &valid_draft()).await.unwrap_err();

    // Assert
    assert!(err.to_string().contains("Schedule dates overlap"), "{err}");
    // A rejection is not an expired session.
    assert!(sanding.session().is_some());
}
