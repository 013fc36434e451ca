// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Session lifecycle workflow tests.
//!
//! These tests validate login persistence across runs and the teardown
//! that follows an expired token.

use sanding_core::Sanding;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{
    assert_file_exists, assert_file_not_exists, setup_state_dir, test_config, write_session,
};

#[tokio::test]
#[ignore = "require network"]
async fn auth_login_persists_session() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "token-123",
            "merchantId": "m-42",
            "name": "Studio Kenduri",
        })))
        .expect(1)
        .mount(&server)
        .await;
    let state = setup_state_dir();
    let mut sanding = Sanding::new(test_config(&server.uri(), state.path()))
        .await
        .unwrap();
    assert!(sanding.session().is_none());

    // Act
    let session = sanding.login("studio", "secret").await.unwrap();

    // Assert - session cached and persisted for the next run
    assert_eq!(session.merchant_id, "m-42");
    assert!(sanding.session().is_some());
    assert_file_exists(state.path().join("session.json"));

    let restored = Sanding::new(test_config(&server.uri(), state.path()))
        .await
        .unwrap();
    assert_eq!(restored.session().map(|s| s.token.as_str()), Some("token-123"));
}

#[tokio::test]
#[ignore = "require network"]
async fn auth_logout_removes_session_file() {
    // Arrange
    let server = MockServer::start().await;
    let state = setup_state_dir();
    write_session(state.path()).await;
    let mut sanding = Sanding::new(test_config(&server.uri(), state.path()))
        .await
        .unwrap();
    assert!(sanding.session().is_some());

    // Act
    sanding.logout().await.unwrap();

    // Assert
    assert!(sanding.session().is_none());
    assert_file_not_exists(state.path().join("session.json"));
}

#[tokio::test]
#[ignore = "require network"]
async fn auth_expired_token_tears_down_session() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/merchant/m-42/dashboard"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let state = setup_state_dir();
    write_session(state.path()).await;
    let mut sanding = Sanding::new(test_config(&server.uri(), state.path()))
        .await
        .unwrap();

    // Act
    let err = sanding.dashboard().await.unwrap_err();

    // Assert - the session is gone from memory and from disk
    assert!(err.is_auth_expired());
    assert!(sanding.session().is_none());
    assert_file_not_exists(state.path().join("session.json"));
}
