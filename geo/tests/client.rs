// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Geocoding client tests with wiremock.

use sanding_geo::{GeoClient, GeoConfig, GeoError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(mock_server: &MockServer) -> GeoConfig {
    GeoConfig {
        forward_url: format!("{}/api/", mock_server.uri()),
        reverse_url: format!("{}/reverse", mock_server.uri()),
        ..Default::default()
    }
}

#[tokio::test]
#[ignore = "require network"]
async fn client_reverse_country() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "json"))
        .and(query_param("lat", "3.139"))
        .and(query_param("lon", "101.6869"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"address": {"city": "Kuala Lumpur", "country": "Malaysia"}}"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = GeoClient::new(test_config(&mock_server)).expect("Failed to create client");
    let country = client
        .reverse_country(3.139, 101.6869)
        .await
        .expect("Failed to reverse geocode");

    assert_eq!(country, "Malaysia");
}

#[tokio::test]
#[ignore = "require network"]
async fn client_reverse_country_missing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"address": {}}"#, "application/json"),
        )
        .mount(&mock_server)
        .await;

    let client = GeoClient::new(test_config(&mock_server)).expect("Failed to create client");
    let err = client.reverse_country(0.0, 0.0).await.unwrap_err();

    assert!(matches!(err, GeoError::InvalidResponse(_)));
}

#[tokio::test]
#[ignore = "require network"]
async fn client_forward_search_maps_features() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("q", "masjid wilayah"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "features": [
                    {
                        "properties": {
                            "name": "Masjid Wilayah Persekutuan",
                            "state": "Kuala Lumpur",
                            "country": "Malaysia"
                        },
                        "geometry": {"coordinates": [101.6723, 3.1725]}
                    },
                    {
                        "properties": {"name": "Masjid Wilayah", "country": "Singapore"},
                        "geometry": {"coordinates": [103.8198, 1.3521]}
                    }
                ]
            }"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = GeoClient::new(test_config(&mock_server)).expect("Failed to create client");
    let places = client
        .forward_search("masjid wilayah", 3.139, 101.6869)
        .await
        .expect("Failed to search");

    assert_eq!(places.len(), 2);
    // Coordinates come back [lon, lat] and must be swapped.
    assert!((places[0].lat - 3.1725).abs() < 1e-9);
    assert!((places[0].lon - 101.6723).abs() < 1e-9);
    assert_eq!(places[0].country, "Malaysia");
    assert_eq!(places[1].state, "");
}

#[tokio::test]
#[ignore = "require network"]
async fn client_forward_search_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(503).set_body_raw("try later", "text/plain"))
        .mount(&mock_server)
        .await;

    let client = GeoClient::new(test_config(&mock_server)).expect("Failed to create client");
    let err = client.forward_search("masjid", 3.139, 101.6869).await.unwrap_err();

    assert!(matches!(err, GeoError::Http(_)));
}
