// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Merchant API client.

use std::sync::Arc;

use reqwest::{Method, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::payload::SubmissionPayload;
use crate::types::{
    DashboardData, EventCredentials, EventRecord, EventSummary, Pager, Paginated, Session,
    Subscription, TemplateSummary, Transaction,
};

/// Client for the merchant REST API.
///
/// # Example
///
/// ```ignore
/// use sanding_api::{ApiConfig, MerchantApi};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ApiConfig {
///     base_url: "https://api.example.com/api".to_string(),
///     ..Default::default()
/// };
///
/// let api = MerchantApi::new(config)?;
/// let session = api.login("studio", "secret").await?;
/// let events = api.events(&session).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MerchantApi {
    http: Arc<HttpClient>,
}

impl MerchantApi {
    /// Creates a new merchant API client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Authenticates a merchant account and returns the session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthExpired`] when the credentials are rejected,
    /// or [`ApiError::InvalidResponse`] when the reply carries no token.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        tracing::debug!(username, "logging in");
        let body = serde_json::json!({ "username": username, "password": password });
        let request = self.http.request(Method::POST, "/auth/login").json(&body);
        let response = self.http.execute(request).await?;
        let session: Session = decode(response).await?;
        if session.token.is_empty() {
            return Err(ApiError::InvalidResponse(
                "login response carried no token".to_string(),
            ));
        }
        Ok(session)
    }

    /// Fetches the merchant's subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn subscription(&self, session: &Session) -> Result<Subscription, ApiError> {
        let path = format!("/merchant/{}/subscription", session.merchant_id);
        let response = self
            .http
            .execute(self.http.authed(Method::GET, &path, session))
            .await?;
        decode(response).await
    }

    /// Fetches a page of billing transactions.
    ///
    /// Merchants without any billing history get a 404 from this endpoint;
    /// that is an empty page, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn transactions(
        &self,
        session: &Session,
        pager: Pager,
    ) -> Result<Paginated<Transaction>, ApiError> {
        let path = format!("/merchant/{}/transactions", session.merchant_id);
        let request = self
            .http
            .authed(Method::GET, &path, session)
            .query(&[("page", pager.page), ("limit", pager.limit)]);
        match self.http.execute(request).await {
            Ok(response) => decode(response).await,
            Err(ApiError::Server { status: 404, .. }) => Ok(Paginated::empty(pager.limit)),
            Err(e) => Err(e),
        }
    }

    /// Fetches the dashboard summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn dashboard(&self, session: &Session) -> Result<DashboardData, ApiError> {
        let path = format!("/merchant/{}/dashboard", session.merchant_id);
        let response = self
            .http
            .execute(self.http.authed(Method::GET, &path, session))
            .await?;
        decode(response).await
    }

    /// Fetches a page of the template catalogue.
    ///
    /// Accepts both the paginated response shape and the bare array older
    /// deployments return.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn templates(
        &self,
        session: &Session,
        pager: Pager,
    ) -> Result<Paginated<TemplateSummary>, ApiError> {
        let request = self
            .http
            .authed(Method::GET, "/merchant/templates", session)
            .query(&[("page", pager.page), ("limit", pager.limit)]);
        let response = self.http.execute(request).await?;

        let text = response.text().await?;
        if let Ok(page) = serde_json::from_str::<Paginated<TemplateSummary>>(&text) {
            return Ok(page);
        }
        let bare: Vec<TemplateSummary> = serde_json::from_str(&text)?;
        Ok(Paginated::from_bare(bare, pager))
    }

    /// Fetches all events for the merchant.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn events(&self, session: &Session) -> Result<Vec<EventSummary>, ApiError> {
        let path = format!("/merchant/{}/events", session.merchant_id);
        let response = self
            .http
            .execute(self.http.authed(Method::GET, &path, session))
            .await?;

        let text = response.text().await?;
        if let Ok(events) = serde_json::from_str::<Vec<EventSummary>>(&text) {
            return Ok(events);
        }
        let page: Paginated<EventSummary> = serde_json::from_str(&text)?;
        Ok(page.data)
    }

    /// Fetches one event record for editing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn event(&self, session: &Session, event_id: i64) -> Result<EventRecord, ApiError> {
        // This endpoint predates the /merchant prefix.
        let path = format!("/{}/{event_id}", session.merchant_id);
        let response = self
            .http
            .execute(self.http.authed(Method::GET, &path, session))
            .await?;
        decode(response).await
    }

    /// Creates an event from a multipart payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be assembled or the request
    /// fails.
    pub async fn create_event(
        &self,
        session: &Session,
        payload: SubmissionPayload,
    ) -> Result<(), ApiError> {
        tracing::debug!(parts = payload.parts().len(), "creating event");
        let path = format!("/merchant/{}/events", session.merchant_id);
        let form = payload.into_form().await?;
        let request = self.http.authed(Method::POST, &path, session).multipart(form);
        self.http.execute(request).await?;
        Ok(())
    }

    /// Updates an event from a multipart payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be assembled or the request
    /// fails.
    pub async fn update_event(
        &self,
        session: &Session,
        event_id: i64,
        payload: SubmissionPayload,
    ) -> Result<(), ApiError> {
        tracing::debug!(event_id, parts = payload.parts().len(), "updating event");
        let path = format!("/merchant/{}/events/{event_id}", session.merchant_id);
        let form = payload.into_form().await?;
        let request = self.http.authed(Method::PUT, &path, session).multipart(form);
        self.http.execute(request).await?;
        Ok(())
    }

    /// Fetches the guest-site credentials for an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn event_credentials(
        &self,
        session: &Session,
        event_id: i64,
    ) -> Result<EventCredentials, ApiError> {
        let path = format!(
            "/merchant/{}/events/{event_id}/credentials",
            session.merchant_id
        );
        let response = self
            .http
            .execute(self.http.authed(Method::GET, &path, session))
            .await?;
        decode(response).await
    }

    /// Sets a new guest-site password for an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn reset_event_password(
        &self,
        session: &Session,
        event_id: i64,
        password: &str,
    ) -> Result<(), ApiError> {
        let path = format!(
            "/merchant/{}/events/{event_id}/reset-password",
            session.merchant_id
        );
        let body = serde_json::json!({ "password": password });
        let request = self.http.authed(Method::POST, &path, session).json(&body);
        self.http.execute(request).await?;
        Ok(())
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}
