// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The facade tying configuration, session, API and geocoding together.

use sanding_api::{
    DashboardData, EventCredentials, EventSummary, MerchantApi, Pager, Paginated, Session,
    Subscription, TemplateSummary, Transaction,
};
use sanding_geo::GeoClient;

use crate::address::AddressLookup;
use crate::config::Config;
use crate::draft::EventDraft;
use crate::error::Error;
use crate::session::SessionStore;
use crate::submit::SubmitMode;
use crate::validate::validate;

/// The application facade.
///
/// Owns the configuration, the persisted session and the service
/// clients. Every operation that talks to the merchant API goes through
/// here so an expired session is torn down in exactly one place.
#[derive(Debug)]
pub struct Sanding {
    config: Config,
    api: MerchantApi,
    geo: GeoClient,
    sessions: SessionStore,
    session: Option<Session>,
}

impl Sanding {
    /// Creates a new instance, preparing the state directory and
    /// restoring any saved session.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unusable, the state
    /// directory cannot be created, or a saved session cannot be read.
    pub async fn new(mut config: Config) -> Result<Self, Error> {
        config.normalize()?;

        let state_dir = config
            .state_dir
            .clone()
            .ok_or_else(|| Error::Config("state directory unresolved".to_string()))?;
        tokio::fs::create_dir_all(&state_dir)
            .await
            .map_err(|e| Error::Config(format!("failed to prepare {}: {e}", state_dir.display())))?;

        let api = MerchantApi::new(config.api.clone())?;
        let geo = GeoClient::new(config.geo.clone())?;
        let sessions = SessionStore::new(&state_dir);
        let session = sessions.load().await?;

        Ok(Self {
            config,
            api,
            geo,
            sessions,
            session,
        })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The logged-in session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Logs in and persists the session for later runs.
    ///
    /// # Errors
    ///
    /// Returns [`sanding_api::ApiError::AuthExpired`] wrapped in
    /// [`Error::Api`] when the credentials are rejected.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<Session, Error> {
        let session = self.api.login(username, password).await?;
        self.sessions.save(&session).await?;
        tracing::debug!(merchant_id = %session.merchant_id, "session saved");
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Forgets the session in memory and on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be removed.
    pub async fn logout(&mut self) -> Result<(), Error> {
        self.session = None;
        self.sessions.clear().await
    }

    /// Fetches the dashboard summary.
    ///
    /// # Errors
    ///
    /// Returns an error if not logged in or the request fails.
    pub async fn dashboard(&mut self) -> Result<DashboardData, Error> {
        let session = self.require_session()?;
        let result = self.api.dashboard(&session).await;
        self.run_authed(result).await
    }

    /// Fetches the subscription with its billing history.
    ///
    /// # Errors
    ///
    /// Returns an error if not logged in or the request fails.
    pub async fn subscription(&mut self) -> Result<Subscription, Error> {
        let session = self.require_session()?;
        let result = self.api.subscription(&session).await;
        self.run_authed(result).await
    }

    /// Fetches a page of billing transactions.
    ///
    /// # Errors
    ///
    /// Returns an error if not logged in or the request fails.
    pub async fn transactions(&mut self, pager: Pager) -> Result<Paginated<Transaction>, Error> {
        let session = self.require_session()?;
        let result = self.api.transactions(&session, pager).await;
        self.run_authed(result).await
    }

    /// Fetches a page of the template catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if not logged in or the request fails.
    pub async fn templates(&mut self, pager: Pager) -> Result<Paginated<TemplateSummary>, Error> {
        let session = self.require_session()?;
        let result = self.api.templates(&session, pager).await;
        self.run_authed(result).await
    }

    /// Fetches all events.
    ///
    /// # Errors
    ///
    /// Returns an error if not logged in or the request fails.
    pub async fn events(&mut self) -> Result<Vec<EventSummary>, Error> {
        let session = self.require_session()?;
        let result = self.api.events(&session).await;
        self.run_authed(result).await
    }

    /// Fetches one event and prepares it for editing, together with the
    /// subscription shown next to the editor.
    ///
    /// # Errors
    ///
    /// Returns an error if not logged in or either request fails.
    pub async fn open_for_edit(
        &mut self,
        event_id: i64,
    ) -> Result<(EventDraft, Subscription), Error> {
        let session = self.require_session()?;
        let (record, subscription) = tokio::join!(
            self.api.event(&session, event_id),
            self.api.subscription(&session),
        );
        let record = self.run_authed(record).await?;
        let subscription = self.run_authed(subscription).await?;
        Ok((EventDraft::hydrate(record), subscription))
    }

    /// Validates and submits a draft as a new event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] without touching the network when
    /// the draft is incomplete, or an API error otherwise.
    pub async fn create_event(&mut self, draft: &EventDraft) -> Result<(), Error> {
        self.submit(draft, None).await
    }

    /// Validates and submits a draft as an update to a stored event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] without touching the network when
    /// the draft is incomplete, or an API error otherwise.
    pub async fn update_event(&mut self, event_id: i64, draft: &EventDraft) -> Result<(), Error> {
        self.submit(draft, Some(event_id)).await
    }

    /// Fetches the guest-site credentials for an event.
    ///
    /// # Errors
    ///
    /// Returns an error if not logged in or the request fails.
    pub async fn event_credentials(&mut self, event_id: i64) -> Result<EventCredentials, Error> {
        let session = self.require_session()?;
        let result = self.api.event_credentials(&session, event_id).await;
        self.run_authed(result).await
    }

    /// Sets a new guest-site password for an event.
    ///
    /// # Errors
    ///
    /// Returns an error if not logged in or the request fails.
    pub async fn reset_event_password(
        &mut self,
        event_id: i64,
        password: &str,
    ) -> Result<(), Error> {
        let session = self.require_session()?;
        let result = self.api.reset_event_password(&session, event_id, password).await;
        self.run_authed(result).await
    }

    /// Creates an address lookup biased toward `position`, or the
    /// configured fallback position when none is given.
    #[must_use]
    pub fn address_lookup(&self, position: Option<(f64, f64)>) -> AddressLookup {
        AddressLookup::new(self.geo.clone(), position)
    }

    async fn submit(&mut self, draft: &EventDraft, target: Option<i64>) -> Result<(), Error> {
        // An incomplete draft never reaches the network.
        let errors = validate(draft, &self.config.validation);
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        let session = self.require_session()?;
        let mode = match target {
            Some(_) => SubmitMode::Update,
            None => SubmitMode::Create,
        };
        let payload = draft.to_payload(mode)?;
        let result = match target {
            Some(event_id) => self.api.update_event(&session, event_id, payload).await,
            None => self.api.create_event(&session, payload).await,
        };
        self.run_authed(result).await
    }

    fn require_session(&self) -> Result<Session, Error> {
        self.session.clone().ok_or(Error::NotLoggedIn)
    }

    // Tears down the session when the server says it expired, then
    // propagates the error.
    async fn run_authed<T>(&mut self, result: Result<T, sanding_api::ApiError>) -> Result<T, Error> {
        if let Err(sanding_api::ApiError::AuthExpired) = &result {
            self.session = None;
            if let Err(e) = self.sessions.clear().await {
                tracing::warn!(%e, "failed to remove expired session");
            }
        }
        result.map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use sanding_api::ApiConfig;
    use sanding_geo::GeoConfig;

    use super::*;
    use crate::validate::ValidationPolicy;

    fn test_config(state_dir: &Path) -> Config {
        Config {
            api: ApiConfig {
                base_url: "http://localhost:9/api".to_string(),
                ..Default::default()
            },
            geo: GeoConfig::default(),
            state_dir: Some(state_dir.to_path_buf()),
            validation: ValidationPolicy::default(),
        }
    }

    #[tokio::test]
    async fn test_new_prepares_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = dir.path().join("sanding");

        let sanding = Sanding::new(test_config(&state_dir)).await.unwrap();
        assert!(state_dir.is_dir());
        assert!(sanding.session().is_none());
    }

    #[tokio::test]
    async fn test_new_restores_saved_session() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session {
            token: "token-123".to_string(),
            merchant_id: "m-42".to_string(),
            name: Some("Studio Kenduri".to_string()),
            email: None,
        };
        SessionStore::new(dir.path()).save(&session).await.unwrap();

        let sanding = Sanding::new(test_config(dir.path())).await.unwrap();
        assert_eq!(sanding.session().map(|s| s.token.as_str()), Some("token-123"));
    }

    #[tokio::test]
    async fn test_ops_require_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut sanding = Sanding::new(test_config(dir.path())).await.unwrap();

        assert!(matches!(sanding.dashboard().await, Err(Error::NotLoggedIn)));
        assert!(matches!(sanding.events().await, Err(Error::NotLoggedIn)));
    }

    #[tokio::test]
    async fn test_submit_validates_before_anything_else() {
        let dir = tempfile::tempdir().unwrap();
        let mut sanding = Sanding::new(test_config(dir.path())).await.unwrap();

        // Not logged in, yet the empty draft fails on validation first.
        let err = sanding.create_event(&EventDraft::default()).await.unwrap_err();
        match err {
            Error::Validation(errors) => assert!(errors.contains_key("groom_name")),
            other => panic!("expected validation error, got {other}"),
        }
    }
}
