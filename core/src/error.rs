// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sanding_api::ApiError;
use sanding_geo::GeoError;

use crate::upload::UploadError;
use crate::validate::ErrorMap;

/// Errors produced by draft authoring and submission.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The draft failed validation; the map holds one message per field.
    #[error("validation failed: {0}")]
    Validation(ErrorMap),

    /// A file failed an upload gate.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// The merchant API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A geocoding call failed.
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// The session file could not be read or written.
    #[error("session store error: {0}")]
    Session(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// No session on disk; the caller must log in first.
    #[error("not logged in; run `sanding login` first")]
    NotLoggedIn,
}

impl Error {
    /// Whether this is the server telling us the session token is dead.
    #[must_use]
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Api(ApiError::AuthExpired))
    }
}
