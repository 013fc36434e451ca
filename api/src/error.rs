// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Merchant API client errors.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Transport layer error (connection, timeout, TLS).
    Transport(String),

    /// Non-success response from the server.
    Server {
        /// HTTP status code.
        status: u16,
        /// Message taken from the response body.
        message: String,
    },

    /// The bearer token was rejected (HTTP 401).
    AuthExpired,

    /// Invalid response from server.
    InvalidResponse(String),

    /// Payload could not be assembled (unreadable file, bad MIME type).
    Payload(String),

    /// Configuration error.
    Config(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {e}"),
            Self::Server { status, message } => write!(f, "Server error ({status}): {message}"),
            Self::AuthExpired => write!(f, "Authentication expired"),
            Self::InvalidResponse(e) => write!(f, "Invalid server response: {e}"),
            Self::Payload(e) => write!(f, "Payload error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}
