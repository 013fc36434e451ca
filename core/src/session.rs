// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Session persistence.
//!
//! One merchant session lives at `{state_dir}/session.json`: written on
//! login, removed on logout or when the server reports the token expired.

use std::path::{Path, PathBuf};

use sanding_api::Session;
use tokio::fs;

use crate::error::Error;

const SESSION_FILE: &str = "session.json";

/// Stores the current session as a single JSON file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store rooted at the state directory.
    #[must_use]
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(SESSION_FILE),
        }
    }

    /// Where the session file lives.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<Option<Session>, Error> {
        match fs::read_to_string(&self.path).await {
            Ok(data) => serde_json::from_str(&data).map(Some).map_err(|e| {
                Error::Session(format!("corrupt session file {}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Session(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    /// Persists the session, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub async fn save(&self, session: &Session) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                Error::Session(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        let data = serde_json::to_string_pretty(session)
            .map_err(|e| Error::Session(format!("failed to encode session: {e}")))?;
        fs::write(&self.path, data).await.map_err(|e| {
            Error::Session(format!("failed to write {}: {e}", self.path.display()))
        })
    }

    /// Removes the persisted session. A missing file is fine.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be removed.
    pub async fn clear(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Session(format!(
                "failed to remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}
