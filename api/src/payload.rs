// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Multipart submission payloads.
//!
//! A payload is kept as a list of plain parts until the request is issued,
//! so callers can inspect exactly what would be sent without a server.

use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};

use crate::error::ApiError;

/// One part of a multipart submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadPart {
    /// A named text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// A named field holding a JSON-encoded value.
    Json {
        /// Field name.
        name: String,
        /// Serialized JSON.
        value: String,
    },
    /// A local file to upload as a binary part.
    File {
        /// Field name.
        name: String,
        /// Path of the file to read at send time.
        path: PathBuf,
        /// File name reported to the server.
        file_name: String,
        /// MIME type of the file.
        mime: String,
    },
    /// A marker telling the server to keep an already-uploaded file.
    ExistingRef {
        /// Field name.
        name: String,
        /// Stored URL, or a JSON array of stored URLs.
        value: String,
    },
}

impl PayloadPart {
    /// The field name of this part.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. }
            | Self::Json { name, .. }
            | Self::File { name, .. }
            | Self::ExistingRef { name, .. } => name,
        }
    }
}

/// An inspectable multipart submission payload.
#[derive(Debug, Clone, Default)]
pub struct SubmissionPayload {
    parts: Vec<PayloadPart>,
}

impl SubmissionPayload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text field.
    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(PayloadPart::Text {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Appends a boolean field, encoded the way form data encodes booleans.
    pub fn flag(&mut self, name: impl Into<String>, value: bool) {
        self.text(name, if value { "true" } else { "false" });
    }

    /// Appends a JSON-encoded field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidResponse`] if `value` cannot be serialized.
    pub fn json(
        &mut self,
        name: impl Into<String>,
        value: &impl serde::Serialize,
    ) -> Result<(), ApiError> {
        self.parts.push(PayloadPart::Json {
            name: name.into(),
            value: serde_json::to_string(value)?,
        });
        Ok(())
    }

    /// Appends a binary file part. `file_name` is derived from the path.
    pub fn file(
        &mut self,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        mime: impl Into<String>,
    ) {
        let path = path.into();
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |s| s.to_string_lossy().into_owned());
        self.parts.push(PayloadPart::File {
            name: name.into(),
            path,
            file_name,
            mime: mime.into(),
        });
    }

    /// Appends an existing-reference marker with a plain value.
    pub fn existing(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(PayloadPart::ExistingRef {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Appends an existing-reference marker holding a JSON array of values.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidResponse`] if `values` cannot be serialized.
    pub fn existing_json(
        &mut self,
        name: impl Into<String>,
        values: &[String],
    ) -> Result<(), ApiError> {
        self.parts.push(PayloadPart::ExistingRef {
            name: name.into(),
            value: serde_json::to_string(values)?,
        });
        Ok(())
    }

    /// All parts in append order.
    #[must_use]
    pub fn parts(&self) -> &[PayloadPart] {
        &self.parts
    }

    /// The first part with the given field name.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&PayloadPart> {
        self.parts.iter().find(|p| p.name() == name)
    }

    /// Converts the payload into a `reqwest` multipart form, reading file
    /// parts from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Payload`] if a file cannot be read or a MIME
    /// type is malformed.
    pub async fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for part in self.parts {
            match part {
                PayloadPart::Text { name, value }
                | PayloadPart::Json { name, value }
                | PayloadPart::ExistingRef { name, value } => {
                    form = form.text(name, value);
                }
                PayloadPart::File {
                    name,
                    path,
                    file_name,
                    mime,
                } => {
                    let bytes = read_upload(&path).await?;
                    let part = Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(&mime)
                        .map_err(|e| ApiError::Payload(format!("Invalid MIME type {mime}: {e}")))?;
                    form = form.part(name, part);
                }
            }
        }
        Ok(form)
    }
}

async fn read_upload(path: &Path) -> Result<Vec<u8>, ApiError> {
    tokio::fs::read(path)
        .await
        .map_err(|e| ApiError::Payload(format!("Failed to read {}: {e}", path.display())))
}
