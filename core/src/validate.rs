// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Draft validation.
//!
//! Every rule is checked independently so a submission attempt surfaces
//! all violations at once. Keys for repeatable sections carry the row
//! index (`schedule_title_0`), letting callers point at the exact row.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::draft::EventDraft;

/// Which optional rules the deployment enforces.
///
/// Deployments differ on whether parents' names are mandatory; keeping
/// that declarative avoids a code fork per market.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct ValidationPolicy {
    /// Require `groom_father_name` and `bride_father_name`.
    #[serde(default = "default_require_parent_names")]
    pub require_parent_names: bool,
}

const fn default_require_parent_names() -> bool {
    true
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            require_parent_names: default_require_parent_names(),
        }
    }
}

/// Field-keyed validation messages. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message under a field key.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    /// Whether the draft passed every rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of violated rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for a field key, if the rule was violated.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether a field key carries a message.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates over `(key, message)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Display for ErrorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (key, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{key}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Checks every rule and returns all violations at once.
///
/// Itinerary and gift rows are never validated; they are filtered at
/// submission instead.
#[must_use]
pub fn validate(draft: &EventDraft, policy: &ValidationPolicy) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if !draft.use_custom_template && draft.template_id.is_none() {
        errors.insert("template", "Please select a template");
    }

    if draft.groom_name.is_empty() {
        errors.insert("groom_name", "Groom name is required");
    }
    if policy.require_parent_names && draft.groom_father_name.is_empty() {
        errors.insert("groom_father_name", "Groom father name is required");
    }
    if draft.bride_name.is_empty() {
        errors.insert("bride_name", "Bride name is required");
    }
    if policy.require_parent_names && draft.bride_father_name.is_empty() {
        errors.insert("bride_father_name", "Bride father name is required");
    }
    if draft.email.is_empty() {
        errors.insert("email", "Email is required");
    }

    for (index, schedule) in draft.schedules.iter().enumerate() {
        if schedule.title.is_empty() {
            errors.insert(format!("schedule_title_{index}"), "Title is required");
        }
        if schedule.start_time.is_empty() {
            errors.insert(format!("schedule_date_{index}"), "Date is required");
        }
        if schedule.address.is_empty() {
            errors.insert(format!("schedule_address_{index}"), "Address is required");
        }
    }

    for (index, contact) in draft.contacts.iter().enumerate() {
        if contact.name.is_empty() {
            errors.insert(format!("contact_name_{index}"), "Name is required");
        }
        if contact.phone_number.is_empty() {
            errors.insert(format!("contact_phone_{index}"), "Phone number is required");
        }
    }

    errors
}
