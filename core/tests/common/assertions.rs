// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::path::Path;

use sanding_core::Error;

/// Asserts that an error is a validation failure naming `key`.
///
/// # Panics
///
/// Panics if the error is not [`Error::Validation`] or the key is absent.
pub fn assert_validation_error(err: &Error, key: &str) {
    match err {
        Error::Validation(errors) => {
            assert!(
                errors.contains_key(key),
                "validation error missing key {key}: {errors}"
            );
        }
        other => panic!("expected validation error, got {other}"),
    }
}

/// Asserts that a file exists at the given path.
///
/// # Panics
///
/// Panics if the file doesn't exist.
pub fn assert_file_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(path.exists(), "File does not exist: {}", path.display());
}

/// Asserts that a file does NOT exist at the given path.
///
/// # Panics
///
/// Panics if the file exists.
pub fn assert_file_not_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(!path.exists(), "File should not exist: {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanding_core::{ErrorMap, EventDraft, ValidationPolicy, validate};

    #[test]
    fn test_assert_validation_error_matches_key() {
        let errors = validate(&EventDraft::default(), &ValidationPolicy::default());
        assert_validation_error(&Error::Validation(errors), "groom_name");
    }

    #[test]
    #[should_panic(expected = "validation error missing key")]
    fn test_assert_validation_error_panics_on_missing_key() {
        assert_validation_error(&Error::Validation(ErrorMap::new()), "groom_name");
    }

    #[test]
    #[should_panic(expected = "expected validation error")]
    fn test_assert_validation_error_panics_on_other_error() {
        assert_validation_error(&Error::NotLoggedIn, "groom_name");
    }

    #[test]
    fn test_assert_file_exists_with_existing_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        assert_file_exists(temp.path());
    }

    #[test]
    #[should_panic(expected = "File does not exist")]
    fn test_assert_file_exists_panics_on_missing_file() {
        assert_file_exists("/nonexistent/path/that/does/not/exist.json");
    }

    #[test]
    fn test_assert_file_not_exists_with_missing_file() {
        assert_file_not_exists("/nonexistent/path/that/does/not/exist.json");
    }
}
