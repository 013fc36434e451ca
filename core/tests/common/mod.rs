// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_file_exists, assert_file_not_exists, assert_validation_error};
#[allow(unused_imports)]
pub use fixtures::{
    sample_event_json, sample_subscription_json, setup_state_dir, test_config, test_session,
    valid_draft, write_session,
};
