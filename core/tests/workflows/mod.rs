// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the sanding-core crate.
//!
//! These tests validate multi-step workflows against a mock server,
//! including session persistence, draft submission and editing flows.

mod auth;
mod browsing;
mod submission;
