// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_dashboard;
mod cmd_event;
mod cmd_license;
mod cmd_login;
mod cmd_template;
mod config;
mod draft_file;
mod event_formatter;
mod prompt;
mod table;
mod template_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
