// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;

use sanding_core::Sanding;

use crate::prompt::prompt_login;

#[derive(Debug, Clone)]
pub struct CmdLogin {
    pub username: Option<String>,
}

impl CmdLogin {
    pub const NAME: &str = "login";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Sign in to the merchant account")
            .arg(arg!([USERNAME] "Account email or username"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            username: matches.get_one("USERNAME").cloned(),
        }
    }

    pub async fn run(self, sanding: &mut Sanding) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "logging in...");
        let (username, password) = prompt_login(self.username)?;

        match sanding.login(&username, &password).await {
            Ok(session) => {
                let name = session.name.unwrap_or(username);
                println!("Signed in as {}", name.bold());
                Ok(())
            }
            Err(e) if e.is_auth_expired() => Err("invalid username or password".into()),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdLogout;

impl CmdLogout {
    pub const NAME: &str = "logout";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Sign out and forget the saved session")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdLogout
    }

    pub async fn run(self, sanding: &mut Sanding) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "logging out...");
        sanding.logout().await?;
        println!("Signed out");
        Ok(())
    }
}
