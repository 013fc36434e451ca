// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use sanding_core::{APP_NAME, Sanding};
use tracing_subscriber::EnvFilter;

use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_event::{
    CmdEventCredentials, CmdEventEdit, CmdEventList, CmdEventNew, CmdEventResetPassword,
    CmdEventShow,
};
use crate::cmd_license::CmdLicense;
use crate::cmd_login::{CmdLogin, CmdLogout};
use crate::cmd_template::CmdTemplateList;
use crate::config::parse_config;

/// Run the Sanding command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            println!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Author and manage wedding invitation cards from the command line.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to dashboard
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/sanding/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/sanding/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdDashboard::command())
            .subcommand(CmdLogin::command())
            .subcommand(CmdLogout::command())
            .subcommand(CmdLicense::command())
            .subcommand(
                Command::new("template")
                    .alias("t")
                    .about("Browse the template catalogue")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdTemplateList::command()),
            )
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Manage your events")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventList::command())
                    .subcommand(CmdEventShow::command())
                    .subcommand(CmdEventNew::command())
                    .subcommand(CmdEventEdit::command())
                    .subcommand(CmdEventCredentials::command())
                    .subcommand(CmdEventResetPassword::command()),
            )
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches)),
            Some((CmdLogin::NAME, matches)) => Login(CmdLogin::from(matches)),
            Some((CmdLogout::NAME, matches)) => Logout(CmdLogout::from(matches)),
            Some((CmdLicense::NAME, matches)) => License(CmdLicense::from(matches)),
            Some(("template", matches)) => match matches.subcommand() {
                Some((CmdTemplateList::NAME, matches)) => {
                    TemplateList(CmdTemplateList::from(matches))
                }
                _ => unreachable!(),
            },
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
                Some((CmdEventShow::NAME, matches)) => EventShow(CmdEventShow::from(matches)),
                Some((CmdEventNew::NAME, matches)) => EventNew(CmdEventNew::from(matches)),
                Some((CmdEventEdit::NAME, matches)) => EventEdit(CmdEventEdit::from(matches)),
                Some((CmdEventCredentials::NAME, matches)) => {
                    EventCredentials(CmdEventCredentials::from(matches))
                }
                Some((CmdEventResetPassword::NAME, matches)) => {
                    EventResetPassword(CmdEventResetPassword::from(matches))
                }
                _ => unreachable!(),
            },
            None => Dashboard(CmdDashboard),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the dashboard
    Dashboard(CmdDashboard),

    /// Sign in to a merchant account
    Login(CmdLogin),

    /// Sign out
    Logout(CmdLogout),

    /// Show the license and its credit history
    License(CmdLicense),

    /// List templates
    TemplateList(CmdTemplateList),

    /// List events
    EventList(CmdEventList),

    /// Show one event
    EventShow(CmdEventShow),

    /// Create an event
    EventNew(CmdEventNew),

    /// Update an event
    EventEdit(CmdEventEdit),

    /// Show the guest-site credentials of an event
    EventCredentials(CmdEventCredentials),

    /// Reset the guest-site password of an event
    EventResetPassword(CmdEventResetPassword),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Dashboard(a)          => Self::run_with(config, |x| a.run(x).boxed()).await,
            Login(a)              => Self::run_with(config, |x| a.run(x).boxed()).await,
            Logout(a)             => Self::run_with(config, |x| a.run(x).boxed()).await,
            License(a)            => Self::run_with(config, |x| a.run(x).boxed()).await,
            TemplateList(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventList(a)          => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventShow(a)          => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventNew(a)           => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventEdit(a)          => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventCredentials(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventResetPassword(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Sanding) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let mut sanding = Sanding::new(config).await?;

        f(&mut sanding).await?;
        Ok(())
    }
}
