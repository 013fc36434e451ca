// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;

use sanding_core::{EventDraft, EventSummary, MediaRef, RsvpMode, Sanding};

use crate::draft_file::DraftFile;
use crate::event_formatter::EventFormatter;
use crate::prompt::prompt_new_password;
use crate::util::ArgOutputFormat;

/// Events shown per page by `event list`.
const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct CmdEventList {
    pub query: Option<String>,
    pub page: u32,
    pub output_format: ArgOutputFormat,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List events")
            .arg(arg!(-q --query [QUERY] "Keep events whose name or description contains this"))
            .arg(
                arg!(--page [PAGE] "Page to show")
                    .value_parser(value_parser!(u32))
                    .default_value("1"),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            query: matches.get_one("query").cloned(),
            page: matches.get_one("page").copied().unwrap_or(1),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, sanding: &mut Sanding) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let events = filter_events(sanding.events().await?, self.query.as_deref());

        if events.is_empty() {
            match self.output_format {
                ArgOutputFormat::Table => println!("{}", "No events found".italic()),
                ArgOutputFormat::Json => print_events(&[], self.output_format),
            }
            return Ok(());
        }

        let total = events.len();
        let (start, end) = page_bounds(total, self.page);
        if start == end {
            println!("{}", format!("No events on page {}", self.page).italic());
            return Ok(());
        }

        print_events(&events[start..end], self.output_format);
        if self.output_format == ArgOutputFormat::Table && total > PAGE_SIZE {
            let prompt = format!("Showing {}-{} of {total} events", start + 1, end);
            println!("{}", prompt.italic());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventShow {
    pub id: i64,
}

impl CmdEventShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show one event as it would be edited")
            .arg(arg!(<ID> "Event id").value_parser(value_parser!(i64)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: matches.get_one("ID").copied().unwrap_or_default(),
        }
    }

    pub async fn run(self, sanding: &mut Sanding) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing event...");
        let (draft, subscription) = sanding.open_for_edit(self.id).await?;

        print_draft(self.id, &draft);
        println!();
        println!(
            "{} of {} event credits left on {}",
            subscription.event_credits_remaining,
            subscription.total_credits,
            subscription.package_name.bold(),
        );
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub draft: PathBuf,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create an event from a draft file")
            .arg(
                arg!(--draft <FILE> "TOML draft file to submit")
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            draft: matches.get_one("draft").cloned().unwrap_or_default(),
        }
    }

    pub async fn run(self, sanding: &mut Sanding) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "creating event...");
        let file = DraftFile::load(&self.draft).await?;
        let mut draft = EventDraft::new();
        file.apply(&mut draft).await?;

        match sanding.create_event(&draft).await {
            Ok(()) => {
                println!("Created {}", event_label(&draft).bold());
                Ok(())
            }
            Err(e) => fail_submission(e),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: i64,
    pub draft: PathBuf,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Update a stored event from a draft file")
            .arg(arg!(<ID> "Event id").value_parser(value_parser!(i64)))
            .arg(
                arg!(--draft <FILE> "TOML draft file to overlay")
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: matches.get_one("ID").copied().unwrap_or_default(),
            draft: matches.get_one("draft").cloned().unwrap_or_default(),
        }
    }

    pub async fn run(self, sanding: &mut Sanding) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        let file = DraftFile::load(&self.draft).await?;
        let (mut draft, _subscription) = sanding.open_for_edit(self.id).await?;
        file.apply(&mut draft).await?;

        match sanding.update_event(self.id, &draft).await {
            Ok(()) => {
                println!("Updated {}", event_label(&draft).bold());
                Ok(())
            }
            Err(e) => fail_submission(e),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventCredentials {
    pub id: i64,
}

impl CmdEventCredentials {
    pub const NAME: &str = "credentials";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the guest-site credentials of an event")
            .arg(arg!(<ID> "Event id").value_parser(value_parser!(i64)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: matches.get_one("ID").copied().unwrap_or_default(),
        }
    }

    pub async fn run(self, sanding: &mut Sanding) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "fetching credentials...");
        let credentials = sanding.event_credentials(self.id).await?;
        println!("{} {}", "Email:".bold(), credentials.email);
        println!("{} {}", "Password:".bold(), credentials.password);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventResetPassword {
    pub id: i64,
}

impl CmdEventResetPassword {
    pub const NAME: &str = "reset-password";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Set a new guest-site password for an event")
            .arg(arg!(<ID> "Event id").value_parser(value_parser!(i64)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: matches.get_one("ID").copied().unwrap_or_default(),
        }
    }

    pub async fn run(self, sanding: &mut Sanding) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "resetting guest password...");
        let password = prompt_new_password()?;
        sanding.reset_event_password(self.id, &password).await?;
        println!("Guest password updated for event #{}", self.id);
        Ok(())
    }
}

fn filter_events(events: Vec<EventSummary>, query: Option<&str>) -> Vec<EventSummary> {
    match query {
        Some(query) => {
            let needle = query.to_lowercase();
            events
                .into_iter()
                .filter(|event| {
                    event.name.to_lowercase().contains(&needle)
                        || event
                            .description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(&needle))
                })
                .collect()
        }
        None => events,
    }
}

fn page_bounds(total: usize, page: u32) -> (usize, usize) {
    let start = ((page.max(1) - 1) as usize * PAGE_SIZE).min(total);
    let end = (start + PAGE_SIZE).min(total);
    (start, end)
}

fn print_events(events: &[EventSummary], output_format: ArgOutputFormat) {
    let formatter = EventFormatter::new().with_output_format(output_format);
    println!("{}", formatter.format(events));
}

fn print_draft(id: i64, draft: &EventDraft) {
    println!("💍 {}", format!("Event #{id}").bold());
    println!(
        "  Couple:    {} & {}",
        draft.groom_name.bold(),
        draft.bride_name.bold(),
    );
    println!("  Email:     {}", draft.email);
    let theme = if draft.use_custom_template {
        match draft.custom_theme.as_ref().and_then(MediaRef::url) {
            Some(url) => format!("custom ({url})"),
            None => "custom (pending upload)".to_string(),
        }
    } else {
        match draft.template_id {
            Some(template_id) => format!("template #{template_id}"),
            None => "not chosen".to_string(),
        }
    };
    println!("  Theme:     {theme}");
    println!("  Language:  {} · RSVP: {}", draft.language, rsvp_label(draft));

    println!();
    println!("🕌 {}", "Schedules".bold());
    for schedule in &draft.schedules {
        let span = if schedule.end_time.is_empty() {
            schedule.start_time.clone()
        } else {
            format!("{} ~ {}", schedule.start_time, schedule.end_time)
        };
        println!("  {} {span}  {}", "►".green(), schedule.title.bold());
        if !schedule.address.is_empty() {
            println!("     {}", schedule.address);
        }
    }

    println!();
    println!("📞 {}", "Contacts".bold());
    for contact in &draft.contacts {
        println!("  {} ({})", contact.name, contact.phone_number);
    }

    if !draft.gallery.is_empty() || draft.payment_qr_code.is_some() || draft.song.is_some() {
        println!();
        println!("🖼️ {}", "Media".bold());
        if !draft.gallery.is_empty() {
            println!("  {} gallery images", draft.gallery.len());
        }
        if draft.payment_qr_code.is_some() {
            println!("  payment QR code attached");
        }
        if draft.song.is_some() {
            println!("  background song attached");
        }
    }
}

fn rsvp_label(draft: &EventDraft) -> String {
    match (draft.rsvp_mode, draft.rsvp_closed_date.as_deref()) {
        (RsvpMode::Off, _) => "off".to_string(),
        (mode, Some(closed)) => format!("{mode} (closes {closed})"),
        (mode, None) => mode.to_string(),
    }
}

fn event_label(draft: &EventDraft) -> String {
    format!("{} & {}", draft.groom_name, draft.bride_name)
}

fn fail_submission(e: sanding_core::Error) -> Result<(), Box<dyn Error>> {
    if let sanding_core::Error::Validation(errors) = &e {
        for (key, message) in errors.iter() {
            println!("  {} {message}", format!("{key}:").red());
        }
        return Err(format!(
            "the draft is incomplete, {} fields need attention",
            errors.len()
        )
        .into());
    }
    Err(e.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64, name: &str, description: Option<&str>) -> EventSummary {
        EventSummary {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_event_list() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdEventList::command());

        let matches = cmd
            .try_get_matches_from([
                "test",
                "list",
                "--query",
                "aqiqah",
                "--page",
                "2",
                "--output-format",
                "json",
            ])
            .unwrap();
        let sub_matches = matches.subcommand_matches("list").unwrap();
        let parsed = CmdEventList::from(sub_matches);

        assert_eq!(parsed.query.as_deref(), Some("aqiqah"));
        assert_eq!(parsed.page, 2);
        assert_eq!(parsed.output_format, ArgOutputFormat::Json);
    }

    #[test]
    fn test_parse_event_list_defaults() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdEventList::command());

        let matches = cmd.try_get_matches_from(["test", "list"]).unwrap();
        let sub_matches = matches.subcommand_matches("list").unwrap();
        let parsed = CmdEventList::from(sub_matches);

        assert_eq!(parsed.query, None);
        assert_eq!(parsed.page, 1);
        assert_eq!(parsed.output_format, ArgOutputFormat::Table);
    }

    #[test]
    fn test_parse_event_show() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdEventShow::command());

        let matches = cmd.try_get_matches_from(["test", "show", "42"]).unwrap();
        let parsed = CmdEventShow::from(matches.subcommand_matches("show").unwrap());
        assert_eq!(parsed.id, 42);
    }

    #[test]
    fn test_parse_event_new() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdEventNew::command());

        let matches = cmd
            .try_get_matches_from(["test", "new", "--draft", "akad.toml"])
            .unwrap();
        let parsed = CmdEventNew::from(matches.subcommand_matches("new").unwrap());
        assert_eq!(parsed.draft, PathBuf::from("akad.toml"));
    }

    #[test]
    fn test_parse_event_new_requires_draft() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdEventNew::command());

        let matches = cmd.try_get_matches_from(["test", "new"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_parse_event_edit() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdEventEdit::command());

        let matches = cmd
            .try_get_matches_from(["test", "edit", "42", "--draft", "touchups.toml"])
            .unwrap();
        let parsed = CmdEventEdit::from(matches.subcommand_matches("edit").unwrap());
        assert_eq!(parsed.id, 42);
        assert_eq!(parsed.draft, PathBuf::from("touchups.toml"));
    }

    #[test]
    fn test_parse_event_credentials() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdEventCredentials::command());

        let matches = cmd
            .try_get_matches_from(["test", "credentials", "42"])
            .unwrap();
        let parsed = CmdEventCredentials::from(matches.subcommand_matches("credentials").unwrap());
        assert_eq!(parsed.id, 42);
    }

    #[test]
    fn test_parse_event_reset_password() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdEventResetPassword::command());

        let matches = cmd
            .try_get_matches_from(["test", "reset-password", "42"])
            .unwrap();
        let parsed =
            CmdEventResetPassword::from(matches.subcommand_matches("reset-password").unwrap());
        assert_eq!(parsed.id, 42);
    }

    #[test]
    fn test_filter_events_matches_name_and_description() {
        let events = vec![
            summary(1, "Majlis Aqiqah Aisyah", None),
            summary(2, "Walimatul Urus", Some("aqiqah lunch to follow")),
            summary(3, "Sanding", None),
        ];

        let filtered = filter_events(events, Some("AQIQAH"));
        let ids: Vec<i64> = filtered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_filter_events_without_query_keeps_all() {
        let events = vec![summary(1, "A", None), summary(2, "B", None)];
        assert_eq!(filter_events(events, None).len(), 2);
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(25, 1), (0, 10));
        assert_eq!(page_bounds(25, 3), (20, 25));
        assert_eq!(page_bounds(25, 9), (25, 25));
        assert_eq!(page_bounds(0, 1), (0, 0));
    }
}
