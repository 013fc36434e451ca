// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use jiff::Zoned;

use sanding_core::{DailyActivity, LicenseInfo, Sanding, TemplateTrend, UpcomingEvent, days_until};

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the dashboard, which includes the license, upcoming events and trends")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDashboard
    }

    pub async fn run(self, sanding: &mut Sanding) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");
        let now = Zoned::now();
        let data = sanding.dashboard().await?;

        Self::print_license(&data.license, &now);
        println!();
        Self::print_upcoming(&data.upcoming_events, &now);
        println!();
        Self::print_trends(&data.trendy_templates);
        if !data.daily_chart_data.is_empty() {
            println!();
            Self::print_activity(&data.daily_chart_data);
        }
        Ok(())
    }

    fn print_license(license: &LicenseInfo, now: &Zoned) {
        println!("🪪 {}", "License".bold());
        let used = license.total_credits - license.event_credits_remaining;
        if license.total_credits > 0 {
            let pct = used * 100 / license.total_credits;
            println!(
                "  {} {used} of {} event credits used ({pct}%)",
                license.package_name.bold(),
                license.total_credits,
            );
        } else {
            println!("  {}", license.package_name.bold());
        }
        if let Some(end) = license.end_date.as_deref() {
            match days_until(end, now) {
                Some(0) => println!("  {}", format!("Renews by {end}").red()),
                Some(days) => println!("  Renews in {days} days ({end})"),
                None => println!("  Renews on {end}"),
            }
        }
    }

    fn print_upcoming(events: &[UpcomingEvent], now: &Zoned) {
        println!("🗓️ {}", "Upcoming events".bold());
        if events.is_empty() {
            println!("  {}", "No upcoming events".italic());
            return;
        }
        for event in events {
            let date = event.latest_schedule_date.as_deref();
            let title = event.latest_schedule_title.as_deref();
            match (date, title) {
                (Some(date), Some(title)) => println!(
                    "  {} {date}  {} · {title}{}",
                    "►".green(),
                    event.name.bold(),
                    in_days(date, now),
                ),
                (Some(date), None) => println!(
                    "  {} {date}  {}{}",
                    "►".green(),
                    event.name.bold(),
                    in_days(date, now),
                ),
                _ => println!("  {} {}", "►".green(), event.name.bold()),
            }
        }
    }

    fn print_trends(trends: &[TemplateTrend]) {
        println!("🎨 {}", "Trending themes".bold());
        if trends.is_empty() {
            println!("  {}", "No template usage yet".italic());
            return;
        }
        for (i, trend) in trends.iter().enumerate() {
            println!(
                "  {}. {} ({} events)",
                i + 1,
                trend.theme.bold(),
                trend.usage_count,
            );
        }
    }

    fn print_activity(days: &[DailyActivity]) {
        println!("📈 {}", "Daily activity".bold());
        for day in days {
            println!("  {}  {} events · {} wishes", day.date, day.events, day.wishes);
        }
    }
}

fn in_days(date: &str, now: &Zoned) -> String {
    match days_until(date, now) {
        Some(0) => format!(" ({})", "today".green()),
        Some(1) => " (tomorrow)".to_string(),
        Some(days) => format!(" (in {days} days)"),
        None => String::new(),
    }
}
