// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;

use sanding_core::{Sanding, Transaction};

#[derive(Debug, Clone, Copy)]
pub struct CmdLicense {
    pub page: u32,
    pub limit: u32,
}

impl CmdLicense {
    pub const NAME: &str = "license";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the subscription and its transaction history")
            .arg(
                arg!(--page [PAGE] "History page to fetch")
                    .value_parser(value_parser!(u32))
                    .default_value("1"),
            )
            .arg(
                arg!(--limit [LIMIT] "History rows per page")
                    .value_parser(value_parser!(u32))
                    .default_value("10"),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            page: matches.get_one("page").copied().unwrap_or(1),
            limit: matches.get_one("limit").copied().unwrap_or(10),
        }
    }

    pub async fn run(self, sanding: &mut Sanding) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing license...");
        let subscription = sanding.subscription().await?;

        println!("🪪 {}", subscription.package_name.bold());
        let used = subscription.total_credits - subscription.event_credits_remaining;
        println!(
            "  {used} of {} event credits used, {} left",
            subscription.total_credits, subscription.event_credits_remaining,
        );
        match (&subscription.start_date, &subscription.end_date) {
            (Some(start), Some(end)) => println!("  Valid {start} to {end}"),
            (None, Some(end)) => println!("  Valid until {end}"),
            _ => {}
        }

        let history = sanding.transactions((self.page, self.limit).into()).await?;

        println!();
        println!("🧾 {}", "History".bold());
        let rows: Vec<&Transaction> = history.data.iter().filter(|t| is_credit_entry(t)).collect();
        if rows.is_empty() {
            println!("  {}", "No transactions".italic());
            return Ok(());
        }
        for transaction in rows {
            let when = transaction.created_at.as_deref().unwrap_or("-");
            println!(
                "  {when}  {:>8}  {}",
                format!("{:+.2}", transaction.amount),
                transaction.transaction_type,
            );
        }
        if history.pagination.total_pages > 1 {
            let prompt = format!(
                "  Page {} of {}",
                history.pagination.page, history.pagination.total_pages,
            );
            println!("{}", prompt.italic());
        }
        Ok(())
    }
}

/// Usage rows live on the events themselves; the history lists the
/// entries that changed the credit balance.
fn is_credit_entry(transaction: &Transaction) -> bool {
    matches!(
        transaction.transaction_type.as_str(),
        "purchase" | "adjustment"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(transaction_type: &str) -> Transaction {
        Transaction {
            id: 1,
            created_at: Some("2026-06-01 10:00".to_string()),
            transaction_type: transaction_type.to_string(),
            amount: 10.0,
        }
    }

    #[test]
    fn test_parse_license() {
        let cmd = Command::new("test").subcommand(CmdLicense::command());
        let matches = cmd
            .try_get_matches_from(["test", "license", "--page", "2", "--limit", "5"])
            .unwrap();
        let parsed = CmdLicense::from(matches.subcommand_matches("license").unwrap());
        assert_eq!(parsed.page, 2);
        assert_eq!(parsed.limit, 5);
    }

    #[test]
    fn test_parse_license_defaults() {
        let cmd = Command::new("test").subcommand(CmdLicense::command());
        let matches = cmd.try_get_matches_from(["test", "license"]).unwrap();
        let parsed = CmdLicense::from(matches.subcommand_matches("license").unwrap());
        assert_eq!(parsed.page, 1);
        assert_eq!(parsed.limit, 10);
    }

    #[test]
    fn test_credit_entries_keep_purchases_and_adjustments() {
        assert!(is_credit_entry(&transaction("purchase")));
        assert!(is_credit_entry(&transaction("adjustment")));
        assert!(!is_credit_entry(&transaction("usage")));
    }
}
