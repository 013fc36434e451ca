// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;

use sanding_core::Sanding;

use crate::template_formatter::TemplateFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdTemplateList {
    pub page: u32,
    pub limit: u32,
    pub output_format: ArgOutputFormat,
}

impl CmdTemplateList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the template catalogue")
            .arg(
                arg!(--page [PAGE] "Page to fetch")
                    .value_parser(value_parser!(u32))
                    .default_value("1"),
            )
            .arg(
                arg!(--limit [LIMIT] "Templates per page")
                    .value_parser(value_parser!(u32))
                    .default_value("20"),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            page: matches.get_one("page").copied().unwrap_or(1),
            limit: matches.get_one("limit").copied().unwrap_or(20),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, sanding: &mut Sanding) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing templates...");
        let page = sanding.templates((self.page, self.limit).into()).await?;

        if page.data.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("{}", "No templates found".italic());
            return Ok(());
        }

        let formatter = TemplateFormatter::new().with_output_format(self.output_format);
        println!("{}", formatter.format(&page.data));

        if self.output_format == ArgOutputFormat::Table && page.pagination.total_pages > 1 {
            let prompt = format!(
                "Page {} of {} ({} themes)",
                page.pagination.page, page.pagination.total_pages, page.pagination.total,
            );
            println!("{}", prompt.italic());
        }
        Ok(())
    }
}
