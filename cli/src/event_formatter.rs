// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use sanding_core::EventSummary;

use crate::{
    table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson},
    util::ArgOutputFormat,
};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: ArgOutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                EventColumn::Id(EventColumnId),
                EventColumn::Name(EventColumnName),
                EventColumn::Description(EventColumnDescription),
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [EventSummary]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [EventSummary],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), &self.formatter.columns, self.events)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), &self.formatter.columns, self.events)
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventColumn {
    Id(EventColumnId),
    Name(EventColumnName),
    Description(EventColumnDescription),
}

impl TableColumn<EventSummary> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Id(_) => "ID",
            EventColumn::Name(_) => "Name",
            EventColumn::Description(_) => "Description",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a EventSummary) -> Cow<'a, str> {
        match self {
            EventColumn::Id(a) => a.format(data),
            EventColumn::Name(a) => a.format(data),
            EventColumn::Description(a) => a.format(data),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id(_) => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnId;

impl EventColumnId {
    fn format<'a>(&self, event: &'a EventSummary) -> Cow<'a, str> {
        event.id.to_string().into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnName;

impl EventColumnName {
    fn format<'a>(&self, event: &'a EventSummary) -> Cow<'a, str> {
        event.name.as_str().into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnDescription;

impl EventColumnDescription {
    fn format<'a>(&self, event: &'a EventSummary) -> Cow<'a, str> {
        event.description.as_deref().unwrap_or("").into()
    }
}
