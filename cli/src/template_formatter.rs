// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use sanding_core::TemplateSummary;

use crate::{
    table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson},
    util::ArgOutputFormat,
};

#[derive(Debug)]
pub struct TemplateFormatter {
    columns: Vec<TemplateColumn>,
    format: ArgOutputFormat,
}

impl TemplateFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                TemplateColumn::Id(TemplateColumnId),
                TemplateColumn::Theme(TemplateColumnTheme),
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, templates: &'a [TemplateSummary]) -> Display<'a> {
        Display {
            templates,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    templates: &'a [TemplateSummary],
    formatter: &'a TemplateFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(
                    TableStyleJson::new(),
                    &self.formatter.columns,
                    self.templates
                )
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(
                    TableStyleBasic::new(),
                    &self.formatter.columns,
                    self.templates
                )
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub enum TemplateColumn {
    Id(TemplateColumnId),
    Theme(TemplateColumnTheme),
}

impl TableColumn<TemplateSummary> for TemplateColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            TemplateColumn::Id(_) => "ID",
            TemplateColumn::Theme(_) => "Theme",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a TemplateSummary) -> Cow<'a, str> {
        match self {
            TemplateColumn::Id(a) => a.format(data),
            TemplateColumn::Theme(a) => a.format(data),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TemplateColumn::Id(_) => PaddingDirection::Right,
            TemplateColumn::Theme(_) => PaddingDirection::Left,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TemplateColumnId;

impl TemplateColumnId {
    fn format<'a>(&self, template: &'a TemplateSummary) -> Cow<'a, str> {
        template.id.to_string().into()
    }
}

#[derive(Debug, Clone)]
pub struct TemplateColumnTheme;

impl TemplateColumnTheme {
    fn format<'a>(&self, template: &'a TemplateSummary) -> Cow<'a, str> {
        template.theme.as_str().into()
    }
}
