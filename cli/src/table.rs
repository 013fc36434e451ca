// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use unicode_width::UnicodeWidthStr;

/// One column of a table: a name for JSON keys, a cell renderer, and an
/// alignment.
pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;
    fn padding_direction(&self) -> PaddingDirection;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Plain text rows, columns padded to a shared width.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleBasic;

impl TableStyleBasic {
    pub fn new() -> Self {
        TableStyleBasic
    }

    fn separator(&self) -> &'static str {
        "  "
    }
}

/// An array of objects, one per row, keyed by column name.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        TableStyleJson
    }
}

pub struct Table<'a, S, C, T> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S, C, T> Table<'a, S, C, T> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<C: TableColumn<T>, T> fmt::Display for Table<'_, TableStyleBasic, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|data| self.columns.iter().map(|col| col.format(data)).collect())
            .collect();

        let widths = column_widths(&rows, self.columns.len());

        for cells in &rows {
            for (i, cell) in cells.iter().enumerate() {
                if i > 0 {
                    f.write_str(self.style.separator())?;
                }

                let pad = widths[i].saturating_sub(cell.width());
                match self.columns[i].padding_direction() {
                    // Last column does not need padding if it's left-aligned
                    PaddingDirection::Left if i == cells.len() - 1 => f.write_str(cell)?,
                    PaddingDirection::Left => write!(f, "{}{:pad$}", cell, "")?,
                    PaddingDirection::Right => write!(f, "{:pad$}{}", "", cell)?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<C: TableColumn<T>, T> fmt::Display for Table<'_, TableStyleJson, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<serde_json::Value> = self
            .data
            .iter()
            .map(|data| {
                let object = self
                    .columns
                    .iter()
                    .map(|col| {
                        let name = col.name().into_owned();
                        let cell = serde_json::Value::String(col.format(data).into_owned());
                        (name, cell)
                    })
                    .collect();
                serde_json::Value::Object(object)
            })
            .collect();

        let text = serde_json::to_string(&rows).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

fn column_widths(rows: &[Vec<Cow<'_, str>>], columns: usize) -> Vec<usize> {
    let mut widths = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}
