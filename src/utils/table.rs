//! Table rendering utilities for CLI outputs.

use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use crate::utils::formatting::{pad_right, wrap_comment};
use chrono::TimeZone;
use std::fmt::Display;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Width of each column: the widest line of any cell, header included.
    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .flat_map(|cell| cell.lines())
                    .map(|l| l.width())
                    .chain(std::iter::once(h.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render with borders; cells are left-aligned and multi-line cells
    /// make their row taller.
    pub fn render(&self) -> String {
        let widths = self.widths();

        let mut border = String::from("+");
        for w in &widths {
            border.push_str(&"-".repeat(w + 2));
            border.push('+');
        }
        border.push('\n');

        let mut out = border.clone();
        push_row(&mut out, &self.headers, &widths);
        out.push_str(&border);

        for row in &self.rows {
            push_row(&mut out, row, &widths);
        }
        if !self.rows.is_empty() {
            out.push_str(&border);
        }

        out
    }
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let lines: Vec<Vec<&str>> = widths
        .iter()
        .enumerate()
        .map(|(i, _)| cells.get(i).map(|c| c.lines().collect::<Vec<_>>()).unwrap_or_default())
        .collect();
    let height = lines.iter().map(Vec::len).max().unwrap_or(0).max(1);

    for n in 0..height {
        out.push('|');
        for (col, w) in lines.iter().zip(widths) {
            let text = col.get(n).copied().unwrap_or("");
            out.push(' ');
            out.push_str(&pad_right(text, *w));
            out.push_str(" |");
        }
        out.push('\n');
    }
}

pub const ENTRY_HEADERS: [&str; 6] = ["Date", "Start Time", "End Time", "Hours", "Paid", "Comment"];

/// Render time entries in the given time zone.
pub fn render_entries<Tz>(entries: &[TimeEntry], tz: &Tz, comment_width: usize) -> AppResult<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut table = Table::new(ENTRY_HEADERS);

    for e in entries {
        let start = e.start_time(tz)?;
        let end = e.end_time(tz)?;
        let comment = e
            .comment
            .as_deref()
            .map(|c| wrap_comment(c, comment_width))
            .unwrap_or_default();

        table.add_row(vec![
            end.format("%d.%m.%y").to_string(),
            start.format("%H:%M").to_string(),
            end.format("%H:%M").to_string(),
            e.hours(),
            e.paid_label().to_string(),
            comment,
        ]);
    }

    Ok(table.render())
}
