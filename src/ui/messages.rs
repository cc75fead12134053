//! User-facing status lines. Tables and the stats line are printed plain
//! by their commands; everything else goes through here.

use crate::models::entry::minutes_to_hours;
use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (BLUE, "ℹ️"),
            Level::Success => (GREEN, "✅"),
            Level::Warning => (YELLOW, "⚠️"),
            Level::Error => (RED, "❌"),
        }
    }
}

/// Colored, icon-prefixed line for `level`.
pub fn line<T: fmt::Display>(level: Level, msg: T) -> String {
    let (color, icon) = level.style();
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}

pub fn entry_saved_text(minutes: u32) -> String {
    format!(
        "Entry saved: {} minutes ({} hours)",
        minutes,
        minutes_to_hours(i64::from(minutes))
    )
}

pub fn marked_paid_text(rows: usize) -> (Level, String) {
    match rows {
        0 => (Level::Info, "No unpaid entries.".to_string()),
        1 => (Level::Success, "1 entry marked as paid.".to_string()),
        n => (Level::Success, format!("{} entries marked as paid.", n)),
    }
}

pub fn deleted_paid_text(rows: usize) -> (Level, String) {
    match rows {
        0 => (Level::Info, "No paid entries to delete.".to_string()),
        1 => (Level::Warning, "1 paid entry deleted.".to_string()),
        n => (Level::Warning, format!("{} paid entries deleted.", n)),
    }
}

pub fn entry_saved(minutes: u32) {
    success(entry_saved_text(minutes));
}

pub fn marked_paid(rows: usize) {
    emit(marked_paid_text(rows));
}

pub fn deleted_paid(rows: usize) {
    emit(deleted_paid_text(rows));
}

fn emit((level, text): (Level, String)) {
    match level {
        Level::Info => info(text),
        Level::Success => success(text),
        Level::Warning => warning(text),
        Level::Error => error(text),
    }
}
