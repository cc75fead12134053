use crate::db::entries::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::entry_saved;

use std::io::{self, BufRead, Write};

pub const MINUTES_PROMPT: &str = "Enter the working time (in minutes, Ctrl-C for cancel): ";
pub const COMMENT_PROMPT: &str = "Comment on the entry: ";
pub const RETRY_MESSAGE: &str = "No minutes have been entered. Try once more...";

/// Data collected by the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
pub struct NewEntry {
    pub minutes: u32,
    pub comment: Option<String>,
}

/// Ask for the entry on stdin and store it.
pub fn handle(store: &EntryStore<'_>) -> AppResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let entry = read_entry(&mut input, &mut output)?;
    store.add_entry(entry.minutes, entry.comment.as_deref())?;

    entry_saved(entry.minutes);
    Ok(())
}

/// Prompt for minutes until a digit string is given, then for an optional comment.
/// A closed input stream cancels the whole operation.
pub fn read_entry<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> AppResult<NewEntry> {
    let minutes = loop {
        let answer = prompt(input, output, MINUTES_PROMPT)?;
        match parse_minutes(&answer) {
            Ok(m) => break m,
            Err(e) => {
                tracing::debug!("{}", e);
                writeln!(output, "{}", RETRY_MESSAGE)?;
            }
        }
    };

    let comment = Some(prompt(input, output, COMMENT_PROMPT)?).filter(|c| !c.is_empty());

    Ok(NewEntry { minutes, comment })
}

/// Accepts a non-empty string of ASCII digits that fits in `u32`.
pub fn parse_minutes(s: &str) -> AppResult<u32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidMinutes(s.to_string()));
    }
    s.parse().map_err(|_| AppError::InvalidMinutes(s.to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> AppResult<String> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Err(AppError::Cancelled);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
