use clap::{ArgAction, Parser};

/// Command-line interface definition for timetracker
/// CLI application to record working time per git repository with SQLite
#[derive(Parser, Debug)]
#[command(
    name = "timetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record working time in the current git repository and track what has been paid",
    long_about = "Without options, asks interactively for the minutes worked and an optional \
                  comment and stores a new entry. The options below are mutually exclusive."
)]
pub struct Cli {
    /// Override database path (skips the git repository lookup)
    #[arg(long = "db", value_name = "FILE")]
    pub db: Option<String>,

    /// Print debug diagnostics on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    #[arg(long = "show-all", short = 'a', action = ArgAction::Count, help = "Show all entries")]
    pub show_all: u8,

    #[arg(long = "show-paid", short = 'p', action = ArgAction::Count, help = "Show paid entries")]
    pub show_paid: u8,

    #[arg(long = "show-unpaid", short = 'u', action = ArgAction::Count, help = "Show unpaid entries")]
    pub show_unpaid: u8,

    #[arg(long = "stats", short = 's', action = ArgAction::Count, help = "Show unpaid hours")]
    pub stats: u8,

    #[arg(long = "mark-paid", short = 'm', action = ArgAction::Count, help = "Mark all hours worked as paid")]
    pub mark_paid: u8,

    #[arg(long = "del-paid", action = ArgAction::Count, help = "Delete entries marked as paid")]
    pub del_paid: u8,
}

/// The single operation an invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Show(Option<bool>),
    Stats,
    MarkPaid,
    DelPaid,
}

impl Cli {
    /// Resolve the action flags into one `Action`; `None` when more than one
    /// is given. A repeated flag counts once per occurrence.
    pub fn action(&self) -> Option<Action> {
        let selected: Vec<Action> = [
            (self.show_all, Action::Show(None)),
            (self.show_paid, Action::Show(Some(true))),
            (self.show_unpaid, Action::Show(Some(false))),
            (self.stats, Action::Stats),
            (self.mark_paid, Action::MarkPaid),
            (self.del_paid, Action::DelPaid),
        ]
        .into_iter()
        .flat_map(|(times, action)| std::iter::repeat_n(action, usize::from(times)))
        .collect();

        match selected.as_slice() {
            [] => Some(Action::Add),
            [one] => Some(*one),
            _ => None,
        }
    }
}
