//! timetracker library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Action, Cli};
use config::Config;
use db::{DbPool, EntryStore};
use errors::{AppError, AppResult};
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(action: Action, store: &EntryStore<'_>, cfg: &Config) -> AppResult<()> {
    match action {
        Action::Add => cli::commands::add::handle(store),
        Action::Show(paid) => cli::commands::show::handle(store, cfg, paid),
        Action::Stats => cli::commands::stats::handle(store),
        Action::MarkPaid => cli::commands::paid::mark(store),
        Action::DelPaid => cli::commands::paid::delete(store),
    }
}

/// Store location: the `--db` override, or the configured file at the git root.
pub fn resolve_database(cli: &Cli, cfg: &Config) -> AppResult<PathBuf> {
    match &cli.db {
        Some(custom) => Ok(utils::path::expand_tilde(custom)),
        None => {
            let root = utils::path::git_root()?;
            Ok(utils::path::database_path(&root, &cfg.database_name))
        }
    }
}

/// Run one invocation described by `cli`.
pub fn run_with(cli: &Cli) -> AppResult<()> {
    // 1️⃣ usage check before anything touches the store
    let action = cli.action().ok_or(AppError::TooManyOptions)?;

    // 2️⃣ config and store location
    let cfg = Config::load()?;
    let db_path = resolve_database(cli, &cfg)?;
    tracing::debug!(?action, "using store {}", db_path.display());

    // 3️⃣ one unit of work, then release the handle whatever happened
    let mut pool = DbPool::new(&db_path)?;
    let result = pool.unit_of_work(&cfg.table_name, |store| dispatch(action, store, &cfg));
    let closed = pool.close();

    result?;
    closed
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    run_with(&cli)
}
