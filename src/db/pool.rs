//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! A `DbPool` owns one connection for the lifetime of a command. All work
//! goes through [`DbPool::unit_of_work`], which wraps it in a transaction
//! that is committed on every exit path; [`DbPool::close`] then releases
//! the handle explicitly.

use crate::db::entries::EntryStore;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the store file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        tracing::debug!("opened store {}", path.as_ref().display());
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Run `func` against the entry table inside a single transaction.
    ///
    /// The schema is ensured first. The transaction is committed whether or
    /// not `func` succeeds; an error from `func` takes precedence over a
    /// commit error.
    pub fn unit_of_work<F, T>(&mut self, table: &str, func: F) -> AppResult<T>
    where
        F: FnOnce(&EntryStore<'_>) -> AppResult<T>,
    {
        let tx = self.conn.transaction()?;

        let result = EntryStore::new(&tx, table).and_then(|store| {
            store.ensure_schema()?;
            func(&store)
        });

        let committed = tx.commit();
        if let Err(e) = &committed {
            tracing::warn!("commit failed: {}", e);
        }

        let value = result?;
        committed?;
        Ok(value)
    }

    /// Release the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        tracing::debug!("store closed");
        Ok(())
    }
}
