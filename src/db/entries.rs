//! The entry table: schema, inserts, queries and the bulk paid operations.

use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use chrono::Utc;
use rusqlite::{Connection, Row, params};

/// Operations on the single table of time entries.
///
/// The table name is interpolated into SQL, so it is validated as a plain
/// identifier when the store is built.
pub struct EntryStore<'a> {
    conn: &'a Connection,
    table: &'a str,
}

impl<'a> EntryStore<'a> {
    pub fn new(conn: &'a Connection, table: &'a str) -> AppResult<Self> {
        if !is_valid_identifier(table) {
            return Err(AppError::InvalidTableName(table.to_string()));
        }
        Ok(Self { conn, table })
    }

    /// Create the table if it does not exist yet.
    pub fn ensure_schema(&self) -> AppResult<()> {
        let t = self.table;
        self.conn.execute_batch(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {t} (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp INTEGER NOT NULL,
                minutes   INTEGER NOT NULL CHECK(minutes >= 0),
                comment   TEXT,
                paid      BOOLEAN NOT NULL DEFAULT 0
            );
            CREATE INDEX IF NOT EXISTS idx_{t}_timestamp ON {t}(timestamp);
            "#
        ))?;
        Ok(())
    }

    /// Insert a new unpaid entry stamped with the current time.
    pub fn add_entry(&self, minutes: u32, comment: Option<&str>) -> AppResult<i64> {
        self.add_entry_at(Utc::now().timestamp(), minutes, comment)
    }

    pub fn add_entry_at(&self, timestamp: i64, minutes: u32, comment: Option<&str>) -> AppResult<i64> {
        self.conn.execute(
            &format!(
                "INSERT INTO {} (timestamp, minutes, comment, paid) VALUES (?1, ?2, ?3, 0)",
                self.table
            ),
            params![timestamp, minutes, comment],
        )?;

        let id = self.conn.last_insert_rowid();
        tracing::info!(id, timestamp, minutes, "entry added");
        Ok(id)
    }

    /// All entries, optionally filtered by paid state, oldest first.
    pub fn show_entries(&self, paid: Option<bool>) -> AppResult<Vec<TimeEntry>> {
        let mut sql = format!(
            "SELECT id, timestamp, minutes, comment, paid FROM {}",
            self.table
        );
        if paid.is_some() {
            sql.push_str(" WHERE paid = ?1");
        }
        sql.push_str(" ORDER BY timestamp ASC, id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = match paid {
            Some(p) => stmt.query_map([p], map_row)?,
            None => stmt.query_map([], map_row)?,
        };

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        tracing::debug!(?paid, count = out.len(), "entries loaded");
        Ok(out)
    }

    /// Sum of minutes over entries with the given paid state; 0 when none.
    pub fn minutes_total(&self, paid: bool) -> AppResult<i64> {
        let total = self.conn.query_row(
            &format!(
                "SELECT COALESCE(SUM(minutes), 0) FROM {} WHERE paid = ?1",
                self.table
            ),
            [paid],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Flip every unpaid entry to paid. Returns the number of rows changed.
    pub fn mark_all_as_paid(&self) -> AppResult<usize> {
        let n = self
            .conn
            .execute(&format!("UPDATE {} SET paid = 1 WHERE paid = 0", self.table), [])?;
        tracing::info!(rows = n, "entries marked as paid");
        Ok(n)
    }

    /// Delete every paid entry. Returns the number of rows removed.
    pub fn del_table_all_paid(&self) -> AppResult<usize> {
        let n = self
            .conn
            .execute(&format!("DELETE FROM {} WHERE paid = 1", self.table), [])?;
        tracing::info!(rows = n, "paid entries deleted");
        Ok(n)
    }

    pub fn count(&self) -> AppResult<i64> {
        let n = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", self.table), [], |row| {
                row.get(0)
            })?;
        Ok(n)
    }
}

fn map_row(row: &Row) -> rusqlite::Result<TimeEntry> {
    Ok(TimeEntry {
        id: row.get("id")?,
        timestamp: row.get("timestamp")?,
        minutes: row.get("minutes")?,
        comment: row.get("comment")?,
        paid: row.get("paid")?,
    })
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(conn: &Connection) -> EntryStore<'_> {
        let s = EntryStore::new(conn, "timetracker").unwrap();
        s.ensure_schema().unwrap();
        s
    }

    #[test]
    fn ensure_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        let s = store(&conn);
        s.add_entry(10, None).unwrap();
        s.ensure_schema().unwrap();
        assert_eq!(s.count().unwrap(), 1);
    }

    #[test]
    fn add_then_show_returns_one_unpaid_row() {
        let conn = Connection::open_in_memory().unwrap();
        let s = store(&conn);

        s.add_entry(90, Some("fixed bug")).unwrap();
        let rows = s.show_entries(None).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].minutes, 90);
        assert_eq!(rows[0].comment.as_deref(), Some("fixed bug"));
        assert!(!rows[0].paid);
        assert_eq!(rows[0].hours(), "1.5");
        assert_eq!(rows[0].paid_label(), "no");
    }

    #[test]
    fn add_without_comment_and_zero_minutes() {
        let conn = Connection::open_in_memory().unwrap();
        let s = store(&conn);

        s.add_entry(0, None).unwrap();
        let rows = s.show_entries(None).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].minutes, 0);
        assert_eq!(rows[0].comment, None);
    }

    #[test]
    fn comments_are_stored_as_given() {
        let conn = Connection::open_in_memory().unwrap();
        let s = store(&conn);

        s.add_entry_at(100, 5, Some("  indented note ")).unwrap();
        s.add_entry_at(200, 5, Some("")).unwrap();
        let rows = s.show_entries(None).unwrap();

        assert_eq!(rows[0].comment.as_deref(), Some("  indented note "));
        assert_eq!(rows[1].comment.as_deref(), Some(""));
    }

    #[test]
    fn same_second_inserts_both_persist() {
        let conn = Connection::open_in_memory().unwrap();
        let s = store(&conn);

        s.add_entry_at(1_700_000_000, 10, Some("first")).unwrap();
        s.add_entry_at(1_700_000_000, 20, Some("second")).unwrap();

        let rows = s.show_entries(None).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].comment.as_deref(), Some("first"));
        assert_eq!(rows[1].comment.as_deref(), Some("second"));
    }

    #[test]
    fn show_orders_by_timestamp_and_filters_by_paid() {
        let conn = Connection::open_in_memory().unwrap();
        let s = store(&conn);

        s.add_entry_at(300, 1, Some("c")).unwrap();
        s.add_entry_at(100, 1, Some("a")).unwrap();
        s.mark_all_as_paid().unwrap();
        s.add_entry_at(200, 1, Some("b")).unwrap();

        let all: Vec<_> = s
            .show_entries(None)
            .unwrap()
            .into_iter()
            .map(|e| e.comment.unwrap())
            .collect();
        assert_eq!(all, ["a", "b", "c"]);

        let paid = s.show_entries(Some(true)).unwrap();
        assert_eq!(paid.len(), 2);
        assert!(paid.iter().all(|e| e.paid));

        let unpaid = s.show_entries(Some(false)).unwrap();
        assert_eq!(unpaid.len(), 1);
        assert_eq!(unpaid[0].comment.as_deref(), Some("b"));
    }

    #[test]
    fn minutes_total_sums_matching_rows_or_zero() {
        let conn = Connection::open_in_memory().unwrap();
        let s = store(&conn);

        assert_eq!(s.minutes_total(false).unwrap(), 0);
        assert_eq!(s.minutes_total(true).unwrap(), 0);

        s.add_entry(30, None).unwrap();
        s.add_entry(45, None).unwrap();
        assert_eq!(s.minutes_total(false).unwrap(), 75);
        assert_eq!(s.minutes_total(true).unwrap(), 0);
    }

    #[test]
    fn mark_all_as_paid_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        let s = store(&conn);

        s.add_entry(30, None).unwrap();
        s.add_entry(60, None).unwrap();

        assert_eq!(s.mark_all_as_paid().unwrap(), 2);
        let once = s.show_entries(Some(true)).unwrap();
        assert_eq!(s.mark_all_as_paid().unwrap(), 0);
        let twice = s.show_entries(Some(true)).unwrap();

        assert_eq!(once, twice);
        assert_eq!(s.minutes_total(false).unwrap(), 0);
        assert_eq!(s.minutes_total(true).unwrap(), 90);
    }

    #[test]
    fn del_paid_only_removes_paid_rows() {
        let conn = Connection::open_in_memory().unwrap();
        let s = store(&conn);

        s.add_entry(10, Some("old")).unwrap();
        s.mark_all_as_paid().unwrap();
        s.add_entry(20, Some("new")).unwrap();

        assert_eq!(s.del_table_all_paid().unwrap(), 1);
        let rest = s.show_entries(None).unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].comment.as_deref(), Some("new"));
        assert!(!rest[0].paid);

        assert_eq!(s.del_table_all_paid().unwrap(), 0);
        assert_eq!(s.count().unwrap(), 1);
    }

    #[test]
    fn custom_table_name() {
        let conn = Connection::open_in_memory().unwrap();
        let s = EntryStore::new(&conn, "client_hours").unwrap();
        s.ensure_schema().unwrap();
        s.add_entry(5, None).unwrap();
        assert_eq!(s.count().unwrap(), 1);
    }

    #[test]
    fn identifier_validation() {
        assert!(is_valid_identifier("timetracker"));
        assert!(is_valid_identifier("_t1"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1abc"));
        assert!(!is_valid_identifier("a b"));
        assert!(!is_valid_identifier("t;drop"));
    }
}
