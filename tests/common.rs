#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary with an isolated HOME so no user configuration leaks in.
pub fn tt() -> Command {
    let home = env::temp_dir().join("timetracker_test_home");
    fs::create_dir_all(&home).ok();
    let mut cmd = cargo_bin_cmd!("timetracker");
    cmd.env("HOME", home).env_remove("TIMETRACKER_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timetracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Add one entry through the interactive prompt
pub fn add_entry(db_path: &str, minutes: &str, comment: &str) {
    tt()
        .args(["--db", db_path])
        .write_stdin(format!("{}\n{}\n", minutes, comment))
        .assert()
        .success();
}

/// Row count straight from the store file
pub fn row_count(db_path: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM timetracker", [], |row| row.get(0))
        .expect("count rows")
}
