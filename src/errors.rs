//! Unified application error type.
//! All modules (db, cli, config, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Invalid table name: {0}")]
    InvalidTableName(String),

    // ---------------------------
    // Environment / usage errors
    // ---------------------------
    #[error("You are not inside a git repository")]
    NotInRepository,

    #[error("Too many options")]
    TooManyOptions,

    #[error("Operation cancelled")]
    Cancelled,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid minutes value: {0}")]
    InvalidMinutes(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
