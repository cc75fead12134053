use crate::db::entries::is_valid_identifier;
use crate::errors::{AppError, AppResult};
use crate::utils::formatting::COMMENT_WIDTH;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// File name of the store, created at the repository root.
    #[serde(default = "default_database_name")]
    pub database_name: String,
    #[serde(default = "default_table_name")]
    pub table_name: String,
    #[serde(default = "default_comment_width")]
    pub comment_width: usize,
}

fn default_database_name() -> String {
    "timetracker.sqlite".to_string()
}
fn default_table_name() -> String {
    "timetracker".to_string()
}
fn default_comment_width() -> usize {
    COMMENT_WIDTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_name: default_database_name(),
            table_name: default_table_name(),
            comment_width: default_comment_width(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.timetracker`)
    pub fn config_dir() -> PathBuf {
        let home = dirs::home_dir()
            .or_else(|| env::var_os("HOME").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        home.join(".timetracker")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timetracker.conf")
    }

    /// Load configuration from the default file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        tracing::debug!(?cfg, "configuration loaded from {}", path.display());
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.database_name.trim().is_empty() {
            return Err(AppError::Config("database_name must not be empty".into()));
        }
        if !is_valid_identifier(&self.table_name) {
            return Err(AppError::InvalidTableName(self.table_name.clone()));
        }
        if self.comment_width == 0 {
            return Err(AppError::Config("comment_width must be greater than 0".into()));
        }
        Ok(())
    }
}
