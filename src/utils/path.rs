//! Path utilities: locate the enclosing git working tree and the store file inside it.

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Return the absolute path of the root directory of the enclosing git
/// working tree, as reported by `git rev-parse --show-toplevel`.
pub fn git_root() -> AppResult<PathBuf> {
    git_root_from(Path::new("."))
}

pub fn git_root_from(cwd: &Path) -> AppResult<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(cwd)
        .output()?;

    if !output.status.success() {
        tracing::debug!(
            "git rev-parse failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Err(AppError::NotInRepository);
    }

    let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if root.is_empty() {
        return Err(AppError::NotInRepository);
    }
    Ok(PathBuf::from(root))
}

/// Location of the store file inside a repository root.
pub fn database_path(root: &Path, file_name: &str) -> PathBuf {
    root.join(file_name)
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
