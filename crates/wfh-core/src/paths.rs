//! Per-user data directory for front ends that persist state locally.

use std::path::PathBuf;

use crate::error::CoreError;

/// Returns `~/.config/wfh-toolkit[-dev]/` based on WFH_ENV.
///
/// Set WFH_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("WFH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("wfh-toolkit-dev")
    } else {
        base_dir.join("wfh-toolkit")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
