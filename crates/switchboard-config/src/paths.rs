//! Platform directory resolution.
//!
//! On Linux: `~/.config/switchboard` and `~/.local/share/switchboard`.
//! On macOS both live under `~/Library/Application Support/switchboard`.

use std::path::PathBuf;

use switchboard_common::ConfigError;

const APP_DIR: &str = "switchboard";

/// Directory holding `state.json` and `shell.toml`.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(base.join(APP_DIR))
}

/// Directory holding per-service browser storage.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::data_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine data directory".into()))?;
    Ok(base.join(APP_DIR))
}

/// Root under which each storage partition gets its own directory.
pub fn partitions_dir() -> Result<PathBuf, ConfigError> {
    Ok(data_dir()?.join("partitions"))
}
