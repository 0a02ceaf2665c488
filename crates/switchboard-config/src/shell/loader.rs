//! `shell.toml` loading and creation.

use std::path::Path;

use switchboard_common::ConfigError;
use tracing::{info, warn};

use crate::validation::shell::validate_shell;

use super::ShellSettings;

const HEADER: &str = "\
# Switchboard shell settings.
# The inbox itself (groups and services) is edited from the settings
# view inside the app and stored separately in state.json.

";

/// Load shell settings from a TOML file.
///
/// Missing fields take their defaults. If validation fails a warning is
/// logged and the parsed settings are returned as-is.
pub fn load_shell_settings(path: &Path) -> Result<ShellSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let settings: ShellSettings = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validate_shell(&settings) {
        warn!("shell settings validation warning: {e}; using parsed values");
    }

    info!("loaded shell settings from {}", path.display());
    Ok(settings)
}

/// Load shell settings, writing a default file first if none exists.
pub fn load_or_create(path: &Path) -> Result<ShellSettings, ConfigError> {
    match load_shell_settings(path) {
        Ok(settings) => Ok(settings),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no shell settings at {}, creating default", path.display());
            let settings = ShellSettings::default();
            save_shell_settings(&settings, path)?;
            Ok(settings)
        }
        Err(e) => Err(e),
    }
}

/// Write shell settings as commented TOML, creating parent directories.
pub fn save_shell_settings(settings: &ShellSettings, path: &Path) -> Result<(), ConfigError> {
    let body = toml::to_string_pretty(settings)
        .map_err(|e| ConfigError::WriteError(format!("failed to serialize shell settings: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, format!("{HEADER}{body}")).map_err(|e| {
        ConfigError::WriteError(format!("failed to write {}: {e}", path.display()))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = load_shell_settings(&dir.path().join("shell.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_or_create_writes_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("shell.toml");

        let settings = load_or_create(&path).unwrap();
        assert_eq!(settings, ShellSettings::default());
        assert!(path.exists());

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# Switchboard shell settings."));
        assert!(contents.contains("interval_ms = 500"));
    }

    #[test]
    fn written_file_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shell.toml");

        let mut settings = ShellSettings::default();
        settings.sidebar.width = 80;
        settings.probe.interval_ms = 750;
        save_shell_settings(&settings, &path).unwrap();

        let loaded = load_shell_settings(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shell.toml");
        std::fs::write(&path, "[probe\ninterval_ms = ").unwrap();

        let err = load_shell_settings(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(load_or_create(&path).is_err());
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shell.toml");
        std::fs::write(&path, "[probe]\ninterval_ms = 5\n").unwrap();

        let settings = load_shell_settings(&path).unwrap();
        assert_eq!(settings.probe.interval_ms, 5);
    }
}
