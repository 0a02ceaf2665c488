//! Range checks for `shell.toml`.

use switchboard_common::ConfigError;

use crate::shell::{ShellSettings, PROBE_INTERVAL_MS_RANGE};

use super::helpers::validate_range;

/// Run all shell settings checks, collecting errors into one `ConfigError`.
pub fn validate_shell(settings: &ShellSettings) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "window.width",
        u64::from(settings.window.width),
        320,
        7680,
    );
    validate_range(
        &mut errors,
        "window.height",
        u64::from(settings.window.height),
        240,
        4320,
    );
    validate_range(
        &mut errors,
        "sidebar.width",
        u64::from(settings.sidebar.width),
        32,
        256,
    );
    validate_range(
        &mut errors,
        "probe.interval_ms",
        settings.probe.interval_ms,
        *PROBE_INTERVAL_MS_RANGE.start(),
        *PROBE_INTERVAL_MS_RANGE.end(),
    );

    if settings.browser.user_agent.trim().is_empty() {
        errors.push("browser.user_agent must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
