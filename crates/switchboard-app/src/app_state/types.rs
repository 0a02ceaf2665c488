//! Internal constants for the app state module.

use std::time::Duration;

/// How often the event loop drains view events and probe badges.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Bounded wait for probe tasks when the runtime shuts down.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// View label of the sidebar.
pub(super) const SIDEBAR_VIEW: &str = "sidebar";

/// View label of the settings view.
pub(super) const SETTINGS_VIEW: &str = "settings";
