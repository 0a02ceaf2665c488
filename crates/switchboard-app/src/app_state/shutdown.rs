//! Graceful shutdown: stop probes, drop panes, destroy views, stop runtime.

use super::core::SwitchboardApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

impl SwitchboardApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Session (cancel every probe, then destroy every pane view)
    /// 2. Sidebar and settings views
    /// 3. Probe runtime, bounded by a timeout
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut switchboard) = self.switchboard.take() {
            switchboard.shutdown();
        }

        if let Some(ref mut views) = self.views {
            views.destroy_all();
        }
        self.views = None;
        self.settings_visible = false;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }

        self.should_exit = true;
        tracing::info!("Graceful shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::SwitchboardApp;
    use switchboard_config::{ShellSettings, StateStore};
    use tempfile::TempDir;

    fn app(dir: &TempDir) -> SwitchboardApp {
        SwitchboardApp::new(
            ShellSettings::default(),
            StateStore::new(dir.path()),
            dir.path().join("partitions"),
        )
    }

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        app.shutdown();

        assert!(app.switchboard.is_none());
        assert!(app.views.is_none());
        assert!(app.tokio_runtime.is_none());
        assert!(app.should_exit);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        app.shutdown();
        app.shutdown();

        assert!(app.switchboard.is_none());
        assert!(!app.settings_visible);
    }

    #[test]
    fn shutdown_stops_runtime() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        assert!(app.initialize_runtime());
        assert!(app.tokio_runtime.is_some());

        app.shutdown();
        assert!(app.tokio_runtime.is_none());
    }
}
