//! Settings IPC handlers: raw inbox edit, validate, save, full reload.

use switchboard_session::SubmitError;
use switchboard_webview::IpcPayload;

use crate::app_state::core::SwitchboardApp;
use crate::app_state::pages::settings::{document_payload, rejection_payload};
use crate::app_state::types::SETTINGS_VIEW;

impl SwitchboardApp {
    /// Handle `settings_ready`: send the running inbox as text.
    pub(in crate::app_state) fn push_settings_document(&mut self) {
        let Some(ref switchboard) = self.switchboard else {
            return;
        };
        let payload = document_payload(&switchboard.settings_document());
        self.send_to_view(SETTINGS_VIEW, "settings_document", &payload);
    }

    /// Handle `settings_submit`: apply the edited document.
    ///
    /// A rejected edit leaves everything running and reports the problems
    /// back to the page. An accepted one is saved and the whole window is
    /// rebuilt from the store.
    pub(in crate::app_state) fn handle_settings_submit(&mut self, payload: &IpcPayload) {
        let Some(text) = payload.field("text").or_else(|| payload.as_text()) else {
            tracing::warn!("settings_submit: missing 'text'");
            return;
        };
        let Some(ref mut switchboard) = self.switchboard else {
            return;
        };

        match switchboard.submit_settings(text) {
            Ok(()) => {
                tracing::info!("Settings applied");
                self.reload_views();
            }
            Err(SubmitError::Rejected(rejection)) => {
                self.send_to_view(
                    SETTINGS_VIEW,
                    "settings_rejected",
                    &rejection_payload(&rejection.report()),
                );
            }
            Err(e @ SubmitError::Persist(_)) => {
                tracing::error!(error = %e, "Failed to save settings");
                self.send_to_view(
                    SETTINGS_VIEW,
                    "settings_rejected",
                    &rejection_payload(&e.to_string()),
                );
            }
        }
    }

    /// Recreate the internal views after a reload. They ask for fresh
    /// state once their pages load.
    fn reload_views(&mut self) {
        self.destroy_internal_views();
        self.create_internal_views();
        self.sync_view_bounds();
    }
}
