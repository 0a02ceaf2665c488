//! Sidebar IPC handlers and session event fan-out.

use switchboard_session::{Selection, SessionEvent};
use switchboard_webview::IpcPayload;

use crate::app_state::core::SwitchboardApp;
use crate::app_state::pages::sidebar::{badge_payload, selectors_payload};
use crate::app_state::types::{SETTINGS_VIEW, SIDEBAR_VIEW};

impl SwitchboardApp {
    /// Handle `select`: the user clicked a selector.
    pub(in crate::app_state) fn handle_select(&mut self, payload: &IpcPayload) {
        let Some(id) = payload.as_text() else {
            tracing::warn!("select: missing selector id");
            return;
        };
        let Some(ref mut switchboard) = self.switchboard else {
            return;
        };

        match switchboard.session_mut().select(id) {
            Ok(transition) if transition.is_noop() => {
                tracing::debug!(selector = %id, "select: already active");
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(selector = %id, error = %e, "select failed"),
        }
        self.poll_session();
    }

    /// Handle `sidebar_ready`: send the full selector list.
    pub(in crate::app_state) fn push_sidebar_state(&mut self) {
        let Some(ref switchboard) = self.switchboard else {
            return;
        };
        let payload = selectors_payload(switchboard.session().selectors());
        self.send_to_view(SIDEBAR_VIEW, "selectors", &payload);
    }

    /// Drain probe badges and session events into the views.
    pub(in crate::app_state) fn poll_session(&mut self) {
        let events = match self.switchboard {
            Some(ref mut switchboard) => {
                let session = switchboard.session_mut();
                session.poll_badges();
                session.drain_events()
            }
            None => return,
        };
        for event in events {
            self.apply_session_event(event);
        }
    }

    fn apply_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::SelectionChanged { previous, current } => {
                if let Some(previous) = previous {
                    let id = serde_json::json!(previous.id());
                    self.send_to_view(SIDEBAR_VIEW, "deactivate", &id);
                }
                let id = serde_json::json!(current.id());
                self.send_to_view(SIDEBAR_VIEW, "activate", &id);
                self.show_settings(current == Selection::Settings);
            }
            SessionEvent::BadgeChanged { service_id, text } => {
                self.send_to_view(SIDEBAR_VIEW, "badge", &badge_payload(&service_id, &text));
            }
        }
    }

    fn show_settings(&mut self, visible: bool) {
        if self.settings_visible == visible {
            return;
        }
        let Some(handle) = self.views.as_ref().and_then(|v| v.get(SETTINGS_VIEW)) else {
            return;
        };
        if let Err(e) = handle.set_visible(visible) {
            tracing::warn!(error = %e, "Failed to toggle settings view");
            return;
        }
        if visible {
            if let Err(e) = handle.focus() {
                tracing::debug!(error = %e, "Failed to focus settings view");
            }
        }
        self.settings_visible = visible;
    }
}
