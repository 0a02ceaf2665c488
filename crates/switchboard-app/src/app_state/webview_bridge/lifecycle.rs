//! View lifecycle: internal views, bounds, event routing.

use switchboard_session::ids::service_from_frame_id;
use switchboard_webview::{protocol_url, PageLoadState, WebViewConfig, WebViewEvent};

use crate::app_state::core::SwitchboardApp;
use crate::app_state::pages::{settings::SETTINGS_PATH, sidebar::SIDEBAR_PATH};
use crate::app_state::types::{SETTINGS_VIEW, SIDEBAR_VIEW};

use super::bounds::to_wry_rect;

impl SwitchboardApp {
    /// Create the sidebar and the (hidden) settings view.
    pub(in crate::app_state) fn create_internal_views(&mut self) {
        let (sidebar, content) = self.layout();
        let devtools = self.shell.browser.devtools;
        let (Some(window), Some(views)) = (&self.window, &mut self.views) else {
            tracing::warn!("Cannot create internal views: no window");
            return;
        };

        let internal = [
            (SIDEBAR_VIEW, SIDEBAR_PATH, sidebar, true),
            (SETTINGS_VIEW, SETTINGS_PATH, content, false),
        ];
        for (label, path, rect, visible) in internal {
            let config = WebViewConfig::internal(protocol_url(path))
                .with_visible(visible)
                .with_devtools(devtools);
            match views.create(label, window.as_ref(), to_wry_rect(&rect), config) {
                Ok(()) => tracing::info!(view = label, "internal view created"),
                Err(e) => tracing::error!(view = label, error = %e, "Failed to create view"),
            }
        }
        self.settings_visible = false;
    }

    /// Destroy the sidebar and settings views.
    pub(in crate::app_state) fn destroy_internal_views(&mut self) {
        if let Some(ref mut views) = self.views {
            views.destroy(SIDEBAR_VIEW);
            views.destroy(SETTINGS_VIEW);
        }
        self.settings_visible = false;
    }

    /// Place every view according to the current window layout.
    pub(in crate::app_state) fn sync_view_bounds(&mut self) {
        let (sidebar, content) = self.layout();

        if let Some(ref views) = self.views {
            for (label, rect) in [(SIDEBAR_VIEW, sidebar), (SETTINGS_VIEW, content)] {
                if let Some(handle) = views.get(label) {
                    if let Err(e) = handle.set_bounds(to_wry_rect(&rect)) {
                        tracing::warn!(view = label, error = %e, "Failed to update view bounds");
                    }
                }
            }
        }

        if let Some(ref mut switchboard) = self.switchboard {
            let session = switchboard.session_mut();
            session.host_mut().set_content_bounds(content);
            for pane in session.panes() {
                if let Err(e) = pane.surface().set_bounds(&content) {
                    tracing::warn!(
                        service = %pane.service_id(),
                        error = %e,
                        "Failed to update pane bounds"
                    );
                }
            }
        }
    }

    /// Process pending view events (IPC, page loads, title changes).
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events: Vec<WebViewEvent> = match &self.views {
            Some(views) => views.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { view, body } => {
                    self.handle_ipc_message(&view, &body);
                }
                WebViewEvent::TitleChanged { view, title } => {
                    if let Some(id) = service_from_frame_id(&view) {
                        if let Some(ref mut switchboard) = self.switchboard {
                            switchboard.session_mut().record_title(id, &title);
                        }
                    }
                }
                WebViewEvent::PageLoad { view, state, url } => {
                    tracing::debug!(view = %view, ?state, url = %url, "page load event");
                    if state != PageLoadState::Finished {
                        continue;
                    }
                    if let Some(id) = service_from_frame_id(&view) {
                        if let Some(ref mut switchboard) = self.switchboard {
                            if switchboard.session_mut().mark_ready(id) {
                                tracing::info!(service = %id, "pane ready, count probe attached");
                            }
                        }
                    }
                }
                WebViewEvent::NavigationBlocked { view, url } => {
                    tracing::debug!(view = %view, url = %url, "navigation blocked event");
                }
                WebViewEvent::Closed { view } => {
                    tracing::debug!(view = %view, "view closed event");
                }
            }
        }
    }
}
