//! IPC message validation and dispatch from the internal views.

use switchboard_webview::IpcMessage;

use crate::app_state::core::SwitchboardApp;
use crate::app_state::types::{SETTINGS_VIEW, SIDEBAR_VIEW};

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds, each with the only view allowed to send it.
const ALLOWED_IPC_KINDS: &[(&str, &str)] = &[
    ("sidebar_ready", SIDEBAR_VIEW),
    ("select", SIDEBAR_VIEW),
    ("settings_ready", SETTINGS_VIEW),
    ("settings_submit", SETTINGS_VIEW),
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.iter().any(|(k, _)| *k == kind)
}

/// Whether `view` may send messages of `kind`.
pub fn is_ipc_source_allowed(kind: &str, view: &str) -> bool {
    ALLOWED_IPC_KINDS
        .iter()
        .any(|(k, source)| *k == kind && *source == view)
}

// =============================================================================
// DISPATCH
// =============================================================================

impl SwitchboardApp {
    /// Handle a single IPC message from a view.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, view: &str, body: &str) {
        let Some(msg) = IpcMessage::from_json(body) else {
            tracing::warn!(
                view,
                body_len = body.len(),
                "IPC message rejected: failed to parse"
            );
            return;
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(view, kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        }
        if !is_ipc_source_allowed(&msg.kind, view) {
            tracing::warn!(view, kind = %msg.kind, "IPC message rejected: wrong source view");
            return;
        }

        tracing::debug!(view, kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "sidebar_ready" => self.push_sidebar_state(),
            "select" => self.handle_select(&msg.payload),
            "settings_ready" => self.push_settings_document(),
            "settings_submit" => self.handle_settings_submit(&msg.payload),
            _ => {
                tracing::warn!(view, kind = %msg.kind, "Unhandled IPC kind");
            }
        }
    }

    /// Send a message to one of the internal views, if it exists.
    pub(in crate::app_state) fn send_to_view(
        &self,
        view: &str,
        kind: &str,
        payload: &serde_json::Value,
    ) {
        let Some(handle) = self.views.as_ref().and_then(|v| v.get(view)) else {
            tracing::debug!(view, kind, "IPC send skipped: view not open");
            return;
        };
        if let Err(e) = handle.send_ipc(kind, payload) {
            tracing::warn!(view, kind, error = %e, "Failed to send IPC message");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
