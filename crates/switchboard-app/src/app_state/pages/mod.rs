//! Pages for the internal views, served as in-memory overrides on the
//! `switchboard://` protocol.

pub mod settings;
pub mod sidebar;

use switchboard_webview::ContentProvider;

/// Register every internal page with `provider`.
pub fn register(provider: &mut ContentProvider) {
    provider.add_override(sidebar::SIDEBAR_PATH, "text/html", sidebar::SIDEBAR_HTML);
    provider.add_override(settings::SETTINGS_PATH, "text/html", settings::SETTINGS_HTML);
}
