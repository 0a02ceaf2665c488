use std::sync::{Arc, Mutex};

use tracing::{debug, trace, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// Which top-level navigations a view may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// Service panes: the open web.
    Web,
    /// Sidebar and settings: our own protocol only.
    Internal,
}

/// Prefixes a service pane may navigate to.
pub const WEB_NAV_PREFIXES: &[&str] = &["https://", "http://", "about:blank"];

/// Prefixes an internal view may navigate to.
pub const INTERNAL_NAV_PREFIXES: &[&str] = &[
    "switchboard://",
    // WebView2 rewrites switchboard://localhost/… to http://switchboard.localhost/…
    "http://switchboard.localhost/",
    "about:blank",
];

impl NavigationPolicy {
    pub fn allows(self, url: &str) -> bool {
        let prefixes = match self {
            Self::Web => WEB_NAV_PREFIXES,
            Self::Internal => INTERNAL_NAV_PREFIXES,
        };
        prefixes.iter().any(|prefix| url.starts_with(prefix))
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

type EventQueue = Arc<Mutex<Vec<WebViewEvent>>>;

fn push(events: &EventQueue, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventQueue,
        view: String,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(view = %view, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(view = %view, body_len = body.len(), "IPC message from JS");
            push(
                &events,
                WebViewEvent::IpcMessage {
                    view: view.clone(),
                    body,
                },
            );
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventQueue,
        view: String,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(view = %view, ?state, url = %url, "page load");
            push(
                &events,
                WebViewEvent::PageLoad {
                    view: view.clone(),
                    state,
                    url,
                },
            );
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventQueue,
        view: String,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            trace!(view = %view, title = %title, "title changed");
            push(
                &events,
                WebViewEvent::TitleChanged {
                    view: view.clone(),
                    title,
                },
            );
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventQueue,
        view: String,
        policy: NavigationPolicy,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if policy.allows(&url) {
                return true;
            }
            warn!(view = %view, url = %url, ?policy, "navigation blocked");
            push(
                &events,
                WebViewEvent::NavigationBlocked {
                    view: view.clone(),
                    url,
                },
            );
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_policy_allows_http_and_https() {
        let policy = NavigationPolicy::Web;
        assert!(policy.allows("https://gmail.com/"));
        assert!(policy.allows("https://acuitykm.slack.com/messages"));
        assert!(policy.allows("http://intranet.local/"));
        assert!(policy.allows("about:blank"));
    }

    #[test]
    fn web_policy_blocks_local_schemes() {
        let policy = NavigationPolicy::Web;
        assert!(!policy.allows("file:///etc/passwd"));
        assert!(!policy.allows("javascript:alert(1)"));
        assert!(!policy.allows("data:text/html,<h1>x</h1>"));
        assert!(!policy.allows("switchboard://localhost/settings.html"));
        assert!(!policy.allows(""));
    }

    #[test]
    fn internal_policy_allows_only_our_pages() {
        let policy = NavigationPolicy::Internal;
        assert!(policy.allows("switchboard://localhost/sidebar.html"));
        assert!(policy.allows("http://switchboard.localhost/settings.html"));
        assert!(policy.allows("about:blank"));

        assert!(!policy.allows("https://gmail.com/"));
        assert!(!policy.allows("http://switchboard.localhost.evil.com/"));
        assert!(!policy.allows("file:///etc/hosts"));
    }
}
