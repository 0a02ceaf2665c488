//! WebView lifecycle management.
//!
//! `WebViewManager` builds `wry::WebView` instances as children of the main
//! window. Every view pushes its events into one shared queue that the
//! event loop drains.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use handlers::NavigationPolicy;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

/// Creates views and owns their event queue. Clones share the queue and
/// the content provider.
#[derive(Clone, Default)]
pub struct WebViewManager {
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
