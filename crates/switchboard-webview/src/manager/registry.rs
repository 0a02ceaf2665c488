use std::collections::BTreeMap;

use tracing::debug;
use wry::raw_window_handle;

use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Views owned by label, on top of a [`WebViewManager`].
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: BTreeMap<String, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: BTreeMap::new(),
        }
    }

    pub fn manager(&self) -> &WebViewManager {
        &self.manager
    }

    /// Create a view and register it under `label`, replacing any view
    /// already registered there.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        label: &str,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(label, window, bounds, config)?;
        self.handles.insert(label.to_string(), handle);
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&WebViewHandle> {
        self.handles.get(label)
    }

    pub fn destroy(&mut self, label: &str) -> bool {
        if self.handles.remove(label).is_some() {
            debug!(view = label, "WebView destroyed");
            self.manager.push_event(WebViewEvent::Closed {
                view: label.to_string(),
            });
            true
        } else {
            false
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.handles.keys().cloned().collect()
    }

    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    pub fn destroy_all(&mut self) {
        for label in self.labels() {
            self.destroy(&label);
        }
    }
}
