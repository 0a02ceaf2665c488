use wry::{WebContext, WebView};

/// A live view. Dropping it destroys the view, then its storage context.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    // Declared after `webview` so it is dropped after it.
    pub(super) _context: Option<WebContext>,
    pub(super) label: String,
}

impl WebViewHandle {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Send a typed IPC message to the page.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}
