//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by views, keyed by the view's label.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    PageLoad {
        view: String,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        view: String,
        title: String,
    },
    /// A JSON message posted through the IPC bridge.
    IpcMessage {
        view: String,
        body: String,
    },
    /// A navigation refused by the view's [`NavigationPolicy`](crate::NavigationPolicy).
    NavigationBlocked {
        view: String,
        url: String,
    },
    Closed {
        view: String,
    },
}

impl WebViewEvent {
    pub fn view(&self) -> &str {
        match self {
            Self::PageLoad { view, .. }
            | Self::TitleChanged { view, .. }
            | Self::IpcMessage { view, .. }
            | Self::NavigationBlocked { view, .. }
            | Self::Closed { view } => view,
        }
    }
}
