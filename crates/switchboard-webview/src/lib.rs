//! Embedded browser views for Switchboard.
//!
//! Wraps the `wry` crate to provide:
//! - one managed view per service pane, each in its own storage partition
//! - the sidebar and settings views
//! - bidirectional IPC (Rust <-> JavaScript)
//! - the `switchboard://` protocol serving icons and bundled pages
//! - a shared event queue (page load, title change, IPC)

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod partition;

pub use content::{protocol_url, ContentProvider, PROTOCOL};
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{NavigationPolicy, WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
