//! Application state: window, views, session, event loop integration.

mod core;
mod event_handler;
mod host;
mod init;
mod layout;
mod pages;
mod polling;
mod shutdown;
mod types;
mod webview_bridge;

pub use core::SwitchboardApp;
