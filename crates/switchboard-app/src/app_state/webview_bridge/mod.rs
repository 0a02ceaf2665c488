//! Bridge between the session and the views.
//!
//! Handles coordinate conversion, IPC message dispatch, and routing view
//! events (titles, page loads) into the session.

pub mod bounds;
mod ipc_dispatch;
mod lifecycle;
mod settings_handlers;
mod sidebar_handlers;
