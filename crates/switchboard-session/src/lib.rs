//! Pane orchestration for Switchboard.
//!
//! A [`Session`] turns an [`InboxConfig`](switchboard_config::InboxConfig)
//! into live panes (through a [`PaneHost`]), one selector per pane plus the
//! settings selector, keeps at most one of them active, and runs one unread
//! count probe per pane. [`Switchboard`] ties a session to the persisted
//! state store and implements the edit-validate-save-reload cycle.

pub mod host;
pub mod ids;
pub mod pane;
pub mod probe;
pub mod registry;
pub mod selector;
pub mod session;
pub mod switchboard;

#[cfg(test)]
pub(crate) mod testing;

pub use host::{PaneHost, PaneSpec, PaneSurface};
pub use pane::Pane;
pub use probe::{BadgeUpdate, CountPattern, ProbeHandle, DEFAULT_COUNT_PATTERN};
pub use registry::{SelectorRegistry, Transition};
pub use selector::{Rack, Selection, Selector};
pub use session::{Session, SessionEvent, SessionOptions};
pub use switchboard::{SubmitError, Switchboard};
