//! Unread count probes.
//!
//! Each pane gets one periodic task that reads the pane's latest title and
//! extracts a badge with a [`CountPattern`]. This is a best-effort heuristic:
//! whatever the first capture group matched becomes the badge text.

mod pattern;
mod task;

pub use pattern::{CountPattern, DEFAULT_COUNT_PATTERN};
pub use task::{spawn_probe, BadgeUpdate, ProbeHandle};
