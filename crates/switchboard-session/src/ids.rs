//! Identity strings derived from a service id.
//!
//! These are the names the views use for a service's pane, badge and
//! selector elements, and the key of its storage partition.

const FRAME_SUFFIX: &str = "-frame";

/// Pane identity: `{id}-frame`.
pub fn frame_id(service_id: &str) -> String {
    format!("{service_id}{FRAME_SUFFIX}")
}

/// Badge element identity: `{id}-count`.
pub fn badge_id(service_id: &str) -> String {
    format!("{service_id}-count")
}

/// Selector element identity: `{id}-selector`.
pub fn selector_id(service_id: &str) -> String {
    format!("{service_id}-selector")
}

/// Storage partition key: `persist:{id}`.
pub fn partition_key(service_id: &str) -> String {
    format!("persist:{service_id}")
}

/// Recover the service id from a pane identity.
pub fn service_from_frame_id(frame_id: &str) -> Option<&str> {
    frame_id
        .strip_suffix(FRAME_SUFFIX)
        .filter(|id| !id.is_empty())
}
