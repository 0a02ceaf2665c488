//! The seam between the session and the embedded browser.
//!
//! A [`PaneHost`] builds one isolated browsing surface per service. Surfaces
//! start hidden; the session flips them with [`PaneSurface::set_active`] and
//! destroys them by dropping them.

use switchboard_common::SessionError;
use switchboard_config::Service;

use crate::ids;

/// Everything a host needs to build a service pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneSpec {
    pub service_id: String,
    /// `{id}-frame`.
    pub frame_id: String,
    /// Navigated to immediately on creation.
    pub url: String,
    /// `persist:{id}`; storage must never be shared between partitions.
    pub partition: String,
    pub user_agent: String,
}

impl PaneSpec {
    pub fn for_service(service_id: &str, service: &Service, user_agent: &str) -> Self {
        Self {
            service_id: service_id.to_string(),
            frame_id: ids::frame_id(service_id),
            url: service.url.clone(),
            partition: ids::partition_key(service_id),
            user_agent: user_agent.to_string(),
        }
    }
}

/// A live browsing surface owned by a pane.
pub trait PaneSurface {
    /// Show the surface and mark it active, or hide it and clear the marker.
    fn set_active(&mut self, active: bool) -> Result<(), SessionError>;
}

/// Factory for pane surfaces.
pub trait PaneHost {
    type Surface: PaneSurface;

    /// Create a hidden surface bound to `spec.partition`, identified by
    /// `spec.user_agent`, already navigating to `spec.url`.
    fn create_pane(&mut self, spec: &PaneSpec) -> Result<Self::Surface, SessionError>;
}
