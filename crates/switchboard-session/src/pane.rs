//! One live service pane.

use std::sync::mpsc;
use std::time::Duration;

use switchboard_common::SessionError;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::host::{PaneSpec, PaneSurface};
use crate::probe::{spawn_probe, BadgeUpdate, CountPattern, ProbeHandle};

/// A host surface plus the bookkeeping the session keeps for it.
///
/// The latest page title lives in a watch channel so the probe can read it
/// from another thread without touching the surface.
pub struct Pane<S> {
    spec: PaneSpec,
    pattern: CountPattern,
    surface: S,
    title: watch::Sender<String>,
    probe: Option<ProbeHandle>,
    active: bool,
}

impl<S: PaneSurface> Pane<S> {
    pub fn new(spec: PaneSpec, count_regex: Option<&str>, surface: S) -> Self {
        let pattern = CountPattern::compile(count_regex);
        if let CountPattern::Invalid { pattern, reason } = &pattern {
            warn!(
                service = %spec.service_id,
                pattern = %pattern,
                reason = %reason,
                "count pattern does not compile, badge will stay empty"
            );
        }
        let (title, _) = watch::channel(String::new());
        Self {
            spec,
            pattern,
            surface,
            title,
            probe: None,
            active: false,
        }
    }

    pub fn spec(&self) -> &PaneSpec {
        &self.spec
    }

    pub fn service_id(&self) -> &str {
        &self.spec.service_id
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) -> Result<(), SessionError> {
        self.active = active;
        self.surface.set_active(active)
    }

    /// Latest title reported by the host.
    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn record_title(&self, title: &str) {
        self.title.send_replace(title.to_string());
    }

    pub fn has_probe(&self) -> bool {
        self.probe.is_some()
    }

    /// Start the count probe. Only the first call has any effect.
    pub fn attach_probe(
        &mut self,
        runtime: &Handle,
        updates: mpsc::Sender<BadgeUpdate>,
        period: Duration,
    ) -> bool {
        if self.probe.is_some() {
            return false;
        }
        debug!(service = %self.spec.service_id, ?period, "attaching count probe");
        self.probe = Some(spawn_probe(
            runtime,
            self.spec.service_id.clone(),
            self.pattern.clone(),
            self.title.subscribe(),
            updates,
            period,
        ));
        true
    }
}

impl<S> Drop for Pane<S> {
    fn drop(&mut self) {
        if let Some(probe) = self.probe.take() {
            probe.cancel();
        }
    }
}
