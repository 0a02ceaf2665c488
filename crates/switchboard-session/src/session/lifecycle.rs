//! Session startup, rebuild and teardown.

use std::collections::BTreeMap;
use std::sync::mpsc;

use switchboard_config::{InboxConfig, SETTINGS_ID};
use tokio::runtime::Handle;
use tracing::{error, info, warn};

use super::{Session, SessionOptions};
use crate::host::{PaneHost, PaneSpec};
use crate::pane::Pane;
use crate::registry::SelectorRegistry;
use crate::selector::Selector;

impl<H: PaneHost> Session<H> {
    /// Build every pane and selector for `config`. Nothing is active yet.
    pub fn start(config: InboxConfig, host: H, options: SessionOptions, runtime: Handle) -> Self {
        let (badge_tx, badge_rx) = mpsc::channel();
        let mut session = Self {
            config,
            host,
            options,
            runtime,
            panes: BTreeMap::new(),
            selectors: SelectorRegistry::new(),
            badge_tx,
            badge_rx,
            events: Vec::new(),
        };
        session.build();
        session
    }

    /// Discard everything and build again from `config`.
    pub fn rebuild(&mut self, config: InboxConfig) {
        info!("rebuilding session");
        self.teardown();
        self.config = config;
        self.build();
    }

    /// Stop every probe and drop every pane.
    pub fn shutdown(&mut self) {
        info!(panes = self.panes.len(), "shutting down session");
        self.teardown();
    }

    fn build(&mut self) {
        for entry in self.config.services() {
            // Stored state is only warned about on load, so ids can still
            // clash with the settings selector or with each other here.
            if entry.service_id == SETTINGS_ID {
                warn!(group = %entry.group_id, "service id is reserved, skipping");
                continue;
            }
            if self.panes.contains_key(entry.service_id) {
                warn!(
                    service = %entry.service_id,
                    group = %entry.group_id,
                    "duplicate service id, skipping"
                );
                continue;
            }

            let spec = PaneSpec::for_service(entry.service_id, entry.service, &self.options.user_agent);
            let surface = match self.host.create_pane(&spec) {
                Ok(surface) => surface,
                Err(e) => {
                    error!(service = %entry.service_id, error = %e, "failed to create pane");
                    continue;
                }
            };
            info!(service = %entry.service_id, url = %spec.url, partition = %spec.partition, "pane created");

            let pane = Pane::new(spec, entry.service.count_regex.as_deref(), surface);
            self.panes.insert(entry.service_id.to_string(), pane);
            self.selectors
                .register(Selector::for_service(entry.service_id, entry.group, entry.service));
        }
        self.selectors.register(Selector::settings());

        info!(
            panes = self.panes.len(),
            selectors = self.selectors.len(),
            "session started"
        );
    }

    fn teardown(&mut self) {
        // Dropping a pane cancels its probe before the surface goes away.
        self.panes.clear();
        self.selectors.clear();
        self.events.clear();

        // Anything a dying probe managed to send belongs to the old panes.
        let (badge_tx, badge_rx) = mpsc::channel();
        self.badge_tx = badge_tx;
        self.badge_rx = badge_rx;
    }
}
