//! Title reports, probe attachment and badge updates.

use switchboard_config::SETTINGS_ID;
use tracing::{debug, trace};

use super::{Session, SessionEvent};
use crate::host::PaneHost;

impl<H: PaneHost> Session<H> {
    /// Store the latest title a pane reported. Unknown ids are ignored.
    pub fn record_title(&mut self, service_id: &str, title: &str) {
        match self.panes.get(service_id) {
            Some(pane) => {
                trace!(service = %service_id, title, "title changed");
                pane.record_title(title);
            }
            None => debug!(service = %service_id, "title for unknown pane ignored"),
        }
    }

    /// The pane finished its initial navigation; attach its probe.
    ///
    /// Returns true only the first time for a given pane.
    pub fn mark_ready(&mut self, service_id: &str) -> bool {
        let Some(pane) = self.panes.get_mut(service_id) else {
            debug!(service = %service_id, "ready signal for unknown pane ignored");
            return false;
        };
        pane.attach_probe(
            &self.runtime,
            self.badge_tx.clone(),
            self.options.probe_interval,
        )
    }

    /// Apply every badge the probes produced since the last call and queue
    /// a [`SessionEvent::BadgeChanged`] for each one that differs. Returns
    /// the number of changed badges.
    pub fn poll_badges(&mut self) -> usize {
        let mut changed = 0;
        while let Ok(update) = self.badge_rx.try_recv() {
            if update.service_id == SETTINGS_ID {
                continue;
            }
            if self.selectors.set_badge(&update.service_id, &update.text) == Some(true) {
                debug!(service = %update.service_id, badge = %update.text, "badge changed");
                self.events.push(SessionEvent::BadgeChanged {
                    service_id: update.service_id,
                    text: update.text,
                });
                changed += 1;
            }
        }
        changed
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
