//! The application session: one run's worth of panes and selectors.
//!
//! Everything that used to be ambient (the active pane, the probe timers)
//! is owned here and torn down together.

mod badges;
mod lifecycle;
mod selection;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::sync::mpsc;
use std::time::Duration;

use switchboard_config::shell::{
    DEFAULT_PROBE_INTERVAL_MS, DEFAULT_USER_AGENT, PROBE_INTERVAL_MS_RANGE,
};
use switchboard_config::{InboxConfig, ShellSettings};
use tokio::runtime::Handle;
use tracing::warn;

use crate::host::PaneHost;
use crate::pane::Pane;
use crate::probe::BadgeUpdate;
use crate::registry::SelectorRegistry;
use crate::selector::Selection;

/// Tunables a session is started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub probe_interval: Duration,
    pub user_agent: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            probe_interval: Duration::from_millis(DEFAULT_PROBE_INTERVAL_MS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SessionOptions {
    /// Out-of-range values fall back to the defaults; shell.toml is only
    /// warned about when it is loaded.
    pub fn from_shell(shell: &ShellSettings) -> Self {
        let mut options = Self::default();

        let interval_ms = shell.probe.interval_ms;
        if PROBE_INTERVAL_MS_RANGE.contains(&interval_ms) {
            options.probe_interval = Duration::from_millis(interval_ms);
        } else {
            warn!(
                interval_ms,
                fallback_ms = DEFAULT_PROBE_INTERVAL_MS,
                "probe interval out of range"
            );
        }

        let user_agent = shell.browser.user_agent.trim();
        if user_agent.is_empty() {
            warn!("empty user agent, using the built-in one");
        } else {
            options.user_agent = user_agent.to_string();
        }
        options
    }
}

/// Changes the views need to mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SelectionChanged {
        previous: Option<Selection>,
        current: Selection,
    },
    BadgeChanged {
        service_id: String,
        text: String,
    },
}

pub struct Session<H: PaneHost> {
    config: InboxConfig,
    host: H,
    options: SessionOptions,
    runtime: Handle,
    panes: BTreeMap<String, Pane<H::Surface>>,
    selectors: SelectorRegistry,
    badge_tx: mpsc::Sender<BadgeUpdate>,
    badge_rx: mpsc::Receiver<BadgeUpdate>,
    events: Vec<SessionEvent>,
}

impl<H: PaneHost> Session<H> {
    pub fn config(&self) -> &InboxConfig {
        &self.config
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn selectors(&self) -> &SelectorRegistry {
        &self.selectors
    }

    pub fn pane(&self, service_id: &str) -> Option<&Pane<H::Surface>> {
        self.panes.get(service_id)
    }

    pub fn panes(&self) -> impl Iterator<Item = &Pane<H::Surface>> {
        self.panes.values()
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }
}
