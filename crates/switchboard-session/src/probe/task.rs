//! The periodic probe task.

use std::sync::mpsc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use super::CountPattern;

/// Badge text produced by one probe tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeUpdate {
    pub service_id: String,
    pub text: String,
}

/// Owns a running probe. Dropping it stops the probe.
#[derive(Debug)]
pub struct ProbeHandle {
    task: JoinHandle<()>,
}

impl ProbeHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for ProbeHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Shortest period a probe will tick at.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Start a probe that ticks every `period`, the first tick immediately.
///
/// Each tick reads the latest value of `titles` and sends the extracted
/// badge on `updates`. The probe stops on its own once the title sender
/// (the pane) is gone or nobody receives updates any more.
pub fn spawn_probe(
    runtime: &Handle,
    service_id: String,
    pattern: CountPattern,
    mut titles: watch::Receiver<String>,
    updates: mpsc::Sender<BadgeUpdate>,
    period: Duration,
) -> ProbeHandle {
    let task = runtime.spawn(async move {
        let mut ticker = tokio::time::interval(period.max(MIN_PERIOD));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            if titles.has_changed().is_err() {
                debug!(service = %service_id, "pane dropped, probe stopping");
                break;
            }

            let text = pattern.extract(&titles.borrow_and_update());
            let update = BadgeUpdate {
                service_id: service_id.clone(),
                text,
            };
            if updates.send(update).is_err() {
                debug!(service = %service_id, "badge receiver gone, probe stopping");
                break;
            }
        }
    });

    ProbeHandle { task }
}
