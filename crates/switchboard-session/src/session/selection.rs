//! Active selection.

use switchboard_common::SessionError;
use tracing::{debug, warn};

use super::{Session, SessionEvent};
use crate::host::{PaneHost, PaneSurface};
use crate::pane::Pane;
use crate::registry::Transition;
use crate::selector::Selection;

impl<H: PaneHost> Session<H> {
    /// Make `id` the single active selector, deactivating the previous pane
    /// before activating the new one.
    ///
    /// `settings` has no pane: selecting it only hides the previous pane.
    /// An unknown id is an error and leaves everything as it was.
    pub fn select(&mut self, id: &str) -> Result<Transition, SessionError> {
        let transition = self.selectors.select(id)?;
        if transition.is_noop() {
            debug!(selector = %id, "already active");
            return Ok(transition);
        }

        if let Some(previous) = transition.previous.as_deref() {
            if let Some(pane) = self.panes.get_mut(previous) {
                apply(pane, false);
            }
        }
        if let Some(pane) = self.panes.get_mut(id) {
            apply(pane, true);
        }

        debug!(previous = ?transition.previous, current = %id, "selection changed");
        self.events.push(SessionEvent::SelectionChanged {
            previous: transition.previous.as_deref().map(Selection::from_id),
            current: Selection::from_id(id),
        });
        Ok(transition)
    }

    /// The active selection, or `None` before the first click.
    pub fn selection(&self) -> Option<Selection> {
        self.selectors.active().map(|s| Selection::from_id(&s.id))
    }

    pub fn active_pane(&self) -> Option<&Pane<H::Surface>> {
        self.panes.values().find(|pane| pane.is_active())
    }
}

fn apply<S: PaneSurface>(pane: &mut Pane<S>, active: bool) {
    if let Err(e) = pane.set_active(active) {
        warn!(service = %pane.service_id(), active, error = %e, "surface visibility not applied");
    }
}
