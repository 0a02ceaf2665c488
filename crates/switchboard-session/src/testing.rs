//! A recording [`PaneHost`] for tests.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use switchboard_common::SessionError;

use crate::host::{PaneHost, PaneSpec, PaneSurface};

#[derive(Debug, Default)]
struct HostLog {
    created: Vec<PaneSpec>,
    visible: BTreeSet<String>,
    dropped: Vec<String>,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FakeHost {
    log: Rc<RefCell<HostLog>>,
    fail_for: Option<String>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that refuses to build the pane for `service_id`.
    pub fn failing_for(service_id: &str) -> Self {
        Self {
            fail_for: Some(service_id.to_string()),
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<PaneSpec> {
        self.log.borrow().created.clone()
    }

    pub fn created_ids(&self) -> Vec<String> {
        self.log
            .borrow()
            .created
            .iter()
            .map(|spec| spec.service_id.clone())
            .collect()
    }

    pub fn visible(&self) -> Vec<String> {
        self.log.borrow().visible.iter().cloned().collect()
    }

    pub fn dropped(&self) -> Vec<String> {
        self.log.borrow().dropped.clone()
    }

    /// Surfaces created and not yet dropped.
    pub fn live_count(&self) -> usize {
        let log = self.log.borrow();
        log.created.len() - log.dropped.len()
    }
}

#[derive(Debug)]
pub(crate) struct FakeSurface {
    frame_id: String,
    log: Rc<RefCell<HostLog>>,
}

impl PaneSurface for FakeSurface {
    fn set_active(&mut self, active: bool) -> Result<(), SessionError> {
        let mut log = self.log.borrow_mut();
        if active {
            log.visible.insert(self.frame_id.clone());
        } else {
            log.visible.remove(&self.frame_id);
        }
        Ok(())
    }
}

impl Drop for FakeSurface {
    fn drop(&mut self) {
        let mut log = self.log.borrow_mut();
        log.visible.remove(&self.frame_id);
        log.dropped.push(self.frame_id.clone());
    }
}

impl PaneHost for FakeHost {
    type Surface = FakeSurface;

    fn create_pane(&mut self, spec: &PaneSpec) -> Result<FakeSurface, SessionError> {
        if self.fail_for.as_deref() == Some(spec.service_id.as_str()) {
            return Err(SessionError::Host(format!(
                "cannot create {}",
                spec.frame_id
            )));
        }
        self.log.borrow_mut().created.push(spec.clone());
        Ok(FakeSurface {
            frame_id: spec.frame_id.clone(),
            log: Rc::clone(&self.log),
        })
    }
}
