//! Selector registry: the sidebar's model.
//!
//! Holds every selector in sidebar order and enforces that at most one of
//! them is active at any time.


use switchboard_common::SessionError;

use crate::selector::{Rack, Selector};

/// The outcome of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub previous: Option<String>,
    pub current: String,
}

impl Transition {
    /// Selecting the already-active selector changes nothing.
    pub fn is_noop(&self) -> bool {
        self.previous.as_deref() == Some(self.current.as_str())
    }
}

#[derive(Debug, Default)]
pub struct SelectorRegistry {
    selectors: Vec<Selector>,
}

impl SelectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a selector. Top-rack selectors keep insertion order ahead of the
    /// bottom rack. Returns false if the id is already registered.
    pub fn register(&mut self, selector: Selector) -> bool {
        if self.get(&selector.id).is_some() {
            return false;
        }
        let at = match selector.rack {
            Rack::Top => self
                .selectors
                .iter()
                .position(|s| s.rack == Rack::Bottom)
                .unwrap_or(self.selectors.len()),
            Rack::Bottom => self.selectors.len(),
        };
        self.selectors.insert(at, selector);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Selector> {
        self.selectors.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selector> {
        self.selectors.iter()
    }

    pub fn rack(&self, rack: Rack) -> impl Iterator<Item = &Selector> {
        self.selectors.iter().filter(move |s| s.rack == rack)
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn active(&self) -> Option<&Selector> {
        self.selectors.iter().find(|s| s.active)
    }

    pub fn active_count(&self) -> usize {
        self.selectors.iter().filter(|s| s.active).count()
    }

    /// Make `id` the only active selector. An unknown id changes nothing.
    pub fn select(&mut self, id: &str) -> Result<Transition, SessionError> {
        if self.get(id).is_none() {
            return Err(SessionError::UnknownSelector(id.to_string()));
        }
        let previous = self.active().map(|s| s.id.clone());
        for selector in &mut self.selectors {
            selector.active = selector.id == id;
        }
        Ok(Transition {
            previous,
            current: id.to_string(),
        })
    }

    /// Set a badge. `Some(true)` if the text changed, `Some(false)` if it
    /// was already that, `None` if the selector is unknown.
    pub fn set_badge(&mut self, id: &str, text: &str) -> Option<bool> {
        let selector = self.selectors.iter_mut().find(|s| s.id == id)?;
        if selector.badge == text {
            return Some(false);
        }
        selector.badge = text.to_string();
        Some(true)
    }

    pub fn clear(&mut self) {
        self.selectors.clear();
    }
}
