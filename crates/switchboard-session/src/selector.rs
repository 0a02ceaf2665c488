//! Sidebar selectors.

use serde::Serialize;
use switchboard_config::{ServiceGroup, Service, SETTINGS_ID};

use crate::ids;

/// Icon of the settings selector, relative to the assets directory.
pub const SETTINGS_ICON: &str = "./logos/icons8-settings-24.png";

/// Which part of the sidebar a selector sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rack {
    Top,
    Bottom,
}

/// A clickable sidebar entry: one per service, plus settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    pub id: String,
    /// Element id in the sidebar view.
    pub element_id: String,
    pub icon: String,
    /// Tooltip; the group display name for service selectors.
    pub label: String,
    pub rack: Rack,
    /// Unread badge; always empty for the settings selector.
    pub badge: String,
    pub active: bool,
}

impl Selector {
    pub fn for_service(service_id: &str, group: &ServiceGroup, service: &Service) -> Self {
        Self {
            id: service_id.to_string(),
            element_id: ids::selector_id(service_id),
            icon: service.icon.clone(),
            label: group.display_name.clone(),
            rack: Rack::Top,
            badge: String::new(),
            active: false,
        }
    }

    pub fn settings() -> Self {
        Self {
            id: SETTINGS_ID.to_string(),
            element_id: ids::selector_id(SETTINGS_ID),
            icon: SETTINGS_ICON.to_string(),
            label: "Settings".to_string(),
            rack: Rack::Bottom,
            badge: String::new(),
            active: false,
        }
    }

    pub fn is_settings(&self) -> bool {
        self.id == SETTINGS_ID
    }
}

/// What the main area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Service(String),
    Settings,
}

impl Selection {
    pub fn from_id(id: &str) -> Self {
        if id == SETTINGS_ID {
            Self::Settings
        } else {
            Self::Service(id.to_string())
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Service(id) => id,
            Self::Settings => SETTINGS_ID,
        }
    }
}
