//! Inbox state schema: groups of services.
//!
//! Field names match the persisted JSON (`display_name`, `countRegex`).
//! Maps are ordered by key so serialization is deterministic.

mod defaults;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selector id reserved for the settings entry in the sidebar.
pub const SETTINGS_ID: &str = "settings";

/// One web service rendered in its own pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Absolute URL the pane navigates to on creation.
    pub url: String,
    /// Path of the selector icon, relative to the assets directory.
    pub icon: String,
    /// Pattern with one capture group extracting the unread count from the
    /// page title. The default pattern is used when absent.
    #[serde(
        rename = "countRegex",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub count_regex: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceGroup {
    pub display_name: String,
    #[serde(default)]
    pub services: BTreeMap<String, Service>,
}

/// Root inbox state. Either fully valid or rejected wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxConfig {
    pub groups: BTreeMap<String, ServiceGroup>,
}

/// A service together with the ids that locate it in the config.
#[derive(Debug, Clone, Copy)]
pub struct ServiceEntry<'a> {
    pub group_id: &'a str,
    pub group: &'a ServiceGroup,
    pub service_id: &'a str,
    pub service: &'a Service,
}

impl InboxConfig {
    /// An inbox with no groups.
    pub fn empty() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Every service in group-id then service-id order.
    pub fn services(&self) -> impl Iterator<Item = ServiceEntry<'_>> {
        self.groups.iter().flat_map(|(group_id, group)| {
            group
                .services
                .iter()
                .map(move |(service_id, service)| ServiceEntry {
                    group_id: group_id.as_str(),
                    group,
                    service_id: service_id.as_str(),
                    service,
                })
        })
    }

    /// Look up a service by id across all groups.
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.groups
            .values()
            .find_map(|group| group.services.get(id))
    }

    pub fn service_count(&self) -> usize {
        self.groups.values().map(|g| g.services.len()).sum()
    }
}

impl Default for InboxConfig {
    fn default() -> Self {
        defaults::builtin()
    }
}
