//! Inbox state validation.
//!
//! Untrusted input arrives as raw JSON and is checked structurally before
//! anything is deserialized; every violation is collected, none stops the
//! walk early. A candidate is either accepted whole or rejected whole.
//!
//! Shell settings validation lives in [`shell`] and follows the range-check
//! style used for numeric knobs.

mod helpers;
mod service;
pub mod shell;
mod structure;


use serde::Serialize;
use serde_json::Value;

use crate::schema::InboxConfig;

use service::IdTracker;

/// Path reported for problems with the document root itself.
pub const ROOT_PATH: &str = "state";

/// One violation found in a candidate inbox state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
    /// Dotted location of the offending value, e.g. `groups.work.services.mail.url`.
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Validate raw, untrusted data and convert it into an [`InboxConfig`].
///
/// Returns every violation found; the typed value is only produced when
/// there are none.
pub fn validate(candidate: &Value) -> Result<InboxConfig, Vec<ValidationError>> {
    let mut errors = Vec::new();
    structure::validate_shape(&mut errors, candidate);
    if !errors.is_empty() {
        return Err(errors);
    }

    serde_json::from_value(candidate.clone())
        .map_err(|e| vec![ValidationError::new(ROOT_PATH, e.to_string())])
}

/// Run the semantic rules on an already-typed config.
pub fn validate_config(config: &InboxConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut ids = IdTracker::default();

    for (group_id, group) in &config.groups {
        for (service_id, svc) in &group.services {
            let path = format!("groups.{group_id}.services.{service_id}");
            service::check_service_id(&mut errors, &path, service_id);
            ids.record(&mut errors, &path, service_id, group_id);
            service::check_url(&mut errors, &format!("{path}.url"), &svc.url);
            if let Some(pattern) = &svc.count_regex {
                service::check_count_regex(&mut errors, &format!("{path}.countRegex"), pattern);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Join violations into one user-facing report, one per line.
pub fn report(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
