//! Raw-text settings editing.
//!
//! The settings view shows the inbox state as pretty JSON and hands the
//! edited text back. [`apply_edit`] decides, without touching any state,
//! whether that text replaces the current inbox.

use serde::Serialize;
use tracing::debug;

use crate::schema::InboxConfig;
use crate::validation::{self, ValidationError};

/// Outcome of submitting edited settings text.
#[derive(Debug, Clone, PartialEq)]
pub enum EditResult {
    /// The text is a valid inbox and should replace the current one.
    Applied(InboxConfig),
    /// The text was refused; the current inbox stays as it is.
    Rejected(EditRejection),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditRejection {
    /// Not well-formed JSON.
    Malformed(String),
    /// Well-formed JSON that is not a valid inbox.
    Invalid(Vec<ValidationError>),
}

impl EditRejection {
    /// Text shown to the user.
    pub fn report(&self) -> String {
        match self {
            Self::Malformed(reason) => format!("malformed settings: {reason}"),
            Self::Invalid(errors) => format!(
                "settings rejected ({} problem{}):\n{}",
                errors.len(),
                if errors.len() == 1 { "" } else { "s" },
                validation::report(errors)
            ),
        }
    }

    pub fn violations(&self) -> &[ValidationError] {
        match self {
            Self::Malformed(_) => &[],
            Self::Invalid(errors) => errors,
        }
    }
}

/// Render the inbox as the editable document: JSON with a 4-space indent.
pub fn settings_document(config: &InboxConfig) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    match config.serialize(&mut ser) {
        Ok(()) => String::from_utf8(buf).unwrap_or_default(),
        Err(e) => format!("{{\"error\": \"failed to serialize state: {e}\"}}"),
    }
}

/// Parse and validate submitted settings text.
pub fn apply_edit(raw: &str, current: &InboxConfig) -> EditResult {
    let candidate: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => return EditResult::Rejected(EditRejection::Malformed(e.to_string())),
    };

    match validation::validate(&candidate) {
        Ok(config) => {
            debug!(
                services_before = current.service_count(),
                services_after = config.service_count(),
                unchanged = config == *current,
                "settings edit accepted"
            );
            EditResult::Applied(config)
        }
        Err(errors) => EditResult::Rejected(EditRejection::Invalid(errors)),
    }
}
