//! Per-service rules: id charset and uniqueness, URL shape, count pattern.

use std::collections::HashMap;

use url::Url;

use crate::schema::SETTINGS_ID;

use super::helpers::push;
use super::ValidationError;

/// Schemes a pane may be pointed at.
const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Check that a service id can be used in element ids and partition names.
pub(crate) fn check_service_id(errors: &mut Vec<ValidationError>, path: &str, id: &str) {
    if id.is_empty() {
        push(errors, path, "service id must not be empty");
        return;
    }
    if id == SETTINGS_ID {
        push(errors, path, format!("service id `{SETTINGS_ID}` is reserved"));
    }
    if let Some(bad) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        push(
            errors,
            path,
            format!("service id `{id}` contains `{bad}` (allowed: letters, digits, `-`, `_`, `.`)"),
        );
    }
}

/// Check that `raw` is an absolute http(s) URL with a host.
pub(crate) fn check_url(errors: &mut Vec<ValidationError>, path: &str, raw: &str) {
    if raw.trim().is_empty() {
        push(errors, path, "url must not be empty");
        return;
    }

    match Url::parse(raw) {
        Ok(url) => {
            if !ALLOWED_SCHEMES.contains(&url.scheme()) {
                push(
                    errors,
                    path,
                    format!(
                        "`{raw}` uses unsupported scheme `{}` (expected http or https)",
                        url.scheme()
                    ),
                );
            } else if url.host_str().map_or(true, str::is_empty) {
                push(errors, path, format!("`{raw}` has no host"));
            }
        }
        Err(e) => push(errors, path, format!("`{raw}` is not an absolute URL: {e}")),
    }
}

/// Check that a count pattern compiles and has a capture group to read.
pub(crate) fn check_count_regex(errors: &mut Vec<ValidationError>, path: &str, pattern: &str) {
    match regex::Regex::new(pattern) {
        Ok(re) if re.captures_len() < 2 => {
            push(
                errors,
                path,
                format!("`{pattern}` has no capture group for the count"),
            );
        }
        Ok(_) => {}
        Err(e) => push(errors, path, format!("`{pattern}` does not compile: {e}")),
    }
}

/// Tracks service ids across groups; panes and storage partitions are keyed
/// by service id alone, so an id may only appear once in the whole inbox.
#[derive(Debug, Default)]
pub(crate) struct IdTracker {
    seen: HashMap<String, String>,
}

impl IdTracker {
    pub(crate) fn record(
        &mut self,
        errors: &mut Vec<ValidationError>,
        path: &str,
        service_id: &str,
        group_id: &str,
    ) {
        match self.seen.get(service_id) {
            Some(first) => push(
                errors,
                path,
                format!("service id `{service_id}` is already used in group `{first}`"),
            ),
            None => {
                self.seen
                    .insert(service_id.to_string(), group_id.to_string());
            }
        }
    }
}
