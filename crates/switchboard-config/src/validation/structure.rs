//! Structural walk over raw JSON.
//!
//! Wrong shapes are reported rather than coerced; there is no field-level
//! recovery. Service values that do have the right shape are also checked
//! semantically so one pass reports everything.

use serde_json::{Map, Value};

use super::helpers::{kind, push};
use super::service::{self, IdTracker};
use super::{ValidationError, ROOT_PATH};

pub(super) fn validate_shape(errors: &mut Vec<ValidationError>, candidate: &Value) {
    let Some(root) = candidate.as_object() else {
        push(
            errors,
            ROOT_PATH,
            format!(
                "expected an object with a `groups` key, found {}",
                kind(candidate)
            ),
        );
        return;
    };

    let groups = match root.get("groups") {
        Some(Value::Object(groups)) => groups,
        Some(other) => {
            push(
                errors,
                "groups",
                format!("expected an object, found {}", kind(other)),
            );
            return;
        }
        None => {
            push(errors, "groups", "missing required key");
            return;
        }
    };

    let mut ids = IdTracker::default();
    for (group_id, group) in groups {
        walk_group(errors, &mut ids, group_id, group);
    }
}

fn walk_group(errors: &mut Vec<ValidationError>, ids: &mut IdTracker, group_id: &str, group: &Value) {
    let path = format!("groups.{group_id}");
    let Some(group) = group.as_object() else {
        push(
            errors,
            &path,
            format!("expected an object, found {}", kind(group)),
        );
        return;
    };

    expect_string(errors, group, &path, "display_name");

    // A group without `services` is an empty group.
    let services = match group.get("services") {
        None => return,
        Some(Value::Object(services)) => services,
        Some(other) => {
            push(
                errors,
                &format!("{path}.services"),
                format!("expected an object, found {}", kind(other)),
            );
            return;
        }
    };

    for (service_id, svc) in services {
        let svc_path = format!("{path}.services.{service_id}");
        service::check_service_id(errors, &svc_path, service_id);
        ids.record(errors, &svc_path, service_id, group_id);
        walk_service(errors, &svc_path, svc);
    }
}

fn walk_service(errors: &mut Vec<ValidationError>, path: &str, svc: &Value) {
    let Some(svc) = svc.as_object() else {
        push(
            errors,
            path,
            format!("expected an object, found {}", kind(svc)),
        );
        return;
    };

    if let Some(url) = expect_string(errors, svc, path, "url") {
        service::check_url(errors, &format!("{path}.url"), url);
    }
    expect_string(errors, svc, path, "icon");

    match svc.get("countRegex") {
        None | Some(Value::Null) => {}
        Some(Value::String(pattern)) => {
            service::check_count_regex(errors, &format!("{path}.countRegex"), pattern);
        }
        Some(other) => push(
            errors,
            &format!("{path}.countRegex"),
            format!("expected a string, found {}", kind(other)),
        ),
    }
}

/// Require `key` to be a string field of `object`, returning it if so.
fn expect_string<'a>(
    errors: &mut Vec<ValidationError>,
    object: &'a Map<String, Value>,
    path: &str,
    key: &str,
) -> Option<&'a str> {
    let field = format!("{path}.{key}");
    match object.get(key) {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(other) => {
            push(
                errors,
                &field,
                format!("expected a string, found {}", kind(other)),
            );
            None
        }
        None => {
            push(errors, &field, "missing required key");
            None
        }
    }
}
