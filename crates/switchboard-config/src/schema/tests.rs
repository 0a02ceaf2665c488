use super::*;

#[test]
fn default_has_two_groups() {
    let config = InboxConfig::default();
    let ids: Vec<&str> = config.groups.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["feather", "personal"]);
    assert_eq!(config.groups["feather"].display_name, "FeatherDocs");
    assert_eq!(config.groups["personal"].display_name, "Personal");
}

#[test]
fn default_services_in_order() {
    let config = InboxConfig::default();
    let ids: Vec<&str> = config.services().map(|e| e.service_id).collect();
    assert_eq!(ids, vec!["gmail", "slack", "whatsapp"]);
    assert_eq!(config.service_count(), 3);
}

#[test]
fn default_gmail_has_custom_pattern() {
    let config = InboxConfig::default();
    let gmail = config.service("gmail").unwrap();
    assert_eq!(gmail.count_regex.as_deref(), Some(r"Inbox \(([0-9]+)\)"));
    assert!(config.service("slack").unwrap().count_regex.is_none());
}

#[test]
fn service_lookup_misses() {
    let config = InboxConfig::default();
    assert!(config.service("outlook").is_none());
    assert!(config.service(SETTINGS_ID).is_none());
}

#[test]
fn count_regex_uses_camel_case_key() {
    let config = InboxConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"countRegex\""));
    assert!(json.contains("\"display_name\""));
    assert!(!json.contains("count_regex"));
}

#[test]
fn absent_count_regex_is_not_serialized() {
    let svc = Service {
        url: "https://example.com/".into(),
        icon: "./logos/x.png".into(),
        count_regex: None,
    };
    let json = serde_json::to_value(&svc).unwrap();
    assert!(json.get("countRegex").is_none());
}

#[test]
fn group_without_services_deserializes_empty() {
    let json = r#"{"groups":{"work":{"display_name":"Work"}}}"#;
    let config: InboxConfig = serde_json::from_str(json).unwrap();
    assert!(config.groups["work"].services.is_empty());
    assert_eq!(config.service_count(), 0);
}

#[test]
fn empty_config_has_no_services() {
    let config = InboxConfig::empty();
    assert!(config.groups.is_empty());
    assert_eq!(config.services().count(), 0);
}

#[test]
fn default_round_trips_through_json() {
    let config = InboxConfig::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: InboxConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}
