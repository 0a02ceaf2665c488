//! Built-in inbox used when nothing usable is persisted.

use std::collections::BTreeMap;

use super::{InboxConfig, Service, ServiceGroup};

fn service(url: &str, icon: &str, count_regex: Option<&str>) -> Service {
    Service {
        url: url.to_string(),
        icon: icon.to_string(),
        count_regex: count_regex.map(str::to_string),
    }
}

pub(super) fn builtin() -> InboxConfig {
    let mut feather = BTreeMap::new();
    feather.insert(
        "gmail".to_string(),
        service(
            "https://gmail.com/",
            "./logos/icons8-gmail-login-50.png",
            Some(r"Inbox \(([0-9]+)\)"),
        ),
    );
    feather.insert(
        "slack".to_string(),
        service(
            "https://acuitykm.slack.com/",
            "./logos/icons8-slack-50.png",
            None,
        ),
    );

    let mut personal = BTreeMap::new();
    personal.insert(
        "whatsapp".to_string(),
        service(
            "https://web.whatsapp.com/",
            "./logos/icons8-whatsapp-50.png",
            None,
        ),
    );

    let mut groups = BTreeMap::new();
    groups.insert(
        "feather".to_string(),
        ServiceGroup {
            display_name: "FeatherDocs".to_string(),
            services: feather,
        },
    );
    groups.insert(
        "personal".to_string(),
        ServiceGroup {
            display_name: "Personal".to_string(),
            services: personal,
        },
    );

    InboxConfig { groups }
}
