use std::time::Duration;

use switchboard_config::{InboxConfig, Service, ServiceGroup};
use tokio::runtime::Handle;

use super::*;
use crate::selector::Rack;
use crate::testing::FakeHost;

fn start(config: InboxConfig) -> (Session<FakeHost>, FakeHost) {
    start_with(config, FakeHost::new())
}

fn start_with(config: InboxConfig, host: FakeHost) -> (Session<FakeHost>, FakeHost) {
    let session = Session::start(
        config,
        host.clone(),
        SessionOptions::default(),
        Handle::current(),
    );
    (session, host)
}

fn selector_ids(session: &Session<FakeHost>) -> Vec<String> {
    session.selectors().iter().map(|s| s.id.clone()).collect()
}

fn single_service(id: &str, regex: Option<&str>) -> InboxConfig {
    let mut config = InboxConfig::empty();
    let mut group = ServiceGroup {
        display_name: "Only".into(),
        services: Default::default(),
    };
    group.services.insert(
        id.into(),
        Service {
            url: format!("https://{id}.example.com/"),
            icon: format!("{id}.png"),
            count_regex: regex.map(String::from),
        },
    );
    config.groups.insert("only".into(), group);
    config
}

#[tokio::test]
async fn start_creates_one_pane_per_service() {
    let (session, host) = start(InboxConfig::default());

    assert_eq!(session.pane_count(), 3);
    assert_eq!(host.created_ids(), vec!["gmail", "slack", "whatsapp"]);
    assert_eq!(
        selector_ids(&session),
        vec!["gmail", "slack", "whatsapp", "settings"]
    );
    assert_eq!(session.selectors().rack(Rack::Bottom).count(), 1);
}

#[tokio::test]
async fn panes_get_isolated_partitions_and_user_agent() {
    let (_session, host) = start(InboxConfig::default());
    let created = host.created();

    let partitions: Vec<&str> = created.iter().map(|s| s.partition.as_str()).collect();
    assert_eq!(
        partitions,
        vec!["persist:gmail", "persist:slack", "persist:whatsapp"]
    );
    assert!(created
        .iter()
        .all(|s| s.user_agent == SessionOptions::default().user_agent));
    assert_eq!(created[2].url, "https://web.whatsapp.com/");
    assert_eq!(created[2].frame_id, "whatsapp-frame");
}

#[tokio::test]
async fn nothing_is_visible_until_first_selection() {
    let (session, host) = start(InboxConfig::default());
    assert!(session.selection().is_none());
    assert!(session.active_pane().is_none());
    assert!(host.visible().is_empty());
}

#[tokio::test]
async fn group_name_becomes_tooltip() {
    let (session, _host) = start(InboxConfig::default());
    assert_eq!(session.selectors().get("slack").unwrap().label, "FeatherDocs");
    assert_eq!(session.selectors().get("whatsapp").unwrap().label, "Personal");
}

#[tokio::test]
async fn selection_keeps_single_active_pair() {
    let (mut session, host) = start(InboxConfig::default());

    session.select("gmail").unwrap();
    assert_eq!(host.visible(), vec!["gmail-frame"]);
    assert_eq!(session.selection(), Some(Selection::Service("gmail".into())));

    session.select("whatsapp").unwrap();
    assert_eq!(host.visible(), vec!["whatsapp-frame"]);
    assert_eq!(session.selectors().active_count(), 1);
    assert_eq!(session.active_pane().unwrap().service_id(), "whatsapp");

    for id in ["slack", "gmail", "slack", "settings", "whatsapp"] {
        session.select(id).unwrap();
        assert!(host.visible().len() <= 1);
        assert_eq!(session.selectors().active_count(), 1);
        assert_eq!(session.panes().filter(|p| p.is_active()).count(), host.visible().len());
    }
}

#[tokio::test]
async fn selecting_twice_leaves_it_active() {
    let (mut session, host) = start(InboxConfig::default());
    session.select("slack").unwrap();
    session.drain_events();

    let t = session.select("slack").unwrap();
    assert!(t.is_noop());
    assert_eq!(host.visible(), vec!["slack-frame"]);
    assert!(session.drain_events().is_empty());
}

#[tokio::test]
async fn settings_selection_hides_panes() {
    let (mut session, host) = start(InboxConfig::default());
    session.select("gmail").unwrap();
    session.drain_events();

    session.select("settings").unwrap();
    assert!(host.visible().is_empty());
    assert!(session.active_pane().is_none());
    assert_eq!(session.selection(), Some(Selection::Settings));
    assert_eq!(
        session.drain_events(),
        vec![SessionEvent::SelectionChanged {
            previous: Some(Selection::Service("gmail".into())),
            current: Selection::Settings,
        }]
    );

    session.select("gmail").unwrap();
    assert_eq!(host.visible(), vec!["gmail-frame"]);
}

#[tokio::test]
async fn unknown_selection_changes_nothing() {
    let (mut session, host) = start(InboxConfig::default());
    session.select("slack").unwrap();
    session.drain_events();

    assert!(session.select("nope").is_err());
    assert_eq!(host.visible(), vec!["slack-frame"]);
    assert!(session.drain_events().is_empty());
}

#[tokio::test]
async fn failed_pane_gets_no_selector() {
    let (session, host) = start_with(InboxConfig::default(), FakeHost::failing_for("slack"));
    assert_eq!(host.created_ids(), vec!["gmail", "whatsapp"]);
    assert_eq!(selector_ids(&session), vec!["gmail", "whatsapp", "settings"]);
}

#[tokio::test]
async fn empty_config_has_only_settings() {
    let (session, host) = start(InboxConfig::empty());
    assert_eq!(session.pane_count(), 0);
    assert_eq!(selector_ids(&session), vec!["settings"]);
    assert!(host.created().is_empty());
}

#[tokio::test(start_paused = true)]
async fn probe_runs_only_after_ready() {
    let (mut session, _host) = start(InboxConfig::default());
    session.record_title("whatsapp", "(3) WhatsApp");

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(session.poll_badges(), 0);

    assert!(session.mark_ready("whatsapp"));
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(session.poll_badges(), 1);
    assert_eq!(session.selectors().get("whatsapp").unwrap().badge, "3");
    assert_eq!(
        session.drain_events(),
        vec![SessionEvent::BadgeChanged {
            service_id: "whatsapp".into(),
            text: "3".into(),
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn badge_events_only_on_change() {
    let (mut session, _host) = start(InboxConfig::default());
    session.record_title("whatsapp", "(3) WhatsApp");
    session.mark_ready("whatsapp");

    tokio::time::sleep(Duration::from_millis(1600)).await;
    assert_eq!(session.poll_badges(), 1);
    assert_eq!(session.drain_events().len(), 1);

    session.record_title("whatsapp", "WhatsApp");
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(session.poll_badges(), 1);
    assert_eq!(session.selectors().get("whatsapp").unwrap().badge, "");
}

#[tokio::test(start_paused = true)]
async fn repeated_ready_attaches_one_probe() {
    let (mut session, _host) = start(single_service("chat", None));
    session.record_title("chat", "Chat (1)");

    assert!(session.mark_ready("chat"));
    assert!(!session.mark_ready("chat"));
    assert!(!session.mark_ready("chat"));

    tokio::time::sleep(Duration::from_millis(1)).await;
    // One probe, one tick so far.
    assert_eq!(session.badge_rx.try_iter().count(), 1);
}

#[tokio::test(start_paused = true)]
async fn custom_pattern_is_used() {
    let (mut session, _host) = start(InboxConfig::default());
    session.record_title("gmail", "(7)");
    session.mark_ready("gmail");
    tokio::time::sleep(Duration::from_millis(1)).await;
    session.poll_badges();
    assert_eq!(session.selectors().get("gmail").unwrap().badge, "");

    session.record_title("gmail", "Inbox (7)");
    tokio::time::sleep(Duration::from_millis(500)).await;
    session.poll_badges();
    assert_eq!(session.selectors().get("gmail").unwrap().badge, "7");
}

#[tokio::test(start_paused = true)]
async fn invalid_pattern_keeps_badge_empty() {
    let (mut session, _host) = start(single_service("chat", Some("Chat ((")));
    session.record_title("chat", "Chat ((4)");
    session.mark_ready("chat");
    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(session.poll_badges(), 0);
    assert_eq!(session.selectors().get("chat").unwrap().badge, "");
}

#[tokio::test(start_paused = true)]
async fn probes_are_independent() {
    let (mut session, _host) = start(InboxConfig::default());
    session.record_title("slack", "Slack (2)");
    session.record_title("whatsapp", "(5) WhatsApp");
    session.mark_ready("slack");
    session.mark_ready("whatsapp");

    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(session.poll_badges(), 2);
    assert_eq!(session.selectors().get("slack").unwrap().badge, "2");
    assert_eq!(session.selectors().get("whatsapp").unwrap().badge, "5");
    assert_eq!(session.selectors().get("gmail").unwrap().badge, "");
}

#[tokio::test(start_paused = true)]
async fn rebuild_stops_probes_and_recreates_everything() {
    let (mut session, host) = start(InboxConfig::default());
    session.record_title("whatsapp", "(5)");
    session.mark_ready("whatsapp");
    session.select("whatsapp").unwrap();
    tokio::time::sleep(Duration::from_millis(1)).await;

    session.rebuild(InboxConfig::empty());
    assert_eq!(host.live_count(), 0);
    assert_eq!(host.dropped().len(), 3);
    assert!(host.visible().is_empty());
    assert_eq!(selector_ids(&session), vec!["settings"]);
    assert!(session.selection().is_none());

    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert_eq!(session.poll_badges(), 0);
    assert!(session.drain_events().is_empty());

    session.rebuild(InboxConfig::default());
    assert_eq!(session.pane_count(), 3);
    assert_eq!(host.live_count(), 3);
    assert!(session.pane("whatsapp").map(|p| !p.has_probe()).unwrap());
}

#[tokio::test]
async fn shutdown_drops_every_pane() {
    let (mut session, host) = start(InboxConfig::default());
    session.shutdown();
    assert_eq!(session.pane_count(), 0);
    assert_eq!(host.live_count(), 0);
    assert!(session.selectors().is_empty());
}

#[tokio::test]
async fn unknown_ids_are_ignored() {
    let (mut session, _host) = start(InboxConfig::default());
    session.record_title("nope", "(1)");
    assert!(!session.mark_ready("nope"));
    assert!(!session.mark_ready("settings"));
}

#[test]
fn options_follow_shell_settings() {
    let mut shell = ShellSettings::default();
    shell.probe.interval_ms = 250;
    shell.browser.user_agent = "UA/2".into();
    let options = SessionOptions::from_shell(&shell);
    assert_eq!(options.probe_interval, Duration::from_millis(250));
    assert_eq!(options.user_agent, "UA/2");

    assert_eq!(SessionOptions::default().probe_interval, Duration::from_millis(500));
}

#[test]
fn out_of_range_shell_values_fall_back_to_defaults() {
    let mut shell = ShellSettings::default();
    shell.probe.interval_ms = 0;
    shell.browser.user_agent = "   ".into();
    assert_eq!(SessionOptions::from_shell(&shell), SessionOptions::default());

    shell.probe.interval_ms = 3_600_000;
    assert_eq!(
        SessionOptions::from_shell(&shell).probe_interval,
        Duration::from_millis(500)
    );
}

#[tokio::test(start_paused = true)]
async fn zero_interval_in_shell_settings_keeps_badges_flowing() {
    let mut shell = ShellSettings::default();
    shell.probe.interval_ms = 0;
    let host = FakeHost::new();
    let mut session = Session::start(
        InboxConfig::default(),
        host,
        SessionOptions::from_shell(&shell),
        Handle::current(),
    );

    session.record_title("whatsapp", "(4) WhatsApp");
    assert!(session.mark_ready("whatsapp"));
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(session.poll_badges(), 1);
    assert_eq!(session.selectors().get("whatsapp").unwrap().badge, "4");
    assert!(session.pane("whatsapp").unwrap().has_probe());
}

fn service(url: &str, icon: &str) -> Service {
    Service {
        url: url.into(),
        icon: icon.into(),
        count_regex: None,
    }
}

#[tokio::test]
async fn reserved_settings_id_is_skipped() {
    let mut config = InboxConfig::empty();
    let mut group = ServiceGroup {
        display_name: "Work".into(),
        services: Default::default(),
    };
    group
        .services
        .insert("settings".into(), service("https://a.example.com/", "a.png"));
    group
        .services
        .insert("mail".into(), service("https://m.example.com/", "m.png"));
    config.groups.insert("work".into(), group);

    let (mut session, host) = start(config);
    assert_eq!(host.created_ids(), vec!["mail"]);
    assert_eq!(selector_ids(&session), vec!["mail", "settings"]);
    let settings = session.selectors().get("settings").unwrap();
    assert_eq!(settings.rack, Rack::Bottom);
    assert!(settings.is_settings());

    session.select("mail").unwrap();
    session.select("settings").unwrap();
    assert!(host.visible().is_empty());
    assert_eq!(session.selection(), Some(Selection::Settings));
    assert!(session.active_pane().is_none());
}

#[tokio::test]
async fn duplicate_id_across_groups_keeps_the_first() {
    let mut config = InboxConfig::empty();
    for (group_id, name, icon) in [("a", "Alpha", "first.png"), ("b", "Beta", "second.png")] {
        let mut group = ServiceGroup {
            display_name: name.into(),
            services: Default::default(),
        };
        group.services.insert(
            "mail".into(),
            service(&format!("https://{group_id}.example.com/"), icon),
        );
        config.groups.insert(group_id.into(), group);
    }

    let (session, host) = start(config);
    assert_eq!(host.created_ids(), vec!["mail"]);
    assert_eq!(host.live_count(), 1);
    assert_eq!(session.pane_count(), 1);
    assert_eq!(
        session.pane("mail").unwrap().spec().url,
        "https://a.example.com/"
    );
    let selector = session.selectors().get("mail").unwrap();
    assert_eq!(selector.icon, "first.png");
    assert_eq!(selector.label, "Alpha");
    assert_eq!(selector_ids(&session), vec!["mail", "settings"]);
}
