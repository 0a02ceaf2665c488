//! The sidebar page: one icon per selector, badges, active marker.

use serde_json::{json, Value};
use switchboard_session::ids;
use switchboard_session::SelectorRegistry;
use switchboard_webview::protocol_url;

pub const SIDEBAR_PATH: &str = "sidebar.html";

/// Snapshot of every selector, in sidebar order, for the `selectors` message.
pub fn selectors_payload(selectors: &SelectorRegistry) -> Value {
    let items: Vec<Value> = selectors
        .iter()
        .map(|s| {
            json!({
                "id": s.id,
                "elementId": s.element_id,
                "badgeId": ids::badge_id(&s.id),
                "icon": protocol_url(&s.icon),
                "label": s.label,
                "rack": s.rack,
                "badge": s.badge,
                "active": s.active,
            })
        })
        .collect();
    json!({ "selectors": items })
}

pub fn badge_payload(service_id: &str, text: &str) -> Value {
    json!({ "id": service_id, "text": text })
}

pub const SIDEBAR_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  html, body { margin: 0; height: 100%; background: #2f3136; overflow: hidden; }
  body { display: flex; flex-direction: column; justify-content: space-between; }
  .rack { display: flex; flex-direction: column; align-items: center; padding: 8px 0; }
  .selector {
    position: relative; width: 40px; height: 40px; margin: 6px 0;
    border-radius: 10px; cursor: pointer; opacity: 0.6;
    display: flex; align-items: center; justify-content: center;
  }
  .selector:hover { opacity: 0.85; }
  .selector.active { opacity: 1; background: #40444b; }
  .selector img { width: 28px; height: 28px; }
  .count {
    position: absolute; right: -4px; bottom: -4px; min-width: 16px;
    padding: 0 4px; border-radius: 8px; background: #f04747; color: #fff;
    font: bold 10px/16px sans-serif; text-align: center;
  }
  .count:empty { display: none; }
</style>
</head>
<body>
<div class="rack" id="top-rack"></div>
<div class="rack" id="bottom-rack"></div>
<script>
(function() {
  var ipc = window.switchboard.ipc;

  function render(payload) {
    var top = document.getElementById('top-rack');
    var bottom = document.getElementById('bottom-rack');
    top.textContent = '';
    bottom.textContent = '';
    payload.selectors.forEach(function(s) {
      var el = document.createElement('div');
      el.className = 'selector' + (s.active ? ' active' : '');
      el.id = s.elementId;
      el.title = s.label;
      var img = document.createElement('img');
      img.src = s.icon;
      img.alt = s.id;
      el.appendChild(img);
      if (s.rack === 'top') {
        var badge = document.createElement('span');
        badge.className = 'count';
        badge.id = s.badgeId;
        badge.textContent = s.badge;
        el.appendChild(badge);
      }
      el.addEventListener('click', function() { ipc.send('select', s.id); });
      (s.rack === 'bottom' ? bottom : top).appendChild(el);
    });
  }

  function selectorEl(id) {
    return document.getElementById(id + '-selector');
  }

  ipc.on('selectors', render);
  ipc.on('badge', function(p) {
    var el = document.getElementById(p.id + '-count');
    if (el) { el.textContent = p.text; }
  });
  ipc.on('deactivate', function(id) {
    var el = selectorEl(id);
    if (el) { el.classList.remove('active'); }
  });
  ipc.on('activate', function(id) {
    var el = selectorEl(id);
    if (el) { el.classList.add('active'); }
  });

  ipc.send('sidebar_ready');
})();
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use switchboard_session::Selector;

    #[test]
    fn payload_lists_selectors_in_order() {
        let mut registry = SelectorRegistry::new();
        registry.register(Selector::settings());
        let group = switchboard_config::ServiceGroup {
            display_name: "Personal".into(),
            services: Default::default(),
        };
        let service = switchboard_config::Service {
            url: "https://web.whatsapp.com/".into(),
            icon: "./logos/icons8-whatsapp-50.png".into(),
            count_regex: None,
        };
        registry.register(Selector::for_service("whatsapp", &group, &service));
        registry.set_badge("whatsapp", "3");
        registry.select("whatsapp").unwrap();

        let payload = selectors_payload(&registry);
        let items = payload["selectors"].as_array().unwrap();
        assert_eq!(items.len(), 2);

        let first = &items[0];
        assert_eq!(first["id"], "whatsapp");
        assert_eq!(first["elementId"], "whatsapp-selector");
        assert_eq!(first["badgeId"], "whatsapp-count");
        assert_eq!(first["label"], "Personal");
        assert_eq!(first["rack"], "top");
        assert_eq!(first["badge"], "3");
        assert_eq!(first["active"], true);
        assert!(first["icon"]
            .as_str()
            .unwrap()
            .ends_with("localhost/logos/icons8-whatsapp-50.png"));

        assert_eq!(items[1]["id"], "settings");
        assert_eq!(items[1]["rack"], "bottom");
        assert_eq!(items[1]["active"], false);
    }

    #[test]
    fn badge_payload_shape() {
        assert_eq!(badge_payload("gmail", ""), json!({"id": "gmail", "text": ""}));
    }

    #[test]
    fn page_renders_through_text_nodes() {
        assert!(SIDEBAR_HTML.contains("textContent"));
        assert!(!SIDEBAR_HTML.contains("innerHTML"));
        assert!(SIDEBAR_HTML.contains("ipc.send('sidebar_ready')"));
    }
}
