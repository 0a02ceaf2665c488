//! The settings page: the inbox as raw JSON in a textarea.

use serde_json::{json, Value};

pub const SETTINGS_PATH: &str = "settings.html";

pub fn document_payload(text: &str) -> Value {
    json!({ "text": text })
}

pub fn rejection_payload(report: &str) -> Value {
    json!({ "report": report })
}

pub const SETTINGS_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  html, body { margin: 0; height: 100%; font-family: sans-serif; background: #fff; }
  form { display: flex; flex-direction: column; height: 100%; box-sizing: border-box; padding: 16px; }
  h1 { font-size: 18px; margin: 0 0 12px; }
  textarea { flex: 1; font: 13px/1.4 monospace; padding: 8px; resize: none; }
  #problems { color: #b00020; white-space: pre-wrap; font: 12px monospace; margin: 8px 0 0; }
  #problems:empty { display: none; }
  button { align-self: flex-end; margin-top: 12px; padding: 6px 18px; }
</style>
</head>
<body>
<form id="settings-form">
  <h1>Settings</h1>
  <textarea id="settings-text" spellcheck="false"></textarea>
  <pre id="problems"></pre>
  <button type="submit">Save</button>
</form>
<script>
(function() {
  var ipc = window.switchboard.ipc;
  var text = document.getElementById('settings-text');
  var problems = document.getElementById('problems');

  ipc.on('settings_document', function(p) {
    text.value = p.text;
    problems.textContent = '';
  });
  ipc.on('settings_rejected', function(p) {
    problems.textContent = p.report;
    window.alert(p.report);
  });

  document.getElementById('settings-form').addEventListener('submit', function(e) {
    e.preventDefault();
    ipc.send('settings_submit', { text: text.value });
  });

  ipc.send('settings_ready');
})();
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_never_navigates() {
        assert!(SETTINGS_HTML.contains("e.preventDefault()"));
        assert!(SETTINGS_HTML.contains("ipc.send('settings_submit'"));
    }

    #[test]
    fn payloads() {
        assert_eq!(document_payload("{}")["text"], "{}");
        assert_eq!(rejection_payload("bad")["report"], "bad");
    }
}
