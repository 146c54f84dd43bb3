//! Inline HTML for the shell's own surfaces and the model they render.
//!
//! The chrome overlay sits above the browser surface and draws the loading
//! spinner, the error panel, and modal alerts. The toolbar is the browser
//! shell's address bar. Both talk to Rust only through `window.webguard.ipc`.

use serde::Serialize;
use webguard_common::Notification;

use crate::session::{SessionState, View};

/// Static message shown on the error panel.
pub const ERROR_PANEL_MESSAGE: &str = "Could not load the page.";

/// Everything the chrome overlay needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromeModel {
    #[serde(flatten)]
    pub view: View,
    pub message: Option<String>,
    pub alert: Option<Notification>,
}

impl ChromeModel {
    pub fn new(state: &SessionState, alert: Option<Notification>) -> Self {
        let view = state.view();
        let message = match view {
            View::ErrorPanel { .. } => Some(ERROR_PANEL_MESSAGE.to_string()),
            _ => None,
        };
        Self {
            view,
            message,
            alert,
        }
    }

    /// Whether the overlay has anything to draw. When false it is hidden so
    /// it does not swallow input meant for the page.
    pub fn is_visible(&self) -> bool {
        self.alert.is_some() || !matches!(self.view, View::Browser)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Address-bar state pushed to the toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarModel {
    pub text: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Chrome overlay document. Renders on `render` messages.
pub const CHROME_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  html, body { margin: 0; height: 100%; font-family: system-ui, sans-serif; background: transparent; }
  .layer { position: fixed; inset: 0; display: none; align-items: center; justify-content: center; }
  #spinner { background: rgba(0, 0, 0, 0.2); }
  #spinner .ring { width: 48px; height: 48px; border: 5px solid #c7d2fe; border-top-color: #1d4ed8;
                   border-radius: 50%; animation: spin 0.9s linear infinite; }
  @keyframes spin { to { transform: rotate(360deg); } }
  #error { background: #fff; flex-direction: column; padding: 20px; }
  #error p { color: #c0392b; font-size: 16px; margin-bottom: 10px; }
  #modal { background: rgba(0, 0, 0, 0.45); }
  #modal .box { background: #fff; border-radius: 8px; padding: 20px 24px; max-width: 420px;
                box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3); }
  #modal h3 { margin: 0 0 8px; }
  #modal .actions { text-align: right; margin-top: 16px; }
  button { font-size: 15px; padding: 6px 18px; }
</style>
</head>
<body>
<div id="spinner" class="layer"><div class="ring"></div></div>
<div id="error" class="layer">
  <p id="error-message"></p>
  <button id="retry">Try again</button>
</div>
<div id="modal" class="layer">
  <div class="box">
    <h3 id="alert-title"></h3>
    <div id="alert-body"></div>
    <div class="actions"><button id="alert-ok">OK</button></div>
  </div>
</div>
<script>
(function() {
  var $ = function(id) { return document.getElementById(id); };
  $('retry').onclick = function() { window.webguard.ipc.send('retry'); };
  $('alert-ok').onclick = function() { window.webguard.ipc.send('alert_ack'); };
  window.webguard.ipc.on('render', function(model) {
    $('spinner').style.display = model.view === 'spinner' ? 'flex' : 'none';
    $('error').style.display = model.view === 'error_panel' ? 'flex' : 'none';
    $('error-message').textContent = model.message || '';
    $('retry').disabled = !model.retry_enabled;
    if (model.alert) {
      $('alert-title').textContent = model.alert.title;
      $('alert-body').textContent = model.alert.body;
      $('modal').style.display = 'flex';
    } else {
      $('modal').style.display = 'none';
    }
  });
})();
</script>
</body>
</html>
"#;

/// Toolbar document for the browser shell. Renders on `address_update`.
pub const TOOLBAR_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  html, body { margin: 0; height: 100%; background: #f0f0f0; font-family: system-ui, sans-serif; }
  form { display: flex; align-items: center; height: 100%; padding: 0 10px; box-sizing: border-box; gap: 10px; }
  .nav { width: 30px; height: 30px; border-radius: 50%; border: none; background: gray; color: black; }
  .nav:disabled { opacity: 0.4; }
  input { flex: 1; height: 32px; border: 1px solid gray; border-radius: 5px; padding: 0 10px; background: #fff; }
</style>
</head>
<body>
<form id="bar">
  <button type="button" class="nav" id="back">&lt;</button>
  <input id="address" type="url" placeholder="Enter a URL" autocapitalize="none" spellcheck="false">
  <button type="button" class="nav" id="forward">&gt;</button>
</form>
<script>
(function() {
  var $ = function(id) { return document.getElementById(id); };
  var input = $('address');
  $('back').onclick = function() { window.webguard.ipc.send('go_back'); };
  $('forward').onclick = function() { window.webguard.ipc.send('go_forward'); };
  input.addEventListener('input', function() {
    window.webguard.ipc.send('address_edit', { text: input.value, editing: true });
  });
  input.addEventListener('blur', function() {
    window.webguard.ipc.send('address_edit', { text: input.value, editing: false });
  });
  $('bar').addEventListener('submit', function(e) {
    e.preventDefault();
    window.webguard.ipc.send('address_submit', { text: input.value });
    input.blur();
  });
  window.webguard.ipc.on('address_update', function(model) {
    if (document.activeElement !== input) { input.value = model.text; }
    $('back').disabled = !model.can_go_back;
    $('forward').disabled = !model.can_go_forward;
  });
})();
</script>
</body>
</html>
"#;
