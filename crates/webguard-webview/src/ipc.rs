//! IPC (Inter-Process Communication) protocol between Rust and JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: JavaScript calls `window.ipc.postMessage(JSON.stringify({...}))`,
//!   which triggers the `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: Rust calls `webview.evaluate_script("...")` to invoke
//!   JavaScript functions in the WebView context.
//!
//! The shell's own surfaces (chrome overlay, toolbar) get the full bridge.
//! The browser surface only gets a one-way reporter for navigation state and
//! load errors.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a plain string or structured JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    #[default]
    None,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Create a simple text message.
    pub fn text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Text(text.into()),
        }
    }

    /// Create a JSON message.
    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }

    /// Decode the payload into a typed report.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Option<T> {
        match &self.payload {
            IpcPayload::Json(value) => serde_json::from_value(value.clone()).ok(),
            IpcPayload::Text(text) => {
                serde_json::from_value(serde_json::Value::String(text.clone())).ok()
            }
            IpcPayload::None => None,
        }
    }
}

// =============================================================================
// REPORTS
// =============================================================================

/// `load_error` from the browser surface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoadErrorReport {
    pub description: String,
}

/// `http_error` from the browser surface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpErrorReport {
    pub url: String,
    pub detail: String,
}

/// `address_edit` / `address_submit` from the toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressReport {
    pub text: String,
    #[serde(default)]
    pub editing: bool,
}

// =============================================================================
// SCRIPTS
// =============================================================================

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// Injected as an initialization script into the shell's own surfaces.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.webguard = window.webguard || {};
    window.webguard.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload || null
            }));
        },
        // Callbacks registered by JS code to handle messages from Rust
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Reporter injected into the browser surface. Posts `nav_state` on load and
/// in-page navigation, `http_error` for failed sub-resources and error
/// statuses on the document, and `load_error` when the network is down at
/// startup, drops later, or the document response never arrived.
pub const ERROR_REPORTER_SCRIPT: &str = r#"
(function() {
    if (window.__webguardReporter) { return; }
    window.__webguardReporter = true;
    var loadFailed = false;
    function post(kind, payload) {
        try {
            window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload }));
        } catch (_) {}
    }
    function loadError(description) {
        if (loadFailed) { return; }
        loadFailed = true;
        post('load_error', { description: description });
    }
    function checkOnline() {
        if (navigator.onLine === false) { loadError('no network connection'); }
    }
    function navState() {
        post('nav_state', {
            url: location.href,
            can_go_back: history.length > 1,
            can_go_forward: false
        });
    }
    window.addEventListener('error', function(e) {
        var t = e.target;
        if (!t || t === window) { return; }
        var src = t.currentSrc || t.src || t.href;
        if (!src) { return; }
        post('http_error', {
            url: String(src),
            detail: 'failed to load ' + String(t.tagName || 'resource').toLowerCase()
        });
    }, true);
    window.addEventListener('offline', function() {
        loadError('network connection lost');
    });
    window.addEventListener('hashchange', navState);
    window.addEventListener('popstate', navState);
    window.addEventListener('DOMContentLoaded', function() {
        navState();
        checkOnline();
        var entries = performance.getEntriesByType ? performance.getEntriesByType('navigation') : [];
        var nav = entries && entries[0];
        if (nav && typeof nav.responseStatus === 'number') {
            if (nav.responseStatus === 0) {
                loadError('no response for ' + location.href);
            } else if (nav.responseStatus >= 400) {
                post('http_error', { url: location.href, detail: 'HTTP ' + nav.responseStatus });
            }
        }
    });
    checkOnline();
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.webguard.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
