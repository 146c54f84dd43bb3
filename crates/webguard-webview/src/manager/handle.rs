use webguard_common::WebViewError;
use wry::WebView;

use crate::surface::BrowserSurface;

/// Handle to a managed WebView instance. Provides methods to interact
/// with the underlying WebView (navigate, evaluate JS, resize, etc.).
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) surface_id: u32,
}

fn command_error(command: &str, err: wry::Error) -> WebViewError {
    WebViewError::Command {
        command: command.to_string(),
        reason: err.to_string(),
    }
}

impl WebViewHandle {
    pub fn surface_id(&self) -> u32 {
        self.surface_id
    }

    /// Send a typed IPC message to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), WebViewError> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview
            .evaluate_script(&script)
            .map_err(|e| command_error("send_ipc", e))
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), WebViewError> {
        self.webview
            .set_bounds(bounds)
            .map_err(|e| command_error("set_bounds", e))
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), WebViewError> {
        self.webview
            .set_visible(visible)
            .map_err(|e| command_error("set_visible", e))
    }
}

impl BrowserSurface for WebViewHandle {
    fn load_url(&mut self, url: &str) -> Result<(), WebViewError> {
        self.webview
            .load_url(url)
            .map_err(|e| command_error("load", e))
    }

    fn reload(&mut self) -> Result<(), WebViewError> {
        self.webview.reload().map_err(|e| command_error("reload", e))
    }

    fn stop(&mut self) -> Result<(), WebViewError> {
        self.webview
            .evaluate_script("window.stop();")
            .map_err(|e| command_error("stop", e))
    }

    fn go_back(&mut self) -> Result<(), WebViewError> {
        self.webview
            .evaluate_script("history.back();")
            .map_err(|e| command_error("go_back", e))
    }

    fn go_forward(&mut self) -> Result<(), WebViewError> {
        self.webview
            .evaluate_script("history.forward();")
            .map_err(|e| command_error("go_forward", e))
    }

    fn evaluate_script(&mut self, js: &str) -> Result<(), WebViewError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| command_error("inject_script", e))
    }
}
