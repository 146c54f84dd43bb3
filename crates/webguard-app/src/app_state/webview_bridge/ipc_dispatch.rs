//! IPC message validation and dispatch from webviews to the controller.

use webguard_webview::ipc::{AddressReport, HttpErrorReport, LoadErrorReport};
use webguard_webview::{IpcMessage, NavigationEvent, SurfaceRole};

use crate::app_state::core::ShellApp;
use crate::app_state::types::role_of;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Reports from the injected script in the browser surface.
const BROWSER_IPC_KINDS: &[&str] = &["nav_state", "load_error", "http_error"];

/// Buttons on the chrome overlay.
const CHROME_IPC_KINDS: &[&str] = &["retry", "alert_ack"];

const TOOLBAR_IPC_KINDS: &[&str] = &["address_edit", "address_submit", "go_back", "go_forward"];

/// The kinds a surface of `role` may send. Anything else is rejected and logged.
pub fn allowed_ipc_kinds(role: SurfaceRole) -> &'static [&'static str] {
    match role {
        SurfaceRole::Browser => BROWSER_IPC_KINDS,
        SurfaceRole::Chrome => CHROME_IPC_KINDS,
        SurfaceRole::Toolbar => TOOLBAR_IPC_KINDS,
    }
}

pub fn is_ipc_kind_allowed(role: SurfaceRole, kind: &str) -> bool {
    allowed_ipc_kinds(role).contains(&kind)
}

// =============================================================================
// DISPATCH
// =============================================================================

impl ShellApp {
    /// Handle a single IPC message from a webview.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, surface_id: u32, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(
                    surface_id,
                    body_len = body.len(),
                    "IPC message rejected: failed to parse"
                );
                return;
            }
        };

        let role = role_of(surface_id);
        if !is_ipc_kind_allowed(role, &msg.kind) {
            tracing::warn!(
                surface_id,
                ?role,
                kind = %msg.kind,
                "IPC message rejected: unknown kind"
            );
            return;
        }

        tracing::debug!(surface_id, kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "nav_state" => self.handle_nav_state(surface_id, &msg),
            "load_error" => {
                let Some(report) = msg.payload_as::<LoadErrorReport>() else {
                    tracing::warn!(surface_id, "load_error: invalid payload");
                    return;
                };
                let current = self.controller.mounted_surface() == Some(surface_id);
                self.controller.on_load_error(surface_id, &report.description);
                if current {
                    if let Some(bar) = self.address_bar.as_mut() {
                        bar.clear_history();
                    }
                }
            }
            "http_error" => {
                let Some(report) = msg.payload_as::<HttpErrorReport>() else {
                    tracing::warn!(surface_id, "http_error: invalid payload");
                    return;
                };
                self.controller
                    .on_http_error(surface_id, &report.url, &report.detail);
            }
            "retry" => {
                let commands = self.controller.retry();
                self.execute_surface_commands(commands);
            }
            "alert_ack" => {
                if let Some(alert) = self.controller.acknowledge_alert() {
                    tracing::debug!(title = %alert.title, "Alert acknowledged");
                }
            }
            "address_edit" => {
                let (Some(report), Some(bar)) =
                    (msg.payload_as::<AddressReport>(), self.address_bar.as_mut())
                else {
                    return;
                };
                bar.edit(report.text, report.editing);
            }
            "address_submit" => self.handle_address_submit(&msg),
            "go_back" => {
                let command = self.address_bar.as_mut().and_then(|bar| bar.back());
                self.execute_surface_commands(command.into_iter().collect());
            }
            "go_forward" => {
                let command = self.address_bar.as_mut().and_then(|bar| bar.forward());
                self.execute_surface_commands(command.into_iter().collect());
            }
            _ => {}
        }

        self.needs_sync = true;
    }

    fn handle_nav_state(&mut self, surface_id: u32, msg: &IpcMessage) {
        let Some(event) = msg.payload_as::<NavigationEvent>() else {
            tracing::warn!(surface_id, "nav_state: invalid payload");
            return;
        };

        let commands = self.controller.on_navigation(surface_id, &event);
        self.execute_surface_commands(commands);

        if self.controller.mounted_surface() == Some(surface_id) {
            let error = self.controller.is_error();
            if let Some(bar) = self.address_bar.as_mut() {
                bar.sync(&event, error);
            }
        }
    }

    fn handle_address_submit(&mut self, msg: &IpcMessage) {
        let Some(bar) = self.address_bar.as_mut() else {
            return;
        };
        if let Some(report) = msg.payload_as::<AddressReport>() {
            bar.edit(report.text, false);
        }
        match bar.submit() {
            Ok(command) => {
                tracing::info!(url = %bar.text(), "Address submitted");
                self.execute_surface_commands(vec![command]);
            }
            Err(e) => tracing::warn!(error = %e, "Address rejected"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::types::{CHROME_SURFACE_ID, TOOLBAR_SURFACE_ID};
    use webguard_common::ShellMode;
    use webguard_config::WebguardConfig;
    use webguard_webview::{SessionState, HOME_URL};

    fn app(mode: ShellMode) -> ShellApp {
        let mut config = WebguardConfig::default();
        config.shell.mode = mode;
        ShellApp::new(config)
    }

    // -- Allowlist --

    #[test]
    fn browser_kinds_allowed() {
        for kind in ["nav_state", "load_error", "http_error"] {
            assert!(is_ipc_kind_allowed(SurfaceRole::Browser, kind));
        }
    }

    #[test]
    fn chrome_kinds_allowed() {
        assert!(is_ipc_kind_allowed(SurfaceRole::Chrome, "retry"));
        assert!(is_ipc_kind_allowed(SurfaceRole::Chrome, "alert_ack"));
    }

    #[test]
    fn toolbar_kinds_allowed() {
        for kind in ["address_edit", "address_submit", "go_back", "go_forward"] {
            assert!(is_ipc_kind_allowed(SurfaceRole::Toolbar, kind));
        }
    }

    #[test]
    fn page_cannot_press_shell_buttons() {
        assert!(!is_ipc_kind_allowed(SurfaceRole::Browser, "retry"));
        assert!(!is_ipc_kind_allowed(SurfaceRole::Browser, "alert_ack"));
        assert!(!is_ipc_kind_allowed(SurfaceRole::Browser, "address_submit"));
    }

    #[test]
    fn unknown_kinds_rejected() {
        for role in [SurfaceRole::Browser, SurfaceRole::Chrome, SurfaceRole::Toolbar] {
            assert!(!is_ipc_kind_allowed(role, ""));
            assert!(!is_ipc_kind_allowed(role, "RETRY"));
            assert!(!is_ipc_kind_allowed(role, "eval"));
        }
    }

    // -- Dispatch --

    #[test]
    fn http_error_fails_session_after_ack() {
        let mut app = app(ShellMode::Restricted);
        let id = app.controller.mount_surface();
        app.controller.on_load_end(id, HOME_URL);

        app.handle_ipc_message(
            id,
            r#"{"kind":"http_error","payload":{"url":"https://gemini.google.com/x.js","detail":"HTTP 500"}}"#,
        );
        assert_eq!(app.controller.state(), &SessionState::Ready);
        assert_eq!(app.controller.pending_alerts(), 1);

        app.handle_ipc_message(CHROME_SURFACE_ID, r#"{"kind":"alert_ack"}"#);
        assert!(app.controller.is_error());
        assert!(!app.controller.is_loading());
    }

    #[test]
    fn retry_from_chrome_leaves_error_state() {
        let mut app = app(ShellMode::Restricted);
        let id = app.controller.mount_surface();
        app.handle_ipc_message(
            id,
            r#"{"kind":"load_error","payload":{"description":"offline"}}"#,
        );
        assert!(app.controller.is_error());

        // No window in tests, so the remount is skipped but the state moves.
        app.handle_ipc_message(CHROME_SURFACE_ID, r#"{"kind":"retry"}"#);
        assert!(app.controller.is_loading());
        assert!(!app.controller.is_error());
    }

    #[test]
    fn retry_from_browser_surface_is_rejected() {
        let mut app = app(ShellMode::Restricted);
        let id = app.controller.mount_surface();
        app.handle_ipc_message(
            id,
            r#"{"kind":"load_error","payload":{"description":"offline"}}"#,
        );
        app.handle_ipc_message(id, r#"{"kind":"retry"}"#);
        assert!(app.controller.is_error());
    }

    #[test]
    fn blocked_nav_state_enters_blocked() {
        let mut app = app(ShellMode::Restricted);
        let id = app.controller.mount_surface();
        app.controller.on_load_end(id, HOME_URL);

        app.handle_ipc_message(
            id,
            r#"{"kind":"nav_state","payload":{"url":"https://malicious.test/","can_go_back":true}}"#,
        );
        assert!(matches!(app.controller.state(), SessionState::Blocked { .. }));
        assert!(app.controller.mounted_surface().is_none());
    }

    #[test]
    fn malformed_messages_are_ignored() {
        let mut app = app(ShellMode::Restricted);
        let id = app.controller.mount_surface();
        app.handle_ipc_message(id, "not json");
        app.handle_ipc_message(id, r#"{"kind":"load_error","payload":{"oops":1}}"#);
        assert!(app.controller.is_loading());
    }

    #[test]
    fn nav_state_syncs_address_bar() {
        let mut app = app(ShellMode::Browser);
        let id = app.controller.mount_surface();
        app.handle_ipc_message(
            id,
            r#"{"kind":"nav_state","payload":{"url":"https://example.com/","can_go_back":true}}"#,
        );
        let bar = app.address_bar.as_ref().unwrap();
        assert_eq!(bar.text(), "https://example.com/");
        assert!(bar.can_go_back());
        assert!(!app.controller.is_error());
    }

    #[test]
    fn address_submit_normalizes_text() {
        let mut app = app(ShellMode::Browser);
        app.handle_ipc_message(
            TOOLBAR_SURFACE_ID,
            r#"{"kind":"address_submit","payload":{"text":"example.com"}}"#,
        );
        assert_eq!(
            app.address_bar.as_ref().map(|b| b.text()),
            Some("https://example.com/")
        );
    }

    #[test]
    fn load_error_clears_history() {
        let mut app = app(ShellMode::Browser);
        let id = app.controller.mount_surface();
        app.handle_ipc_message(
            id,
            r#"{"kind":"nav_state","payload":{"url":"https://a.test/","can_go_back":true}}"#,
        );
        app.handle_ipc_message(
            id,
            r#"{"kind":"load_error","payload":{"description":"dns"}}"#,
        );
        assert!(!app.address_bar.as_ref().unwrap().can_go_back());
    }

    #[test]
    fn reload_after_failure_returns_to_last_page() {
        let mut app = app(ShellMode::Browser);
        let id = app.controller.mount_surface();
        app.handle_ipc_message(
            id,
            r#"{"kind":"nav_state","payload":{"url":"https://example.com/","can_go_back":true}}"#,
        );
        app.handle_ipc_message(
            id,
            r#"{"kind":"load_error","payload":{"description":"dns"}}"#,
        );
        assert!(app.controller.mounted_surface().is_none());
        assert_eq!(app.reload_url(), "https://example.com/");
    }

    #[test]
    fn reload_ignores_unsubmitted_text() {
        let mut app = app(ShellMode::Browser);
        app.handle_ipc_message(
            TOOLBAR_SURFACE_ID,
            r#"{"kind":"address_edit","payload":{"text":"half-typed","editing":true}}"#,
        );
        assert_eq!(app.reload_url(), HOME_URL);
    }

    #[test]
    fn restricted_reload_always_goes_home() {
        let mut app = app(ShellMode::Restricted);
        let id = app.controller.mount_surface();
        app.handle_ipc_message(
            id,
            r#"{"kind":"nav_state","payload":{"url":"https://gemini.google.com/app/1","can_go_back":true}}"#,
        );
        assert_eq!(app.reload_url(), HOME_URL);
    }

    #[test]
    fn starting_offline_fails_the_session() {
        let mut app = app(ShellMode::Restricted);
        let id = app.controller.mount_surface();
        app.handle_ipc_message(
            id,
            r#"{"kind":"load_error","payload":{"description":"no network connection"}}"#,
        );
        // The page-load callback for the offline page arrives afterwards.
        app.controller.on_load_end(id, HOME_URL);
        assert!(app.controller.is_error());
        assert!(!app.controller.is_loading());
    }
}
