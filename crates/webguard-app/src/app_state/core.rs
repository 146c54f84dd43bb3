//! ShellApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use webguard_common::ShellMode;
use webguard_config::WebguardConfig;
use webguard_webview::{
    AddressBar, AllowList, HostPolicy, NavigationGuard, ScreenController, WebViewRegistry,
    HOME_URL,
};

/// Top-level application state.
pub struct ShellApp {
    pub(super) config: WebguardConfig,
    pub(super) controller: ScreenController,
    /// Present only in browser mode.
    pub(super) address_bar: Option<AddressBar>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // WebView surfaces
    pub(super) webviews: Option<WebViewRegistry>,
    /// Registry key of the browser surface currently on screen.
    pub(super) browser_id: Option<u32>,

    // Set when the chrome or toolbar needs a fresh model pushed
    pub(super) needs_sync: bool,
    pub(super) last_poll: Instant,
}

impl ShellApp {
    pub fn new(config: WebguardConfig) -> Self {
        let controller = ScreenController::new(build_guard(&config));
        let address_bar = match config.shell.mode {
            ShellMode::Browser => Some(AddressBar::new(HOME_URL)),
            ShellMode::Restricted => None,
        };
        Self {
            config,
            controller,
            address_bar,
            window: None,
            webviews: None,
            browser_id: None,
            needs_sync: false,
            last_poll: Instant::now(),
        }
    }
}

/// Navigation guard for the configured shell mode.
pub(super) fn build_guard(config: &WebguardConfig) -> NavigationGuard {
    match config.shell.mode {
        ShellMode::Browser => NavigationGuard::open(),
        ShellMode::Restricted => NavigationGuard::restricted(
            AllowList::builtin(),
            config.navigation.match_mode,
            HostPolicy {
                schemes: config.navigation.allowed_schemes.clone(),
                ports: config.navigation.allowed_ports.clone(),
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webguard_common::MatchMode;

    #[test]
    fn restricted_mode_has_no_address_bar() {
        let app = ShellApp::new(WebguardConfig::default());
        assert!(app.address_bar.is_none());
        assert!(app.controller.is_loading());
        assert!(app.browser_id.is_none());
    }

    #[test]
    fn browser_mode_starts_at_home() {
        let mut config = WebguardConfig::default();
        config.shell.mode = ShellMode::Browser;
        let app = ShellApp::new(config);
        assert_eq!(app.address_bar.as_ref().map(|b| b.text()), Some(HOME_URL));
    }

    #[test]
    fn restricted_guard_follows_match_mode() {
        let mut config = WebguardConfig::default();
        config.navigation.match_mode = MatchMode::Host;
        let guard = build_guard(&config);
        assert_eq!(guard.mode(), MatchMode::Host);
        assert!(!guard.is_allowed("https://evil.example.com/?x=gemini.google.com"));
        assert!(guard.is_allowed(HOME_URL));
    }

    #[test]
    fn browser_guard_allows_everything() {
        let mut config = WebguardConfig::default();
        config.shell.mode = ShellMode::Browser;
        let guard = build_guard(&config);
        assert_eq!(guard.mode(), MatchMode::Open);
        assert!(guard.is_allowed("https://malicious.test/"));
    }
}
