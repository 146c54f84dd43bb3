//! Surface lifecycle: mount and unmount the browser, keep the chrome and
//! toolbar in sync, poll events, execute surface commands.

use webguard_common::{Rect, ShellError};
use webguard_webview::panels::{CHROME_HTML, TOOLBAR_HTML};
use webguard_webview::{
    BrowserSurface, NavigationEvent, PageLoadState, SurfaceCommand, SurfaceRole, WebViewConfig,
    WebViewEvent, HOME_URL,
};

use crate::app_state::core::ShellApp;
use crate::app_state::types::{role_of, window_title, CHROME_SURFACE_ID, TOOLBAR_SURFACE_ID};

use super::bounds::{compute_layout, rect_to_wry, SurfaceLayout};

impl ShellApp {
    // =========================================================================
    // LAYOUT
    // =========================================================================

    /// Current window area in logical coordinates.
    fn viewport(&self) -> Rect {
        match &self.window {
            Some(w) => {
                let size = w.inner_size().to_logical::<f64>(w.scale_factor());
                Rect::new(0.0, 0.0, size.width, size.height)
            }
            None => Rect::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    fn layout(&self) -> SurfaceLayout {
        compute_layout(
            self.viewport(),
            self.config.shell.mode,
            self.config.shell.toolbar_height as f64,
        )
    }

    fn with_settings(&self, mut config: WebViewConfig) -> WebViewConfig {
        let settings = &self.config.webview;
        config.devtools = settings.devtools;
        config.clipboard = settings.clipboard;
        config.autoplay = settings.autoplay;
        if config.role == SurfaceRole::Browser {
            config.user_agent = settings.user_agent.clone();
        }
        config
    }

    /// Create one of the shell's own surfaces, replacing any previous one.
    fn create_panel(&mut self, surface_id: u32, role: SurfaceRole, html: &str, rect: Rect) {
        let config = self.with_settings(WebViewConfig::panel(role, html));
        let (Some(window), Some(registry)) = (&self.window, &mut self.webviews) else {
            tracing::warn!(?role, "Cannot create panel: no window");
            return;
        };

        registry.destroy(surface_id);
        if let Err(e) = registry.create(surface_id, window.as_ref(), rect_to_wry(&rect), config) {
            tracing::error!(?role, error = %e, "Failed to create panel");
        }
    }

    // =========================================================================
    // SURFACES
    // =========================================================================

    /// Create the address-bar toolbar (browser mode only).
    pub(in crate::app_state) fn create_toolbar(&mut self) {
        if self.address_bar.is_none() {
            return;
        }
        if let Some(rect) = self.layout().toolbar {
            self.create_panel(TOOLBAR_SURFACE_ID, SurfaceRole::Toolbar, TOOLBAR_HTML, rect);
        }
    }

    /// (Re)create the chrome overlay so it stacks above the browser surface.
    fn create_chrome(&mut self) {
        let rect = self.layout().content;
        self.create_panel(CHROME_SURFACE_ID, SurfaceRole::Chrome, CHROME_HTML, rect);
        self.needs_sync = true;
    }

    /// Mount a fresh browser surface at `url`, dropping any previous one.
    pub(in crate::app_state) fn mount_browser(&mut self, url: &str) {
        if self.window.is_none() || self.webviews.is_none() {
            tracing::warn!(url, "Cannot mount browser: no window");
            return;
        }
        self.unmount_browser();

        let surface_id = self.controller.mount_surface();
        match self.create_browser(surface_id, url) {
            Ok(()) => {
                tracing::info!(surface_id, url, "Browser surface mounted");
                self.browser_id = Some(surface_id);
            }
            Err(e) => {
                tracing::error!(surface_id, error = %e, "Failed to create browser surface");
                self.controller.on_load_error(surface_id, &e.to_string());
            }
        }

        self.create_chrome();
    }

    fn create_browser(&mut self, surface_id: u32, url: &str) -> webguard_common::Result<()> {
        let config = self.with_settings(WebViewConfig::browser(url, self.controller.guard().clone()));
        let bounds = rect_to_wry(&self.layout().content);
        let (Some(window), Some(registry)) = (&self.window, &mut self.webviews) else {
            return Err(ShellError::Window("no window to attach to".into()));
        };
        registry.create(surface_id, window.as_ref(), bounds, config)?;
        Ok(())
    }

    fn unmount_browser(&mut self) {
        let Some(surface_id) = self.browser_id.take() else {
            return;
        };
        if let Some(ref mut registry) = self.webviews {
            if registry.destroy(surface_id) {
                tracing::info!(surface_id, "Browser surface unmounted");
            }
        }
    }

    /// Drop the browser surface once the controller has let go of it.
    fn reconcile_browser(&mut self) {
        if self.browser_id.is_some() && self.controller.mounted_surface() != self.browser_id {
            self.unmount_browser();
            self.needs_sync = true;
        }
    }

    /// Sync all webview bounds to the current window layout.
    pub(in crate::app_state) fn sync_webview_bounds(&mut self) {
        let layout = self.layout();
        let Some(ref registry) = self.webviews else {
            return;
        };

        let mut targets = vec![(CHROME_SURFACE_ID, layout.content)];
        if let Some(id) = self.browser_id {
            targets.push((id, layout.content));
        }
        if let Some(rect) = layout.toolbar {
            targets.push((TOOLBAR_SURFACE_ID, rect));
        }

        for (surface_id, rect) in targets {
            if let Some(handle) = registry.get(surface_id) {
                if let Err(e) = handle.set_bounds(rect_to_wry(&rect)) {
                    tracing::warn!(surface_id, error = %e, "Failed to update webview bounds");
                }
            }
        }
    }

    // =========================================================================
    // PANEL MODELS
    // =========================================================================

    /// Render the controller's state into the chrome overlay and hide the
    /// overlay when it has nothing to show.
    pub(in crate::app_state) fn push_chrome_model(&self) {
        let Some(handle) = self.webviews.as_ref().and_then(|r| r.get(CHROME_SURFACE_ID)) else {
            return;
        };
        let model = self.controller.chrome_model();
        if let Err(e) = handle.send_ipc("render", &model.to_json()) {
            tracing::warn!(error = %e, "Failed to render chrome");
        }
        if let Err(e) = handle.set_visible(model.is_visible()) {
            tracing::warn!(error = %e, "Failed to toggle chrome visibility");
        }
    }

    pub(in crate::app_state) fn push_toolbar_model(&self) {
        let Some(bar) = &self.address_bar else {
            return;
        };
        let Some(handle) = self.webviews.as_ref().and_then(|r| r.get(TOOLBAR_SURFACE_ID)) else {
            return;
        };
        let payload = serde_json::to_value(bar.model()).unwrap_or(serde_json::Value::Null);
        if let Err(e) = handle.send_ipc("address_update", &payload) {
            tracing::warn!(error = %e, "Failed to update toolbar");
        }
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    /// Where a `Reload` lands when no surface is mounted: the page the
    /// browser shell last showed, or home in the restricted shell.
    pub(in crate::app_state) fn reload_url(&self) -> String {
        match &self.address_bar {
            Some(bar) if !bar.url().is_empty() => bar.url().to_string(),
            _ => HOME_URL.to_string(),
        }
    }

    /// Issue surface commands to the mounted browser. Nothing is awaited;
    /// failures are logged and dropped. With no surface mounted, `Reload`
    /// and `Load` mount a fresh one.
    pub(in crate::app_state) fn execute_surface_commands(&mut self, commands: Vec<SurfaceCommand>) {
        for command in commands {
            let handle = match (self.browser_id, self.webviews.as_mut()) {
                (Some(id), Some(registry)) => registry.get_mut(id),
                _ => None,
            };

            match handle {
                Some(handle) => {
                    let surface_id = handle.surface_id();
                    if let Err(e) = handle.execute(&command) {
                        tracing::warn!(surface_id, command = command.name(), error = %e, "Surface command failed");
                    }
                }
                None => match command {
                    SurfaceCommand::Reload => {
                        let url = self.reload_url();
                        self.mount_browser(&url);
                    }
                    SurfaceCommand::Load(url) => self.mount_browser(&url),
                    other => {
                        tracing::debug!(command = other.name(), "No browser surface; command dropped");
                    }
                },
            }
        }
    }

    // =========================================================================
    // EVENT POLLING
    // =========================================================================

    /// Process pending webview events (IPC messages, page loads, etc.).
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events: Vec<WebViewEvent> = match &self.webviews {
            Some(registry) => registry.drain_events(),
            None => return,
        };
        if events.is_empty() {
            return;
        }

        for event in events {
            match event {
                WebViewEvent::IpcMessage { surface_id, body } => {
                    self.handle_ipc_message(surface_id, &body);
                }
                WebViewEvent::PageLoad {
                    surface_id,
                    state,
                    url,
                } => {
                    self.handle_page_load(surface_id, state, &url);
                }
                WebViewEvent::NavigationRequested {
                    surface_id,
                    url,
                    allowed,
                } => {
                    tracing::debug!(surface_id, url = %url, allowed, "Navigation requested");
                    if role_of(surface_id) == SurfaceRole::Browser {
                        let commands = self
                            .controller
                            .on_navigation(surface_id, &NavigationEvent::new(url));
                        self.execute_surface_commands(commands);
                    }
                }
                WebViewEvent::TitleChanged { surface_id, title } => {
                    if Some(surface_id) == self.browser_id {
                        if let Some(ref window) = self.window {
                            window.set_title(&window_title(&title, &self.config.window.title));
                        }
                    }
                }
                WebViewEvent::Closed { surface_id } => {
                    tracing::debug!(surface_id, "WebView closed");
                }
            }
            self.reconcile_browser();
        }

        self.needs_sync = true;
    }

    fn handle_page_load(&mut self, surface_id: u32, state: PageLoadState, url: &str) {
        tracing::debug!(surface_id, ?state, url = %url, "Page load");

        if role_of(surface_id) != SurfaceRole::Browser {
            // Panel documents are ready; the next sync pushes their models.
            return;
        }

        match state {
            PageLoadState::Started => self.controller.on_load_start(surface_id, url),
            PageLoadState::Finished => {
                let commands = self.controller.on_load_end(surface_id, url);
                self.execute_surface_commands(commands);
            }
        }
    }
}
