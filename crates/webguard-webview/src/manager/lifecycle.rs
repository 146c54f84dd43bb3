use std::sync::Arc;

use tracing::debug;
use webguard_common::WebViewError;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::allowlist::ABOUT_BLANK;
use crate::ipc::{ERROR_REPORTER_SCRIPT, IPC_INIT_SCRIPT};

use super::handle::WebViewHandle;
use super::types::{SurfaceRole, WebViewConfig};
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        surface_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, WebViewError> {
        let events = Arc::clone(&self.events);
        let sid = surface_id;

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(config.role == SurfaceRole::Browser);

        // The browser surface only reports; the shell's panels get the bridge.
        builder = match config.role {
            SurfaceRole::Browser => builder.with_initialization_script(ERROR_REPORTER_SCRIPT),
            SurfaceRole::Chrome | SurfaceRole::Toolbar => {
                builder.with_initialization_script(IPC_INIT_SCRIPT)
            }
        };

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), sid);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), sid);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), sid);
        builder = Self::attach_navigation_handler(
            builder,
            Arc::clone(&events),
            sid,
            config.role,
            config.guard.clone(),
        );

        // Set initial content
        let initial_url = match (&config.url, &config.html) {
            (Some(url), _) => {
                builder = builder.with_url(url);
                url.as_str()
            }
            (None, Some(html)) => {
                builder = builder.with_html(html);
                ABOUT_BLANK
            }
            (None, None) => {
                builder = builder.with_html("<html><body></body></html>");
                ABOUT_BLANK
            }
        };

        let webview = builder
            .build_as_child(window)
            .map_err(|e| WebViewError::Create(e.to_string()))?;

        debug!(surface_id, role = ?config.role, url = %initial_url, "WebView created");

        Ok(WebViewHandle {
            webview,
            surface_id,
        })
    }
}
