//! Window creation and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use webguard_common::ShellError;
use webguard_webview::{WebViewManager, WebViewRegistry};

use super::core::ShellApp;

impl ShellApp {
    /// Create the window and the webview registry.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> webguard_common::Result<()> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| ShellError::Window(e.to_string()))?;

        self.webviews = Some(WebViewRegistry::new(WebViewManager::new()));
        self.window = Some(window);
        tracing::info!(mode = %self.config.shell.mode, "Window created");
        Ok(())
    }
}
