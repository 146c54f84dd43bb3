//! Graceful shutdown: destroy webviews, release the window.

use super::core::ShellApp;

impl ShellApp {
    /// Tear down every surface before the window goes away.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(ref mut registry) = self.webviews {
            registry.destroy_all();
        }
        self.webviews = None;
        self.browser_id = None;
        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::ShellApp;
    use webguard_config::WebguardConfig;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = ShellApp::new(WebguardConfig::default());

        app.shutdown();

        assert!(app.webviews.is_none());
        assert!(app.window.is_none());
        assert!(app.browser_id.is_none());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = ShellApp::new(WebguardConfig::default());

        app.shutdown();
        app.shutdown();

        assert!(app.webviews.is_none());
    }
}
