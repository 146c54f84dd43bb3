//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances for the shell's three
//! surface roles and funnels their callbacks into one event queue.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::{SurfaceRole, WebViewConfig};

/// Creates WebViews and owns the shared event sink.
pub struct WebViewManager {
    /// Event sink drained by the main event loop.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewManager {
    /// Create a new WebView manager.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_queue() {
        let manager = WebViewManager::new();
        manager
            .events
            .lock()
            .unwrap()
            .push(WebViewEvent::Closed { surface_id: 1 });
        let drained = manager.drain_events();
        assert_eq!(drained.len(), 1);
        assert!(manager.drain_events().is_empty());
    }
}
