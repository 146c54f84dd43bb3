use std::collections::HashMap;

use tracing::debug;
use webguard_common::WebViewError;
use wry::raw_window_handle;

use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Maps surface ids to WebView handles and owns the shared event sink.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: HashMap<u32, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Create a WebView for a surface id and register it. An existing
    /// surface with the same id is replaced.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        surface_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), WebViewError> {
        let handle = self.manager.create(surface_id, window, bounds, config)?;
        if self.handles.insert(surface_id, handle).is_some() {
            debug!(surface_id, "WebView replaced");
        }
        Ok(())
    }

    pub fn get(&self, surface_id: u32) -> Option<&WebViewHandle> {
        self.handles.get(&surface_id)
    }

    pub fn get_mut(&mut self, surface_id: u32) -> Option<&mut WebViewHandle> {
        self.handles.get_mut(&surface_id)
    }

    /// Destroy a WebView by surface id.
    pub fn destroy(&mut self, surface_id: u32) -> bool {
        if self.handles.remove(&surface_id).is_some() {
            debug!(surface_id, "WebView destroyed");
            if let Ok(mut evts) = self.manager.events.lock() {
                evts.push(WebViewEvent::Closed { surface_id });
            }
            true
        } else {
            false
        }
    }

    pub fn active_surfaces(&self) -> Vec<u32> {
        self.handles.keys().copied().collect()
    }

    /// Drain all pending events from all WebViews.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy all active WebViews. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        for surface_id in self.active_surfaces() {
            self.destroy(surface_id);
        }
    }
}
