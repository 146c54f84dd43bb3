//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance, tagged with the id of the surface
/// that produced them.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        surface_id: u32,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { surface_id: u32, title: String },
    /// An IPC message was received from JavaScript.
    IpcMessage { surface_id: u32, body: String },
    /// A navigation was requested. If `allowed` is false, the navigation
    /// handler already cancelled it.
    NavigationRequested {
        surface_id: u32,
        url: String,
        allowed: bool,
    },
    /// WebView was closed / destroyed.
    Closed { surface_id: u32 },
}

impl WebViewEvent {
    pub fn surface_id(&self) -> u32 {
        match self {
            Self::PageLoad { surface_id, .. }
            | Self::TitleChanged { surface_id, .. }
            | Self::IpcMessage { surface_id, .. }
            | Self::NavigationRequested { surface_id, .. }
            | Self::Closed { surface_id } => *surface_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_load_state_from_wry() {
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Started),
            PageLoadState::Started
        );
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Finished),
            PageLoadState::Finished
        );
    }

    #[test]
    fn surface_id_accessor() {
        let event = WebViewEvent::NavigationRequested {
            surface_id: 7,
            url: "https://x.test/".into(),
            allowed: false,
        };
        assert_eq!(event.surface_id(), 7);
        assert_eq!(WebViewEvent::Closed { surface_id: 3 }.surface_id(), 3);
    }
}
