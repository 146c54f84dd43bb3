use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};
use crate::guard::NavigationGuard;

use super::types::SurfaceRole;
use super::WebViewManager;

// =============================================================================
// PANEL NAVIGATION
// =============================================================================

/// URL prefixes the shell's own inline-HTML surfaces may navigate to.
pub const PANEL_NAV_PREFIXES: &[&str] = &["about:", "data:"];

/// Whether a chrome or toolbar surface may navigate to `url`.
pub fn is_panel_navigation_allowed(url: &str) -> bool {
    PANEL_NAV_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}

fn push_event(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        sid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    surface_id = sid,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(surface_id = sid, body_len = body.len(), "IPC message from JS");
            push_event(&events, WebViewEvent::IpcMessage { surface_id: sid, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        sid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(surface_id = sid, ?state, url = %url, "page load");
            push_event(
                &events,
                WebViewEvent::PageLoad {
                    surface_id: sid,
                    state,
                    url,
                },
            );
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        sid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(surface_id = sid, title = %title, "title changed");
            push_event(
                &events,
                WebViewEvent::TitleChanged {
                    surface_id: sid,
                    title,
                },
            );
        })
    }

    /// Browser surfaces consult the guard and cancel blocked navigations
    /// before they start. The event is queued either way so the controller
    /// can run the full block path.
    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        sid: u32,
        role: SurfaceRole,
        guard: NavigationGuard,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            let allowed = match role {
                SurfaceRole::Browser => guard.is_allowed(&url),
                SurfaceRole::Chrome | SurfaceRole::Toolbar => is_panel_navigation_allowed(&url),
            };

            if allowed {
                debug!(surface_id = sid, url = %url, "navigation allowed");
            } else {
                warn!(
                    surface_id = sid,
                    url = %url,
                    ?role,
                    "navigation blocked: URL not in allow-list"
                );
            }

            if role == SurfaceRole::Browser {
                push_event(
                    &events,
                    WebViewEvent::NavigationRequested {
                        surface_id: sid,
                        url,
                        allowed,
                    },
                );
            }
            allowed
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_allow_inline_content() {
        assert!(is_panel_navigation_allowed("about:blank"));
        assert!(is_panel_navigation_allowed("data:text/html,<p>x</p>"));
    }

    #[test]
    fn panels_block_remote_content() {
        assert!(!is_panel_navigation_allowed("https://gemini.google.com/app"));
        assert!(!is_panel_navigation_allowed("http://localhost:8080"));
        assert!(!is_panel_navigation_allowed("file:///etc/passwd"));
        assert!(!is_panel_navigation_allowed("javascript:alert(1)"));
        assert!(!is_panel_navigation_allowed(""));
    }

    #[test]
    fn push_event_appends() {
        let events = Mutex::new(Vec::new());
        push_event(&events, WebViewEvent::Closed { surface_id: 2 });
        assert_eq!(events.lock().unwrap().len(), 1);
    }
}
