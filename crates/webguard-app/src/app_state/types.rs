//! Constants and small types shared across the app state modules.

use std::time::Duration;

use webguard_webview::controller::MAX_SURFACE_ID;
use webguard_webview::SurfaceRole;

/// How often pending webview events are drained.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Registry key of the chrome overlay. Browser surfaces count up from 1.
pub(super) const CHROME_SURFACE_ID: u32 = u32::MAX;

/// Registry key of the toolbar.
pub(super) const TOOLBAR_SURFACE_ID: u32 = u32::MAX - 1;

const _: () = assert!(TOOLBAR_SURFACE_ID > MAX_SURFACE_ID);

/// Window title for a page title. Falls back to the configured title.
pub(super) fn window_title(page_title: &str, app_title: &str) -> String {
    let page_title = page_title.trim();
    if page_title.is_empty() || page_title == app_title {
        app_title.to_string()
    } else {
        format!("{page_title} - {app_title}")
    }
}

/// Which role a registry key belongs to.
pub(super) fn role_of(surface_id: u32) -> SurfaceRole {
    match surface_id {
        CHROME_SURFACE_ID => SurfaceRole::Chrome,
        TOOLBAR_SURFACE_ID => SurfaceRole::Toolbar,
        _ => SurfaceRole::Browser,
    }
}
