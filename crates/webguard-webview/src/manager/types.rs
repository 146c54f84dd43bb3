use crate::guard::NavigationGuard;

/// What a WebView is for. Decides its init script, its navigation policy,
/// and which IPC kinds the shell accepts from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceRole {
    /// The embedded site.
    Browser,
    /// Loading spinner, error panel, and alerts.
    Chrome,
    /// Address bar (browser shell only).
    Toolbar,
}

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    pub role: SurfaceRole,
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Guard consulted by the navigation handler of browser surfaces.
    pub guard: NavigationGuard,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            role: SurfaceRole::Browser,
            url: None,
            html: None,
            guard: NavigationGuard::default(),
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: false,
        }
    }
}

impl WebViewConfig {
    /// A browser surface loading `url` under `guard`.
    pub fn browser(url: impl Into<String>, guard: NavigationGuard) -> Self {
        Self {
            role: SurfaceRole::Browser,
            url: Some(url.into()),
            guard,
            ..Default::default()
        }
    }

    /// One of the shell's own surfaces rendering inline HTML.
    pub fn panel(role: SurfaceRole, html: impl Into<String>) -> Self {
        Self {
            role,
            html: Some(html.into()),
            transparent: role == SurfaceRole::Chrome,
            ..Default::default()
        }
    }
}
