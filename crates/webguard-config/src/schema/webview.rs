//! Browser surface settings.

use serde::{Deserialize, Serialize};

/// Options applied to every browser surface the shell mounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Custom user agent. `None` keeps the platform default.
    pub user_agent: Option<String>,
    /// Enable devtools. Always on in debug builds.
    pub devtools: bool,
    pub clipboard: bool,
    pub autoplay: bool,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
            clipboard: true,
            autoplay: false,
        }
    }
}
