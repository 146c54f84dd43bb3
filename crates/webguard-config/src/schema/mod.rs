//! Configuration schema types for webguard.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! The allow-list and home URL are compiled in, not configured here.

mod logging;
mod navigation;
mod shell;
mod webview;
mod window;

pub use logging::*;
pub use navigation::*;
pub use shell::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for webguard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebguardConfig {
    pub shell: ShellConfig,
    pub navigation: NavigationConfig,
    pub window: WindowConfig,
    pub webview: WebViewSettings,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use webguard_common::{MatchMode, ShellMode};

    #[test]
    fn empty_toml_gives_defaults() {
        let config: WebguardConfig = toml::from_str("").unwrap();
        assert_eq!(config.shell.mode, ShellMode::Restricted);
        assert_eq!(config.navigation.match_mode, MatchMode::Substring);
        assert_eq!(config.window.title, "Gemini");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_toml_mixes_sections() {
        let toml_str = r#"
[shell]
mode = "browser"

[window]
width = 1024
"#;
        let config: WebguardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.shell.mode, ShellMode::Browser);
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 800);
        assert!(config.webview.clipboard);
    }
}
