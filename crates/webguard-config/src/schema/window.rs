//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Top-level window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical width (valid range: 320-7680).
    pub width: u32,
    /// Initial logical height (valid range: 240-4320).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Gemini".into(),
            width: 1280,
            height: 800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Gemini");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str("title = \"Assistant\"").unwrap();
        assert_eq!(config.title, "Assistant");
        assert_eq!(config.width, 1280);
    }
}
