//! Full configuration validation.
//!
//! Validates window sizes, navigation schemes, and the log level, collecting
//! every problem into a single error.

use crate::schema::WebguardConfig;
use webguard_common::ConfigError;

/// Schemes the host matcher knows how to reason about.
const KNOWN_SCHEMES: &[&str] = &["https", "http"];

/// Level names accepted by the `tracing` filter.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WebguardConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Window constraints
    validate_range(&mut errors, "window.width", config.window.width, 320, 7680);
    validate_range(&mut errors, "window.height", config.window.height, 240, 4320);
    if config.window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }

    validate_range(
        &mut errors,
        "shell.toolbar_height",
        config.shell.toolbar_height,
        24,
        200,
    );

    // Navigation constraints
    if config.navigation.allowed_schemes.is_empty() {
        errors.push("navigation.allowed_schemes must not be empty".into());
    }
    for scheme in &config.navigation.allowed_schemes {
        if !KNOWN_SCHEMES.contains(&scheme.as_str()) {
            errors.push(format!(
                "navigation.allowed_schemes: unsupported scheme '{scheme}'"
            ));
        }
    }
    if config.navigation.allowed_ports.contains(&0) {
        errors.push("navigation.allowed_ports: port 0 is not allowed".into());
    }

    // Logging
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level: unknown level '{}'",
            config.logging.level
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&WebguardConfig::default()).is_ok());
    }

    #[test]
    fn window_too_small_is_rejected() {
        let mut config = WebguardConfig::default();
        config.window.width = 100;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.width = 100"));
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = WebguardConfig::default();
        config.window.height = 10;
        config.navigation.allowed_schemes = vec!["ftp".into()];
        config.logging.level = "loud".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.height"));
        assert!(err.contains("unsupported scheme 'ftp'"));
        assert!(err.contains("unknown level 'loud'"));
    }

    #[test]
    fn empty_schemes_rejected() {
        let mut config = WebguardConfig::default();
        config.navigation.allowed_schemes.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn port_zero_rejected() {
        let mut config = WebguardConfig::default();
        config.navigation.allowed_ports = vec![0];
        assert!(validate(&config).is_err());
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = WebguardConfig::default();
        config.logging.level = "DEBUG".into();
        assert!(validate(&config).is_ok());
    }
}
