//! webguard configuration system.
//!
//! TOML-based configuration with validation. All sections use defaults, so
//! partial configs work out of the box. The home URL and the domain
//! allow-list are compile-time constants in `webguard-webview`, not config.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{WebguardConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{ConfigOrigin, LoadedConfig};

use std::path::Path;

use webguard_common::ConfigError;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    let path = toml_loader::default_config_path()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    toml_loader::read_or_create(&path)
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    toml_loader::read(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.config.logging.level, "debug");
        assert!(matches!(loaded.origin, ConfigOrigin::File(_)));
    }

    #[test]
    fn explicit_path_is_never_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("override.toml");
        assert!(load_config_from(&path).is_err());
        assert!(!path.exists());
    }
}
