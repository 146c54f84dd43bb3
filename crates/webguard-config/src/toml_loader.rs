//! Reading, creating, and validating the TOML config file.
//!
//! Loading never logs. Callers receive a [`LoadedConfig`] describing where
//! the config came from and report it once logging is up.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use webguard_common::ConfigError;

use crate::schema::WebguardConfig;
use crate::validation;

/// Where a loaded config came from.
#[derive(Debug)]
pub enum ConfigOrigin {
    /// Parsed and validated from an existing file.
    File(PathBuf),
    /// The file was missing; a commented default was written there.
    Created(PathBuf),
    /// The file parsed but failed validation; defaults are in use.
    Rejected { path: PathBuf, error: ConfigError },
}

/// A usable config plus the outcome that produced it.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: WebguardConfig,
    pub origin: ConfigOrigin,
}

impl LoadedConfig {
    /// Report the load outcome. Call after the subscriber is installed.
    pub fn log(&self) {
        match &self.origin {
            ConfigOrigin::File(path) => info!("loaded config from {}", path.display()),
            ConfigOrigin::Created(path) => {
                info!("no config found, created default at {}", path.display())
            }
            ConfigOrigin::Rejected { path, error } => {
                warn!("config validation warning in {}: {error}", path.display());
                warn!("falling back to default config");
            }
        }
    }
}

/// Read and validate the config at `path`.
///
/// Missing fields take serde defaults. A file that fails validation yields
/// the default config with [`ConfigOrigin::Rejected`].
pub fn read(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(io_error("read", path, e)),
    };

    let config: WebguardConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    let path = path.to_path_buf();
    Ok(match validation::validate(&config) {
        Ok(()) => LoadedConfig {
            config,
            origin: ConfigOrigin::File(path),
        },
        Err(error) => LoadedConfig {
            config: WebguardConfig::default(),
            origin: ConfigOrigin::Rejected { path, error },
        },
    })
}

/// Like [`read`], but a missing file is created with the commented default.
pub fn read_or_create(path: &Path) -> Result<LoadedConfig, ConfigError> {
    match read(path) {
        Err(ConfigError::FileNotFound(_)) => {
            write_default(path)?;
            Ok(LoadedConfig {
                config: WebguardConfig::default(),
                origin: ConfigOrigin::Created(path.to_path_buf()),
            })
        }
        other => other,
    }
}

/// `<config dir>/webguard/config.toml`, e.g. `~/.config/webguard/config.toml`
/// on Linux and `~/Library/Application Support/webguard/config.toml` on macOS.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("webguard").join("config.toml"))
}

fn write_default(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create", parent, e))?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(|e| io_error("write", path, e))
}

fn io_error(action: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {action} {}: {e}", path.display()))
}

const DEFAULT_CONFIG_TOML: &str = r##"# webguard configuration
# Schema version 1
# Uncomment a line to override it; anything left out keeps its default.
# The home URL and the domain allow-list are built in and cannot be changed here.

[shell]
# mode = "restricted"     # restricted, browser
# toolbar_height = 48     # 24-200, browser mode only

[navigation]
# match_mode = "substring"  # substring, host
# allowed_schemes = ["https"]
# allowed_ports = []

[window]
# title = "Gemini"
# width = 1280            # 320-7680
# height = 800            # 240-4320

[webview]
# user_agent = "..."
# devtools = false
# clipboard = true
# autoplay = false

[logging]
# level = "info"          # trace, debug, info, warn, error, off
"##;
