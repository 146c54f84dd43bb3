//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log settings. `level` is a `tracing` filter level name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
