//! Navigation guard tuning.

use serde::{Deserialize, Serialize};
use webguard_common::MatchMode;

/// How the restricted shell checks navigation targets.
///
/// Only consulted in restricted mode; the browser shell always runs the
/// guard in [`MatchMode::Open`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub match_mode: MatchMode,
    /// Schemes accepted by host matching.
    pub allowed_schemes: Vec<String>,
    /// Non-default ports accepted by host matching.
    pub allowed_ports: Vec<u16>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Substring,
            allowed_schemes: vec!["https".into()],
            allowed_ports: Vec::new(),
        }
    }
}
