//! Shell variant selection.

use serde::{Deserialize, Serialize};
use webguard_common::ShellMode;

/// Which shell variant to run and how its chrome behaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub mode: ShellMode,
    /// Height of the address bar strip in browser mode, in logical pixels.
    pub toolbar_height: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mode: ShellMode::Restricted,
            toolbar_height: 48,
        }
    }
}
