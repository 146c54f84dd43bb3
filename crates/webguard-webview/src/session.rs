//! Session state of the screen and the view it selects.
//!
//! A tagged union replaces the old `loading`/`error` flag pair, so "loading
//! and failed at once" cannot be represented.

use serde::Serialize;

/// Why the session entered [`SessionState::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// Network, DNS, timeout, or generic render failure.
    LoadFailed { description: String },
    /// HTTP status or TLS failure on the document or a sub-resource.
    Http { url: String, detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Loading,
    Ready,
    Blocked { url: String },
    Failed { reason: FailureReason },
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Blocked { .. } | Self::Failed { .. })
    }

    /// Whether the browser surface should exist.
    pub fn wants_surface(&self) -> bool {
        !self.is_error()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Blocked { .. } => "blocked",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn view(&self) -> View {
        match self {
            Self::Loading => View::Spinner,
            Self::Ready => View::Browser,
            Self::Blocked { .. } | Self::Failed { .. } => View::ErrorPanel {
                retry_enabled: true,
            },
        }
    }
}

/// What the screen renders above (or instead of) the browser surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// Browser surface mounted with the loading overlay above it.
    Spinner,
    /// Browser surface mounted, nothing above it.
    Browser,
    /// Browser surface unmounted, error panel with retry in its place.
    ErrorPanel { retry_enabled: bool },
}
