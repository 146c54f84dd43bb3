//! Screen controller: the navigation-interception and error-recovery state
//! machine.
//!
//! Every browser-surface callback is fed to exactly one method here, which
//! runs to completion and returns the surface commands to issue. The
//! controller never talks to a webview itself.

use tracing::{debug, info, warn};
use webguard_common::{Notification, NotificationQueue};

use crate::guard::{NavigationDecision, NavigationEvent, NavigationGuard, Revert};
use crate::panels::ChromeModel;
use crate::session::{FailureReason, SessionState};
use crate::surface::SurfaceCommand;

// =============================================================================
// ALERT TEXT
// =============================================================================

pub const RESTRICTED_TITLE: &str = "Navigation restricted";
pub const RESTRICTED_BODY: &str =
    "Navigation is restricted to Gemini and its related Google domains.";
pub const LOAD_ERROR_TITLE: &str = "Loading error";
pub const LOAD_ERROR_BODY: &str =
    "A problem occurred while loading the page. Check your internet connection.";
pub const HTTP_ERROR_TITLE: &str = "Connection error";

/// Maximum number of alerts waiting for acknowledgement.
const ALERT_CAPACITY: usize = 8;

/// Highest id handed to a browser surface. Ids above it are free for the
/// embedding layer's own surfaces.
pub const MAX_SURFACE_ID: u32 = u32::MAX - 16;

/// What happens when the user acknowledges an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AckEffect {
    None,
    /// Fail the session, provided the surface that reported the error is
    /// still the mounted one.
    EnterFailed {
        surface_id: u32,
        reason: FailureReason,
    },
}

pub struct ScreenController {
    guard: NavigationGuard,
    state: SessionState,
    alerts: NotificationQueue<AckEffect>,
    /// Id of the mounted browser surface, `None` while unmounted.
    surface_id: Option<u32>,
    next_surface_id: u32,
}

impl ScreenController {
    pub fn new(guard: NavigationGuard) -> Self {
        Self {
            guard,
            state: SessionState::Loading,
            alerts: NotificationQueue::new(ALERT_CAPACITY),
            surface_id: None,
            next_surface_id: 1,
        }
    }

    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }

    pub fn mounted_surface(&self) -> Option<u32> {
        self.surface_id
    }

    /// Record that a new browser surface has been mounted and return its id.
    /// Events tagged with any other id are ignored from now on.
    pub fn mount_surface(&mut self) -> u32 {
        let id = self.next_surface_id;
        self.next_surface_id = if id >= MAX_SURFACE_ID { 1 } else { id + 1 };
        self.surface_id = Some(id);
        if !self.state.wants_surface() {
            self.state = SessionState::Loading;
        }
        debug!(surface_id = id, state = self.state.name(), "surface mounted");
        id
    }

    fn is_current(&self, surface_id: u32) -> bool {
        if self.surface_id == Some(surface_id) {
            return true;
        }
        debug!(surface_id, mounted = ?self.surface_id, "ignoring event from stale surface");
        false
    }

    fn transition(&mut self, next: SessionState) {
        if self.state != next {
            debug!(from = self.state.name(), to = next.name(), "session transition");
        }
        if !next.wants_surface() {
            self.surface_id = None;
        }
        self.state = next;
    }

    // -------------------------------------------------------------------------
    // Browser surface events
    // -------------------------------------------------------------------------

    /// Navigation state changed (initial load, redirect, link, history, or
    /// in-page anchor).
    pub fn on_navigation(&mut self, surface_id: u32, event: &NavigationEvent) -> Vec<SurfaceCommand> {
        if !self.is_current(surface_id) {
            return Vec::new();
        }
        match self.guard.evaluate(&event.url) {
            NavigationDecision::Allow => Vec::new(),
            NavigationDecision::Block { revert } => self.block(&event.url, revert),
        }
    }

    fn block(&mut self, url: &str, revert: Revert) -> Vec<SurfaceCommand> {
        warn!(url, ?revert, "navigation blocked: URL not in allow-list");

        let mut commands = vec![SurfaceCommand::Stop];
        self.transition(SessionState::Blocked {
            url: url.to_string(),
        });
        if revert == Revert::GoBack {
            commands.push(SurfaceCommand::GoBack);
        }
        self.alerts.push(
            Notification::warning(RESTRICTED_TITLE, RESTRICTED_BODY),
            AckEffect::None,
        );
        commands
    }

    pub fn on_load_start(&mut self, surface_id: u32, url: &str) {
        if !self.is_current(surface_id) {
            return;
        }
        debug!(surface_id, url, "load started");
        self.transition(SessionState::Loading);
    }

    /// Load finished. The final URL goes through the guard once more since
    /// redirects may have landed somewhere else.
    pub fn on_load_end(&mut self, surface_id: u32, url: &str) -> Vec<SurfaceCommand> {
        if !self.is_current(surface_id) {
            return Vec::new();
        }
        match self.guard.evaluate(url) {
            NavigationDecision::Allow => {
                if self.state.is_loading() {
                    info!(surface_id, url, "page ready");
                    self.transition(SessionState::Ready);
                }
                Vec::new()
            }
            NavigationDecision::Block { revert } => self.block(url, revert),
        }
    }

    /// Generic load failure: fails the session immediately.
    pub fn on_load_error(&mut self, surface_id: u32, description: &str) {
        if !self.is_current(surface_id) {
            return;
        }
        warn!(surface_id, description, "page failed to load");
        self.transition(SessionState::Failed {
            reason: FailureReason::LoadFailed {
                description: description.to_string(),
            },
        });
        self.alerts.push(
            Notification::error(LOAD_ERROR_TITLE, LOAD_ERROR_BODY),
            AckEffect::None,
        );
    }

    /// HTTP or TLS error. Only raises the alert; the session fails when the
    /// user acknowledges it.
    pub fn on_http_error(&mut self, surface_id: u32, url: &str, detail: &str) {
        if !self.is_current(surface_id) {
            return;
        }
        warn!(surface_id, url, detail, "HTTP error reported");
        self.alerts.push(
            Notification::error(
                HTTP_ERROR_TITLE,
                format!("Failed to load {url}: {detail}"),
            ),
            AckEffect::EnterFailed {
                surface_id,
                reason: FailureReason::Http {
                    url: url.to_string(),
                    detail: detail.to_string(),
                },
            },
        );
    }

    // -------------------------------------------------------------------------
    // User actions
    // -------------------------------------------------------------------------

    /// Retry from the error panel. Inert unless the session is in error.
    pub fn retry(&mut self) -> Vec<SurfaceCommand> {
        if !self.state.is_error() {
            debug!(state = self.state.name(), "retry ignored");
            return Vec::new();
        }
        info!(from = self.state.name(), "retrying");
        self.transition(SessionState::Loading);
        vec![SurfaceCommand::Reload]
    }

    /// Dismiss the front alert and apply its effect.
    pub fn acknowledge_alert(&mut self) -> Option<Notification> {
        let (notification, effect) = self.alerts.acknowledge()?;
        if let AckEffect::EnterFailed { surface_id, reason } = effect {
            if self.surface_id == Some(surface_id) {
                self.transition(SessionState::Failed { reason });
            } else {
                debug!(surface_id, "alert effect dropped: surface no longer mounted");
            }
        }
        Some(notification)
    }

    pub fn current_alert(&self) -> Option<&Notification> {
        self.alerts.front()
    }

    pub fn pending_alerts(&self) -> usize {
        self.alerts.len()
    }

    /// Snapshot for the chrome overlay.
    pub fn chrome_model(&self) -> ChromeModel {
        ChromeModel::new(&self.state, self.alerts.front().cloned())
    }
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new(NavigationGuard::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================
