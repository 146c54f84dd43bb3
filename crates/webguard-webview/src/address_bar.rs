//! Address bar for the browser shell.
//!
//! Keeps the typed text in sync with the surface's reported URL and turns a
//! submission into a single `Load` command.

use url::Url;
use webguard_common::AddressError;

use crate::guard::NavigationEvent;
use crate::panels::ToolbarModel;
use crate::surface::SurfaceCommand;

/// Keeps the typed text apart from the committed URL, and mirrors the
/// surface's history so forward availability follows real navigations.
#[derive(Debug, Clone)]
pub struct AddressBar {
    text: String,
    editing: bool,
    /// Visited URLs as seen from this bar. Never empty.
    entries: Vec<String>,
    position: usize,
    can_go_back: bool,
    /// Forward availability last reported by the surface itself.
    reported_forward: bool,
}

impl AddressBar {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            text: initial.clone(),
            editing: false,
            entries: vec![initial],
            position: 0,
            can_go_back: false,
            reported_forward: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The URL the surface was last known to show, ignoring edits.
    pub fn url(&self) -> &str {
        &self.entries[self.position]
    }

    pub fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    pub fn can_go_forward(&self) -> bool {
        self.reported_forward || self.position + 1 < self.entries.len()
    }

    /// User typed into the field (or left it).
    pub fn edit(&mut self, text: impl Into<String>, editing: bool) {
        self.text = text.into();
        self.editing = editing;
    }

    /// Follow the surface. Nothing but back availability changes while the
    /// session is in error; the text is also kept while the user is editing.
    pub fn sync(&mut self, event: &NavigationEvent, error: bool) {
        self.can_go_back = event.can_go_back;
        if error {
            return;
        }
        self.reported_forward = event.can_go_forward;

        // Landing on the entry back/forward moved to is not a new visit.
        if event.url != self.entries[self.position] {
            self.entries.truncate(self.position + 1);
            self.entries.push(event.url.clone());
            self.position += 1;
        }

        if !self.editing && event.url != self.text {
            self.text = event.url.clone();
        }
    }

    /// Load failures leave the surface's history unknown.
    pub fn clear_history(&mut self) {
        let current = self.entries.swap_remove(self.position);
        self.entries = vec![current];
        self.position = 0;
        self.can_go_back = false;
        self.reported_forward = false;
    }

    /// Submit the typed address as one atomic navigation.
    pub fn submit(&mut self) -> Result<SurfaceCommand, AddressError> {
        let url = normalize_address(&self.text)?;
        self.text = url.clone();
        self.editing = false;
        self.entries.truncate(self.position + 1);
        self.reported_forward = false;
        Ok(SurfaceCommand::Load(url))
    }

    pub fn back(&mut self) -> Option<SurfaceCommand> {
        if !self.can_go_back {
            return None;
        }
        self.position = self.position.saturating_sub(1);
        Some(SurfaceCommand::GoBack)
    }

    pub fn forward(&mut self) -> Option<SurfaceCommand> {
        if !self.can_go_forward() {
            return None;
        }
        if self.position + 1 < self.entries.len() {
            self.position += 1;
        }
        self.reported_forward = false;
        Some(SurfaceCommand::GoForward)
    }

    pub fn model(&self) -> ToolbarModel {
        ToolbarModel {
            text: self.text.clone(),
            can_go_back: self.can_go_back,
            can_go_forward: self.can_go_forward(),
        }
    }
}

/// Turn typed input into an absolute URL. Bare hosts get `https://`.
pub fn normalize_address(input: &str) -> Result<String, AddressError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AddressError::Empty);
    }

    let candidate = if trimmed.contains("://") || trimmed.starts_with("about:") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&candidate).map_err(|e| AddressError::Invalid {
        input: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" | "about" => Ok(parsed.to_string()),
        other => Err(AddressError::Invalid {
            input: trimmed.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
