use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Split off a strip of `height` from the top, returning `(top, rest)`.
    /// The strip is clamped to the rect's own height.
    pub fn split_top(&self, height: f64) -> (Rect, Rect) {
        let h = height.clamp(0.0, self.height);
        (
            Rect::new(self.x, self.y, self.width, h),
            Rect::new(self.x, self.y + h, self.width, self.height - h),
        )
    }
}

/// Which variant of the shell is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellMode {
    /// Locked to the home service and its companion domains.
    #[default]
    Restricted,
    /// General-purpose browser with an address bar.
    Browser,
}

impl fmt::Display for ShellMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellMode::Restricted => write!(f, "restricted"),
            ShellMode::Browser => write!(f, "browser"),
        }
    }
}

/// How navigation targets are checked against the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// A pattern matches if it appears anywhere in the URL string.
    #[default]
    Substring,
    /// Parse the URL and compare scheme, port, and hostname.
    Host,
    /// Every URL is allowed.
    Open,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_top_divides_rect() {
        let r = Rect::new(0.0, 0.0, 800.0, 600.0);
        let (top, rest) = r.split_top(48.0);
        assert_eq!(top, Rect::new(0.0, 0.0, 800.0, 48.0));
        assert_eq!(rest, Rect::new(0.0, 48.0, 800.0, 552.0));
    }

    #[test]
    fn split_top_clamps_to_height() {
        let r = Rect::new(10.0, 20.0, 100.0, 30.0);
        let (top, rest) = r.split_top(50.0);
        assert!((top.height - 30.0).abs() < f64::EPSILON);
        assert!(rest.height.abs() < f64::EPSILON);
        assert!((rest.y - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn shell_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&ShellMode::Browser).unwrap(),
            "\"browser\""
        );
        let mode: ShellMode = serde_json::from_str("\"restricted\"").unwrap();
        assert_eq!(mode, ShellMode::Restricted);
        assert_eq!(ShellMode::default(), ShellMode::Restricted);
        assert_eq!(ShellMode::Browser.to_string(), "browser");
    }

    #[test]
    fn match_mode_serialization() {
        let mode: MatchMode = serde_json::from_str("\"host\"").unwrap();
        assert_eq!(mode, MatchMode::Host);
        assert_eq!(MatchMode::default(), MatchMode::Substring);
    }
}
