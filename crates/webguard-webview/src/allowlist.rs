//! The built-in domain allow-list and the two ways of checking a URL
//! against it.
//!
//! Substring matching reproduces the shell's historical rule: a pattern
//! matches if it occurs anywhere in the URL string, query included. Host
//! matching parses the URL and compares scheme, port, and hostname.

use std::borrow::Cow;
use std::sync::Arc;

use url::Url;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Canonical entry point: the initial load target and the retry destination.
pub const HOME_URL: &str = "https://gemini.google.com/app";

/// The empty page. Always allowed regardless of the allow-list.
pub const ABOUT_BLANK: &str = "about:blank";

/// The service and the companion domains it needs for sign-in and assets.
/// `*.` entries match any subdomain of the suffix.
pub const DEFAULT_ALLOW_LIST: &[&str] = &[
    "gemini.google.com",
    "accounts.google.com",
    "accounts.youtube.com",
    "myaccount.google.com",
    "consent.google.com",
    "ogs.google.com",
    "*.gstatic.com",
    "*.googleusercontent.com",
];

// =============================================================================
// PATTERNS
// =============================================================================

/// One allow-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainPattern {
    /// A hostname that must match exactly.
    Exact(String),
    /// A suffix (stored without the `*.`) whose proper subdomains match.
    Suffix(String),
}

impl DomainPattern {
    /// Parse `"host"` or `"*.suffix"`. Hostnames are lowercased.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.strip_prefix("*.") {
            Some(suffix) => Self::Suffix(suffix.to_ascii_lowercase()),
            None => Self::Exact(raw.to_ascii_lowercase()),
        }
    }

    /// Whether the pattern names no host at all (`""` or a bare `*.`).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Exact(host) => host.is_empty(),
            Self::Suffix(suffix) => suffix.is_empty(),
        }
    }

    /// The string searched for by substring matching. Wildcards keep their
    /// leading dot, so `*.gstatic.com` searches for `.gstatic.com`.
    pub fn needle(&self) -> Cow<'_, str> {
        match self {
            Self::Exact(host) => Cow::Borrowed(host),
            Self::Suffix(suffix) => Cow::Owned(format!(".{suffix}")),
        }
    }

    /// Whether a parsed hostname satisfies this pattern.
    pub fn matches_host(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        match self {
            Self::Exact(expected) => host == *expected,
            Self::Suffix(suffix) => {
                host.len() > suffix.len() + 1
                    && host.ends_with(suffix.as_str())
                    && host.as_bytes()[host.len() - suffix.len() - 1] == b'.'
            }
        }
    }
}

// =============================================================================
// HOST POLICY
// =============================================================================

/// Scheme and port constraints applied by host matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPolicy {
    pub schemes: Vec<String>,
    /// Ports allowed in addition to the scheme's default.
    pub ports: Vec<u16>,
}

impl Default for HostPolicy {
    fn default() -> Self {
        Self {
            schemes: vec!["https".into()],
            ports: Vec::new(),
        }
    }
}

// =============================================================================
// ALLOW-LIST
// =============================================================================

/// An immutable, ordered allow-list. Cheap to clone and share across the
/// wry navigation callback and the controller.
#[derive(Debug, Clone)]
pub struct AllowList {
    patterns: Arc<[DomainPattern]>,
}

impl AllowList {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<DomainPattern> = patterns
            .into_iter()
            .map(|p| DomainPattern::parse(p.as_ref()))
            .filter(|p| !p.is_empty())
            .collect();
        Self {
            patterns: patterns.into(),
        }
    }

    /// The compiled-in list.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_ALLOW_LIST)
    }

    pub fn patterns(&self) -> &[DomainPattern] {
        &self.patterns
    }

    /// True if any pattern's needle occurs anywhere in `url`.
    ///
    /// This accepts `https://evil.example.com/?x=gemini.google.com`.
    pub fn contains_substring(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| url.contains(p.needle().as_ref()))
    }

    /// True if `url` parses, uses an allowed scheme and port, and its host
    /// satisfies some pattern.
    pub fn matches_host(&self, url: &str, policy: &HostPolicy) -> bool {
        let parsed = match Url::parse(url) {
            Ok(u) => u,
            Err(_) => return false,
        };

        if !policy.schemes.iter().any(|s| s == parsed.scheme()) {
            return false;
        }

        // `port()` is None when the URL uses the scheme's default port.
        if let Some(port) = parsed.port() {
            if !policy.ports.contains(&port) {
                return false;
            }
        }

        match parsed.host_str() {
            Some(host) => self.patterns.iter().any(|p| p.matches_host(host)),
            None => false,
        }
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// TESTS
// =============================================================================
