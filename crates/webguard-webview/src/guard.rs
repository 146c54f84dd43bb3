//! Navigation guard: decides whether the browser surface may show a URL.

use serde::{Deserialize, Serialize};
use webguard_common::MatchMode;

use crate::allowlist::{AllowList, HostPolicy, ABOUT_BLANK, HOME_URL};

/// A navigation reported by the browser surface. Consumed per event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEvent {
    pub url: String,
    #[serde(default)]
    pub can_go_back: bool,
    #[serde(default)]
    pub can_go_forward: bool,
}

impl NavigationEvent {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            can_go_back: false,
            can_go_forward: false,
        }
    }

    pub fn with_history(mut self, can_go_back: bool, can_go_forward: bool) -> Self {
        self.can_go_back = can_go_back;
        self.can_go_forward = can_go_forward;
        self
    }
}

/// How a blocked navigation is reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revert {
    /// Step back to the previous history entry.
    GoBack,
    /// The URL is under the home URL; stay put.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Block { revert: Revert },
}

impl NavigationDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Pure decision logic, shared by the wry navigation callback and the
/// screen controller. Holds no per-navigation state.
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    allow_list: AllowList,
    mode: MatchMode,
    policy: HostPolicy,
    home_url: String,
}

impl NavigationGuard {
    /// Guard for the restricted shell.
    pub fn restricted(allow_list: AllowList, mode: MatchMode, policy: HostPolicy) -> Self {
        Self {
            allow_list,
            mode,
            policy,
            home_url: HOME_URL.to_string(),
        }
    }

    /// Guard that allows everything (browser shell).
    pub fn open() -> Self {
        Self {
            allow_list: AllowList::builtin(),
            mode: MatchMode::Open,
            policy: HostPolicy::default(),
            home_url: HOME_URL.to_string(),
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn is_allowed(&self, url: &str) -> bool {
        if url == ABOUT_BLANK {
            return true;
        }
        match self.mode {
            MatchMode::Substring => self.allow_list.contains_substring(url),
            MatchMode::Host => self.allow_list.matches_host(url, &self.policy),
            MatchMode::Open => true,
        }
    }

    pub fn evaluate(&self, url: &str) -> NavigationDecision {
        if self.is_allowed(url) {
            return NavigationDecision::Allow;
        }
        let revert = if url.starts_with(&self.home_url) {
            Revert::None
        } else {
            Revert::GoBack
        };
        NavigationDecision::Block { revert }
    }
}

impl Default for NavigationGuard {
    fn default() -> Self {
        Self::restricted(
            AllowList::builtin(),
            MatchMode::Substring,
            HostPolicy::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_guard() -> NavigationGuard {
        NavigationGuard::restricted(AllowList::builtin(), MatchMode::Host, HostPolicy::default())
    }

    #[test]
    fn home_is_allowed() {
        let guard = NavigationGuard::default();
        assert_eq!(guard.evaluate(HOME_URL), NavigationDecision::Allow);
    }

    #[test]
    fn about_blank_always_allowed() {
        let empty = NavigationGuard::restricted(
            AllowList::new(Vec::<String>::new()),
            MatchMode::Substring,
            HostPolicy::default(),
        );
        assert!(empty.is_allowed(ABOUT_BLANK));
        assert!(host_guard().is_allowed(ABOUT_BLANK));
        assert!(!empty.is_allowed("https://gemini.google.com/app"));
    }

    #[test]
    fn foreign_url_blocks_with_go_back() {
        let guard = NavigationGuard::default();
        assert_eq!(
            guard.evaluate("https://malicious.test/"),
            NavigationDecision::Block {
                revert: Revert::GoBack
            }
        );
    }

    #[test]
    fn blocked_url_under_home_does_not_go_back() {
        // With the built-in list every URL under home is allowed, so use a
        // list that omits the home host.
        let decision = NavigationGuard::restricted(
            AllowList::new(["example.org"]),
            MatchMode::Substring,
            HostPolicy::default(),
        )
        .evaluate("https://gemini.google.com/app/chat");
        assert_eq!(
            decision,
            NavigationDecision::Block {
                revert: Revert::None
            }
        );
    }

    #[test]
    fn substring_weakness_is_preserved() {
        let guard = NavigationGuard::default();
        assert!(guard.is_allowed("https://evil.example.com/?x=gemini.google.com"));
        assert!(!host_guard().is_allowed("https://evil.example.com/?x=gemini.google.com"));
    }

    #[test]
    fn open_guard_allows_everything() {
        let guard = NavigationGuard::open();
        assert_eq!(guard.mode(), MatchMode::Open);
        assert!(guard.is_allowed("https://malicious.test/"));
        assert!(guard.is_allowed("not even a url"));
    }

    #[test]
    fn navigation_event_builder() {
        let event = NavigationEvent::new("https://x.test/").with_history(true, false);
        assert_eq!(event.url, "https://x.test/");
        assert!(event.can_go_back);
        assert!(!event.can_go_forward);
    }

    #[test]
    fn navigation_event_deserializes_without_history() {
        let event: NavigationEvent = serde_json::from_str(r#"{"url":"about:blank"}"#).unwrap();
        assert_eq!(event, NavigationEvent::new(ABOUT_BLANK));
    }
}
