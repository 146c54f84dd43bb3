//! Embedded-browser layer for the webguard shell.
//!
//! Wraps the `wry` crate to provide:
//! - A navigation guard that keeps the browser surface on an allow-list
//! - The loading / ready / blocked / failed session state machine
//! - Managed WebView instances for the browser, chrome, and toolbar surfaces
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - An address bar for the unrestricted browser shell

pub mod address_bar;
pub mod allowlist;
pub mod controller;
pub mod events;
pub mod guard;
pub mod ipc;
pub mod manager;
pub mod panels;
pub mod session;
pub mod surface;

pub use address_bar::{normalize_address, AddressBar};
pub use allowlist::{AllowList, DomainPattern, HostPolicy, ABOUT_BLANK, DEFAULT_ALLOW_LIST, HOME_URL};
pub use controller::ScreenController;
pub use events::{PageLoadState, WebViewEvent};
pub use guard::{NavigationDecision, NavigationEvent, NavigationGuard, Revert};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{SurfaceRole, WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
pub use panels::{ChromeModel, ToolbarModel};
pub use session::{FailureReason, SessionState, View};
pub use surface::{BrowserSurface, SurfaceCommand};
