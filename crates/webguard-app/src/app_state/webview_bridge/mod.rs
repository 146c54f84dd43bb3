//! Bridge between the screen controller and the webview surfaces.
//!
//! Handles layout and coordinate conversion, IPC message dispatch, and
//! executing the controller's surface commands against the mounted browser.

mod bounds;
mod ipc_dispatch;
mod lifecycle;
