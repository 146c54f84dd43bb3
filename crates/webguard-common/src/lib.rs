pub mod errors;
pub mod notifications;
pub mod types;

pub use errors::{AddressError, ConfigError, ShellError, WebViewError};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use types::{MatchMode, Rect, ShellMode};

pub type Result<T> = std::result::Result<T, ShellError>;
