use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WebViewError {
    #[error("webview creation failed: {0}")]
    Create(String),

    #[error("surface command '{command}' failed: {reason}")]
    Command { command: String, reason: String },
}

/// Rejected address-bar input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("invalid address '{input}': {reason}")]
    Invalid { input: String, reason: String },
}

/// Failures that reach the application layer.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    WebView(#[from] WebViewError),

    #[error("window error: {0}")]
    Window(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("window.width out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: window.width out of range"
        );
    }

    #[test]
    fn webview_error_display() {
        let err = WebViewError::Command {
            command: "stop".into(),
            reason: "webview gone".into(),
        };
        assert_eq!(err.to_string(), "surface command 'stop' failed: webview gone");
    }

    #[test]
    fn address_error_display() {
        assert_eq!(AddressError::Empty.to_string(), "address is empty");
        let err = AddressError::Invalid {
            input: "http://".into(),
            reason: "empty host".into(),
        };
        assert_eq!(err.to_string(), "invalid address 'http://': empty host");
    }

    #[test]
    fn shell_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ShellError = config_err.into();
        assert!(matches!(err, ShellError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn shell_error_from_webview() {
        let err: ShellError = WebViewError::Create("no display".into()).into();
        assert!(matches!(err, ShellError::WebView(_)));
        assert_eq!(err.to_string(), "webview creation failed: no display");
    }

    #[test]
    fn shell_error_window() {
        let err = ShellError::Window("event loop closed".into());
        assert_eq!(err.to_string(), "window error: event loop closed");
    }
}
