//! Commands the shell issues to the browser surface.
//!
//! Every command is fire-and-forget: the caller logs a failure and moves on,
//! it never waits for the surface to confirm.

use webguard_common::WebViewError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCommand {
    /// Navigate to a URL in one step.
    Load(String),
    /// Reload the current page, or mount a fresh surface at the home URL
    /// when none is mounted.
    Reload,
    Stop,
    GoBack,
    GoForward,
    InjectScript(String),
}

impl SurfaceCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load(_) => "load",
            Self::Reload => "reload",
            Self::Stop => "stop",
            Self::GoBack => "go_back",
            Self::GoForward => "go_forward",
            Self::InjectScript(_) => "inject_script",
        }
    }
}

/// The embedded browser as seen by the shell.
pub trait BrowserSurface {
    fn load_url(&mut self, url: &str) -> Result<(), WebViewError>;
    fn reload(&mut self) -> Result<(), WebViewError>;
    fn stop(&mut self) -> Result<(), WebViewError>;
    fn go_back(&mut self) -> Result<(), WebViewError>;
    fn go_forward(&mut self) -> Result<(), WebViewError>;
    fn evaluate_script(&mut self, js: &str) -> Result<(), WebViewError>;

    fn execute(&mut self, command: &SurfaceCommand) -> Result<(), WebViewError> {
        match command {
            SurfaceCommand::Load(url) => self.load_url(url),
            SurfaceCommand::Reload => self.reload(),
            SurfaceCommand::Stop => self.stop(),
            SurfaceCommand::GoBack => self.go_back(),
            SurfaceCommand::GoForward => self.go_forward(),
            SurfaceCommand::InjectScript(js) => self.evaluate_script(js),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        fail_stop: bool,
    }

    impl BrowserSurface for Recorder {
        fn load_url(&mut self, url: &str) -> Result<(), WebViewError> {
            self.calls.push(format!("load {url}"));
            Ok(())
        }
        fn reload(&mut self) -> Result<(), WebViewError> {
            self.calls.push("reload".into());
            Ok(())
        }
        fn stop(&mut self) -> Result<(), WebViewError> {
            if self.fail_stop {
                return Err(WebViewError::Command {
                    command: "stop".into(),
                    reason: "gone".into(),
                });
            }
            self.calls.push("stop".into());
            Ok(())
        }
        fn go_back(&mut self) -> Result<(), WebViewError> {
            self.calls.push("back".into());
            Ok(())
        }
        fn go_forward(&mut self) -> Result<(), WebViewError> {
            self.calls.push("forward".into());
            Ok(())
        }
        fn evaluate_script(&mut self, js: &str) -> Result<(), WebViewError> {
            self.calls.push(format!("js {js}"));
            Ok(())
        }
    }

    #[test]
    fn execute_dispatches_each_command() {
        let mut surface = Recorder::default();
        let commands = [
            SurfaceCommand::Load("https://gemini.google.com/app".into()),
            SurfaceCommand::Stop,
            SurfaceCommand::GoBack,
            SurfaceCommand::GoForward,
            SurfaceCommand::Reload,
            SurfaceCommand::InjectScript("1+1".into()),
        ];
        for c in &commands {
            surface.execute(c).unwrap();
        }
        assert_eq!(
            surface.calls,
            vec![
                "load https://gemini.google.com/app",
                "stop",
                "back",
                "forward",
                "reload",
                "js 1+1",
            ]
        );
    }

    #[test]
    fn execute_propagates_failure() {
        let mut surface = Recorder {
            fail_stop: true,
            ..Default::default()
        };
        let err = surface.execute(&SurfaceCommand::Stop).unwrap_err();
        assert!(err.to_string().contains("stop"));
    }

    #[test]
    fn command_names() {
        assert_eq!(SurfaceCommand::GoBack.name(), "go_back");
        assert_eq!(SurfaceCommand::Load(String::new()).name(), "load");
    }
}
