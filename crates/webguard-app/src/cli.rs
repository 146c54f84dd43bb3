use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use webguard_common::ShellMode;

/// webguard: a desktop shell around one web service, with a navigation guard.
#[derive(Parser, Debug)]
#[command(name = "webguard", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `debug`, `webguard=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Shell variant, overriding the config file.
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Restricted,
    Browser,
}

impl From<ModeArg> for ShellMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Restricted => ShellMode::Restricted,
            ModeArg::Browser => ShellMode::Browser,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let args = Args::try_parse_from(["webguard"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.mode.is_none());
    }

    #[test]
    fn all_arguments() {
        let args = Args::try_parse_from([
            "webguard",
            "--config",
            "/tmp/webguard.toml",
            "--log-level",
            "webguard=debug",
            "--mode",
            "browser",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/webguard.toml")));
        assert_eq!(args.log_level.as_deref(), Some("webguard=debug"));
        assert_eq!(args.mode.map(ShellMode::from), Some(ShellMode::Browser));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["webguard", "--mode", "kiosk"]).is_err());
    }
}
