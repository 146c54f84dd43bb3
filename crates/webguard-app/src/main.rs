mod app_state;
mod cli;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use webguard_config::LoadedConfig;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- webguard crashed ---");
        eprintln!("Run with --log-level webguard=debug to capture more detail.");
        eprintln!("------------------------\n");

        default_hook(info);
    }));
}

/// Build the log filter. `--log-level` wins over `RUST_LOG`, which wins over
/// the config file's `[logging] level`.
fn env_filter(cli_directive: Option<&str>, config_level: &str) -> EnvFilter {
    if let Some(directive) = cli_directive {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Ignoring invalid --log-level '{directive}': {e}"),
        }
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(format!("webguard={}", config_level.to_ascii_lowercase()))
}

fn load_config(args: &cli::Args) -> webguard_common::Result<LoadedConfig> {
    let loaded = match &args.config {
        Some(path) => webguard_config::load_config_from(path)?,
        None => webguard_config::load_config()?,
    };
    Ok(loaded)
}

fn main() -> ExitCode {
    install_panic_hook();

    let args = cli::parse();

    // Config is read before logging so its level can seed the filter. The
    // outcome is reported once the subscriber is installed.
    let loaded = load_config(&args);
    let level = loaded
        .as_ref()
        .map(|l| l.config.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(args.log_level.as_deref(), &level))
        .init();

    tracing::info!("webguard v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = match loaded {
        Ok(loaded) => {
            loaded.log();
            loaded.config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            Default::default()
        }
    };
    if let Some(mode) = args.mode {
        config.shell.mode = mode.into();
    }
    tracing::info!(
        mode = %config.shell.mode,
        match_mode = ?config.navigation.match_mode,
        "Config loaded"
    );

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::ShellApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
