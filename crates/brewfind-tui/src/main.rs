//! `brewfind-tui`: interactive brewery finder for the terminal.
//!
//! Built on [ratatui](https://ratatui.rs). One fetch of the brewery
//! directory runs in the background at startup; the result set is then
//! narrowed live by a state selector, a city selector, and a name search.
//!
//! Logs are written to a file (default `<temp dir>/brewfind-tui.log`) to
//! avoid corrupting the terminal UI.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use brewfind_config::Config;

use crate::app::App;

/// Browse and filter the brewery directory in your terminal.
#[derive(Parser, Debug)]
#[command(name = "brewfind-tui", version, about)]
struct Cli {
    /// Directory endpoint URL (overrides the config file)
    #[arg(short = 'e', long)]
    endpoint: Option<String>,

    /// Log file path (defaults to <temp dir>/brewfind-tui.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. Nothing may go to stdout/stderr while the
/// terminal UI is up. The returned guard must outlive the app so logs flush.
fn setup_tracing(log_file: &Path, verbose: u8) -> WorkerGuard {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "brewfind_tui={log_level},brewfind_core={log_level},brewfind_api={log_level}"
        ))
    });

    let fallback_dir = std::env::temp_dir();
    let log_dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(&fallback_dir);
    let log_filename = log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("brewfind-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // The log file may come from config, so load it before tracing is up
    let (mut config, config_err) = match brewfind_config::load_config() {
        Ok(cfg) => (cfg, None),
        Err(e) => (Config::default(), Some(e)),
    };
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    let log_file = cli.log_file.unwrap_or_else(|| config.log_file());

    let _log_guard = setup_tracing(&log_file, cli.verbose);

    if let Some(e) = config_err {
        warn!(error = %e, "config not loaded; using defaults");
    }
    info!(endpoint = %config.endpoint, "starting brewfind-tui");

    let client = brewfind_core::fetch::client_for(&config.endpoint, &config.transport())?;

    let mut app = App::new(
        client,
        Duration::from_millis(config.tui.tick_rate_ms),
        Duration::from_millis(config.tui.render_rate_ms),
    );
    app.run().await?;

    Ok(())
}
