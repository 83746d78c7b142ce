//! `homedash-tui`: terminal dashboard for a SmartHome backend.
//!
//! Built on [ratatui](https://ratatui.rs). Every page is backed by one of
//! `homedash-core`'s flows; a data bridge forwards the flow's
//! [`ViewStream`](homedash_core::ViewStream) into the action loop so the
//! screen re-renders on every change.
//!
//! Pages follow the web dashboard's routes: `/` (clock and weather),
//! `/rooms`, `/rooms/{id}/devices`, `/devices/{id}/details` and
//! `/devices/{id}/edit-device`. Unknown routes land on the error page.
//!
//! Logs go to a daily rolling file (default under the system temp dir) so
//! they never corrupt the terminal.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use homedash_core::{Dashboard, Route};

use crate::app::App;

/// Terminal dashboard for rooms, devices, sensors and blinds.
#[derive(Parser, Debug)]
#[command(name = "homedash-tui", version, about)]
struct Cli {
    /// Profile from the config file
    #[arg(short = 'p', long, env = "HOMEDASH_PROFILE")]
    profile: Option<String>,

    /// Page to open first (e.g. /rooms or /devices/D1/details)
    #[arg(short = 'r', long, default_value = "/")]
    route: String,

    /// Directory for the daily log file
    #[arg(long, env = "HOMEDASH_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-based tracing. Nothing may be written to stdout/stderr while the
/// terminal is in raw mode. The guard must live until exit so the
/// non-blocking writer flushes.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "homedash_tui={log_level},homedash_core={log_level},homedash_api={log_level}"
        ))
    });

    let log_dir = cli.log_dir.clone().unwrap_or_else(std::env::temp_dir);
    let file_appender = tracing_appender::rolling::daily(log_dir, "homedash-tui.log");
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

fn build_dashboard(cli: &Cli) -> Result<Dashboard> {
    let config = homedash_config::load_config_or_default();
    let dashboard_config = homedash_config::resolve(&config, cli.profile.as_deref())
        .wrap_err("invalid homedash configuration")?;
    Dashboard::new(dashboard_config).wrap_err("failed to create the API client")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks first, so a panic during terminal setup still restores the screen
    tui::install_hooks()?;

    let _log_guard = setup_tracing(&cli);

    let dashboard = build_dashboard(&cli)?;
    let route = Route::parse(&cli.route);

    info!(
        api_url = %dashboard.config().api_url,
        house = %dashboard.config().house_id,
        route = %route,
        "starting homedash-tui"
    );

    let mut app = App::new(dashboard.clone(), route);
    let result = app.run().await;
    dashboard.shutdown();
    result
}
