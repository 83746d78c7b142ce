mod cli;
mod commands;
mod config;
mod error;
mod man;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use homedash_core::Dashboard;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need the backend
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "homedash", &mut std::io::stdout());
            Ok(())
        }

        Command::Man(args) => match man::page(&args.command) {
            Some(roff) => {
                output::print_output(roff.trim_end(), cli.global.quiet);
                Ok(())
            }
            None => Err(CliError::NotFound {
                resource_type: "manual page".into(),
                identifier: args.command.join(" "),
                list_command: "--help".into(),
            }),
        },

        // All other commands talk to the backend
        cmd => {
            let dashboard_config = config::build_dashboard_config(&cli.global)?;
            let dashboard = Dashboard::new(dashboard_config)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            let result = commands::dispatch(cmd, &dashboard, &cli.global).await;
            dashboard.shutdown();
            result
        }
    }
}
