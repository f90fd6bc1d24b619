mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use heroes_core::{HeroService, MessageLog};

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

async fn run(mut cli: Cli) -> Result<(), CliError> {
    let cfg = config::load_config_or_default();
    config::apply_defaults(&mut cli.global, &cfg);

    match cli.command {
        // Config commands don't need a server
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "heroes", &mut std::io::stdout());
            Ok(())
        }

        // All other commands talk to the hero collection
        cmd => {
            let service_config = config::build_service_config(&cli.global, &cfg)?;

            // The composition root owns the message log.
            let messages = MessageLog::new();
            let service = Arc::new(HeroService::new(&service_config, messages.clone())?);

            tracing::debug!(command = ?cmd, server = %service_config.server, "dispatching command");
            let result = commands::dispatch(cmd, &service, &cli.global).await;

            output::print_messages(
                &messages.entries(),
                output::should_color(cli.global.color_mode()),
                cli.global.quiet,
            );
            result
        }
    }
}
