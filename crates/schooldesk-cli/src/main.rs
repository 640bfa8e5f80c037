mod cli;
mod handlers;
mod output;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use schooldesk_core::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    if let Err(e) = init_tracing() {
        output::output_error(&format!("{:#}", e));
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::output_error(&format!("{:#}", e));
    }

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("SCHOOLDESK_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open debug log {}", log_path))?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::List(args) => {
            let config = match cli.config {
                Some(ref path) => AppConfig::load_from(path)?,
                None => AppConfig::load(),
            };
            handlers::list::handle(&config, args)
        }
        Commands::Window(args) => handlers::window::handle(args),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "schooldesk", &mut std::io::stdout());
            Ok(())
        }
    }
}
