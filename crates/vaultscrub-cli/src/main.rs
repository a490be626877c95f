mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean JSON stream
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Redact(args) => commands::redact::handle(args),
        cli::Commands::Rules {
            config,
            preserve_keys,
        } => commands::rules::handle(config, preserve_keys),
        cli::Commands::Init { format, force } => commands::init::handle(format, force),
        cli::Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut cli::Cli::command(),
                "vaultscrub",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
