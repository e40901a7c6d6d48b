//! Stash CLI - compile and run item searches.

use clap::Parser;
use miette::Diagnostic;

use stash_cli::cli::{Cli, Command};
use stash_cli::commands;
use stash_cli::config::Config;
use stash_cli::error::CliResult;
use stash_cli::output;
use stash_filter::logging;

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        output::error(&e.to_string());
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    if let Command::Version = cli.command {
        return commands::version::run().await;
    }

    let config = Config::discover(cli.config.as_deref())?;

    match cli.command {
        Command::Compile(args) => commands::compile::run(args, &config).await,
        Command::Currencies(args) => commands::currencies::run(args, &config).await,
        Command::Search(args) => commands::search::run(args, &config).await,
        Command::Version => commands::version::run().await,
    }
}
