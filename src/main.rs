mod cli;
mod cmd;

use clap::{CommandFactory, Parser};
use cli::{CatalogAction, Cli, Commands, ConfigAction};
use rxcheck::models::config::Config;
use rxcheck::output;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let fallback = Config::load()
        .map(|c| c.logging.filter)
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let catalog = cli.catalog.as_deref();
    let result = match cli.command {
        Commands::Validate { line, accepted } => {
            cmd::validate::run(&line, accepted.as_deref(), catalog, cli.human)
        }
        Commands::Prescription { file } => cmd::prescription::run(file.as_deref(), catalog, cli.human),
        Commands::Catalog { action } => match action {
            CatalogAction::List => cmd::catalog::run_list(catalog, cli.human),
            CatalogAction::Show { name } => cmd::catalog::run_show(&name, catalog, cli.human),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "rxcheck", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        let err = output::error("", "general_error", &e.to_string());
        eprintln!(
            "{}",
            serde_json::to_string(&err).unwrap_or_else(|_| e.to_string())
        );
        process::exit(1);
    }
}
