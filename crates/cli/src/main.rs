use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use std::io::Read;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "pgrender",
    version = "0.1.0",
    about = "Render SQL syntax trees as Postgres SQL"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout carries only SQL.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { input, format } => {
            let options = config::resolve(&format)?;
            let source = read_input(&input)?;
            let statements = output::parse_statements(&source)?;
            info!(input = %input, statements = statements.len(), "rendering");

            let sql = output::render_statements(&statements, &options)?;
            println!("{sql}");
        }
        Commands::Kinds { json } => output::print_kinds(json)?,
    }

    Ok(())
}

fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
