use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::Level;

use bookshelf::catalog::controller::{parse_script, sample_session, CatalogController};
use bookshelf::catalog::factory;
use bookshelf::catalog::report::{render, ReportFormat};
use bookshelf::core::domain::Configuration;
use bookshelf::utils::logs::setup_tracing;

/// In-memory book catalog
#[derive(Parser)]
#[command(name = "catalog")]
#[command(version)]
#[command(about = "In-memory book catalog: add, remove, update, search and list book records")]
struct Cli {
    /// Branch the catalog belongs to, used in log lines
    #[arg(long, default_value = "main")]
    branch: String,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    format: ReportFormat,

    /// Maximum log level written to stderr
    #[arg(long, default_value = "warn")]
    log_level: Level,

    /// Emit log lines as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plays back the built-in sample session
    Demo,

    /// Runs a JSON array of catalog requests
    Run {
        /// Path to the script, e.g. [{"op": "add_book", "title": "1984", ...}]
        script: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.log_level, cli.log_json);

    let requests = match &cli.command {
        Commands::Demo => sample_session(),
        Commands::Run { script } => {
            let json = fs::read_to_string(script)
                .with_context(|| format!("failed to read script {}", script.display()))?;
            parse_script(&json).with_context(|| format!("failed to parse script {}", script.display()))?
        }
    };

    let config = Configuration::new(&cli.branch);
    let mut controller = CatalogController::new(factory::create_catalog_service(&config));
    for result in controller.run_script(requests) {
        for line in render(&result, cli.format)? {
            println!("{}", line);
        }
    }
    Ok(())
}
