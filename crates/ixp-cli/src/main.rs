use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ixp_nlp::{Pipeline, PipelineError};

#[derive(Debug, Parser)]
#[command(name = "ixp")]
#[command(about = "Interview experience enrichment pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Enrich every entry in a raw submissions file.
    Process {
        /// Raw submissions JSON file.
        input: PathBuf,
        /// Destination for the enriched JSON.
        output: PathBuf,
    },
    /// Merge newly submitted entries into the enriched catalog.
    /// Already-enriched titles are left untouched; re-running on
    /// unchanged input appends nothing.
    Enrich {
        /// Raw submissions JSON file. Defaults to the configured raw path.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Enriched catalog to merge into. Defaults to the configured path.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let config = ixp_core::load_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    let pipeline = Pipeline::new(config.clone())?;

    match cli.command {
        Commands::Process { input, output } => {
            match pipeline.process_file(&input, &output) {
                Ok(count) => println!("Processed {count} experiences successfully"),
                Err(PipelineError::InputNotFound(path)) => {
                    tracing::error!(path = %path.display(), "input file not found; nothing to process");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Enrich { input, output } => {
            let input = input.unwrap_or_else(|| config.raw_path.clone());
            let output = output.unwrap_or_else(|| config.enhanced_path.clone());
            match pipeline.enrich_incremental(&input, &output) {
                Ok(appended) => {
                    println!("Appended {appended} entries to '{}'", output.display());
                }
                Err(PipelineError::InputNotFound(path)) => {
                    tracing::error!(path = %path.display(), "input file not found; nothing to merge");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}
