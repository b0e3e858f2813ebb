//! Basinlink CLI - IBT basin matching and fish beta-diversity

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use basinlink_algorithms::pipeline::match_projects;
use basinlink_core::io::{read_basin_layer, read_occurrences, read_projects, write_results};
use basinlink_core::{BasinLayer, OccurrenceTable, PipelineConfig, TransferProject};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "basinlink")]
#[command(author, version, about = "IBT basin matching and fish beta-diversity", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show row and feature counts for the input datasets
    Info {
        /// Transfer-project table (CSV)
        #[arg(short, long)]
        projects: PathBuf,
        /// Drainage-basin layer (shapefile)
        #[arg(short, long)]
        basins: PathBuf,
        /// Occurrence table (semicolon-delimited CSV)
        #[arg(short, long)]
        occurrences: PathBuf,
    },
    /// Match projects to basins and score pairwise diversity
    Match {
        /// Transfer-project table (CSV)
        #[arg(short, long)]
        projects: PathBuf,
        /// Drainage-basin layer (shapefile)
        #[arg(short, long)]
        basins: PathBuf,
        /// Occurrence table (semicolon-delimited CSV)
        #[arg(short, long)]
        occurrences: PathBuf,
        /// Result table destination (CSV)
        #[arg(short = 'O', long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Info {
            projects,
            basins,
            occurrences,
        } => {
            let config = PipelineConfig::new(projects, basins, occurrences);
            let (projects, layer, occurrences) = load_inputs(&config)?;

            println!("Transfer projects: {}", projects.len());
            println!("Basin polygons:    {}", layer.len());
            println!("Occurrence rows:   {}", occurrences.len());
        }

        Commands::Match {
            projects,
            basins,
            occurrences,
            output,
        } => {
            let config = PipelineConfig::new(projects, basins, occurrences).with_output(output);
            let (projects, layer, occurrences) = load_inputs(&config)?;

            let start = Instant::now();
            let results = match_projects(&projects, &layer, &occurrences)
                .context("Failed to match projects to basins")?;
            let elapsed = start.elapsed();

            // output is always set on this subcommand
            let output = config.output.as_ref().unwrap();
            let pb = spinner("Writing results...");
            write_results(output, &results).context("Failed to write result table")?;
            pb.finish_and_clear();

            println!("\nSummary of IBT Projects with Fish Diversity:");
            println!("{}", "=".repeat(60));
            for row in &results {
                println!("{:2}. {}", row.rank, row.basin_pair);
                println!(
                    "    Sender: {} species, Receiver: {} species",
                    row.sender_species_count, row.receiver_species_count
                );
                println!("    Dissimilarity: {:.3}", row.jaccard_dissimilarity);
                println!();
            }
            println!("Results saved to: {}", output.display());
            println!("  Processing time: {:.2?}", elapsed);
        }
    }

    Ok(())
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn load_inputs(
    config: &PipelineConfig,
) -> Result<(Vec<TransferProject>, BasinLayer, OccurrenceTable)> {
    let pb = spinner("Reading project table...");
    let projects = read_projects(&config.projects).context("Failed to read project table")?;
    pb.finish_and_clear();

    let pb = spinner("Reading basin layer...");
    let layer = read_basin_layer(&config.basins).context("Failed to read basin layer")?;
    pb.finish_and_clear();

    let pb = spinner("Reading occurrence table...");
    let occurrences =
        read_occurrences(&config.occurrences).context("Failed to read occurrence table")?;
    pb.finish_and_clear();

    info!(
        "Loaded {} projects, {} basins, {} occurrence rows",
        projects.len(),
        layer.len(),
        occurrences.len()
    );
    Ok((projects, layer, occurrences))
}
