//! Relay Network Design Evaluation CLI
//!
//! Evaluates one design vector against the New Mars relay network problem.
//!
//! Usage:
//!   evaluate-design --example
//!   evaluate-design --chromosome design.json --sites data/rover_sites.txt

use anyhow::{bail, Result};
use clap::Parser;
use design_fitness::{
    DesignVector, NetworkDesignProblem, SiteTable, EXAMPLE_CHROMOSOME, GENE_COUNT,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "evaluate-design",
    about = "Evaluate a New Mars relay network design vector"
)]
struct Args {
    /// Path to a JSON array with the 20 genes of the design vector
    #[arg(short = 'c', long)]
    chromosome: Option<PathBuf>,

    /// Evaluate the built-in example design instead
    #[arg(long)]
    example: bool,

    /// Rover site table (latitude/longitude in radians, one row per site);
    /// defaults to the built-in survey table
    #[arg(short, long)]
    sites: Option<PathBuf>,

    /// Write the fitness vector as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let genes: Vec<f64> = match (&args.chromosome, args.example) {
        (Some(path), _) => serde_json::from_reader(File::open(path)?)?,
        (None, true) => EXAMPLE_CHROMOSOME.to_vec(),
        (None, false) => bail!("pass --chromosome <file> or --example"),
    };
    if genes.len() != GENE_COUNT {
        bail!("design vector must have {} genes, got {}", GENE_COUNT, genes.len());
    }

    let sites = match &args.sites {
        Some(path) => SiteTable::from_path(path)?,
        None => SiteTable::builtin(),
    };
    info!("Site table: {} candidate rover sites", sites.len());

    let problem = NetworkDesignProblem::new(sites)?;
    let design = DesignVector::from_genes(&genes)?;
    let fitness = problem.evaluate(&design)?;

    let n1 = design.shell1.satellite_count();
    let n2 = design.shell2.satellite_count();

    info!("{}", "=".repeat(60));
    info!("NEW MARS RELAY NETWORK EVALUATION");
    info!("{}", "=".repeat(60));
    info!("Total satellites (W1: {}, W2: {}): {}", n1, n2, n1 + n2);
    info!("OBJECTIVE 1 - Average communications cost: {}", fitness.comms_cost);
    info!("OBJECTIVE 2 - Cost of infrastructure: {}", fitness.infra_cost);
    info!(
        "CONSTRAINT - Rover separation ({}): {:.3} km margin",
        if fitness.terminal_separation > 0.0 { "NOK" } else { "OK" },
        -fitness.terminal_separation
    );
    info!(
        "CONSTRAINT - Satellite separation ({}): {:.3} km margin",
        if fitness.satellite_separation > 0.0 { "NOK" } else { "OK" },
        -fitness.satellite_separation
    );
    info!("{}", "=".repeat(60));

    if let Some(path) = &args.output {
        info!("Writing fitness vector to {:?}", path);
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &fitness)?;
    }

    Ok(())
}
