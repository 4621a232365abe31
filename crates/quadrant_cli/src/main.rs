//! Quadrant CLI - Monte Carlo pi estimation from the command line
//!
//! This is the operational entry point for the Quadrant estimation engine.
//!
//! # Commands
//!
//! - `quadrant single` - Estimate pi on a single thread
//! - `quadrant parallel` - Estimate pi across parallel workers
//!
//! # Determinism
//!
//! Both commands are fully reproducible: the same iteration count, seed and
//! worker count always produce bit-identical estimates. `parallel` with one
//! worker reproduces the `single` stream exactly.

use clap::{Parser, Subcommand};
use quadrant_core::{DEFAULT_BASE_SEED, DEFAULT_ITERATIONS};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod report;

pub use error::{CliError, Result};

/// Quadrant Monte Carlo pi estimator CLI
#[derive(Parser)]
#[command(name = "quadrant")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate pi on a single thread
    Single {
        /// Number of Monte Carlo iterations
        #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u64,

        /// Base seed for the random stream
        #[arg(short, long, default_value_t = DEFAULT_BASE_SEED)]
        seed: u64,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Estimate pi across parallel workers
    Parallel {
        /// Number of Monte Carlo iterations
        #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u64,

        /// Number of workers (defaults to the CPU core count)
        #[arg(short, long)]
        workers: Option<u32>,

        /// Base seed from which worker seeds are derived
        #[arg(short, long, default_value_t = DEFAULT_BASE_SEED)]
        seed: u64,

        /// Spread the iteration remainder over the first workers instead of
        /// truncating it
        #[arg(long)]
        distribute_remainder: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; logs go to stderr, reports to stdout
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Single {
            iterations,
            seed,
            format,
        } => commands::single::run(iterations, seed, &format),
        Commands::Parallel {
            iterations,
            workers,
            seed,
            distribute_remainder,
            format,
        } => commands::parallel::run(iterations, workers, seed, distribute_remainder, &format),
    }
}
