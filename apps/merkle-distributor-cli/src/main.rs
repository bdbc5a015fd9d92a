use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod logging;

use error::CliResult;
use logging::LogLevel;

#[derive(Parser)]
#[command(name = "merkle-distributor")]
#[command(about = "Merkle Distributor CLI - Verifiable airdrop snapshots for on-chain claims")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a manifest from allocation records
    Generate {
        /// Allocation records (.csv or .json)
        #[arg(short, long, required_unless_present = "config")]
        input: Option<PathBuf>,

        /// Manifest output file
        #[arg(short, long, required_unless_present = "config")]
        output: Option<PathBuf>,

        /// Snapshot configuration file (YAML), instead of --input/--output
        #[arg(short, long, conflicts_with_all = ["input", "output"])]
        config: Option<PathBuf>,
    },

    /// Re-verify every claim, the root and the totals of a manifest
    Verify {
        /// Manifest file
        #[arg(short, long)]
        manifest: PathBuf,
    },

    /// Show one account's claim and check its proof
    Prove {
        /// Manifest file
        #[arg(short, long)]
        manifest: PathBuf,

        /// Account address (any case, with or without 0x)
        #[arg(short, long)]
        account: String,
    },

    /// Generate a deterministic allocation CSV for testing
    GenerateFixtures {
        /// Number of accounts to generate
        #[arg(short, long)]
        count: u64,

        /// Seed for deterministic generation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output file path
        #[arg(short, long, default_value = "allocations.csv")]
        output: PathBuf,

        /// Minimum amount per token
        #[arg(long, default_value = "1")]
        min_amount: u64,

        /// Maximum amount per token
        #[arg(long, default_value = "1000000")]
        max_amount: u64,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::try_init(LogLevel::from_verbosity(cli.verbose)) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match cli.command {
        Commands::Generate {
            input,
            output,
            config,
        } => commands::generate_manifest::execute(input, output, config),

        Commands::Verify { manifest } => commands::verify_manifest::execute(manifest),

        Commands::Prove { manifest, account } => commands::prove_claim::execute(manifest, account),

        Commands::GenerateFixtures {
            count,
            seed,
            output,
            min_amount,
            max_amount,
        } => commands::generate_fixtures::execute(count, seed, output, min_amount, max_amount),
    }
}
