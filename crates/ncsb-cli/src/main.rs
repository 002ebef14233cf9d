//! # ncsb CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// NCSB toolchain — enriched NIST SP 800-53 Rev. 5 catalog generator.
///
/// Joins the control catalog with the SP 800-53B baseline profiles and
/// emits one JSON dataset with per-control baseline membership, derived
/// severity, and the non-negotiable flag.
#[derive(Parser, Debug)]
#[command(name = "ncsb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate the enriched catalog JSON from OSCAL inputs.
    Generate(ncsb_cli::generate::GenerateArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => ncsb_cli::generate::run(&args),
    }
}
