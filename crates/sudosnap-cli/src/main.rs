mod commands;
mod progress;
mod recognizer;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sudosnap", about = "Sudoku screen solver")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the puzzle grid out of a screenshot
    Extract(commands::extract::ExtractArgs),
    /// Solve a puzzle given as an 81-character string
    Solve(commands::solve::SolveArgs),
    /// Run the full extract-solve-replay pipeline on a screenshot
    Run(commands::pipeline::RunArgs),
    /// Print or save a default pipeline configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Extract(args) => commands::extract::run(args),
        Commands::Solve(args) => commands::solve::run(args),
        Commands::Run(args) => commands::pipeline::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
