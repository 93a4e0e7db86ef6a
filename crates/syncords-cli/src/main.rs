mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use syncords_core::config::SynCordsConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "syncords", about = "Map pixel positions to world coordinates")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show raster size and coordinate transform
    Info(commands::info::InfoArgs),
    /// Print the world coordinate of one pixel
    Locate(commands::locate::LocateArgs),
    /// Record a list of pixels and save them as a coordinate file
    Record(commands::record::RecordArgs),
    /// Print or save the effective settings
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

    let config = match &cli.config {
        Some(path) => SynCordsConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => SynCordsConfig::default(),
    };

    match &cli.command {
        Commands::Info(args) => commands::info::run(args, &config),
        Commands::Locate(args) => commands::locate::run(args, &config),
        Commands::Record(args) => commands::record::run(args, &config),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
