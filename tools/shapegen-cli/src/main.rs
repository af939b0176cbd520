//! Shapegen CLI - generate parametric meshes from the command line
//!
//! # Commands
//!
//! - `shapegen generate` - Build one shape and write it to disk
//! - `shapegen batch` - Build every shape listed in a TOML manifest
//! - `shapegen stats` - Print a JSON summary of one shape
//!
//! # Usage
//!
//! ```bash
//! # Geosphere with 3 subdivision passes, written to ball.obj
//! shapegen generate geosphere -p radius=1.0 -p subdivisions=3 -o ball.obj
//!
//! # Packed binary buffers instead of OBJ
//! shapegen generate pipe -p top_radius=1 -p bottom_radius=1 -p height=2 --format packed
//!
//! # Everything in a manifest
//! shapegen batch shapes.toml
//! ```
//!
//! # Manifest
//!
//! ```toml
//! [output]
//! dir = "meshes"
//! format = "obj"
//!
//! [[meshes]]
//! id = "ball"
//! shape = "geosphere"
//! radius = 1.0
//! subdivisions = 3
//! ```

mod batch;
mod generate;
mod manifest;
mod output;
mod params;
mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Shapegen CLI - procedural meshes for parametric solids
#[derive(Parser)]
#[command(name = "shapegen")]
#[command(about = "Generate triangle meshes for parametric solids")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one shape and write it to disk
    Generate(generate::GenerateArgs),

    /// Build every shape listed in a manifest
    Batch(batch::BatchArgs),

    /// Print a JSON summary of one shape
    Stats(stats::StatsArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::execute(args),
        Commands::Batch(args) => batch::execute(args),
        Commands::Stats(args) => stats::execute(args),
    }
}
