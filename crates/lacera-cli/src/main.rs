//! Lacera CLI — cloth grid generation, tear demos, and validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lacera")]
#[command(version, about = "Lacera — tearable cloth topology engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a cloth grid and report its topology.
    Generate {
        /// Samples along the row axis (must be > 3).
        #[arg(long, default_value_t = 10)]
        rows: u32,

        /// Samples along the column axis (must be > 3).
        #[arg(long, default_value_t = 10)]
        cols: u32,

        /// Physical extent of one row of cells, in meters.
        #[arg(long, default_value_t = 1.0)]
        extent: f32,

        /// Also build the mass-spring network.
        #[arg(long)]
        physics: bool,

        /// Write the mesh snapshot to a JSON file.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Tear a grid open around one center vertex and run the engine.
    Tear {
        /// Grid samples per axis.
        #[arg(short, long, default_value_t = 6)]
        n: u32,
    },

    /// Validate a JSON mesh snapshot.
    Validate {
        /// Path to the snapshot file.
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            rows,
            cols,
            extent,
            physics,
            output,
        } => commands::generate(rows, cols, extent, physics, output.as_deref()),
        Commands::Tear { n } => commands::tear(n),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
