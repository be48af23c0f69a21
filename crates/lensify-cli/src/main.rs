use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{cmd_apply, cmd_batch, cmd_effects};

#[derive(Parser)]
#[command(name = "lensify")]
#[command(version, about = "Photographic effect processor for JPEG and PNG images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an effect to a single image
    Apply {
        /// Input file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Effect name from the catalog
        #[arg(short, long, value_name = "NAME")]
        effect: String,

        /// Output file or directory
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// JPEG quality (1-100, default from config)
        #[arg(short, long, value_name = "N")]
        quality: Option<u8>,

        /// Fixed seed for stochastic effects (reproducible output)
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Suppress progress output
        #[arg(long)]
        silent: bool,

        /// Enable verbose output
        #[arg(long)]
        verbose: bool,
    },

    /// Apply one effect to many images in parallel
    Batch {
        /// Input files or directories
        #[arg(value_name = "INPUTS")]
        inputs: Vec<PathBuf>,

        /// Effect name from the catalog
        #[arg(short, long, value_name = "NAME")]
        effect: String,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Scan directories recursively
        #[arg(short, long)]
        recursive: bool,

        /// JPEG quality (1-100, default from config)
        #[arg(short, long, value_name = "N")]
        quality: Option<u8>,

        /// Base seed for stochastic effects; each file derives its own
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Suppress progress output
        #[arg(long)]
        silent: bool,

        /// Enable verbose output
        #[arg(long)]
        verbose: bool,
    },

    /// List available effects
    Effects,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Apply {
            input,
            effect,
            out,
            quality,
            seed,
            silent,
            verbose,
        } => cmd_apply(input, out, effect, quality, seed, silent, verbose),

        Commands::Batch {
            inputs,
            effect,
            out,
            recursive,
            quality,
            seed,
            threads,
            silent,
            verbose,
        } => cmd_batch(
            inputs, effect, out, recursive, quality, seed, threads, silent, verbose,
        ),

        Commands::Effects => cmd_effects(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
