//! Texlift CLI - Texture archive normalizer and import generator

mod commands;
mod config;
mod console;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{import, normalize};

#[derive(Parser)]
#[command(name = "texlift")]
#[command(about = "Texture archive normalizer and material import generator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten texture archive containers into a convention-free layout
    Normalize {
        /// Root directory to walk (defaults to the configured root)
        root: Option<String>,

        /// Container directory name to look for
        #[arg(long)]
        container: Option<String>,

        /// Walk and report without renaming or moving anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Classify a texture directory and generate material import code
    Import {
        /// Directory containing textures (prompted for when omitted)
        #[arg(short, long)]
        directory: Option<String>,

        /// Prefix for generated identifiers (prompted for when omitted)
        #[arg(short, long)]
        prefix: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// Overwrite existing files without confirmation
        #[arg(short, long)]
        force: bool,

        /// Show generated code without writing the file
        #[arg(long)]
        preview: bool,

        /// Report format (text or json); json answers every gate with its default
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize {
            root,
            container,
            dry_run,
        } => normalize::run(normalize::NormalizeArgs {
            root,
            container,
            dry_run,
        }),
        Commands::Import {
            directory,
            prefix,
            output,
            force,
            preview,
            format,
        } => import::run(import::ImportArgs {
            directory,
            prefix,
            output,
            force,
            preview,
            format,
        }),
    }
}
