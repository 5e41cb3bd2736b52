//! Archive normalization command

use crate::config::CliConfig;
use anyhow::Result;
use std::path::Path;
use texlift_normalize::{normalize_tree, NormalizeOptions};

pub struct NormalizeArgs {
    pub root: Option<String>,
    pub container: Option<String>,
    pub dry_run: bool,
}

pub fn run(args: NormalizeArgs) -> Result<()> {
    let config = CliConfig::load()?;
    let root = args.root.unwrap_or(config.normalize.root);
    let container = args.container.unwrap_or(config.normalize.container);

    println!("Normalizing texture archives under {}", root);
    let options = NormalizeOptions {
        container_name: container,
        dry_run: args.dry_run,
    };
    let report = normalize_tree(Path::new(&root), &options)?;

    if args.dry_run {
        println!("\nDry run (no changes made):");
    } else {
        println!();
    }
    println!("  Containers processed: {}", report.containers_processed);
    println!("  Files renamed:        {}", report.files_renamed);
    println!("  Files moved:          {}", report.files_moved);
    println!("  Containers removed:   {}", report.containers_removed);

    if report.has_warnings() {
        println!("\n{} warning(s):", report.warnings.len());
        for warning in &report.warnings {
            println!("  {}", warning);
        }
    } else if report.is_unchanged() {
        println!("\nTree already normalized.");
    }

    Ok(())
}
