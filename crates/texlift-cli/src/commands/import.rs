//! Texture import command

use crate::config::CliConfig;
use crate::console::{prompt_value, QuietConsole, TerminalConsole};
use anyhow::Result;
use serde_json::json;
use std::path::{Path, PathBuf};
use texlift_import::{
    capitalize, run_import, texture_identifier, GenerationConfig, ImportOutcome, ImportReport,
};

pub struct ImportArgs {
    pub directory: Option<String>,
    pub prefix: Option<String>,
    pub output: Option<String>,
    pub force: bool,
    pub preview: bool,
    pub format: String,
}

pub fn run(args: ImportArgs) -> Result<()> {
    let file_config = CliConfig::load()?;

    let directory = match args.directory {
        Some(directory) => directory,
        None => prompt_value("Enter texture directory path", "./public/textures")?,
    };

    let prefix = match args.prefix {
        Some(prefix) => prefix,
        None => {
            // The directory's own name is usually the material name
            let default = Path::new(&directory)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("textures");
            prompt_value("Enter prefix for texture identifiers", default)?
        }
    };

    let output = args.output.unwrap_or(file_config.import.output);

    let config = GenerationConfig {
        source_dir: PathBuf::from(directory),
        prefix,
        output: PathBuf::from(output),
        force: args.force,
        preview: args.preview,
    };

    let report = if args.format == "json" {
        run_import(&config, &mut QuietConsole)?
    } else {
        run_import(&config, &mut TerminalConsole::new())?
    };

    if args.format == "json" {
        print_report_json(&config, &report)
    } else {
        print_report_text(&config, &report);
        Ok(())
    }
}

fn print_report_text(config: &GenerationConfig, report: &ImportReport) {
    match &report.outcome {
        ImportOutcome::Written { path } => {
            println!("\nGenerated exports:");
            for (role, _) in report.classification.set.iter() {
                println!("  export const {}", texture_identifier(&config.prefix, role));
            }
            println!("  export const {}Material", config.prefix);
            println!(
                "  export function configure{}Textures()",
                capitalize(&config.prefix)
            );

            println!("\nUsage:");
            println!(
                "  import {{ {0}Material, configure{1}Textures }} from '{2}';",
                config.prefix,
                capitalize(&config.prefix),
                module_path_of(path)
            );
            println!(
                "  configure{}Textures({{ x: 8, y: 8 }});",
                capitalize(&config.prefix)
            );
            println!(
                "  const mesh = new THREE.Mesh(geometry, {}Material);",
                config.prefix
            );
        }
        ImportOutcome::Preview { code } => {
            println!("\nGenerated code preview:");
            println!("{}", "-".repeat(60));
            println!("{}", code);
            println!("{}", "-".repeat(60));
            println!("Preview mode - no file written.");
        }
        ImportOutcome::NothingToGenerate => {
            println!(
                "Tip: rename files to include keywords like diffuse, normal, roughness, ao."
            );
        }
        ImportOutcome::Cancelled => {
            println!("Generation cancelled.");
        }
    }
}

fn print_report_json(config: &GenerationConfig, report: &ImportReport) -> Result<()> {
    let roles: Vec<serde_json::Value> = report
        .classification
        .set
        .iter()
        .map(|(role, asset)| {
            json!({
                "role": role.name(),
                "file": asset.file_name,
                "size_bytes": asset.size_bytes,
                "color_managed": role.is_color_managed(),
            })
        })
        .collect();

    let duplicates: Vec<serde_json::Value> = report
        .classification
        .duplicates
        .iter()
        .map(|entry| {
            json!({
                "role": entry.role.name(),
                "kept": entry.kept,
                "replaced": entry.replaced,
            })
        })
        .collect();

    let unrecognized: Vec<&str> = report
        .classification
        .unrecognized
        .iter()
        .map(|asset| asset.file_name.as_str())
        .collect();

    let outcome = match &report.outcome {
        ImportOutcome::Written { .. } => "written",
        ImportOutcome::Preview { .. } => "preview",
        ImportOutcome::NothingToGenerate => "nothing_to_generate",
        ImportOutcome::Cancelled => "cancelled",
    };

    let mut value = json!({
        "outcome": outcome,
        "source": config.source_dir,
        "prefix": config.prefix,
        "roles": roles,
        "duplicates": duplicates,
        "unrecognized": unrecognized,
    });
    if let ImportOutcome::Written { path } = &report.outcome {
        value["output"] = json!(path);
    }

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Import specifier for the generated module: extension stripped,
/// explicitly relative
fn module_path_of(path: &Path) -> String {
    let text = path.display().to_string().replace('\\', "/");
    let without_ext = text.strip_suffix(".ts").unwrap_or(&text).to_string();
    if without_ext.starts_with("./") || without_ext.starts_with("../") {
        without_ext
    } else {
        format!("./{}", without_ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_path_of() {
        assert_eq!(
            module_path_of(Path::new("./generated/generated-textures.ts")),
            "./generated/generated-textures"
        );
        assert_eq!(
            module_path_of(Path::new("materials/stone.ts")),
            "./materials/stone"
        );
        assert_eq!(module_path_of(Path::new("../shared/mat.ts")), "../shared/mat");
    }
}
