//! Deterministic three.js import generation
//!
//! Pure text generation: given a classified set and a generation config,
//! emit the module binding every classified texture to a material. No
//! filesystem interaction happens here; writing is the orchestrator's job.

use crate::classify::{ClassifiedSet, TextureRole};
use crate::config::GenerationConfig;
use std::path::{Component, Path};

/// Identifier for one role's load result, e.g. `woodDiffuseTexture`
pub fn texture_identifier(prefix: &str, role: TextureRole) -> String {
    format!("{}{}Texture", prefix, capitalize(role.name()))
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Generate the import module for a classified set.
///
/// Deterministic: identical inputs produce byte-identical output. The
/// timestamp is injected by the caller so only the recorded generation
/// time varies between runs.
pub fn generate(set: &ClassifiedSet, config: &GenerationConfig, generated_at: &str) -> String {
    let prefix = &config.prefix;
    let mut lines: Vec<String> = Vec::new();

    lines.push("// Auto-generated texture imports".to_string());
    lines.push(format!("// Generated on: {}", generated_at));
    lines.push(format!(
        "// Source directory: {}",
        config.source_dir.display()
    ));
    lines.push(format!("// Prefix: {}", prefix));
    lines.push(String::new());
    lines.push("import * as THREE from 'three';".to_string());
    lines.push(String::new());
    lines.push("const textureLoader = new THREE.TextureLoader();".to_string());
    lines.push(String::new());

    lines.push(format!("// {} textures", prefix));
    let mut identifiers: Vec<(String, TextureRole)> = Vec::new();
    for (role, asset) in set.iter() {
        let identifier = texture_identifier(prefix, role);
        let load_path =
            relative_texture_path(&config.output, &config.source_dir, &asset.file_name);
        lines.push(format!(
            "export const {} = textureLoader.load('{}');",
            identifier, load_path
        ));
        if role.is_color_managed() {
            lines.push(format!("{}.colorSpace = THREE.SRGBColorSpace;", identifier));
        }
        identifiers.push((identifier, role));
    }
    lines.push(String::new());

    lines.push(format!("// {} material", prefix));
    lines.push(format!(
        "export const {}Material = new THREE.MeshStandardMaterial({{",
        prefix
    ));
    let slots: Vec<String> = identifiers
        .iter()
        .filter_map(|(identifier, role)| {
            role.material_slot()
                .map(|slot| format!("  {}: {}", slot, identifier))
        })
        .collect();
    if !slots.is_empty() {
        lines.push(slots.join(",\n"));
    }
    lines.push("});".to_string());
    lines.push(String::new());

    lines.push(format!("// Configure {} texture settings", prefix));
    lines.push(format!(
        "export function configure{}Textures(repeat = {{ x: 1, y: 1 }}) {{",
        capitalize(prefix)
    ));
    for (identifier, _) in &identifiers {
        lines.push(format!("  {}.repeat.set(repeat.x, repeat.y);", identifier));
        lines.push(format!("  {}.wrapS = THREE.RepeatWrapping;", identifier));
        lines.push(format!("  {}.wrapT = THREE.RepeatWrapping;", identifier));
    }
    lines.push("}".to_string());

    lines.join("\n")
}

/// Relative load path from the output file's directory to a texture.
///
/// Forward slashes only, always starting with `./` or `../`. The
/// computation is lexical; both paths are taken as written, with `.`
/// and resolvable `..` components normalized away.
pub fn relative_texture_path(output: &Path, source_dir: &Path, file_name: &str) -> String {
    let output_dir = output.parent().unwrap_or_else(|| Path::new(""));
    let target = source_dir.join(file_name);

    let from = normalized_parts(output_dir);
    let to = normalized_parts(&target);

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common..from.len() {
        parts.push("..".to_string());
    }
    parts.extend(to[common..].iter().cloned());

    let relative = parts.join("/");
    if relative.starts_with("../") {
        relative
    } else {
        format!("./{}", relative)
    }
}

fn normalized_parts(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(parts.last(), Some(last) if last != "..") {
                    parts.pop();
                } else {
                    parts.push("..".to_string());
                }
            }
            other => parts.push(other.as_os_str().to_string_lossy().into_owned()),
        }
    }
    parts
}
