//! Tree traversal and container flattening

use crate::report::{NormalizeReport, NormalizeWarning};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use texlift_core::{
    file_extension, is_supported_extension, NamingConvention, Result, TexliftError,
};

/// Reserved name of an asset container directory
pub const DEFAULT_CONTAINER_NAME: &str = "textures";

/// Options for one normalization run
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Reserved container directory name to look for
    pub container_name: String,
    /// Walk and report without mutating the filesystem
    pub dry_run: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
            dry_run: false,
        }
    }
}

/// Normalize every asset container under `root`.
///
/// Traversal is depth-first over an explicit work list. A recognized
/// container is terminal: it is flattened into its parent and never
/// descended into. Per-directory faults are recorded as warnings and do
/// not abort traversal of sibling subtrees.
///
/// Collision checks are check-then-act, so no two normalization runs may
/// operate on the same subtree concurrently.
pub fn normalize_tree(root: &Path, options: &NormalizeOptions) -> Result<NormalizeReport> {
    if !root.exists() {
        return Err(TexliftError::DirectoryNotFound(root.display().to_string()));
    }
    if !root.is_dir() {
        return Err(TexliftError::NotADirectory(root.display().to_string()));
    }

    let mut report = NormalizeReport::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                report.warn(NormalizeWarning::Io {
                    path: dir.clone(),
                    message: e.to_string(),
                });
                continue;
            }
        };

        let mut subdirs = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_dir() {
                        subdirs.push(path);
                    }
                }
                Err(e) => report.warn(NormalizeWarning::Io {
                    path: dir.clone(),
                    message: e.to_string(),
                }),
            }
        }
        subdirs.sort();

        for subdir in subdirs {
            let is_container = subdir.file_name().and_then(|n| n.to_str())
                == Some(options.container_name.as_str());
            if is_container {
                log::info!("Processing container: {}", subdir.display());
                flatten_container(&subdir, &dir, options, &mut report);
            } else {
                pending.push(subdir);
            }
        }
    }

    Ok(report)
}

/// Flatten one container into its parent directory.
///
/// Validates the container, strips the naming convention inferred from the
/// parent's name, relocates the files up one level, and removes the
/// container once empty. Every skipped file is recorded; nothing is ever
/// overwritten or deleted besides the emptied container itself.
fn flatten_container(
    container: &Path,
    parent: &Path,
    options: &NormalizeOptions,
    report: &mut NormalizeReport,
) {
    let entries = match fs::read_dir(container) {
        Ok(entries) => entries,
        Err(e) => {
            report.warn(NormalizeWarning::Io {
                path: container.to_path_buf(),
                message: e.to_string(),
            });
            return;
        }
    };

    // Validate before any mutation: regular files with allowed extensions only
    let mut current: Vec<String> = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.warn(NormalizeWarning::Io {
                    path: container.to_path_buf(),
                    message: e.to_string(),
                });
                return;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        if !path.is_file() {
            report.warn(NormalizeWarning::Structural {
                container: container.to_path_buf(),
                reason: format!("contains non-file entry \"{}\"", name),
            });
            return;
        }
        let supported = file_extension(&path)
            .map(|ext| is_supported_extension(&ext))
            .unwrap_or(false);
        if !supported {
            report.warn(NormalizeWarning::Structural {
                container: container.to_path_buf(),
                reason: format!("unsupported file type \"{}\"", name),
            });
            return;
        }
        current.push(name);
    }

    report.containers_processed += 1;
    current.sort();

    let parent_name = parent
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let convention = NamingConvention::from_dir_name(&parent_name);
    log::debug!(
        "{}: prefix \"{}\", size suffix {:?}",
        container.display(),
        convention.prefix,
        convention.size_suffix
    );

    // Rename in place, skipping anything that would overwrite
    for i in 0..current.len() {
        let new_name = convention.clean_file_name(&current[i]);
        if new_name == current[i] {
            continue;
        }
        let source = container.join(&current[i]);
        let destination = container.join(&new_name);
        if current.contains(&new_name) {
            report.warn(NormalizeWarning::Collision {
                source,
                destination,
            });
            continue;
        }
        if !options.dry_run {
            if let Err(e) = fs::rename(&source, &destination) {
                report.warn(NormalizeWarning::Io {
                    path: source,
                    message: e.to_string(),
                });
                continue;
            }
        }
        log::info!("Renamed: {} -> {}", current[i], new_name);
        current[i] = new_name;
        report.files_renamed += 1;
    }

    // Relocate up one level with the same collision policy
    let mut moved: HashSet<String> = HashSet::new();
    let mut residual = 0usize;
    for name in &current {
        let source = container.join(name);
        let destination = parent.join(name);
        if destination.exists() || moved.contains(name) {
            report.warn(NormalizeWarning::Collision {
                source,
                destination,
            });
            residual += 1;
            continue;
        }
        if !options.dry_run {
            if let Err(e) = fs::rename(&source, &destination) {
                report.warn(NormalizeWarning::Io {
                    path: source,
                    message: e.to_string(),
                });
                residual += 1;
                continue;
            }
        }
        log::info!("Moved: {} -> {}", name, destination.display());
        moved.insert(name.clone());
        report.files_moved += 1;
    }

    // Remove the container only once it is empty
    if residual == 0 {
        if !options.dry_run {
            if let Err(e) = fs::remove_dir(container) {
                report.warn(NormalizeWarning::Io {
                    path: container.to_path_buf(),
                    message: e.to_string(),
                });
                return;
            }
        }
        log::info!("Removed empty container: {}", container.display());
        report.containers_removed += 1;
    } else {
        report.warn(NormalizeWarning::ResidualContainer {
            container: container.to_path_buf(),
            remaining: residual,
        });
    }
}
