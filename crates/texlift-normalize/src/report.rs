//! Run report for the normalizer

use std::fmt;
use std::path::PathBuf;

/// A non-fatal condition encountered while normalizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeWarning {
    /// A container holds disallowed content; its normalization was skipped
    Structural { container: PathBuf, reason: String },
    /// A rename/move destination already exists; the file was left in place
    Collision {
        source: PathBuf,
        destination: PathBuf,
    },
    /// A container still holds files after relocation and was not removed
    ResidualContainer { container: PathBuf, remaining: usize },
    /// A filesystem fault confined to one directory or file operation
    Io { path: PathBuf, message: String },
}

impl fmt::Display for NormalizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeWarning::Structural { container, reason } => {
                write!(f, "Skipping {}: {}", container.display(), reason)
            }
            NormalizeWarning::Collision {
                source,
                destination,
            } => write!(
                f,
                "Destination already exists: {} (keeping {})",
                destination.display(),
                source.display()
            ),
            NormalizeWarning::ResidualContainer {
                container,
                remaining,
            } => write!(
                f,
                "Container not removed, {} file(s) remain: {}",
                remaining,
                container.display()
            ),
            NormalizeWarning::Io { path, message } => {
                write!(f, "IO fault at {}: {}", path.display(), message)
            }
        }
    }
}

/// Accumulated results of one normalization run
#[derive(Debug, Default)]
pub struct NormalizeReport {
    pub containers_processed: usize,
    pub files_renamed: usize,
    pub files_moved: usize,
    pub containers_removed: usize,
    pub warnings: Vec<NormalizeWarning>,
}

impl NormalizeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning, logging it as it occurs
    pub fn warn(&mut self, warning: NormalizeWarning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// True when the run performed (or planned) no filesystem mutation
    pub fn is_unchanged(&self) -> bool {
        self.files_renamed == 0 && self.files_moved == 0 && self.containers_removed == 0
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
