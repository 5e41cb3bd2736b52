//! Texlift Normalize - Directory normalizer for texture archives
//!
//! Walks a tree of unpacked texture archives, locates container directories
//! (a reserved-name subdirectory holding only texture files), strips the
//! archive's naming convention from the contained files, relocates them up
//! one level, and removes the emptied container.

mod report;
mod walk;

pub use report::{NormalizeReport, NormalizeWarning};
pub use walk::{normalize_tree, NormalizeOptions, DEFAULT_CONTAINER_NAME};
