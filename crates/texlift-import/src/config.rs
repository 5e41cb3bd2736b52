//! Generation configuration

use std::path::PathBuf;
use texlift_core::{is_valid_identifier, Result, TexliftError};

/// Immutable configuration for one import run.
///
/// Built once at the boundary and threaded explicitly through every
/// stage; nothing in the pipeline reads global state.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Directory holding the textures to classify
    pub source_dir: PathBuf,
    /// Prefix for generated identifiers
    pub prefix: String,
    /// Path the generated module is written to
    pub output: PathBuf,
    /// Skip confirmation and overwrite gates
    pub force: bool,
    /// Generate but suppress the write step and the overwrite gate
    pub preview: bool,
}

impl GenerationConfig {
    pub const DEFAULT_OUTPUT: &'static str = "./generated/generated-textures.ts";

    /// Check the identifier prefix before any stage runs
    pub fn validate(&self) -> Result<()> {
        if self.prefix.trim().is_empty() {
            return Err(TexliftError::InvalidPrefix(
                "prefix cannot be empty".to_string(),
            ));
        }
        if !is_valid_identifier(&self.prefix) {
            return Err(TexliftError::InvalidPrefix(format!(
                "\"{}\" is not a valid identifier (letters, digits, underscore and $, not starting with a digit)",
                self.prefix
            )));
        }
        Ok(())
    }
}
