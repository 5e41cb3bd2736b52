//! Project-local configuration
//!
//! Defaults are read from `texlift.toml` in the working directory when it
//! exists; command-line flags always win over file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use texlift_import::GenerationConfig;
use texlift_normalize::DEFAULT_CONTAINER_NAME;

pub const CONFIG_FILE: &str = "texlift.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NormalizeSection {
    /// Default root for `texlift normalize`
    pub root: String,
    /// Reserved container directory name
    pub container: String,
}

impl Default for NormalizeSection {
    fn default() -> Self {
        Self {
            root: "./public/textures".to_string(),
            container: DEFAULT_CONTAINER_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportSection {
    /// Default output path for `texlift import`
    pub output: String,
}

impl Default for ImportSection {
    fn default() -> Self {
        Self {
            output: GenerationConfig::DEFAULT_OUTPUT.to_string(),
        }
    }
}

/// Top-level `texlift.toml` structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub normalize: NormalizeSection,
    pub import: ImportSection,
}

impl CliConfig {
    /// Load the working-directory config file, or defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}
