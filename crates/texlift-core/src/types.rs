//! Texture asset types and the extension allow-list

use crate::naming::split_trailing_size_token;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File extensions accepted anywhere in the pipeline
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "exr", "hdr", "webp"];

/// A texture file discovered by the scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureAsset {
    /// Full path to the file
    pub path: PathBuf,
    /// File name including extension
    pub file_name: String,
    /// Lowercased extension without the dot
    pub extension: String,
    /// File size in bytes, for reporting
    pub size_bytes: u64,
    /// Trailing `_<digits>k` resolution token, if the stem carries one
    pub resolution_token: Option<String>,
}

impl TextureAsset {
    /// Build an asset record from a path and its byte size.
    ///
    /// Returns `None` when the file has no supported extension.
    pub fn from_path(path: PathBuf, size_bytes: u64) -> Option<Self> {
        let extension = file_extension(&path)?;
        if !is_supported_extension(&extension) {
            return None;
        }
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        let stem = file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&file_name);
        let resolution_token = split_trailing_size_token(stem).1.map(str::to_string);
        Some(Self {
            path,
            file_name,
            extension,
            size_bytes,
            resolution_token,
        })
    }

    /// Human-readable file size for reporting
    pub fn human_size(&self) -> String {
        format_bytes(self.size_bytes)
    }
}

/// Lowercased extension of a path, without the dot
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Check whether an extension (without dot) is on the allow-list
pub fn is_supported_extension(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|supported| ext.eq_ignore_ascii_case(supported))
}

/// Validate an identifier prefix for generated code.
///
/// Letters, digits, underscore and dollar, not starting with a digit.
pub fn is_valid_identifier(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Format a byte count as B / KB / MB
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{} KB", (bytes as f64 / 1024.0).round() as u64)
    } else {
        format!("{} MB", (bytes as f64 / (1024.0 * 1024.0)).round() as u64)
    }
}
