//! Texlift Core - Foundational types for the texlift texture pipeline
//!
//! This crate provides the types that all other texlift crates depend on:
//! - `NamingConvention` - prefix/size-suffix pattern inferred from directory names
//! - `TextureAsset` - a discovered texture file with its metadata
//! - The supported-extension allow-list and resolution-token set
//! - Error types and Result alias

mod error;
mod naming;
mod types;

pub use error::{Result, TexliftError};
pub use naming::{split_trailing_size_token, NamingConvention, SIZE_TOKENS};
pub use types::{
    file_extension, format_bytes, is_supported_extension, is_valid_identifier, TextureAsset,
    SUPPORTED_EXTENSIONS,
};
