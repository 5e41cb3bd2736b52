//! Directory scanning for supported texture files

use std::fs;
use std::path::Path;
use texlift_core::{Result, TexliftError, TextureAsset, SUPPORTED_EXTENSIONS};

/// List the supported texture files in one directory, non-recursively.
///
/// Entries are sorted by file name so that downstream classification is
/// reproducible regardless of directory-entry order. Fails hard when the
/// directory is missing, is not a directory, or holds no supported files.
pub fn scan_textures(directory: &Path) -> Result<Vec<TextureAsset>> {
    if !directory.exists() {
        return Err(TexliftError::DirectoryNotFound(
            directory.display().to_string(),
        ));
    }
    if !directory.is_dir() {
        return Err(TexliftError::NotADirectory(directory.display().to_string()));
    }

    let mut assets = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        if let Some(asset) = TextureAsset::from_path(path, size) {
            assets.push(asset);
        }
    }

    if assets.is_empty() {
        return Err(TexliftError::NoTextureFiles {
            directory: directory.display().to_string(),
            supported: SUPPORTED_EXTENSIONS.join(", "),
        });
    }

    assets.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_filters_and_sorts() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("nor.png"), "n").unwrap();
        fs::write(tmp.path().join("diff.jpg"), "d").unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(tmp.path().join("subdir")).unwrap();

        let assets = scan_textures(tmp.path()).unwrap();
        let names: Vec<&str> = assets.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(names, vec!["diff.jpg", "nor.png"]);
    }

    #[test]
    fn test_scan_records_metadata() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("wood_diff_2k.jpg"), "123456").unwrap();

        let assets = scan_textures(tmp.path()).unwrap();
        assert_eq!(assets[0].extension, "jpg");
        assert_eq!(assets[0].size_bytes, 6);
        assert_eq!(assets[0].resolution_token.as_deref(), Some("2k"));
    }

    #[test]
    fn test_scan_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let err = scan_textures(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, TexliftError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_scan_path_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("diff.jpg");
        fs::write(&file, "d").unwrap();
        let err = scan_textures(&file).unwrap_err();
        assert!(matches!(err, TexliftError::NotADirectory(_)));
    }

    #[test]
    fn test_scan_no_supported_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();
        let err = scan_textures(tmp.path()).unwrap_err();
        assert!(matches!(err, TexliftError::NoTextureFiles { .. }));
    }
}
