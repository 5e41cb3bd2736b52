//! Naming-convention inference for texture archives
//!
//! Archives from texture libraries name directories like `brick_wall_02_2k`
//! and files like `brick_wall_02_diff_2k.jpg`. The convention inferred from
//! the directory name is used to strip that boilerplate from filenames.

use serde::{Deserialize, Serialize};

/// Resolution tokens recognized as a directory-name size suffix
pub const SIZE_TOKENS: &[&str] = &["1k", "2k", "4k", "8k"];

/// The prefix/size-suffix pair inferred from a container's parent directory name.
///
/// Every string has a well-defined convention: when the final `_`-separated
/// token is not a known resolution token, the prefix is the whole name and
/// there is no suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConvention {
    pub prefix: String,
    pub size_suffix: Option<String>,
}

impl NamingConvention {
    /// Infer the convention from a directory name
    pub fn from_dir_name(name: &str) -> Self {
        if let Some((head, last)) = name.rsplit_once('_') {
            if SIZE_TOKENS.contains(&last) {
                return Self {
                    prefix: head.to_string(),
                    size_suffix: Some(last.to_string()),
                };
            }
        }
        Self {
            prefix: name.to_string(),
            size_suffix: None,
        }
    }

    /// Strip the convention's boilerplate from a filename, keeping the extension.
    ///
    /// The prefix is removed only when the base name starts with it; leading
    /// separators left behind are collapsed. When a size suffix was derived,
    /// a leftover resolution token is also stripped from either end of the
    /// base name (archives embed the size both mid-name and as a trailing
    /// token, e.g. `wood_2k_diff_1k.jpg`).
    pub fn clean_file_name(&self, file_name: &str) -> String {
        let (stem, ext) = match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
            _ => (file_name, None),
        };

        let mut clean = stem;
        if let Some(rest) = clean.strip_prefix(self.prefix.as_str()) {
            clean = rest;
        }
        clean = clean.trim_start_matches('_');

        if self.size_suffix.is_some() {
            for token in SIZE_TOKENS {
                if let Some(rest) = clean.strip_prefix(&format!("{}_", token)) {
                    clean = rest;
                    break;
                }
            }
            let (rest, token) = split_trailing_size_token(clean);
            if token.is_some() {
                clean = rest;
            }
        }

        // A stem reduced to nothing would turn the file into a dotfile
        if clean.is_empty() {
            return file_name.to_string();
        }

        match ext {
            Some(ext) => format!("{}.{}", clean, ext),
            None => clean.to_string(),
        }
    }
}

/// Split a trailing `_<digits>k` resolution token off a file stem.
///
/// Returns the remaining stem and the token, if one was present.
pub fn split_trailing_size_token(stem: &str) -> (&str, Option<&str>) {
    if let Some((head, last)) = stem.rsplit_once('_') {
        let is_token = last.len() >= 2
            && last.ends_with('k')
            && last[..last.len() - 1].chars().all(|c| c.is_ascii_digit());
        if is_token {
            return (head, Some(last));
        }
    }
    (stem, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convention_with_size_suffix() {
        let convention = NamingConvention::from_dir_name("brick_2k");
        assert_eq!(convention.prefix, "brick");
        assert_eq!(convention.size_suffix.as_deref(), Some("2k"));
    }

    #[test]
    fn test_convention_without_size_suffix() {
        let convention = NamingConvention::from_dir_name("brick");
        assert_eq!(convention.prefix, "brick");
        assert_eq!(convention.size_suffix, None);
    }

    #[test]
    fn test_convention_multi_segment_prefix() {
        let convention = NamingConvention::from_dir_name("brick_wall_02_4k");
        assert_eq!(convention.prefix, "brick_wall_02");
        assert_eq!(convention.size_suffix.as_deref(), Some("4k"));
    }

    #[test]
    fn test_clean_suffix_after_type() {
        let convention = NamingConvention::from_dir_name("brick_2k");
        assert_eq!(convention.clean_file_name("brick_diff_2k.jpg"), "diff.jpg");
    }

    #[test]
    fn test_clean_suffix_before_type() {
        let convention = NamingConvention::from_dir_name("brick_2k");
        assert_eq!(
            convention.clean_file_name("brick_2k_diffuse.jpg"),
            "diffuse.jpg"
        );
    }

    #[test]
    fn test_clean_without_suffix_skips_suffix_strip() {
        let convention = NamingConvention::from_dir_name("brick");
        assert_eq!(
            convention.clean_file_name("brick_diffuse.jpg"),
            "diffuse.jpg"
        );
        // No suffix derived, so an embedded token survives
        assert_eq!(
            convention.clean_file_name("brick_diff_1k.jpg"),
            "diff_1k.jpg"
        );
    }

    #[test]
    fn test_clean_mixed_resolution_tokens() {
        // Directory advertises 2k but the files carry a 1k token
        let convention = NamingConvention::from_dir_name("wood_2k");
        assert_eq!(
            convention.clean_file_name("wood_2k_diff_1k.jpg"),
            "diff.jpg"
        );
    }

    #[test]
    fn test_clean_unrelated_file_untouched() {
        let convention = NamingConvention::from_dir_name("brick_2k");
        assert_eq!(convention.clean_file_name("stone_nor.png"), "stone_nor.png");
    }

    #[test]
    fn test_clean_never_empties_the_stem() {
        let convention = NamingConvention::from_dir_name("brick");
        assert_eq!(convention.clean_file_name("brick.jpg"), "brick.jpg");
    }

    #[test]
    fn test_split_trailing_size_token() {
        assert_eq!(split_trailing_size_token("diff_2k"), ("diff", Some("2k")));
        assert_eq!(split_trailing_size_token("diff_16k"), ("diff", Some("16k")));
        assert_eq!(split_trailing_size_token("diff_k"), ("diff_k", None));
        assert_eq!(split_trailing_size_token("diffuse"), ("diffuse", None));
        assert_eq!(split_trailing_size_token("rock_2d"), ("rock_2d", None));
    }
}
