//! Keyword-based texture role classification

use std::fmt;
use texlift_core::{split_trailing_size_token, TextureAsset, SUPPORTED_EXTENSIONS};

/// Semantic texture roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureRole {
    Diffuse,
    Normal,
    Roughness,
    Metallic,
    AmbientOcclusion,
    Displacement,
    /// Combined AO, roughness and metallic packed into one file
    Arm,
    Alpha,
}

/// Role evaluation order with each role's keyword set.
///
/// The order is semantically significant: the first role whose keyword
/// matches wins, so it is pinned here rather than left to map iteration.
pub const ROLE_KEYWORDS: &[(TextureRole, &[&str])] = &[
    (
        TextureRole::Diffuse,
        &["diffuse", "diff", "color", "albedo", "base"],
    ),
    (TextureRole::Normal, &["normal", "norm", "nor"]),
    (TextureRole::Roughness, &["roughness", "rough"]),
    (TextureRole::Metallic, &["metallic", "metal"]),
    (TextureRole::AmbientOcclusion, &["ao", "ambient", "occlusion"]),
    (TextureRole::Displacement, &["displacement", "disp", "height"]),
    (TextureRole::Arm, &["arm"]),
    (TextureRole::Alpha, &["alpha", "opacity"]),
];

/// Keywords marking a role as display-referred color rather than linear data
const COLOR_MANAGED_KEYWORDS: &[&str] = &["diffuse", "diff", "color", "albedo", "base"];

impl TextureRole {
    /// Short name used in reports and generated identifiers
    pub fn name(&self) -> &'static str {
        match self {
            TextureRole::Diffuse => "diffuse",
            TextureRole::Normal => "normal",
            TextureRole::Roughness => "roughness",
            TextureRole::Metallic => "metallic",
            TextureRole::AmbientOcclusion => "ao",
            TextureRole::Displacement => "displacement",
            TextureRole::Arm => "arm",
            TextureRole::Alpha => "alpha",
        }
    }

    /// Keyword set that claims this role
    pub fn keywords(&self) -> &'static [&'static str] {
        ROLE_KEYWORDS
            .iter()
            .find(|(role, _)| role == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    /// Position in the pinned evaluation order
    pub fn order_index(&self) -> usize {
        ROLE_KEYWORDS
            .iter()
            .position(|(role, _)| role == self)
            .unwrap_or(usize::MAX)
    }

    /// Whether this role's values are display-referred color requiring
    /// an explicit decoding annotation
    pub fn is_color_managed(&self) -> bool {
        self.keywords()
            .iter()
            .any(|keyword| COLOR_MANAGED_KEYWORDS.contains(keyword))
    }

    /// Material slot this role binds to in the aggregate declaration.
    ///
    /// The packed ARM role reuses the AO slot by convention even though
    /// the data also encodes roughness and metalness.
    pub fn material_slot(&self) -> Option<&'static str> {
        match self {
            TextureRole::Diffuse => Some("map"),
            TextureRole::Normal => Some("normalMap"),
            TextureRole::Roughness => Some("roughnessMap"),
            TextureRole::Metallic => Some("metalnessMap"),
            TextureRole::AmbientOcclusion => Some("aoMap"),
            TextureRole::Displacement => Some("displacementMap"),
            TextureRole::Arm => Some("aoMap"),
            TextureRole::Alpha => Some("alphaMap"),
        }
    }
}

impl fmt::Display for TextureRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detect the semantic role of a texture filename.
///
/// The name is lowercased, the known extension and a trailing
/// `_<digits>k` token are stripped, then the pinned role order is
/// evaluated; the first keyword substring match wins.
pub fn detect_role(file_name: &str) -> Option<TextureRole> {
    let name = file_name.to_lowercase();

    let mut stem = name.as_str();
    for ext in SUPPORTED_EXTENSIONS {
        if let Some(rest) = stem.strip_suffix(&format!(".{}", ext)) {
            stem = rest;
            break;
        }
    }
    let (stem, _) = split_trailing_size_token(stem);

    for (role, keywords) in ROLE_KEYWORDS {
        if keywords.iter().any(|keyword| stem.contains(keyword)) {
            return Some(*role);
        }
    }
    None
}

/// Role-to-asset mapping with at most one asset per role.
///
/// Iteration follows the pinned role order regardless of insertion order,
/// keeping downstream generation deterministic.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedSet {
    entries: Vec<(TextureRole, TextureAsset)>,
}

impl ClassifiedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an asset for a role, returning the asset it replaced, if any
    pub fn insert(&mut self, role: TextureRole, asset: TextureAsset) -> Option<TextureAsset> {
        if let Some(entry) = self.entries.iter_mut().find(|(r, _)| *r == role) {
            return Some(std::mem::replace(&mut entry.1, asset));
        }
        let position = self
            .entries
            .iter()
            .position(|(r, _)| r.order_index() > role.order_index())
            .unwrap_or(self.entries.len());
        self.entries.insert(position, (role, asset));
        None
    }

    pub fn get(&self, role: TextureRole) -> Option<&TextureAsset> {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, asset)| asset)
    }

    /// Iterate entries in pinned role order
    pub fn iter(&self) -> impl Iterator<Item = (TextureRole, &TextureAsset)> {
        self.entries.iter().map(|(role, asset)| (*role, asset))
    }

    pub fn roles(&self) -> Vec<TextureRole> {
        self.entries.iter().map(|(role, _)| *role).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A duplicate-role assignment noted during classification
#[derive(Debug, Clone)]
pub struct DuplicateEntry {
    pub role: TextureRole,
    /// File whose assignment was dropped
    pub replaced: String,
    /// File that won the role
    pub kept: String,
}

/// Result of classifying one batch of scanned files
#[derive(Debug, Default)]
pub struct Classification {
    pub set: ClassifiedSet,
    pub duplicates: Vec<DuplicateEntry>,
    pub unrecognized: Vec<TextureAsset>,
}

/// Classify a batch of scanned assets.
///
/// Each file is evaluated independently; when two files resolve to the
/// same role the later-processed one wins and both names are recorded in
/// the duplicate report. Files matching no role are excluded.
pub fn classify(assets: &[TextureAsset]) -> Classification {
    let mut classification = Classification::default();

    for asset in assets {
        match detect_role(&asset.file_name) {
            Some(role) => {
                if let Some(previous) = classification.set.insert(role, asset.clone()) {
                    log::warn!(
                        "Multiple {} textures: {} and {} (keeping {})",
                        role,
                        previous.file_name,
                        asset.file_name,
                        asset.file_name
                    );
                    classification.duplicates.push(DuplicateEntry {
                        role,
                        replaced: previous.file_name,
                        kept: asset.file_name.clone(),
                    });
                }
            }
            None => classification.unrecognized.push(asset.clone()),
        }
    }

    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn asset(file_name: &str) -> TextureAsset {
        TextureAsset::from_path(PathBuf::from("textures").join(file_name), 100)
            .unwrap_or_else(|| panic!("unsupported test file {}", file_name))
    }

    #[test]
    fn test_detect_role_case_and_suffix_insensitive() {
        assert_eq!(
            detect_role("Brick_Wall_02_ROUGHNESS_1k.png"),
            Some(TextureRole::Roughness)
        );
    }

    #[test]
    fn test_detect_role_unrecognized() {
        assert_eq!(detect_role("xyz_unlabeled.jpg"), None);
    }

    #[test]
    fn test_detect_role_all_roles() {
        assert_eq!(detect_role("wood_diff.jpg"), Some(TextureRole::Diffuse));
        assert_eq!(detect_role("wood_nor_gl.jpg"), Some(TextureRole::Normal));
        assert_eq!(detect_role("wood_rough.jpg"), Some(TextureRole::Roughness));
        assert_eq!(detect_role("wood_metal.jpg"), Some(TextureRole::Metallic));
        assert_eq!(
            detect_role("wood_occlusion.jpg"),
            Some(TextureRole::AmbientOcclusion)
        );
        assert_eq!(
            detect_role("wood_height.png"),
            Some(TextureRole::Displacement)
        );
        assert_eq!(detect_role("wood_arm.jpg"), Some(TextureRole::Arm));
        assert_eq!(detect_role("wood_opacity.png"), Some(TextureRole::Alpha));
    }

    #[test]
    fn test_first_declared_role_wins() {
        // "base" (diffuse) and "alpha" both match; diffuse is declared first
        assert_eq!(detect_role("alpha_base.png"), Some(TextureRole::Diffuse));
    }

    #[test]
    fn test_size_token_is_stripped_before_matching() {
        assert_eq!(
            detect_role("plaster_disp_4k.exr"),
            Some(TextureRole::Displacement)
        );
    }

    #[test]
    fn test_color_managed_roles() {
        assert!(TextureRole::Diffuse.is_color_managed());
        assert!(!TextureRole::Normal.is_color_managed());
        assert!(!TextureRole::Arm.is_color_managed());
        assert!(!TextureRole::Alpha.is_color_managed());
    }

    #[test]
    fn test_classify_batch() {
        let assets = vec![
            asset("wood_diff_2k.jpg"),
            asset("wood_nor_2k.jpg"),
            asset("wood_rough_2k.jpg"),
            asset("thumbnail.jpg"),
        ];
        let classification = classify(&assets);

        assert_eq!(
            classification.set.roles(),
            vec![
                TextureRole::Diffuse,
                TextureRole::Normal,
                TextureRole::Roughness
            ]
        );
        assert_eq!(classification.unrecognized.len(), 1);
        assert_eq!(classification.unrecognized[0].file_name, "thumbnail.jpg");
        assert!(classification.duplicates.is_empty());
    }

    #[test]
    fn test_duplicate_role_last_scanned_wins() {
        let assets = vec![asset("a_normal.png"), asset("b_normal.png")];
        let classification = classify(&assets);

        assert_eq!(classification.set.len(), 1);
        assert_eq!(
            classification.set.get(TextureRole::Normal).unwrap().file_name,
            "b_normal.png"
        );
        assert_eq!(classification.duplicates.len(), 1);
        assert_eq!(classification.duplicates[0].replaced, "a_normal.png");
        assert_eq!(classification.duplicates[0].kept, "b_normal.png");
    }

    #[test]
    fn test_set_iterates_in_role_order() {
        let mut set = ClassifiedSet::new();
        set.insert(TextureRole::Alpha, asset("wood_opacity.png"));
        set.insert(TextureRole::Diffuse, asset("wood_diff.jpg"));
        set.insert(TextureRole::AmbientOcclusion, asset("wood_ao.jpg"));

        assert_eq!(
            set.roles(),
            vec![
                TextureRole::Diffuse,
                TextureRole::AmbientOcclusion,
                TextureRole::Alpha
            ]
        );
    }
}
