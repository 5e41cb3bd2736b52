//! Import pipeline orchestration
//!
//! Sequences scan, classification and generation around the external
//! confirmation/reporting collaborator. The pipeline blocks on the
//! collaborator's answers; there is no timeout or cancellation.

use crate::classify::{classify, Classification};
use crate::codegen::generate;
use crate::config::GenerationConfig;
use crate::scan::scan_textures;
use std::fs;
use std::path::PathBuf;
use texlift_core::Result;

/// Injected collaborator for confirmation gates and progress reporting
pub trait Console {
    /// Ask a yes/no question; blocks until answered
    fn confirm(&mut self, question: &str, default_yes: bool) -> bool;
    /// Report one progress or summary line
    fn progress(&mut self, message: &str);
}

/// How an import run ended
#[derive(Debug)]
pub enum ImportOutcome {
    /// Generated code was written to the output path
    Written { path: PathBuf },
    /// Preview mode: code generated but nothing written
    Preview { code: String },
    /// No classified roles; nothing to generate
    NothingToGenerate,
    /// A confirmation gate was declined
    Cancelled,
}

/// Result of one import run
#[derive(Debug)]
pub struct ImportReport {
    pub classification: Classification,
    pub outcome: ImportOutcome,
}

/// Run the import pipeline: scan, classify, summarize, generate, write.
///
/// Validation failures surface as errors before any mutation. An empty
/// classification and declined gates are soft outcomes, not errors.
pub fn run_import(config: &GenerationConfig, console: &mut dyn Console) -> Result<ImportReport> {
    config.validate()?;

    let assets = scan_textures(&config.source_dir)?;
    console.progress(&format!(
        "Found {} texture file(s) in {}",
        assets.len(),
        config.source_dir.display()
    ));
    for asset in &assets {
        console.progress(&format!(
            "  {} ({}, {})",
            asset.file_name,
            asset.extension.to_uppercase(),
            asset.human_size()
        ));
    }

    let classification = classify(&assets);

    for entry in &classification.duplicates {
        console.progress(&format!(
            "Multiple {} textures: {} and {} (using {})",
            entry.role, entry.replaced, entry.kept, entry.kept
        ));
    }
    for asset in &classification.unrecognized {
        console.progress(&format!("Unrecognized texture: {} (ignored)", asset.file_name));
    }

    if classification.set.is_empty() {
        console.progress("No recognized textures found. Nothing to generate.");
        return Ok(ImportReport {
            classification,
            outcome: ImportOutcome::NothingToGenerate,
        });
    }

    console.progress("Classified textures:");
    for (role, asset) in classification.set.iter() {
        let color_note = if role.is_color_managed() {
            " (sRGB)"
        } else {
            ""
        };
        console.progress(&format!(
            "  {:<12} -> {}{}",
            role.name(),
            asset.file_name,
            color_note
        ));
    }

    if !config.force && !config.preview && !console.confirm("Proceed with generation?", true) {
        return Ok(ImportReport {
            classification,
            outcome: ImportOutcome::Cancelled,
        });
    }

    let code = generate(&classification.set, config, &now_iso8601());

    if config.preview {
        return Ok(ImportReport {
            classification,
            outcome: ImportOutcome::Preview { code },
        });
    }

    if !config.force && config.output.exists() {
        let question = format!("Overwrite existing file {}?", config.output.display());
        if !console.confirm(&question, false) {
            return Ok(ImportReport {
                classification,
                outcome: ImportOutcome::Cancelled,
            });
        }
    }

    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&config.output, &code)?;
    console.progress(&format!("Wrote {}", config.output.display()));

    Ok(ImportReport {
        classification,
        outcome: ImportOutcome::Written {
            path: config.output.clone(),
        },
    })
}

fn now_iso8601() -> String {
    // UTC timestamp without an external chrono dependency
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let days = secs / 86400;
    let time = secs % 86400;
    let (hours, mins, s) = (time / 3600, (time % 3600) / 60, time % 60);

    let is_leap = |year: u64| year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);

    let mut year = 1970u64;
    let mut remaining = days;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if remaining < year_days {
            break;
        }
        remaining -= year_days;
        year += 1;
    }

    let month_days = [
        31,
        if is_leap(year) { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month = 1;
    for len in month_days {
        if remaining < len {
            break;
        }
        remaining -= len;
        month += 1;
    }

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        remaining + 1,
        hours,
        mins,
        s
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;
    use texlift_core::TexliftError;

    /// Collaborator stub with a fixed answer for every gate
    struct StubConsole {
        answer: bool,
        questions: Vec<String>,
        messages: Vec<String>,
    }

    impl StubConsole {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                questions: Vec::new(),
                messages: Vec::new(),
            }
        }
    }

    impl Console for StubConsole {
        fn confirm(&mut self, question: &str, _default_yes: bool) -> bool {
            self.questions.push(question.to_string());
            self.answer
        }

        fn progress(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    fn texture_dir(tmp: &TempDir) -> PathBuf {
        let dir = tmp.path().join("wood");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("wood_diff_2k.jpg"), "d").unwrap();
        fs::write(dir.join("wood_nor_2k.jpg"), "n").unwrap();
        dir
    }

    fn config(tmp: &TempDir, source_dir: &Path) -> GenerationConfig {
        GenerationConfig {
            source_dir: source_dir.to_path_buf(),
            prefix: "wood".to_string(),
            output: tmp.path().join("generated/wood.ts"),
            force: false,
            preview: false,
        }
    }

    #[test]
    fn test_full_run_writes_output() {
        let tmp = TempDir::new().unwrap();
        let dir = texture_dir(&tmp);
        let config = config(&tmp, &dir);
        let mut console = StubConsole::answering(true);

        let report = run_import(&config, &mut console).unwrap();

        assert!(matches!(report.outcome, ImportOutcome::Written { .. }));
        let code = fs::read_to_string(&config.output).unwrap();
        assert_eq!(code.matches("textureLoader.load(").count(), 2);
        assert!(code.contains("woodDiffuseTexture.colorSpace"));
        // Output did not exist, so only the proceed gate was asked
        assert_eq!(console.questions.len(), 1);
        assert!(console
            .messages
            .iter()
            .any(|m| m.contains("Found 2 texture file(s)")));
    }

    #[test]
    fn test_declined_confirmation_cancels() {
        let tmp = TempDir::new().unwrap();
        let dir = texture_dir(&tmp);
        let config = config(&tmp, &dir);
        let mut console = StubConsole::answering(false);

        let report = run_import(&config, &mut console).unwrap();

        assert!(matches!(report.outcome, ImportOutcome::Cancelled));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_preview_generates_without_writing() {
        let tmp = TempDir::new().unwrap();
        let dir = texture_dir(&tmp);
        let config = GenerationConfig {
            preview: true,
            ..config(&tmp, &dir)
        };
        let mut console = StubConsole::answering(false);

        let report = run_import(&config, &mut console).unwrap();

        match report.outcome {
            ImportOutcome::Preview { code } => {
                assert!(code.contains("woodNormalTexture"));
            }
            other => panic!("expected preview outcome, got {:?}", other),
        }
        assert!(!config.output.exists());
        // Preview skips both gates
        assert!(console.questions.is_empty());
    }

    #[test]
    fn test_overwrite_gate_declined_keeps_existing_file() {
        let tmp = TempDir::new().unwrap();
        let dir = texture_dir(&tmp);
        let config = config(&tmp, &dir);
        fs::create_dir_all(config.output.parent().unwrap()).unwrap();
        fs::write(&config.output, "existing content").unwrap();

        // Accept the proceed gate, decline the overwrite gate
        struct ProceedOnly {
            asked: usize,
        }
        impl Console for ProceedOnly {
            fn confirm(&mut self, _question: &str, _default_yes: bool) -> bool {
                self.asked += 1;
                self.asked == 1
            }
            fn progress(&mut self, _message: &str) {}
        }

        let mut console = ProceedOnly { asked: 0 };
        let report = run_import(&config, &mut console).unwrap();

        assert!(matches!(report.outcome, ImportOutcome::Cancelled));
        assert_eq!(
            fs::read_to_string(&config.output).unwrap(),
            "existing content"
        );
    }

    #[test]
    fn test_force_skips_both_gates() {
        let tmp = TempDir::new().unwrap();
        let dir = texture_dir(&tmp);
        let config = GenerationConfig {
            force: true,
            ..config(&tmp, &dir)
        };
        fs::create_dir_all(config.output.parent().unwrap()).unwrap();
        fs::write(&config.output, "old").unwrap();

        let mut console = StubConsole::answering(false);
        let report = run_import(&config, &mut console).unwrap();

        assert!(matches!(report.outcome, ImportOutcome::Written { .. }));
        assert!(console.questions.is_empty());
        assert!(fs::read_to_string(&config.output)
            .unwrap()
            .contains("textureLoader"));
    }

    #[test]
    fn test_unrecognized_only_is_nothing_to_generate() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("misc");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("thumbnail.jpg"), "t").unwrap();

        let config = config(&tmp, &dir);
        let mut console = StubConsole::answering(true);
        let report = run_import(&config, &mut console).unwrap();

        assert!(matches!(report.outcome, ImportOutcome::NothingToGenerate));
        assert_eq!(report.classification.unrecognized.len(), 1);
        assert!(!config.output.exists());
    }

    #[test]
    fn test_invalid_prefix_fails_before_scanning() {
        let tmp = TempDir::new().unwrap();
        let config = GenerationConfig {
            prefix: "2wood".to_string(),
            ..config(&tmp, &tmp.path().join("missing"))
        };
        let mut console = StubConsole::answering(true);

        let err = run_import(&config, &mut console).unwrap_err();
        assert!(matches!(err, TexliftError::InvalidPrefix(_)));
    }

    #[test]
    fn test_scan_errors_propagate() {
        let tmp = TempDir::new().unwrap();
        let config = config(&tmp, &tmp.path().join("missing"));
        let mut console = StubConsole::answering(true);

        let err = run_import(&config, &mut console).unwrap_err();
        assert!(matches!(err, TexliftError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_duplicates_are_reported() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("wood");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("a_normal.png"), "a").unwrap();
        fs::write(dir.join("b_normal.png"), "b").unwrap();

        let config = GenerationConfig {
            force: true,
            ..config(&tmp, &dir)
        };
        let mut console = StubConsole::answering(true);
        let report = run_import(&config, &mut console).unwrap();

        assert_eq!(report.classification.duplicates.len(), 1);
        let code = fs::read_to_string(&config.output).unwrap();
        assert_eq!(code.matches("textureLoader.load(").count(), 1);
        assert!(code.contains("b_normal.png"));
    }

    #[test]
    fn test_now_iso8601_shape() {
        let stamp = now_iso8601();
        assert_eq!(stamp.len(), 20);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], "T");
        assert!(stamp.ends_with('Z'));
    }
}
