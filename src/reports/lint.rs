//! Report structure linting.
//!
//! Judges a report directory against the expected layout: `metadata.json`,
//! `_OVERVIEW.md`, and `sections/<NAME>/{_OVERVIEW.md,_FULL.md}`. Violations
//! accumulate as errors (invalidating) or warnings (advisory); the linter
//! reads and judges, never mutates, and never throws - every failure it can
//! classify becomes a reported finding.

use std::path::Path;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Required fields in a report's `metadata.json`.
const METADATA_FIELDS: &[&str] = &["topic", "topic_normalized", "created", "scope"];

/// Outcome of linting one report directory.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub fixes: Vec<String>,
    pub message: String,
}

impl LintReport {
    fn finish(errors: Vec<String>, warnings: Vec<String>) -> Self {
        let mut fixes = Vec::new();
        if errors.is_empty() && !warnings.is_empty() {
            fixes.push(
                "Minor formatting issues detected. These are warnings only and do not require fixes."
                    .to_string(),
            );
        }

        let valid = errors.is_empty();
        let message = if valid {
            format!("Report structure is valid. {} warning(s).", warnings.len())
        } else {
            format!(
                "Report structure has {} error(s) and {} warning(s).",
                errors.len(),
                warnings.len()
            )
        };

        Self {
            valid,
            errors,
            warnings,
            fixes,
            message,
        }
    }
}

/// Validate the structure of a report directory.
pub fn lint_report(report_path: &Path) -> LintReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !report_path.exists() {
        return LintReport::finish(
            vec![format!(
                "Report directory not found: {}",
                report_path.display()
            )],
            Vec::new(),
        );
    }

    // metadata.json is a hard prerequisite; the remaining checks are skipped
    // without it
    match read_metadata(report_path) {
        Some(metadata) => {
            for field in METADATA_FIELDS {
                if metadata.get(field).is_none_or(Value::is_null) {
                    errors.push(format!("metadata.json missing \"{field}\" field"));
                }
            }
        }
        None => {
            errors.push("metadata.json not found or invalid JSON".to_string());
            return LintReport::finish(errors, warnings);
        }
    }

    check_overview(report_path, &mut errors, &mut warnings);
    check_sections(report_path, &mut errors, &mut warnings);

    LintReport::finish(errors, warnings)
}

fn read_metadata(report_path: &Path) -> Option<Value> {
    let content = std::fs::read_to_string(report_path.join("metadata.json")).ok()?;
    serde_json::from_str(&content).ok()
}

fn check_overview(report_path: &Path, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    let content = match std::fs::read_to_string(report_path.join("_OVERVIEW.md")) {
        Ok(content) => content,
        Err(_) => {
            errors.push("_OVERVIEW.md not found".to_string());
            return;
        }
    };

    if !content.contains("# ") {
        warnings.push("_OVERVIEW.md should start with a heading".to_string());
    }

    if content.chars().count() < 100 {
        warnings.push("_OVERVIEW.md seems too short (< 100 characters)".to_string());
    }
}

fn check_sections(report_path: &Path, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    let sections_path = report_path.join("sections");
    let entries = match std::fs::read_dir(&sections_path) {
        Ok(entries) => entries,
        Err(_) => {
            errors.push("sections/ directory not found".to_string());
            return;
        }
    };

    // Sorted by name so findings come out in a stable order
    let mut names: Vec<String> = entries
        .flatten()
        .filter_map(|e| e.file_name().into_string().ok())
        .collect();
    names.sort();

    if names.is_empty() {
        warnings.push("sections/ directory is empty".to_string());
        return;
    }

    let name_convention = Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("valid section name regex");

    for name in &names {
        let section_path = sections_path.join(name);
        if !section_path.is_dir() {
            continue;
        }

        if !name_convention.is_match(name) {
            warnings.push(format!(
                "Section \"{name}\" should use UPPERCASE_WITH_UNDERSCORES naming"
            ));
        }

        for required in ["_OVERVIEW.md", "_FULL.md"] {
            if !section_path.join(required).exists() {
                errors.push(format!("Section \"{name}\" missing {required}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const OVERVIEW: &str = "# Title\n\nA report overview long enough to clear the minimum length \
                            check, with a little detail about what the report covers.";

    fn write_metadata(report: &Path) {
        fs::write(
            report.join("metadata.json"),
            r#"{"topic": "Acme API", "topic_normalized": "acme_api", "created": "2025-01-01T00:00:00Z", "scope": "project"}"#,
        )
        .unwrap();
    }

    fn write_section(report: &Path, name: &str) {
        let section = report.join("sections").join(name);
        fs::create_dir_all(&section).unwrap();
        fs::write(section.join("_OVERVIEW.md"), "# Section\n\noverview").unwrap();
        fs::write(section.join("_FULL.md"), "# Section\n\nfull text").unwrap();
    }

    /// A report that passes every check.
    fn valid_report(tmp: &TempDir) -> std::path::PathBuf {
        let report = tmp.path().join("report");
        fs::create_dir_all(&report).unwrap();
        write_metadata(&report);
        fs::write(report.join("_OVERVIEW.md"), OVERVIEW).unwrap();
        write_section(&report, "FOO_BAR");
        report
    }

    #[test]
    fn test_missing_directory_single_error() {
        let tmp = TempDir::new().unwrap();
        let result = lint_report(&tmp.path().join("nope"));

        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("nope"));
        assert!(result.warnings.is_empty());
        assert!(result.fixes.is_empty());
    }

    #[test]
    fn test_valid_report_passes() {
        let tmp = TempDir::new().unwrap();
        let result = lint_report(&valid_report(&tmp));

        assert!(result.valid, "unexpected errors: {:?}", result.errors);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert!(result.fixes.is_empty());
        assert_eq!(result.message, "Report structure is valid. 0 warning(s).");
    }

    #[test]
    fn test_missing_metadata_short_circuits() {
        let tmp = TempDir::new().unwrap();
        let report = tmp.path().join("report");
        fs::create_dir_all(&report).unwrap();
        // No metadata.json; overview and sections are never reached
        let result = lint_report(&report);

        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec!["metadata.json not found or invalid JSON".to_string()]
        );
    }

    #[test]
    fn test_metadata_missing_fields_each_reported() {
        let tmp = TempDir::new().unwrap();
        let report = tmp.path().join("report");
        fs::create_dir_all(&report).unwrap();
        fs::write(report.join("metadata.json"), r#"{"topic": "Acme API"}"#).unwrap();
        fs::write(report.join("_OVERVIEW.md"), OVERVIEW).unwrap();
        write_section(&report, "FOO_BAR");

        let result = lint_report(&report);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 3);
        for field in ["topic_normalized", "created", "scope"] {
            assert!(
                result.errors.iter().any(|e| e.contains(field)),
                "no error for {field}"
            );
        }
    }

    #[test]
    fn test_short_overview_without_heading_warns_twice() {
        let tmp = TempDir::new().unwrap();
        let report = valid_report(&tmp);
        fs::write(report.join("_OVERVIEW.md"), "too short, no heading").unwrap();

        let result = lint_report(&report);
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 2);
        // Warnings only: the advisory fix note is appended
        assert_eq!(result.fixes.len(), 1);
    }

    #[test]
    fn test_lowercase_section_name_warns_but_stays_valid() {
        let tmp = TempDir::new().unwrap();
        let report = tmp.path().join("report");
        fs::create_dir_all(&report).unwrap();
        write_metadata(&report);
        fs::write(report.join("_OVERVIEW.md"), OVERVIEW).unwrap();
        write_section(&report, "foo_bar");

        let result = lint_report(&report);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("foo_bar"));
    }

    #[test]
    fn test_missing_section_full_is_one_error() {
        let tmp = TempDir::new().unwrap();
        let report = valid_report(&tmp);
        write_section(&report, "SECOND");
        fs::remove_file(report.join("sections/SECOND/_FULL.md")).unwrap();

        let result = lint_report(&report);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("SECOND"));
        assert!(result.errors[0].contains("_FULL.md"));
    }

    #[test]
    fn test_empty_sections_dir_warns() {
        let tmp = TempDir::new().unwrap();
        let report = tmp.path().join("report");
        fs::create_dir_all(report.join("sections")).unwrap();
        write_metadata(&report);
        fs::write(report.join("_OVERVIEW.md"), OVERVIEW).unwrap();

        let result = lint_report(&report);
        assert!(result.valid);
        assert_eq!(
            result.warnings,
            vec!["sections/ directory is empty".to_string()]
        );
    }

    #[test]
    fn test_missing_sections_dir_is_error() {
        let tmp = TempDir::new().unwrap();
        let report = tmp.path().join("report");
        fs::create_dir_all(&report).unwrap();
        write_metadata(&report);
        fs::write(report.join("_OVERVIEW.md"), OVERVIEW).unwrap();

        let result = lint_report(&report);
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec!["sections/ directory not found".to_string()]
        );
    }

    #[test]
    fn test_non_directory_section_entries_ignored() {
        let tmp = TempDir::new().unwrap();
        let report = valid_report(&tmp);
        fs::write(report.join("sections/notes.txt"), "stray file").unwrap();

        let result = lint_report(&report);
        assert!(result.valid);
        assert!(result.warnings.is_empty());
    }
}
