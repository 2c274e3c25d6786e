//! Report index files - the JSON registry of known reports for one scope.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::RegistryError;

/// One report record inside an index file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Display topic, as given when the report was created.
    pub topic: String,
    /// Canonicalized lookup key; unique within a single index.
    pub topic_normalized: String,
    /// Directory of the report contents, relative to the scope root.
    pub directory: String,
    pub created: String,
    pub updated: String,
}

/// A scope's report index: `{ "reports": [...] }`, in insertion order.
///
/// Read-only here; external tooling creates and updates these files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportIndex {
    #[serde(default)]
    pub reports: Vec<ReportEntry>,
}

/// Normalize a topic into its index lookup key.
///
/// Lowercases, then maps every character outside `[a-z0-9_]` to `_`. This
/// must match the normalization used by the tooling that writes index
/// entries, or lookups will miss.
pub fn normalize_topic(topic: &str) -> String {
    topic
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Load an index file, tolerating absence.
///
/// A missing file is `Ok(None)` (empty scope). Any other read failure or
/// malformed JSON is fatal - it is never conflated with absence.
pub fn load_index(path: &Path) -> Result<Option<ReportIndex>, RegistryError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(RegistryError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let index = serde_json::from_str(&content).map_err(|e| RegistryError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(Some(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_lowercases_and_replaces() {
        assert_eq!(normalize_topic("Acme API"), "acme_api");
        assert_eq!(normalize_topic("vector-db v2.1"), "vector_db_v2_1");
        assert_eq!(normalize_topic("already_normal_9"), "already_normal_9");
    }

    #[test]
    fn test_normalize_idempotent() {
        let topics = ["Auth System!", "C++ bindings", "  spaced  ", "UPPER"];
        for t in topics {
            let once = normalize_topic(t);
            assert_eq!(normalize_topic(&once), once);
        }
    }

    #[test]
    fn test_load_index_missing_is_none() {
        let tmp = TempDir::new().unwrap();
        let result = load_index(&tmp.path().join("index.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_index_parses_entries() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.json");
        fs::write(
            &path,
            r#"{"reports": [{"topic": "Acme API", "topic_normalized": "acme_api", "directory": "acme_api", "created": "2025-01-01T00:00:00Z", "updated": "2025-01-02T00:00:00Z"}]}"#,
        )
        .unwrap();

        let index = load_index(&path).unwrap().unwrap();
        assert_eq!(index.reports.len(), 1);
        assert_eq!(index.reports[0].topic, "Acme API");
        assert_eq!(index.reports[0].directory, "acme_api");
    }

    #[test]
    fn test_load_index_malformed_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_index(&path).unwrap_err();
        assert!(matches!(err, RegistryError::Malformed { .. }));
    }
}
