//! Topic resolution - does a report already exist for a topic?
//!
//! Checks the project-scoped index first (found by walking up from the
//! working directory), then falls back to the global index. The two scopes
//! are never merged; a project match always wins.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::index::{ReportEntry, ReportIndex, load_index, normalize_topic};
use super::{RegistryConfig, RegistryError, STATE_DIR_NAME, find_project_root, project_index_path};

/// Which index a report was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Project,
    Global,
}

/// Result of a `check_report_exists` lookup.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<PathBuf>,
    /// Display topic: the index entry's on a hit, the query's on a miss.
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    pub message: String,
}

impl CheckReport {
    fn found(entry: &ReportEntry, scope: Scope, report_path: PathBuf) -> Self {
        let message = match scope {
            Scope::Project => format!("Report found: {}", entry.topic),
            Scope::Global => format!("Report found (global): {}", entry.topic),
        };
        Self {
            exists: true,
            scope: Some(scope),
            report_path: Some(report_path),
            topic: entry.topic.clone(),
            created: Some(entry.created.clone()),
            updated: Some(entry.updated.clone()),
            message,
        }
    }

    fn not_found(topic: &str) -> Self {
        Self {
            exists: false,
            scope: None,
            report_path: None,
            topic: topic.to_string(),
            message: format!(
                "No report found for \"{topic}\". You can create one using the report-creator subagent."
            ),
            created: None,
            updated: None,
        }
    }
}

/// Report lookup over the project and global indexes.
///
/// Carries the resolved global root so the global scope is an explicit
/// input rather than an ambient environment read.
pub struct ReportRegistry {
    global_root: PathBuf,
}

impl ReportRegistry {
    pub fn new(global_root: impl Into<PathBuf>) -> Self {
        Self {
            global_root: global_root.into(),
        }
    }

    /// Build a registry from the user config, falling back to the default
    /// global root under the home directory.
    pub fn from_config() -> anyhow::Result<Self> {
        let config = RegistryConfig::load()?;
        let global_root = match config.global_root {
            Some(root) => root,
            None => super::default_global_root().ok_or(RegistryError::HomeDirUnavailable)?,
        };
        Ok(Self::new(global_root))
    }

    pub fn global_root(&self) -> &Path {
        &self.global_root
    }

    /// Path of the global index file.
    pub fn global_index_path(&self) -> PathBuf {
        self.global_root.join(super::INDEX_FILE_NAME)
    }

    /// Look up a topic, project scope first, then global.
    ///
    /// A missing project root or missing index file means "no match in that
    /// scope"; only unreadable or malformed index files are errors.
    pub fn check_report_exists(
        &self,
        topic: &str,
        working_dir: &Path,
    ) -> Result<CheckReport, RegistryError> {
        let key = normalize_topic(topic);

        if let Some(project_root) = find_project_root(working_dir) {
            debug!(root = %project_root.display(), "found project root");
            if let Some(index) = load_index(&project_index_path(&project_root))? {
                if let Some(entry) = find_entry(&index, topic, &key) {
                    let report_path = project_root.join(STATE_DIR_NAME).join(&entry.directory);
                    return Ok(CheckReport::found(entry, Scope::Project, report_path));
                }
            }
        }

        if let Some(index) = load_index(&self.global_index_path())? {
            if let Some(entry) = find_entry(&index, topic, &key) {
                let report_path = self.global_root.join(&entry.directory);
                return Ok(CheckReport::found(entry, Scope::Global, report_path));
            }
        }

        debug!(topic = topic, key = %key, "no report in either scope");
        Ok(CheckReport::not_found(topic))
    }
}

/// First entry matching the normalized key OR the display topic
/// case-insensitively. Linear scan in index order: insertion order is the
/// tie-break when both conditions could match different entries.
fn find_entry<'a>(index: &'a ReportIndex, topic: &str, key: &str) -> Option<&'a ReportEntry> {
    let topic_lower = topic.to_lowercase();
    index
        .reports
        .iter()
        .find(|r| r.topic_normalized == key || r.topic.to_lowercase() == topic_lower)
}
