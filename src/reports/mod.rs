//! Research report registry - project and global report lookup plus linting.
//!
//! Reports live in `.claude_research/` within a project, or under
//! `~/.claude/research_reports/_global/` for user-wide reports:
//! - `index.json` - registry of known reports for that scope
//! - `<report>/metadata.json` + `_OVERVIEW.md` + `sections/` - report contents

mod config;
mod error;
mod index;
pub mod lint;
pub mod mcp;
mod resolve;

pub use config::RegistryConfig;
pub use error::RegistryError;
pub use index::{ReportEntry, ReportIndex, load_index, normalize_topic};
pub use resolve::{CheckReport, ReportRegistry, Scope};

use std::path::{Path, PathBuf};

/// The name of the per-project report state directory.
pub const STATE_DIR_NAME: &str = ".claude_research";

/// The name of the index file inside a scope root.
pub const INDEX_FILE_NAME: &str = "index.json";

/// Project markers probed in order at each level of the upward walk.
/// `.git` takes priority when both exist at the same level.
const PROJECT_MARKERS: &[&str] = &[".git", STATE_DIR_NAME];

/// Find the project root by walking up from the given path.
///
/// Returns the nearest ancestor (inclusive) containing one of the project
/// markers, or `None` once the filesystem root is exhausted.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if PROJECT_MARKERS.iter().any(|m| current.join(m).exists()) {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Path of the project-scoped index file under a project root.
pub fn project_index_path(project_root: &Path) -> PathBuf {
    project_root.join(STATE_DIR_NAME).join(INDEX_FILE_NAME)
}

/// Default global reports root: `~/.claude/research_reports/_global`.
///
/// `None` when the home directory cannot be determined; callers surface
/// that as a configuration error.
pub fn default_global_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".claude")
            .join("research_reports")
            .join("_global")
    })
}
