use std::path::PathBuf;

use thiserror::Error;

/// Failures from the report registry core.
///
/// Absence (missing index file, no project root, unknown topic) is never an
/// error - it is modeled as `Option`/not-found result values. These variants
/// cover the failures that must reach the caller.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("failed to read index {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed index {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not determine home directory")]
    HomeDirUnavailable,
}
