//! Loading saved questionnaire snapshots.
//!
//! Snapshots hold raw inputs only. Results are recomputed from them on every
//! invocation; nothing computed is ever read back from disk.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::input::QuestionnaireInput;

/// One saved questionnaire: who it belongs to, when it was last saved, and
/// every module section as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSnapshot {
    pub organization: String,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
    pub modules: QuestionnaireInput,
}

#[derive(Debug)]
pub enum SnapshotError {
    Io { path: PathBuf, source: std::io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io { path, source } => {
                write!(f, "failed to read snapshot {}: {}", path.display(), source)
            }
            SnapshotError::Json { path, source } => {
                write!(f, "invalid snapshot JSON in {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io { source, .. } => Some(source),
            SnapshotError::Json { source, .. } => Some(source),
        }
    }
}

pub fn load(path: &Path) -> Result<QuestionnaireSnapshot, SnapshotError> {
    let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })
}
