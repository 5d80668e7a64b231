//! Analysis snapshot loading.
//!
//! The analysis itself is produced upstream; this adapter only reads the
//! JSON document it emits.  No schema validation happens beyond what serde
//! enforces: missing lists default to empty, and scores are clamped to
//! `0..=100` by the domain types.

use std::path::{Path, PathBuf};

use seatplan_core::AnalysisResult;
use thiserror::Error;
use tracing::debug;

/// Error type for snapshot loading.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("I/O error reading analysis snapshot at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not a valid analysis document.
    #[error("failed to parse analysis snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses an analysis snapshot from JSON text.
///
/// # Errors
///
/// Returns [`SnapshotError::Parse`] if `json` is not a valid snapshot.
pub fn parse_snapshot(json: &str) -> Result<AnalysisResult, SnapshotError> {
    let analysis: AnalysisResult = serde_json::from_str(json)?;
    debug!(
        participants = analysis.participants.len(),
        scores = analysis.individual_scores.len(),
        groups = analysis.seating_groups.len(),
        suggested = %analysis.suggested_layout,
        "parsed analysis snapshot"
    );
    Ok(analysis)
}

/// Reads and parses the snapshot at `path`.
///
/// # Errors
///
/// Returns [`SnapshotError::Io`] if the file cannot be read and
/// [`SnapshotError::Parse`] if its content is invalid.
pub fn load_snapshot(path: &Path) -> Result<AnalysisResult, SnapshotError> {
    let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_snapshot(&content)
}
