//! Per-root outcome reporting

use serde::{Serialize, Serializer};
use std::path::PathBuf;

use crate::context::Diagnostic;
use crate::error::ExportError;
use crate::model::FolderNode;

/// How processing one root ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootOutcome {
    /// Playlist written, nothing went wrong
    Success,

    /// Playlist written, but some subtrees or probes were degraded
    Partial,

    /// An existing playlist was kept untouched
    Skipped,

    /// No playlist was written for this root
    Failed,
}

/// Result of processing a single root folder.
///
/// One report per root, in the same order the roots were given. A failed
/// root never hides the reports of the others.
#[derive(Debug, Serialize)]
pub struct RootReport {
    /// The root folder as requested
    pub root: PathBuf,

    pub outcome: RootOutcome,

    /// Playlist file location, for every outcome except `Failed`
    pub playlist: Option<PathBuf>,

    /// Number of tracks in the playlist (0 when skipped or failed)
    pub tracks: usize,

    /// Number of folder groups in the playlist, the root included
    pub folders: usize,

    /// Total duration of the playlist in milliseconds
    pub total_duration_ms: u64,

    /// Non-fatal problems encountered along the way
    pub diagnostics: Vec<Diagnostic>,

    /// The fatal error, for the `Failed` outcome
    #[serde(serialize_with = "error_message")]
    pub error: Option<ExportError>,
}

impl RootReport {
    /// Report for a root whose playlist was written
    pub fn completed(
        root: PathBuf,
        playlist: PathBuf,
        tree: &FolderNode,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        let outcome = if diagnostics.is_empty() {
            RootOutcome::Success
        } else {
            RootOutcome::Partial
        };
        Self {
            root,
            outcome,
            playlist: Some(playlist),
            tracks: tree.track_count(),
            folders: tree.folder_count(),
            total_duration_ms: tree.total_duration_ms,
            diagnostics,
            error: None,
        }
    }

    /// Report for a root whose existing playlist was left untouched
    pub fn skipped(root: PathBuf, playlist: PathBuf) -> Self {
        Self {
            root,
            outcome: RootOutcome::Skipped,
            playlist: Some(playlist),
            tracks: 0,
            folders: 0,
            total_duration_ms: 0,
            diagnostics: Vec::new(),
            error: None,
        }
    }

    /// Report for a root that produced no playlist
    pub fn failed(root: PathBuf, error: ExportError, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            root,
            outcome: RootOutcome::Failed,
            playlist: None,
            tracks: 0,
            folders: 0,
            total_duration_ms: 0,
            diagnostics,
            error: Some(error),
        }
    }
}

/// Serialize the fatal error as its display message
fn error_message<S: Serializer>(
    error: &Option<ExportError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}
