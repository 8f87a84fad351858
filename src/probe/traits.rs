//! Probe trait and result types

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Metadata read from a media file's container headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaInfo {
    /// Play duration in milliseconds
    pub duration_ms: u64,

    /// Title stored in the container, when present and non-empty
    pub title: Option<String>,
}

/// Why a single file could not be probed.
///
/// Probe errors never abort a playlist; the affected track keeps a zero
/// duration and a filename-derived title.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The file could not be opened for reading
    #[error("failed to open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The container format is unknown or its headers are malformed
    #[error("unreadable container in {path:?}: {reason}")]
    Unsupported { path: PathBuf, reason: String },

    /// The container is readable but carries no timing information
    #[error("no duration in container headers of {path:?}")]
    NoDuration { path: PathBuf },

    /// The probe did not finish within its time budget
    #[error("probing {path:?} exceeded {timeout_ms} ms")]
    Timeout { path: PathBuf, timeout_ms: u64 },
}

/// Duration and title extraction for one media file.
///
/// The trait is the seam between the pipeline and the container parsing:
/// production uses [`super::SymphoniaProbe`], tests swap in
/// [`super::StubProbe`] for deterministic results without media fixtures.
pub trait MediaProbe {
    /// Read duration and title from the file's headers without decoding
    /// any frames
    fn probe(&self, path: &Path) -> Result<MediaInfo, ProbeError>;
}
