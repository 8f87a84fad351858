use serde::Serialize;
use std::path::{Path, PathBuf};

/// A single media file scheduled for the playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackNode {
    /// Absolute path of the media file
    pub path: PathBuf,

    /// Display title: the container's title tag when one exists,
    /// otherwise the file name without its extension
    pub title: String,

    /// Play duration in milliseconds; 0 when probing failed
    pub duration_ms: u64,
}

impl TrackNode {
    /// Title used when the container carries no usable title tag
    pub fn fallback_title(path: &Path) -> String {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned())
    }
}
