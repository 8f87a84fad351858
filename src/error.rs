//! Fatal per-root errors
//!
//! Only problems that abort one root's pipeline live here. Unreadable
//! subtrees and failed probes degrade into [`crate::context::Diagnostic`]
//! entries instead and never stop a playlist from being written.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error that aborts the processing of a single root folder.
///
/// Other roots in the same batch are unaffected; the pipeline reports the
/// failure and moves on.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The root path cannot be scanned at all
    #[error("root folder {0:?} does not exist or is not a directory")]
    InvalidRoot(PathBuf),

    /// The playlist document could not be rendered
    #[error("failed to render playlist for {root:?}: {message}")]
    Serialize { root: PathBuf, message: String },

    /// The playlist file could not be written to disk
    #[error("failed to write playlist {path:?}")]
    WritePlaylist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
