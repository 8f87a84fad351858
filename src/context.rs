//! Per-root working state
//!
//! Each worker owns one [`RootContext`] for the root it processes. All
//! state that used to be ambient (the current root, its playlist name, the
//! problems seen along the way) travels through the pipeline inside it, so
//! roots never observe each other.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::ExportError;

/// A non-fatal problem encountered while processing one root.
///
/// Diagnostics degrade the playlist instead of aborting it: a skipped
/// subtree is simply absent, a failed probe leaves its track with a zero
/// duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A directory could not be read (permissions, I/O error, symlink loop)
    SubtreeSkipped { path: PathBuf, reason: String },

    /// A media file could not be probed for duration and title
    ProbeFailed { path: PathBuf, reason: String },
}

/// Working state for a single root folder
#[derive(Debug)]
pub struct RootContext {
    root: PathBuf,
    name: String,
    diagnostics: Vec<Diagnostic>,
}

impl RootContext {
    /// Create the context for one root, verifying it is an existing directory
    pub fn new(root: &Path) -> Result<Self, ExportError> {
        if !root.is_dir() {
            return Err(ExportError::InvalidRoot(root.to_path_buf()));
        }
        Ok(Self {
            root: root.to_path_buf(),
            name: playlist_name(root),
            diagnostics: Vec::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Playlist title, also the default output file stem
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record a non-fatal problem and surface it in the log
    pub fn warn(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::SubtreeSkipped { path, reason } => {
                log::warn!("Skipping subtree {:?}: {}", path, reason);
            }
            Diagnostic::ProbeFailed { path, reason } => {
                log::warn!("Could not probe {:?}: {}", path, reason);
            }
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Derive the playlist name from the root folder's base name.
///
/// Roots like `.` or `..` have no usable base name, so they are resolved
/// first. `playlist` is the last resort for paths like `/`.
fn playlist_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            let resolved = root.canonicalize().ok()?;
            let name = resolved.file_name()?;
            Some(name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "playlist".to_string())
}
