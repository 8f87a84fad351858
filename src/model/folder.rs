use serde::Serialize;
use std::path::PathBuf;

use super::TrackNode;

/// One folder of the scanned hierarchy, with its media files and subfolders
///
/// The tree mirrors the on-disk layout after pruning: every folder present
/// here contains at least one track somewhere beneath it, except possibly
/// the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FolderNode {
    /// Folder base name, used as the playlist group label
    pub name: String,

    /// Filesystem path as discovered
    pub path: PathBuf,

    /// Media files directly inside this folder, in scan order
    pub tracks: Vec<TrackNode>,

    /// Subfolders, in scan order
    pub children: Vec<FolderNode>,

    /// Total duration of every track in this subtree, in milliseconds
    pub total_duration_ms: u64,
}

impl FolderNode {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            tracks: Vec::new(),
            children: Vec::new(),
            total_duration_ms: 0,
        }
    }

    /// All tracks of the subtree in playlist order: a folder's own tracks
    /// first, then each subfolder's subtree. Iterative so deeply nested
    /// trees cannot overflow the call stack.
    pub fn tracks_depth_first(&self) -> Vec<&TrackNode> {
        let mut tracks = Vec::new();
        let mut stack = vec![self];
        while let Some(folder) = stack.pop() {
            tracks.extend(folder.tracks.iter());
            for child in folder.children.iter().rev() {
                stack.push(child);
            }
        }
        tracks
    }

    /// Number of tracks in the subtree
    pub fn track_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(folder) = stack.pop() {
            count += folder.tracks.len();
            stack.extend(folder.children.iter());
        }
        count
    }

    /// Number of folders in the subtree, this one included
    pub fn folder_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(folder) = stack.pop() {
            count += 1;
            stack.extend(folder.children.iter());
        }
        count
    }
}
