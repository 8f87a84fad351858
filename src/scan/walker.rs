//! Folder walking and media discovery

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::order::natural_cmp;
use crate::context::{Diagnostic, RootContext};

/// File extensions treated as media, compared ASCII case-insensitively
pub const MEDIA_EXTENSIONS: &[&str] = &[
    "mp4", "mpg", "mpeg", "avi", "mkv", "mov", "flv", "wmv", "webm",
];

/// Raw result of walking one folder: candidate files and subfolders,
/// before any of the files have been probed
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScannedDir {
    /// Folder base name (the root uses the playlist name instead)
    pub name: String,

    /// Filesystem path as discovered
    pub path: PathBuf,

    /// Candidate media files directly inside this folder, in scan order
    pub files: Vec<PathBuf>,

    /// Subfolders that contain media somewhere beneath them, in scan order
    pub dirs: Vec<ScannedDir>,
}

impl ScannedDir {
    fn new(name: String, path: PathBuf) -> Self {
        Self {
            name,
            path,
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }
}

/// Check whether a path names a candidate media file
pub fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| MEDIA_EXTENSIONS.iter().any(|media| ext.eq_ignore_ascii_case(media)))
        .unwrap_or(false)
}

/// Walk the context's root folder and build the folder/file skeleton.
///
/// Entries are visited in natural order, so two runs over an unchanged tree
/// produce identical skeletons. Symlinks are followed; unreadable
/// directories and symlink loops become diagnostics on the context and
/// their subtrees are left out. Folders with no media anywhere beneath
/// them are dropped on the way out. The walk itself cannot fail: at worst
/// it returns an empty root.
pub fn walk(ctx: &mut RootContext) -> ScannedDir {
    let root = ctx.root().to_path_buf();

    // Open folders, one entry per depth level. Index 0 is the root; a
    // completed folder pops off and attaches to its parent unless empty.
    let mut open: Vec<ScannedDir> = vec![ScannedDir::new(ctx.name().to_string(), root.clone())];

    let walker = WalkDir::new(&root)
        .follow_links(true)
        .sort_by(|a, b| natural_cmp(&a.file_name().to_string_lossy(), &b.file_name().to_string_lossy()));

    for entry in walker {
        match entry {
            Ok(entry) => {
                let depth = entry.depth();
                if depth == 0 {
                    continue;
                }
                close_to_depth(&mut open, depth);

                if entry.file_type().is_dir() {
                    let name = entry.file_name().to_string_lossy().into_owned();
                    open.push(ScannedDir::new(name, entry.path().to_path_buf()));
                } else if entry.file_type().is_file() && is_media_file(entry.path()) {
                    if let Some(parent) = open.last_mut() {
                        parent.files.push(entry.path().to_path_buf());
                    }
                }
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.clone());
                ctx.warn(Diagnostic::SubtreeSkipped {
                    path,
                    reason: err.to_string(),
                });
            }
        }
    }

    close_to_depth(&mut open, 1);
    open.pop()
        .unwrap_or_else(|| ScannedDir::new(ctx.name().to_string(), root))
}

/// Pop completed folders until the stack is `depth` entries tall. Empty
/// folders are discarded instead of attached; the root never pops here.
fn close_to_depth(open: &mut Vec<ScannedDir>, depth: usize) {
    while open.len() > depth {
        let done = match open.pop() {
            Some(dir) => dir,
            None => return,
        };
        if let Some(parent) = open.last_mut() {
            if done.is_empty() {
                log::debug!("Pruning {:?}: no media inside", done.path);
            } else {
                parent.dirs.push(done);
            }
        }
    }
}
