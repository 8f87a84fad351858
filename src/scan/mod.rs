//! Folder scanning
//!
//! Turns a root folder into a skeleton of candidate media files and
//! subfolders, in a deterministic order.

mod order;
mod walker;

pub use order::natural_cmp;
pub use walker::{is_media_file, walk, ScannedDir, MEDIA_EXTENSIONS};
