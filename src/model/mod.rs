//! Playlist data model
//!
//! This module defines the folder tree produced by the walk and probe
//! phases, independent of how it gets serialized to XSPF.

mod folder;
mod track;

pub use folder::FolderNode;
pub use track::TrackNode;
