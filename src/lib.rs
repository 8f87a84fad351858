//! XSPF Exporter - folder-to-VLC playlist generator
//!
//! This library scans folders of video files and writes one
//! VLC-compatible XSPF playlist per root folder, preserving the folder
//! hierarchy as nested playlist groups with per-group duration totals.

pub mod context;
pub mod error;
pub mod export;
pub mod model;
pub mod probe;
pub mod scan;
pub mod xspf;

pub use export::config::GeneratorConfig;
pub use export::pipeline::PlaylistGenerator;
pub use export::report::{RootOutcome, RootReport};
