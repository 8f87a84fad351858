//! Playlist generation orchestration

pub mod builder;
pub mod config;
pub mod pipeline;
pub mod report;

pub use builder::build_tree;
pub use config::GeneratorConfig;
pub use pipeline::PlaylistGenerator;
pub use report::{RootOutcome, RootReport};
