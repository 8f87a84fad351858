//! Generation configuration

use std::time::Duration;

/// Default per-file probe budget
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a playlist generation batch
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Playlist file name override; the root folder's own name is used
    /// when unset. `.xspf` is appended when missing.
    pub output_name: Option<String>,

    /// Leave pre-existing playlist files untouched instead of
    /// regenerating them
    pub skip_existing: bool,

    /// Per-file probe budget; `None` removes the bound
    pub probe_timeout: Option<Duration>,
}

impl GeneratorConfig {
    /// Create the default configuration: derive file names from the
    /// roots, overwrite existing playlists, 30 second probe budget
    pub fn new() -> Self {
        Self {
            output_name: None,
            skip_existing: false,
            probe_timeout: Some(DEFAULT_PROBE_TIMEOUT),
        }
    }

    /// Set a fixed playlist file name for every root
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    /// Keep pre-existing playlist files
    pub fn with_skip_existing(mut self, skip: bool) -> Self {
        self.skip_existing = skip;
        self
    }

    /// Change or remove the per-file probe budget
    pub fn with_probe_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// File name of the playlist written into a root folder
    pub fn playlist_file_name(&self, root_name: &str) -> String {
        let stem = self.output_name.as_deref().unwrap_or(root_name);
        if stem.ends_with(".xspf") {
            stem.to_string()
        } else {
            format!("{stem}.xspf")
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
