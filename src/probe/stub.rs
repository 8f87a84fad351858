//! Deterministic probe for tests
//!
//! Serves canned durations and titles without looking at file contents,
//! so pipeline behavior can be tested with empty fixture files.

use std::path::{Path, PathBuf};

use super::traits::{MediaInfo, MediaProbe, ProbeError};

/// Probe that replies from a fixed table instead of parsing containers.
///
/// Paths are matched exactly or by trailing components, so tests can
/// register `ep1.mp4` and have it match the absolute fixture path.
#[derive(Debug, Clone, Default)]
pub struct StubProbe {
    default_duration_ms: u64,
    durations: Vec<(PathBuf, u64)>,
    titles: Vec<(PathBuf, String)>,
    failing: Vec<PathBuf>,
}

impl StubProbe {
    /// Probe where every file reports the same duration and no title
    pub fn fixed(default_duration_ms: u64) -> Self {
        Self {
            default_duration_ms,
            ..Self::default()
        }
    }

    /// Override the duration for one file
    pub fn with_duration(mut self, file: impl Into<PathBuf>, duration_ms: u64) -> Self {
        self.durations.push((file.into(), duration_ms));
        self
    }

    /// Serve a container title for one file
    pub fn with_title(mut self, file: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        self.titles.push((file.into(), title.into()));
        self
    }

    /// Make one file fail its probe, like a corrupt container would
    pub fn failing_on(mut self, file: impl Into<PathBuf>) -> Self {
        self.failing.push(file.into());
        self
    }
}

impl MediaProbe for StubProbe {
    fn probe(&self, path: &Path) -> Result<MediaInfo, ProbeError> {
        if self.failing.iter().any(|f| matches(path, f)) {
            return Err(ProbeError::Unsupported {
                path: path.to_path_buf(),
                reason: "stubbed failure".to_string(),
            });
        }

        let duration_ms = lookup(&self.durations, path)
            .copied()
            .unwrap_or(self.default_duration_ms);
        let title = lookup(&self.titles, path).cloned();

        Ok(MediaInfo { duration_ms, title })
    }
}

fn matches(path: &Path, registered: &Path) -> bool {
    path == registered || path.ends_with(registered)
}

fn lookup<'a, T>(entries: &'a [(PathBuf, T)], path: &Path) -> Option<&'a T> {
    entries
        .iter()
        .find(|(registered, _)| matches(path, registered))
        .map(|(_, value)| value)
}
