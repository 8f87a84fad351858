//! Container probing backed by symphonia
//!
//! Reads format headers only; no frames are decoded. MP4/MOV and
//! Matroska/WebM come from symphonia's own demuxers, the remaining
//! container families fail the probe and degrade to zero-duration tracks.

use std::fs::File;
use std::path::Path;

use symphonia::core::formats::{FormatOptions, Track};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::{MetadataOptions, MetadataRevision, StandardTagKey};
use symphonia::core::probe::Hint;

use super::traits::{MediaInfo, MediaProbe, ProbeError};

/// Probe that parses container headers with symphonia
#[derive(Debug, Clone, Copy, Default)]
pub struct SymphoniaProbe;

impl SymphoniaProbe {
    pub fn new() -> Self {
        Self
    }
}

impl MediaProbe for SymphoniaProbe {
    fn probe(&self, path: &Path) -> Result<MediaInfo, ProbeError> {
        log::debug!("Probing {:?}", path);

        let file = File::open(path).map_err(|source| ProbeError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
            hint.with_extension(ext);
        }

        let format_opts = FormatOptions::default();
        let metadata_opts = MetadataOptions::default();

        let probed = symphonia::default::get_probe()
            .format(&hint, mss, &format_opts, &metadata_opts)
            .map_err(|err| ProbeError::Unsupported {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;

        let mut format = probed.format;
        let mut probed_metadata = probed.metadata;

        // A video container usually carries several streams; the longest
        // one is the play duration VLC will show.
        let duration_ms = format
            .tracks()
            .iter()
            .filter_map(track_duration_ms)
            .max()
            .ok_or_else(|| ProbeError::NoDuration {
                path: path.to_path_buf(),
            })?;

        let title = find_title(format.metadata().current()).or_else(|| {
            probed_metadata
                .get()
                .as_ref()
                .and_then(|metadata| find_title(metadata.current()))
        });

        Ok(MediaInfo { duration_ms, title })
    }
}

/// Duration of one stream in whole milliseconds, when the container
/// exposes timing for it
fn track_duration_ms(track: &Track) -> Option<u64> {
    let params = &track.codec_params;
    let time = params.time_base?.calc_time(params.n_frames?);
    Some(time.seconds * 1000 + (time.frac * 1000.0).round() as u64)
}

/// First non-empty track title tag in a metadata revision
fn find_title(revision: Option<&MetadataRevision>) -> Option<String> {
    revision?
        .tags()
        .iter()
        .find(|tag| tag.std_key == Some(StandardTagKey::TrackTitle))
        .map(|tag| tag.value.to_string())
        .filter(|title| !title.trim().is_empty())
}
