//! Batch orchestration: one playlist per root folder

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::builder::build_tree;
use super::config::GeneratorConfig;
use super::report::RootReport;
use crate::context::RootContext;
use crate::error::ExportError;
use crate::probe::{MediaProbe, TimeoutProbe};
use crate::scan;
use crate::xspf;

/// Drives walk, probe, serialize and write for every requested root
pub struct PlaylistGenerator<P> {
    config: GeneratorConfig,
    probe: TimeoutProbe<P>,
}

impl<P: MediaProbe + Send + Sync + 'static> PlaylistGenerator<P> {
    /// Create a generator; the probe inherits the configured time budget
    pub fn new(config: GeneratorConfig, probe: P) -> Self {
        let probe = TimeoutProbe::new(probe, config.probe_timeout);
        Self { config, probe }
    }

    /// Generate one playlist per root, roots running in parallel.
    ///
    /// Reports come back in input order. A root that fails only shows up
    /// as a `Failed` report; it never aborts the batch. The only fatal
    /// error here is failing to set up the worker pool itself.
    pub fn generate(&self, roots: &[PathBuf]) -> Result<Vec<RootReport>> {
        let workers = worker_count(roots.len());
        log::info!(
            "Generating playlists for {} root(s) on {} worker(s)",
            roots.len(),
            workers
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("root-worker-{index}"))
            .build()
            .context("Failed to build the worker pool")?;

        let reports = pool.install(|| {
            roots
                .par_iter()
                .map(|root| self.process_root(root))
                .collect()
        });
        Ok(reports)
    }

    /// Run the full pipeline for a single root
    fn process_root(&self, root: &Path) -> RootReport {
        log::info!("Processing root {:?}", root);

        let mut ctx = match RootContext::new(root) {
            Ok(ctx) => ctx,
            Err(err) => {
                log::error!("{err}");
                return RootReport::failed(root.to_path_buf(), err, Vec::new());
            }
        };

        let playlist_path = root.join(self.config.playlist_file_name(ctx.name()));
        if self.config.skip_existing && playlist_path.exists() {
            log::info!("Playlist {:?} already exists, leaving it alone", playlist_path);
            return RootReport::skipped(root.to_path_buf(), playlist_path);
        }

        let scanned = scan::walk(&mut ctx);
        let tree = build_tree(scanned, &self.probe, &mut ctx);

        let xml = match xspf::write_document(&tree) {
            Ok(xml) => xml,
            Err(err) => {
                log::error!("{err}");
                return RootReport::failed(root.to_path_buf(), err, ctx.into_diagnostics());
            }
        };

        if let Err(source) = fs::write(&playlist_path, &xml) {
            let err = ExportError::WritePlaylist {
                path: playlist_path,
                source,
            };
            log::error!("{err}");
            return RootReport::failed(root.to_path_buf(), err, ctx.into_diagnostics());
        }

        log::info!(
            "Wrote {:?}: {} tracks, total duration {}",
            playlist_path,
            tree.track_count(),
            xspf::format_duration(tree.total_duration_ms)
        );
        RootReport::completed(root.to_path_buf(), playlist_path, &tree, ctx.into_diagnostics())
    }
}

/// One worker per root, capped by the machine's parallelism
fn worker_count(roots: usize) -> usize {
    let available = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    roots.clamp(1, available)
}
