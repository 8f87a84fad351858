//! Playlist tree construction
//!
//! Consumes the scanned skeleton, probes every candidate file and
//! assembles the folder tree with subtree duration totals.

use std::path::PathBuf;

use crate::context::{Diagnostic, RootContext};
use crate::model::{FolderNode, TrackNode};
use crate::probe::MediaProbe;
use crate::scan::ScannedDir;

/// One folder being assembled while its subfolders are still pending
struct Frame {
    node: FolderNode,
    pending: std::vec::IntoIter<ScannedDir>,
}

/// Build the playlist tree for one root.
///
/// Folders close bottom-up: a node's `total_duration_ms` is final when it
/// attaches to its parent, which then adds it to its own running total.
/// The pass is iterative, so folder depth never grows the call stack.
pub fn build_tree<P: MediaProbe>(
    scan: ScannedDir,
    probe: &P,
    ctx: &mut RootContext,
) -> FolderNode {
    let mut stack = vec![open_frame(scan, probe, ctx)];

    loop {
        let next = stack.last_mut().and_then(|frame| frame.pending.next());
        if let Some(dir) = next {
            stack.push(open_frame(dir, probe, ctx));
            continue;
        }

        // Top frame has no pending subfolders left: close it
        let Some(done) = stack.pop() else {
            return FolderNode::default();
        };
        match stack.last_mut() {
            Some(parent) => {
                parent.node.total_duration_ms += done.node.total_duration_ms;
                parent.node.children.push(done.node);
            }
            None => return done.node,
        }
    }
}

/// Probe a folder's own files and open a frame for its subfolders
fn open_frame<P: MediaProbe>(scan: ScannedDir, probe: &P, ctx: &mut RootContext) -> Frame {
    let ScannedDir {
        name,
        path,
        files,
        dirs,
    } = scan;

    let mut node = FolderNode::new(name, path);
    for file in files {
        let track = probe_track(file, probe, ctx);
        node.total_duration_ms += track.duration_ms;
        node.tracks.push(track);
    }

    Frame {
        node,
        pending: dirs.into_iter(),
    }
}

/// Probe one candidate file; failures degrade to a zero-duration track
fn probe_track<P: MediaProbe>(path: PathBuf, probe: &P, ctx: &mut RootContext) -> TrackNode {
    let fallback = TrackNode::fallback_title(&path);
    match probe.probe(&path) {
        Ok(info) => TrackNode {
            title: info
                .title
                .filter(|title| !title.trim().is_empty())
                .unwrap_or(fallback),
            duration_ms: info.duration_ms,
            path,
        },
        Err(err) => {
            ctx.warn(Diagnostic::ProbeFailed {
                path: path.clone(),
                reason: err.to_string(),
            });
            TrackNode {
                title: fallback,
                duration_ms: 0,
                path,
            }
        }
    }
}
