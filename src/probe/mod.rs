//! Media probing
//!
//! Duration and title extraction behind a trait seam, so the
//! symphonia-backed implementation can be swapped for deterministic stubs
//! in tests and bounded by a per-file time budget in production.

mod real;
mod stub;
mod timeout;
mod traits;

pub use real::SymphoniaProbe;
pub use stub::StubProbe;
pub use timeout::TimeoutProbe;
pub use traits::{MediaInfo, MediaProbe, ProbeError};
