//! Time-bounded probe decorator

use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::traits::{MediaInfo, MediaProbe, ProbeError};

/// Wraps another probe and fails any call that outlives the budget.
///
/// The inner probe runs on a helper thread; when it exceeds the budget the
/// caller moves on with [`ProbeError::Timeout`] and the helper is left to
/// finish in the background. Without a budget, calls go straight through
/// on the calling thread.
pub struct TimeoutProbe<P> {
    inner: Arc<P>,
    timeout: Option<Duration>,
}

impl<P> TimeoutProbe<P> {
    pub fn new(inner: P, timeout: Option<Duration>) -> Self {
        Self {
            inner: Arc::new(inner),
            timeout,
        }
    }
}

impl<P: MediaProbe + Send + Sync + 'static> MediaProbe for TimeoutProbe<P> {
    fn probe(&self, path: &Path) -> Result<MediaInfo, ProbeError> {
        let Some(timeout) = self.timeout else {
            return self.inner.probe(path);
        };

        let (sender, receiver) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let target = path.to_path_buf();
        thread::spawn(move || {
            // The receiver is gone if the caller already timed out
            let _ = sender.send(inner.probe(&target));
        });

        match receiver.recv_timeout(timeout) {
            Ok(result) => result,
            Err(_) => Err(ProbeError::Timeout {
                path: path.to_path_buf(),
                timeout_ms: timeout.as_millis() as u64,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowProbe {
        delay: Duration,
    }

    impl MediaProbe for SlowProbe {
        fn probe(&self, _path: &Path) -> Result<MediaInfo, ProbeError> {
            thread::sleep(self.delay);
            Ok(MediaInfo {
                duration_ms: 1234,
                title: None,
            })
        }
    }

    #[test]
    fn test_fast_probe_passes_through() {
        let probe = TimeoutProbe::new(
            SlowProbe { delay: Duration::from_millis(0) },
            Some(Duration::from_secs(5)),
        );
        let info = probe.probe(Path::new("/v/a.mp4")).unwrap();
        assert_eq!(info.duration_ms, 1234);
    }

    #[test]
    fn test_slow_probe_times_out() {
        let probe = TimeoutProbe::new(
            SlowProbe { delay: Duration::from_secs(10) },
            Some(Duration::from_millis(25)),
        );
        let err = probe.probe(Path::new("/v/a.mp4")).unwrap_err();
        assert!(matches!(err, ProbeError::Timeout { .. }));
    }

    #[test]
    fn test_disabled_budget_never_times_out() {
        let probe = TimeoutProbe::new(
            SlowProbe { delay: Duration::from_millis(50) },
            None,
        );
        let info = probe.probe(Path::new("/v/a.mp4")).unwrap();
        assert_eq!(info.duration_ms, 1234);
    }
}
