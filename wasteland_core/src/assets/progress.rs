//! Progress tracking - counters plus an optional per-event callback

use std::sync::atomic::{AtomicUsize, Ordering};

/// What just happened to an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    Loaded,
    Failed,
    Skipped,
}

/// Snapshot handed to the progress callback after every terminal event
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub event: ProgressEvent,
    pub key: String,
    /// Assets in a terminal state so far (loaded + failed + skipped)
    pub completed: usize,
    pub failed: usize,
    pub total: usize,
    pub percent: f64,
}

/// Callback signature for progress updates
pub type ProgressFn = dyn Fn(&ProgressUpdate) + Send + Sync;

/// Shared across loader workers; counters are atomic, the callback is `Fn`
pub struct ProgressTracker {
    total: usize,
    completed: AtomicUsize,
    failed: AtomicUsize,
    callback: Option<Box<ProgressFn>>,
}

impl ProgressTracker {
    pub fn new(total: usize) -> Self {
        ProgressTracker {
            total,
            completed: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            callback: None,
        }
    }

    pub fn with_callback(
        total: usize,
        callback: impl Fn(&ProgressUpdate) + Send + Sync + 'static,
    ) -> Self {
        Self::with_boxed_callback(total, Box::new(callback))
    }

    pub fn with_boxed_callback(total: usize, callback: Box<ProgressFn>) -> Self {
        ProgressTracker {
            callback: Some(callback),
            ..Self::new(total)
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::SeqCst)
    }

    /// Completed fraction in percent; 100 when there was nothing to do
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.completed() as f64 / self.total as f64 * 100.0
    }

    pub fn record(&self, event: ProgressEvent, key: &str) {
        let completed = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
        let failed = match event {
            ProgressEvent::Failed => self.failed.fetch_add(1, Ordering::SeqCst) + 1,
            _ => self.failed.load(Ordering::SeqCst),
        };

        if let Some(callback) = &self.callback {
            let percent = if self.total == 0 {
                100.0
            } else {
                completed as f64 / self.total as f64 * 100.0
            };
            callback(&ProgressUpdate {
                event,
                key: key.to_string(),
                completed,
                failed,
                total: self.total,
                percent,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_counters_and_percent() {
        let tracker = ProgressTracker::new(4);
        tracker.record(ProgressEvent::Loaded, "a");
        tracker.record(ProgressEvent::Failed, "b");
        tracker.record(ProgressEvent::Skipped, "c");

        assert_eq!(tracker.completed(), 3);
        assert_eq!(tracker.failed(), 1);
        assert!((tracker.percent() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_batch_is_done() {
        let tracker = ProgressTracker::new(0);
        assert!((tracker.percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_callback_sees_each_event() {
        let seen: std::sync::Arc<Mutex<Vec<(String, usize)>>> = Default::default();
        let seen_in_callback = seen.clone();

        let tracker = ProgressTracker::with_callback(2, move |update| {
            seen_in_callback
                .lock()
                .unwrap()
                .push((update.key.clone(), update.completed));
        });
        tracker.record(ProgressEvent::Loaded, "a");
        tracker.record(ProgressEvent::Loaded, "b");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], ("a".to_string(), 1));
        assert_eq!(seen[1], ("b".to_string(), 2));
    }
}
