//! Retrying loader - bounded worker pool with fixed-delay retry and fallback

use super::backend::{AssetFetcher, FetchFailure};
use super::progress::{ProgressEvent, ProgressTracker};
use super::{AssetError, AssetRequest, FailedAsset, LoadedAsset};
use crate::config::LoaderConstants;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Concurrent loader over a shared fetcher
///
/// At most `max_parallel` fetches run at once; workers pull the next request
/// off a shared index. Per request: up to `max_retries` attempts with a fixed
/// delay in between, then one last attempt against the fallback URL if the
/// request carries one.
pub struct RetryingLoader<'a, F: AssetFetcher + ?Sized> {
    fetcher: &'a F,
    constants: &'a LoaderConstants,
}

impl<'a, F: AssetFetcher + ?Sized> RetryingLoader<'a, F> {
    pub fn new(fetcher: &'a F, constants: &'a LoaderConstants) -> Self {
        RetryingLoader { fetcher, constants }
    }

    /// Load every request, reporting each terminal state to the tracker.
    ///
    /// Returns (loaded, failed) in the order the requests were given; a
    /// failing asset never aborts the rest of the batch.
    pub fn load_all(
        &self,
        requests: &[AssetRequest],
        progress: &ProgressTracker,
    ) -> (Vec<LoadedAsset>, Vec<FailedAsset>) {
        if requests.is_empty() {
            return (Vec::new(), Vec::new());
        }

        let workers = self.constants.max_parallel.max(1).min(requests.len());
        let next_index = AtomicUsize::new(0);
        let (sender, receiver) = mpsc::channel();

        thread::scope(|scope| {
            for _ in 0..workers {
                let sender = sender.clone();
                let next_index = &next_index;
                scope.spawn(move || loop {
                    let index = next_index.fetch_add(1, Ordering::SeqCst);
                    if index >= requests.len() {
                        break;
                    }
                    let request = &requests[index];
                    let result = self.load_one(request);
                    match &result {
                        Ok(_) => progress.record(ProgressEvent::Loaded, &request.key),
                        Err(_) => progress.record(ProgressEvent::Failed, &request.key),
                    }
                    if sender.send((index, result)).is_err() {
                        break;
                    }
                });
            }
            drop(sender);
        });

        let mut results: Vec<(usize, Result<LoadedAsset, FailedAsset>)> =
            receiver.into_iter().collect();
        results.sort_by_key(|(index, _)| *index);

        let mut loaded = Vec::new();
        let mut failed = Vec::new();
        for (_, result) in results {
            match result {
                Ok(asset) => loaded.push(asset),
                Err(failure) => failed.push(failure),
            }
        }
        (loaded, failed)
    }

    /// Load a single request through the retry and fallback ladder
    pub fn load_one(&self, request: &AssetRequest) -> Result<LoadedAsset, FailedAsset> {
        let timeout = Duration::from_millis(self.constants.timeout_ms);
        let retry_delay = Duration::from_millis(self.constants.retry_delay_ms);
        let max_attempts = self.constants.max_retries.max(1);

        let mut attempts = 0;
        let mut last_failure = FetchFailure::Transient("no attempts made".to_string());

        while attempts < max_attempts {
            attempts += 1;
            let started = Instant::now();
            match self.fetcher.fetch(request) {
                Ok(fetched) if started.elapsed() <= timeout => {
                    return Ok(LoadedAsset {
                        key: request.key.clone(),
                        url: request.url.clone(),
                        kind: request.kind,
                        byte_len: fetched.byte_len,
                        attempts,
                        from_fallback: false,
                    });
                }
                // Completed, but past the deadline: counts as a timeout
                Ok(_) => last_failure = FetchFailure::TimedOut,
                Err(failure) => {
                    last_failure = if started.elapsed() > timeout {
                        FetchFailure::TimedOut
                    } else {
                        failure
                    };
                }
            }
            if attempts < max_attempts {
                log::debug!(
                    "Retrying '{}' (attempt {}/{}): {}",
                    request.key,
                    attempts,
                    max_attempts,
                    last_failure
                );
                thread::sleep(retry_delay);
            }
        }

        if let Some(fallback) = &request.fallback_url {
            log::warn!(
                "'{}' failed {} times, substituting fallback {}",
                request.key,
                attempts,
                fallback
            );
            let substituted = AssetRequest {
                url: fallback.clone(),
                fallback_url: None,
                ..request.clone()
            };
            attempts += 1;
            if let Ok(fetched) = self.fetcher.fetch(&substituted) {
                return Ok(LoadedAsset {
                    key: request.key.clone(),
                    url: fallback.clone(),
                    kind: request.kind,
                    byte_len: fetched.byte_len,
                    attempts,
                    from_fallback: true,
                });
            }
        }

        log::warn!(
            "Giving up on '{}' after {} attempts: {}",
            request.key,
            attempts,
            last_failure
        );
        Err(FailedAsset {
            key: request.key.clone(),
            url: request.url.clone(),
            kind: request.kind,
            error: AssetError::Fetch {
                key: request.key.clone(),
                source: last_failure,
            },
            attempts,
        })
    }
}
