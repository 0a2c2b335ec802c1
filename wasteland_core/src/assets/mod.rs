//! Asset loading pipeline
//!
//! A façade over five single-purpose helpers: validation, cache skip,
//! priority ordering, progress tracking, and a bounded-concurrency
//! retrying loader. The engine side is abstracted behind the
//! [`AssetFetcher`]/[`AssetCache`] traits so the pipeline itself stays
//! host-agnostic and testable.

mod backend;
mod cache;
mod loader;
mod priority;
mod progress;
mod validation;

pub use backend::{AssetCache, AssetFetcher, FetchFailure, FetchedAsset};
pub use cache::{partition_cached, MemoryCache};
pub use loader::RetryingLoader;
pub use priority::{sort_by_priority, LoadPriority};
pub use progress::{ProgressEvent, ProgressFn, ProgressTracker, ProgressUpdate};
pub use validation::{
    allowed_extensions, probe_request, validate_extension, validate_key, validate_path,
    validate_request,
};

use crate::config::LoaderConstants;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What an asset is, which decides its extension whitelist and priority tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Manifest,
    Image,
    Atlas,
    Audio,
    Font,
}

/// One asset to load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRequest {
    /// Engine cache key
    pub key: String,
    pub url: String,
    pub kind: AssetKind,
    /// Substituted after the primary URL exhausts its retries
    pub fallback_url: Option<String>,
}

impl AssetRequest {
    pub fn new(key: impl Into<String>, url: impl Into<String>, kind: AssetKind) -> Self {
        AssetRequest {
            key: key.into(),
            url: url.into(),
            kind,
            fallback_url: None,
        }
    }

    pub fn with_fallback(mut self, url: impl Into<String>) -> Self {
        self.fallback_url = Some(url.into());
        self
    }
}

/// Why an asset never made it into the engine cache
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Invalid asset key: '{0}'")]
    InvalidKey(String),
    #[error("Invalid asset path: '{0}'")]
    InvalidPath(String),
    #[error("Extension of '{url}' not allowed for {kind:?} assets")]
    UnsupportedExtension { url: String, kind: AssetKind },
    #[error("Probe failed for '{key}'")]
    ProbeFailed {
        key: String,
        #[source]
        source: FetchFailure,
    },
    #[error("Failed to fetch '{key}'")]
    Fetch {
        key: String,
        #[source]
        source: FetchFailure,
    },
}

/// An asset that reached the engine cache
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub key: String,
    /// URL that ultimately worked (the fallback, when substituted)
    pub url: String,
    pub kind: AssetKind,
    pub byte_len: usize,
    pub attempts: u32,
    pub from_fallback: bool,
}

/// An asset that did not, and why
#[derive(Debug)]
pub struct FailedAsset {
    pub key: String,
    pub url: String,
    pub kind: AssetKind,
    pub error: AssetError,
    /// Fetch attempts made; zero when rejected before any fetch
    pub attempts: u32,
}

/// Batch outcome; per-asset failures never abort the batch
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<LoadedAsset>,
    pub failed: Vec<FailedAsset>,
    /// Keys skipped because the engine cache already held them
    pub skipped: Vec<String>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.loaded.len() + self.failed.len() + self.skipped.len()
    }
}

/// Per-call switches for the pipeline stages
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Run static key/path/extension checks
    pub validate: bool,
    /// Also fetch-and-discard each asset before the real load
    pub probe: bool,
    /// Drop requests the engine cache already holds
    pub skip_cached: bool,
    /// Reorder by priority tier before loading
    pub reorder: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            validate: true,
            probe: false,
            skip_cached: true,
            reorder: true,
        }
    }
}

/// The asset pipeline façade
pub struct AssetPipeline<F: AssetFetcher> {
    fetcher: F,
    constants: LoaderConstants,
}

impl<F: AssetFetcher> AssetPipeline<F> {
    pub fn new(fetcher: F, constants: LoaderConstants) -> Self {
        AssetPipeline { fetcher, constants }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Load a batch: validate, skip cached, order, fetch with retry/fallback
    pub fn load(
        &self,
        requests: Vec<AssetRequest>,
        cache: Option<&dyn AssetCache>,
        options: &LoadOptions,
    ) -> LoadReport {
        self.load_inner(requests, cache, options, None)
    }

    /// Same as [`AssetPipeline::load`], invoking `callback` after every
    /// terminal per-asset event
    pub fn load_with_progress(
        &self,
        requests: Vec<AssetRequest>,
        cache: Option<&dyn AssetCache>,
        options: &LoadOptions,
        callback: impl Fn(&ProgressUpdate) + Send + Sync + 'static,
    ) -> LoadReport {
        self.load_inner(requests, cache, options, Some(Box::new(callback)))
    }

    fn load_inner(
        &self,
        requests: Vec<AssetRequest>,
        cache: Option<&dyn AssetCache>,
        options: &LoadOptions,
        callback: Option<Box<dyn Fn(&ProgressUpdate) + Send + Sync>>,
    ) -> LoadReport {
        let total = requests.len();
        let progress = match callback {
            Some(callback) => ProgressTracker::with_boxed_callback(total, callback),
            None => ProgressTracker::new(total),
        };

        let mut report = LoadReport::default();

        // Stage 1: static validation (and the optional probe)
        let mut pending = Vec::with_capacity(requests.len());
        for request in requests {
            if options.validate {
                let checked = validate_request(&request)
                    .and_then(|_| {
                        if options.probe {
                            probe_request(&self.fetcher, &request)
                        } else {
                            Ok(())
                        }
                    });
                if let Err(error) = checked {
                    log::warn!("Rejected asset '{}': {}", request.key, error);
                    progress.record(ProgressEvent::Failed, &request.key);
                    report.failed.push(FailedAsset {
                        key: request.key,
                        url: request.url,
                        kind: request.kind,
                        error,
                        attempts: 0,
                    });
                    continue;
                }
            }
            pending.push(request);
        }

        // Stage 2: skip what the engine already has
        if options.skip_cached {
            if let Some(cache) = cache {
                let (to_load, cached) = partition_cached(pending, cache);
                for request in cached {
                    progress.record(ProgressEvent::Skipped, &request.key);
                    report.skipped.push(request.key);
                }
                pending = to_load;
            }
        }

        // Stage 3: critical assets first
        if options.reorder {
            sort_by_priority(&mut pending);
        }

        // Stage 4: bounded-concurrency retrying load
        let loader = RetryingLoader::new(&self.fetcher, &self.constants);
        let (loaded, failed) = loader.load_all(&pending, &progress);
        report.loaded = loaded;
        report.failed.extend(failed);

        log::info!(
            "Asset batch done: {} loaded, {} failed, {} skipped",
            report.loaded.len(),
            report.failed.len(),
            report.skipped.len()
        );
        report
    }
}
