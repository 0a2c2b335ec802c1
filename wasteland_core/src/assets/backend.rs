//! Engine seam - traits the host engine's asset pipeline adapts

use super::{AssetKind, AssetRequest};
use thiserror::Error;

/// Why a single fetch attempt failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("Asset not found: {url}")]
    NotFound { url: String },
    #[error("Fetch timed out")]
    TimedOut,
    #[error("Fetch failed: {0}")]
    Transient(String),
}

/// Result of a successful fetch, as reported by the engine
#[derive(Debug, Clone)]
pub struct FetchedAsset {
    pub key: String,
    pub byte_len: usize,
}

/// Blocking fetch into the engine's own cache
///
/// Implementations are shared across loader workers, hence `Send + Sync`.
/// Honoring the per-request deadline mid-flight is the implementation's
/// concern; the loader additionally classifies over-deadline attempts as
/// [`FetchFailure::TimedOut`] after the fact.
pub trait AssetFetcher: Send + Sync {
    fn fetch(&self, request: &AssetRequest) -> Result<FetchedAsset, FetchFailure>;
}

/// Lookup into the engine's already-populated caches
pub trait AssetCache {
    fn contains(&self, key: &str, kind: AssetKind) -> bool;
}
