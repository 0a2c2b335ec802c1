//! Cache skip - partition requests into already-loaded and still-needed

use super::backend::AssetCache;
use super::{AssetKind, AssetRequest};
use std::collections::HashSet;

/// Split requests into (to_load, already_cached), preserving order
pub fn partition_cached(
    requests: Vec<AssetRequest>,
    cache: &dyn AssetCache,
) -> (Vec<AssetRequest>, Vec<AssetRequest>) {
    requests
        .into_iter()
        .partition(|request| !cache.contains(&request.key, request.kind))
}

/// In-memory cache for tests and engine-free consumers
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: HashSet<(String, AssetKind)>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, kind: AssetKind) {
        self.entries.insert((key.into(), kind));
    }
}

impl AssetCache for MemoryCache {
    fn contains(&self, key: &str, kind: AssetKind) -> bool {
        self.entries.contains(&(key.to_string(), kind))
    }
}
