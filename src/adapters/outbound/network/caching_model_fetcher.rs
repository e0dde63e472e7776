use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::catalog_generation::domain::{BomCoordinates, PomModel};
use crate::ports::outbound::ModelFetcher;
use crate::shared::Result;

/// CachingModelFetcher wraps a ModelFetcher and adds in-memory caching.
///
/// This adapter implements the decorator pattern to add caching capability
/// to any ModelFetcher implementation. The cache is thread-safe, which
/// matters because the walker prefetches queue generations concurrently
/// and diamond-shaped BOM graphs ask for the same coordinates repeatedly.
///
/// Only successful fetches are cached; a transient network failure is not
/// pinned for the lifetime of the process.
pub struct CachingModelFetcher<F: ModelFetcher> {
    inner: F,
    cache: Arc<DashMap<BomCoordinates, PomModel>>,
}

impl<F: ModelFetcher> CachingModelFetcher<F> {
    /// Creates a new caching fetcher wrapping the given inner fetcher
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<F: ModelFetcher> ModelFetcher for CachingModelFetcher<F> {
    async fn fetch(&self, coordinates: &BomCoordinates) -> Result<PomModel> {
        if let Some(cached) = self.cache.get(coordinates) {
            return Ok(cached.clone());
        }

        let model = self.inner.fetch(coordinates).await?;
        self.cache.insert(coordinates.clone(), model.clone());

        Ok(model)
    }
}
