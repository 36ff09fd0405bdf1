use crate::models::{CalendarEntry, Camper, Dataset, Search, SearchMode};
use crate::services::data::{DataError, DataProvider};
use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

/// In-memory cache of loaded datasets, keyed by search mode
///
/// Input collections are read-only, so a loaded dataset is shared by every
/// request for the same version until it expires or is invalidated.
/// Failed loads are never cached.
pub struct DatasetCache<P> {
    inner: P,
    datasets: Cache<SearchMode, Arc<Dataset>>,
}

impl<P: DataProvider> DatasetCache<P> {
    pub fn new(inner: P, capacity: u64, ttl_secs: u64) -> Self {
        let datasets = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner, datasets }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Drop every cached dataset
    pub fn invalidate_all(&self) {
        self.datasets.invalidate_all();
        tracing::debug!("Invalidated all cached datasets");
    }
}

impl<P: DataProvider> DataProvider for DatasetCache<P> {
    fn searches(&self, mode: SearchMode) -> Result<Vec<Search>, DataError> {
        self.inner.searches(mode)
    }

    fn campers(&self, mode: SearchMode) -> Result<Vec<Camper>, DataError> {
        self.inner.campers(mode)
    }

    fn calendars(&self, mode: SearchMode) -> Result<Option<Vec<CalendarEntry>>, DataError> {
        self.inner.calendars(mode)
    }

    fn dataset(&self, mode: SearchMode) -> Result<Arc<Dataset>, DataError> {
        if let Some(dataset) = self.datasets.get(&mode) {
            tracing::trace!("Dataset cache hit: {}", mode);
            return Ok(dataset);
        }

        tracing::trace!("Dataset cache miss: {}", mode);
        let dataset = self.inner.dataset(mode)?;
        self.datasets.insert(mode, Arc::clone(&dataset));

        Ok(dataset)
    }
}
