//! Cached schedule loading.
//!
//! Datasets never change while the process runs, so a successful load is
//! cached by stand code. Failures are not cached; retrying a failed load
//! goes back to the source.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use moka::future::Cache as MokaCache;
use tracing::{debug, info, warn};

use crate::domain::{ScheduleError, ScheduleRecord, StandCode};

use super::source::ScheduleSource;

/// A stand's schedule list, shared between requests.
pub type Schedules = Arc<Vec<ScheduleRecord>>;

/// Configuration for the schedule cache.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// TTL for cached datasets.
    pub ttl: Duration,

    /// Maximum number of cached datasets.
    pub max_capacity: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 256,
        }
    }
}

/// Outcome of preloading several stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarmReport {
    /// Stands whose datasets loaded.
    pub loaded: usize,
    /// Stands with no dataset.
    pub missing: Vec<String>,
    /// Stands whose datasets failed to load.
    pub failed: Vec<String>,
}

/// Loads stand schedules from a source, with caching.
pub struct ScheduleLoader<S> {
    source: S,
    cache: MokaCache<StandCode, Schedules>,
}

impl<S: ScheduleSource> ScheduleLoader<S> {
    /// Create a new loader with the given cache configuration.
    pub fn new(source: S, config: &LoaderConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { source, cache }
    }

    /// Load a stand's schedules, in dataset order.
    pub async fn load(&self, stand: &StandCode) -> Result<Schedules, ScheduleError> {
        if let Some(cached) = self.cache.get(stand).await {
            debug!(%stand, "schedule cache hit");
            return Ok(cached);
        }

        let records = match self.source.fetch(stand).await {
            Ok(records) => records,
            Err(e) => {
                warn!(%stand, error = %e, "schedule load failed");
                return Err(e);
            }
        };

        debug!(%stand, count = records.len(), "loaded schedules");
        let entry = Arc::new(records);
        self.cache.insert(stand.clone(), entry.clone()).await;

        Ok(entry)
    }

    /// Load several stands concurrently, filling the cache.
    pub async fn warm(&self, stands: &[StandCode]) -> WarmReport {
        let results = join_all(stands.iter().map(|s| self.load(s))).await;

        let mut report = WarmReport::default();
        for (stand, result) in stands.iter().zip(results) {
            match result {
                Ok(_) => report.loaded += 1,
                Err(ScheduleError::NotFound { .. }) => report.missing.push(stand.to_string()),
                Err(ScheduleError::Load { .. }) => report.failed.push(stand.to_string()),
            }
        }

        info!(
            loaded = report.loaded,
            missing = report.missing.len(),
            failed = report.failed.len(),
            "warmed schedule cache"
        );
        report
    }

    /// Drop a stand's cached dataset.
    pub async fn invalidate(&self, stand: &StandCode) {
        self.cache.invalidate(stand).await;
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MemorySource;
    use super::*;
    use crate::domain::TimePart;

    fn code(s: &str) -> StandCode {
        StandCode::parse(s).unwrap()
    }

    fn records(times: &[f64]) -> Vec<ScheduleRecord> {
        times
            .iter()
            .map(|&t| ScheduleRecord::new(t, TimePart::Am))
            .collect()
    }

    #[test]
    fn default_config() {
        let config = LoaderConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(3600));
        assert_eq!(config.max_capacity, 256);
    }

    #[tokio::test]
    async fn load_returns_source_records() {
        let source = MemorySource::default().with("trichy", Ok(records(&[5.0, 6.3])));
        let loader = ScheduleLoader::new(source, &LoaderConfig::default());

        let loaded = loader.load(&code("trichy")).await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].time, 6.3);
    }

    #[tokio::test]
    async fn successful_loads_are_cached() {
        let source = MemorySource::default().with("trichy", Ok(records(&[5.0])));
        let loader = ScheduleLoader::new(source.clone(), &LoaderConfig::default());

        let first = loader.load(&code("trichy")).await.unwrap();
        let second = loader.load(&code("trichy")).await.unwrap();

        assert_eq!(source.fetches(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let source =
            MemorySource::default().with("trichy", Err(ScheduleError::load("trichy", "boom")));
        let loader = ScheduleLoader::new(source.clone(), &LoaderConfig::default());

        assert!(loader.load(&code("trichy")).await.is_err());
        assert!(loader.load(&code("trichy")).await.is_err());
        assert_eq!(source.fetches(), 2);
    }

    #[tokio::test]
    async fn missing_stand_is_not_found() {
        let loader = ScheduleLoader::new(MemorySource::default(), &LoaderConfig::default());
        let err = loader.load(&code("madurai")).await.unwrap_err();
        assert_eq!(err, ScheduleError::not_found("madurai"));
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let source = MemorySource::default().with("trichy", Ok(records(&[5.0])));
        let loader = ScheduleLoader::new(source.clone(), &LoaderConfig::default());

        loader.load(&code("trichy")).await.unwrap();
        loader.invalidate(&code("trichy")).await;
        loader.load(&code("trichy")).await.unwrap();

        assert_eq!(source.fetches(), 2);
    }

    #[tokio::test]
    async fn warm_reports_each_outcome() {
        let source = MemorySource::default()
            .with("trichy", Ok(records(&[5.0])))
            .with("thanjavur", Ok(records(&[])))
            .with("broken", Err(ScheduleError::load("broken", "bad json")));
        let loader = ScheduleLoader::new(source, &LoaderConfig::default());

        let stands = [
            code("trichy"),
            code("thanjavur"),
            code("broken"),
            code("madurai"),
        ];
        let report = loader.warm(&stands).await;

        assert_eq!(report.loaded, 2);
        assert_eq!(report.missing, vec!["madurai".to_string()]);
        assert_eq!(report.failed, vec!["broken".to_string()]);
    }
}
