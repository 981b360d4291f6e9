//! Sample lookup metrics.
//!
//! Counts cache hits and misses, resource reads, fallbacks and failed
//! lookups for a single generator.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct CacheMetrics {
    /// Lookups answered from the sample cache
    cache_hits: AtomicUsize,

    /// Lookups that had to go to the data source
    cache_misses: AtomicUsize,

    /// Resources successfully read and cached
    resource_reads: AtomicUsize,

    /// Lookups answered from the canonical language instead
    fallbacks: AtomicUsize,

    /// Lookups that produced no sample
    failures: AtomicUsize,
}

impl CacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_resource_read(&self) {
        self.resource_reads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> usize {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn resource_reads(&self) -> usize {
        self.resource_reads.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.cache_hits();
        let misses = self.cache_misses();
        let total = hits + misses;
        let cache_hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            cache_hits: hits,
            cache_misses: misses,
            cache_hit_rate,
            resource_reads: self.resource_reads(),
            fallbacks: self.fallbacks(),
            failures: self.failures(),
        }
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub cache_hits: usize,
    pub cache_misses: usize,

    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,

    pub resource_reads: usize,
    pub fallbacks: usize,
    pub failures: usize,
}
