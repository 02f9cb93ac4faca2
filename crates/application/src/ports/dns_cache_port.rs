use stubdns_domain::{DomainName, ResourceAnswer};

/// One row of the diagnostic cache listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRow {
    pub name: DomainName,
    pub answer: ResourceAnswer,
    pub remaining_ttl_secs: u32,
}

/// Snapshot of DNS cache metrics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheMetricsSnapshot {
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub lazy_deletions: u64,
    pub hit_rate: f64,
}

/// Port for cache operations exposed to front ends.
pub trait DnsCachePort: Send + Sync {
    /// Non-destructive listing; entries past their TTL are still reported.
    fn list(&self) -> Vec<CacheRow>;
    /// Removes every entry and returns how many were dropped.
    fn clear(&self) -> usize;
    fn cache_size(&self) -> usize;
    fn cache_metrics_snapshot(&self) -> CacheMetricsSnapshot;
}
