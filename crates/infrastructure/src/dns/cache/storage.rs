use super::clock::Clock;
use super::metrics::CacheMetrics;
use crate::dns::events::{CacheEvent, CacheEventEmitter};
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use stubdns_application::ports::{CacheMetricsSnapshot, CacheRow, DnsCachePort};
use stubdns_domain::{DomainName, ResourceAnswer};
use tracing::debug;

/// TTL-aware answer cache with lazy expiry.
///
/// Entries are never swept in the background: `get` removes an entry once
/// `now - resolved_at >= ttl`, while `snapshot` reports expired entries with
/// a remaining TTL of zero and leaves them in place.
pub struct DnsCache {
    entries: DashMap<DomainName, ResourceAnswer, FxBuildHasher>,
    clock: Arc<dyn Clock>,
    events: CacheEventEmitter,
    metrics: CacheMetrics,
}

impl DnsCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            clock,
            events: CacheEventEmitter::new_disabled(),
            metrics: CacheMetrics::default(),
        }
    }

    pub fn with_events(mut self, events: CacheEventEmitter) -> Self {
        self.events = events;
        self
    }

    pub fn get(&self, name: &DomainName) -> Option<ResourceAnswer> {
        let now = self.clock.now_millis();

        // Copy out so the shard read lock is released before any removal.
        let cached = self.entries.get(name).map(|entry| *entry.value());

        let Some(answer) = cached else {
            self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
            return None;
        };

        if !answer.is_expired_at(now) {
            self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
            return Some(answer);
        }

        // Re-check under the write lock: a concurrent put may have refreshed it.
        if let Some((key, expired)) = self
            .entries
            .remove_if(name, |_, current| current.is_expired_at(now))
        {
            self.metrics
                .lazy_deletions
                .fetch_add(1, AtomicOrdering::Relaxed);

            debug!(
                domain = %key,
                address = %expired.address,
                ttl = expired.ttl_secs,
                "Cache EXPIRED"
            );

            self.events.emit(CacheEvent::Expired {
                name: key,
                address: expired.address,
                ttl_secs: expired.ttl_secs,
            });
        }

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    /// Last writer wins.
    pub fn put(&self, name: DomainName, answer: ResourceAnswer) {
        self.events.emit(CacheEvent::Inserted {
            name: name.clone(),
            address: answer.address,
            ttl_secs: answer.ttl_secs,
        });

        self.entries.insert(name, answer);
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }

    /// Rows sorted by name. Never evicts.
    pub fn snapshot(&self) -> Vec<CacheRow> {
        let now = self.clock.now_millis();

        let mut rows: Vec<CacheRow> = self
            .entries
            .iter()
            .map(|entry| CacheRow {
                name: entry.key().clone(),
                answer: *entry.value(),
                remaining_ttl_secs: entry.value().remaining_ttl_at(now),
            })
            .collect();

        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }

    pub fn clear(&self) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, _| {
            removed += 1;
            false
        });

        self.events.emit(CacheEvent::Cleared { removed });
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }
}

impl DnsCachePort for DnsCache {
    fn list(&self) -> Vec<CacheRow> {
        self.snapshot()
    }

    fn clear(&self) -> usize {
        DnsCache::clear(self)
    }

    fn cache_size(&self) -> usize {
        self.len()
    }

    fn cache_metrics_snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            total_entries: self.len(),
            hits: self.metrics.hits.load(AtomicOrdering::Relaxed),
            misses: self.metrics.misses.load(AtomicOrdering::Relaxed),
            insertions: self.metrics.insertions.load(AtomicOrdering::Relaxed),
            lazy_deletions: self.metrics.lazy_deletions.load(AtomicOrdering::Relaxed),
            hit_rate: self.metrics.hit_rate(),
        }
    }
}
