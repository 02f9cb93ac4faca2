use crate::dns::cache::DnsCache;
use async_trait::async_trait;
use std::sync::Arc;
use stubdns_application::ports::{
    CacheMetricsSnapshot, CacheRow, DnsCachePort, DnsResolution, DnsResolver,
};
use stubdns_domain::{DomainError, DomainName};
use tracing::debug;

/// Serves answers from the cache and fills it from `inner` on a miss.
/// Errors are never cached.
pub struct CachedResolver {
    inner: Arc<dyn DnsResolver>,
    cache: Arc<DnsCache>,
}

impl CachedResolver {
    pub fn new(inner: Arc<dyn DnsResolver>, cache: Arc<DnsCache>) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &Arc<DnsCache> {
        &self.cache
    }

    fn check_cache(&self, name: &DomainName) -> Option<DnsResolution> {
        self.cache.get(name).map(|answer| {
            debug!(domain = %name, address = %answer.address, "Cache HIT");
            DnsResolution::from_cache(name.clone(), answer)
        })
    }
}

#[async_trait]
impl DnsResolver for CachedResolver {
    async fn resolve(&self, name: &DomainName) -> Result<DnsResolution, DomainError> {
        if let Some(hit) = self.check_cache(name) {
            return Ok(hit);
        }

        debug!(domain = %name, "Cache MISS");

        let resolution = self.inner.resolve(name).await?;
        self.cache.put(name.clone(), resolution.answer);

        Ok(resolution)
    }

    fn try_cache(&self, name: &DomainName) -> Option<DnsResolution> {
        self.check_cache(name)
    }
}

impl DnsCachePort for CachedResolver {
    fn list(&self) -> Vec<CacheRow> {
        self.cache.snapshot()
    }

    fn clear(&self) -> usize {
        self.cache.clear()
    }

    fn cache_size(&self) -> usize {
        self.cache.len()
    }

    fn cache_metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.cache.cache_metrics_snapshot()
    }
}
