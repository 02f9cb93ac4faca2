use super::cache_layer::CachedResolver;
use super::core::CoreResolver;
use crate::dns::cache::{Clock, DnsCache, SystemClock};
use crate::dns::events::CacheEventEmitter;
use crate::dns::transport::DnsTransport;
use std::sync::Arc;
use stubdns_domain::UpstreamConfig;
use tracing::info;

pub struct ResolverBuilder {
    transport: Arc<dyn DnsTransport>,
    config: UpstreamConfig,
    clock: Arc<dyn Clock>,
    events: CacheEventEmitter,
}

impl ResolverBuilder {
    pub fn new(transport: Arc<dyn DnsTransport>) -> Self {
        Self {
            transport,
            config: UpstreamConfig::default(),
            clock: Arc::new(SystemClock),
            events: CacheEventEmitter::new_disabled(),
        }
    }

    pub fn with_config(mut self, config: UpstreamConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_events(mut self, events: CacheEventEmitter) -> Self {
        self.events = events;
        self
    }

    pub fn build(self) -> Arc<CachedResolver> {
        info!(
            server = %self.config.server_address,
            timeout_ms = self.config.timeout_ms,
            max_retries = self.config.max_retries,
            events = self.events.is_enabled(),
            "Building DNS resolver"
        );

        let core = CoreResolver::new(self.transport, Arc::clone(&self.clock), &self.config);
        let cache = DnsCache::new(self.clock).with_events(self.events);

        Arc::new(CachedResolver::new(Arc::new(core), Arc::new(cache)))
    }
}
