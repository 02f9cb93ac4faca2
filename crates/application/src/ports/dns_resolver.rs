use async_trait::async_trait;
use std::net::SocketAddr;
use stubdns_domain::{DomainError, DomainName, ResourceAnswer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResolution {
    pub name: DomainName,
    pub answer: ResourceAnswer,
    pub cache_hit: bool,
    pub upstream_server: Option<SocketAddr>,
    /// Upstream attempts spent; zero on a cache hit.
    pub attempts: u32,
}

impl DnsResolution {
    pub fn from_cache(name: DomainName, answer: ResourceAnswer) -> Self {
        Self {
            name,
            answer,
            cache_hit: true,
            upstream_server: None,
            attempts: 0,
        }
    }

    pub fn from_upstream(
        name: DomainName,
        answer: ResourceAnswer,
        server: SocketAddr,
        attempts: u32,
    ) -> Self {
        Self {
            name,
            answer,
            cache_hit: false,
            upstream_server: Some(server),
            attempts,
        }
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, name: &DomainName) -> Result<DnsResolution, DomainError>;

    /// Check only the cache without going upstream.
    /// Default implementation returns None (no cache).
    fn try_cache(&self, _name: &DomainName) -> Option<DnsResolution> {
        None
    }
}
