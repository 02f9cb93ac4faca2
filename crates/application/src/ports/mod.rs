mod dns_cache_port;
mod dns_resolver;

pub use dns_cache_port::{CacheMetricsSnapshot, CacheRow, DnsCachePort};
pub use dns_resolver::{DnsResolution, DnsResolver};

// Re-export for convenience
pub use stubdns_domain::DomainName;
