use std::net::Ipv4Addr;
use stubdns_domain::DomainName;

/// Cache lifecycle notifications, delivered only when a receiver is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    Inserted {
        name: DomainName,
        address: Ipv4Addr,
        ttl_secs: u32,
    },

    /// Removed lazily by a lookup that found it past its TTL.
    Expired {
        name: DomainName,
        address: Ipv4Addr,
        ttl_secs: u32,
    },

    Cleared {
        removed: usize,
    },
}

impl CacheEvent {
    pub fn name(&self) -> Option<&DomainName> {
        match self {
            Self::Inserted { name, .. } | Self::Expired { name, .. } => Some(name),
            Self::Cleared { .. } => None,
        }
    }

    pub fn is_expiry(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }
}
