use std::net::Ipv4Addr;

/// Transaction id carried in the first two bytes of every DNS message.
pub type QueryId = u16;

/// A single learned A record together with the moment it was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceAnswer {
    pub address: Ipv4Addr,
    pub ttl_secs: u32,
    /// Unix timestamp (milliseconds) taken when the reply was decoded.
    pub resolved_at_ms: u64,
}

impl ResourceAnswer {
    pub fn new(address: Ipv4Addr, ttl_secs: u32, resolved_at_ms: u64) -> Self {
        Self {
            address,
            ttl_secs,
            resolved_at_ms,
        }
    }

    #[inline]
    pub fn ttl_millis(&self) -> u64 {
        u64::from(self.ttl_secs) * 1_000
    }

    #[inline]
    pub fn elapsed_millis(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.resolved_at_ms)
    }

    /// An answer with a zero TTL is expired from the instant it is resolved.
    #[inline]
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        self.elapsed_millis(now_ms) >= self.ttl_millis()
    }

    /// Whole seconds left, rounded up; zero exactly when expired.
    #[inline]
    pub fn remaining_ttl_at(&self, now_ms: u64) -> u32 {
        let left_ms = self.ttl_millis().saturating_sub(self.elapsed_millis(now_ms));
        left_ms.div_ceil(1_000) as u32
    }
}
