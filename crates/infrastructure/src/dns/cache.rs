pub mod clock;
pub mod metrics;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use metrics::CacheMetrics;
pub use storage::DnsCache;
