pub mod cache;
pub mod events;
pub mod forwarding;
pub mod resolver;
pub mod transport;

pub use cache::{CacheMetrics, Clock, DnsCache, ManualClock, SystemClock};
pub use events::{CacheEvent, CacheEventEmitter};
pub use forwarding::{MessageBuilder, ResponseParser};
pub use resolver::{CachedResolver, CoreResolver, PendingQuery, ResolverBuilder};
pub use transport::{DnsTransport, UdpTransport};
