pub mod cache;
pub mod dns;

pub use cache::{ClearCacheUseCase, GetCacheStatsUseCase, ListCacheUseCase};
pub use dns::ResolveDomainUseCase;
