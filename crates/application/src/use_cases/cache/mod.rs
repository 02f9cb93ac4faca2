mod clear_cache;
mod get_stats;
mod list_cache;

pub use clear_cache::ClearCacheUseCase;
pub use get_stats::GetCacheStatsUseCase;
pub use list_cache::ListCacheUseCase;
