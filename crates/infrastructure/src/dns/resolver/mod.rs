pub mod builder;
pub mod cache_layer;
pub mod core;
pub mod pending;

pub use builder::ResolverBuilder;
pub use cache_layer::CachedResolver;
pub use self::core::CoreResolver;
pub use pending::PendingQuery;
