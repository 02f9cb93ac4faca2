pub mod emitter;
pub mod types;

pub use emitter::CacheEventEmitter;
pub use types::CacheEvent;
