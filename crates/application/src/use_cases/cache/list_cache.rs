use crate::ports::{CacheRow, DnsCachePort};
use std::sync::Arc;

pub struct ListCacheUseCase {
    cache: Arc<dyn DnsCachePort>,
}

impl ListCacheUseCase {
    pub fn new(cache: Arc<dyn DnsCachePort>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> Vec<CacheRow> {
        self.cache.list()
    }
}
