use super::DnsServices;
use std::sync::Arc;
use stubdns_application::use_cases::{
    ClearCacheUseCase, GetCacheStatsUseCase, ListCacheUseCase, ResolveDomainUseCase,
};

pub struct UseCases {
    pub resolve_domain: Arc<ResolveDomainUseCase>,
    pub list_cache: Arc<ListCacheUseCase>,
    pub clear_cache: Arc<ClearCacheUseCase>,
    pub get_stats: Arc<GetCacheStatsUseCase>,
}

impl UseCases {
    pub fn new(services: &DnsServices) -> Self {
        Self {
            resolve_domain: Arc::new(ResolveDomainUseCase::new(services.resolver.clone())),
            list_cache: Arc::new(ListCacheUseCase::new(services.resolver.clone())),
            clear_cache: Arc::new(ClearCacheUseCase::new(services.resolver.clone())),
            get_stats: Arc::new(GetCacheStatsUseCase::new(services.resolver.clone())),
        }
    }
}
