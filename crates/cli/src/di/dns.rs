use std::sync::Arc;
use stubdns_domain::Config;
use stubdns_infrastructure::dns::{CachedResolver, ResolverBuilder, UdpTransport};
use tracing::info;

pub struct DnsServices {
    pub resolver: Arc<CachedResolver>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        info!(server = %config.upstream.server_address, "Initializing DNS services");

        let resolver = ResolverBuilder::new(Arc::new(UdpTransport::new()))
            .with_config(config.upstream.clone())
            .build();

        Self { resolver }
    }
}
