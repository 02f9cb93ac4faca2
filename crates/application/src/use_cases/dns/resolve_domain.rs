use crate::ports::{DnsResolution, DnsResolver};
use std::sync::Arc;
use std::time::Instant;
use stubdns_domain::{DomainError, DomainName};
use tracing::{debug, info, warn};

/// Single entry point a front end uses to turn user input into an address.
pub struct ResolveDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, raw_domain: &str) -> Result<DnsResolution, DomainError> {
        let start = Instant::now();

        let name = DomainName::parse(raw_domain).inspect_err(|e| {
            debug!(input = %raw_domain, error = %e, "Rejected domain input");
        })?;

        match self.resolver.resolve(&name).await {
            Ok(resolution) => {
                let elapsed_us = start.elapsed().as_micros() as u64;

                if resolution.cache_hit {
                    debug!(
                        domain = %name,
                        address = %resolution.answer.address,
                        ttl = resolution.answer.ttl_secs,
                        elapsed_us,
                        "Cache HIT"
                    );
                } else {
                    info!(
                        domain = %name,
                        address = %resolution.answer.address,
                        ttl = resolution.answer.ttl_secs,
                        attempts = resolution.attempts,
                        upstream = ?resolution.upstream_server,
                        elapsed_us,
                        "Resolved via upstream"
                    );
                }

                Ok(resolution)
            }
            Err(e) => {
                warn!(
                    domain = %name,
                    status = e.status(),
                    error = %e,
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "Resolution failed"
                );
                Err(e)
            }
        }
    }
}
