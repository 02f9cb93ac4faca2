use super::pending::{new_inflight_ids, InflightIds, PendingQuery};
use crate::dns::cache::Clock;
use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use stubdns_application::ports::{DnsResolution, DnsResolver};
use stubdns_domain::{DomainError, DomainName, ResourceAnswer, UpstreamConfig};
use tracing::{debug, info};

/// Talks to the upstream server; never consults a cache.
pub struct CoreResolver {
    transport: Arc<dyn DnsTransport>,
    clock: Arc<dyn Clock>,
    server: SocketAddr,
    timeout: Duration,
    max_attempts: u32,
    inflight: InflightIds,
}

impl CoreResolver {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        clock: Arc<dyn Clock>,
        config: &UpstreamConfig,
    ) -> Self {
        info!(
            server = %config.server_address,
            protocol = transport.protocol_name(),
            timeout_ms = config.timeout_ms,
            max_retries = config.max_retries,
            "Core DNS resolver created"
        );

        Self {
            transport,
            clock,
            server: config.server_address,
            timeout: config.timeout(),
            max_attempts: config.max_attempts(),
            inflight: new_inflight_ids(),
        }
    }

    /// Number of attempts currently holding a transaction id.
    pub fn inflight_count(&self) -> usize {
        self.inflight.len()
    }

    async fn query_once(&self, name: &DomainName) -> Result<ResourceAnswer, DomainError> {
        let pending = PendingQuery::reserve(&self.inflight, name);
        let message = MessageBuilder::build_query(pending.name(), pending.id());

        let response = self
            .transport
            .send(self.server, &message, self.timeout)
            .await?;

        debug!(
            domain = %pending.name(),
            id = pending.id(),
            bytes = response.bytes.len(),
            rtt_us = pending.elapsed().as_micros() as u64,
            "Upstream reply received"
        );

        ResponseParser::parse(
            &response.bytes,
            pending.id(),
            pending.name(),
            self.clock.now_millis(),
        )
    }
}

#[async_trait]
impl DnsResolver for CoreResolver {
    async fn resolve(&self, name: &DomainName) -> Result<DnsResolution, DomainError> {
        let max_attempts = self.max_attempts;
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.query_once(name).await {
                Ok(answer) => {
                    debug!(
                        domain = %name,
                        address = %answer.address,
                        ttl = answer.ttl_secs,
                        attempt = attempt,
                        "CoreResolver: query successful"
                    );
                    return Ok(DnsResolution::from_upstream(
                        name.clone(),
                        answer,
                        self.server,
                        attempt,
                    ));
                }
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    debug!(
                        domain = %name,
                        server = %self.server,
                        attempt = attempt,
                        max_attempts = max_attempts,
                        error = %e,
                        "CoreResolver: attempt failed, retrying"
                    );
                }
                Err(e) if e.is_retryable() => {
                    return Err(DomainError::ResolutionFailed {
                        attempts: attempt,
                        last_error: Box::new(e),
                    });
                }
                Err(e) => return Err(e),
            }
        }
    }
}
