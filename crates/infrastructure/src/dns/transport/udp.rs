//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing) and replies are limited to 512
//! bytes. No EDNS(0) and no TCP fallback.

use super::{validate_response_id, DnsTransport, TransportResponse};
use async_trait::async_trait;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use stubdns_domain::DomainError;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Maximum classic DNS message size over UDP
pub const MAX_UDP_RESPONSE_SIZE: usize = 512;

/// DNS over UDP transport. A fresh socket is used for every exchange.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }
}

fn transport_error(server: SocketAddr, action: &str, e: std::io::Error) -> DomainError {
    DomainError::Transport {
        server,
        reason: format!("{}: {}", action, e),
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let deadline = Instant::now() + timeout;

        if message_bytes.len() < 2 {
            return Err(DomainError::InvalidDnsResponse(
                "query is shorter than a transaction id".to_string(),
            ));
        }

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| transport_error(server, "failed to bind UDP socket", e))?;

        // Connected: the kernel drops datagrams from other peers and reports
        // ICMP port-unreachable on the next recv.
        socket
            .connect(server)
            .await
            .map_err(|e| transport_error(server, "failed to connect UDP socket", e))?;

        let bytes_sent = socket
            .send(message_bytes)
            .await
            .map_err(|e| transport_error(server, "failed to send UDP query", e))?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let bytes_received = tokio::time::timeout_at(deadline, socket.recv(&mut recv_buf))
                .await
                .map_err(|_| DomainError::Timeout { server })?
                .map_err(|e| transport_error(server, "failed to receive UDP response", e))?;

            let response = &recv_buf[..bytes_received];

            match validate_response_id(message_bytes, response, server) {
                Ok(()) => {
                    debug!(
                        server = %server,
                        bytes_received = bytes_received,
                        "UDP response received"
                    );

                    return Ok(TransportResponse {
                        bytes: response.to_vec(),
                        protocol_used: "UDP",
                    });
                }
                Err(DomainError::MismatchedTransaction { expected, received }) => {
                    warn!(
                        server = %server,
                        expected = expected,
                        received = received,
                        "Discarding UDP response with mismatched transaction id"
                    );
                }
                Err(e) => {
                    debug!(server = %server, error = %e, "Discarding short UDP datagram");
                }
            }
        }
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
