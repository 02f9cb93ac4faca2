pub mod udp;

use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use stubdns_domain::DomainError;

pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// One request/response exchange with the upstream server.
///
/// Implementations only hand back a reply whose transaction id equals the
/// id in the first two bytes of `message_bytes`.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

/// Compares the transaction id of `response` against the one in `query`.
pub fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "query to {} is shorter than a transaction id",
            server
        )));
    }
    if response.len() < 2 {
        return Err(DomainError::TruncatedMessage);
    }

    let expected = u16::from_be_bytes([query[0], query[1]]);
    let received = u16::from_be_bytes([response[0], response[1]]);

    if expected != received {
        return Err(DomainError::MismatchedTransaction { expected, received });
    }

    Ok(())
}
