use crate::ResponseCode;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: SocketAddr, reason: String },

    #[error("Query timeout waiting for {server}")]
    Timeout { server: SocketAddr },

    #[error("Transaction id mismatch: expected {expected:#06x}, received {received:#06x}")]
    MismatchedTransaction { expected: u16, received: u16 },

    #[error("Domain not found (NXDOMAIN)")]
    NameError,

    #[error("Upstream server failure ({rcode})")]
    ServerFailure { rcode: ResponseCode },

    #[error("Reply does not have the response flag set")]
    NotAResponse,

    #[error("Truncated DNS message")]
    TruncatedMessage,

    #[error("Malformed name in DNS message: {0}")]
    MalformedName(String),

    #[error("Reply question does not match the query")]
    QuestionMismatch,

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Unsupported record type {0} in answer section")]
    UnsupportedRecordType(u16),

    #[error("No A record in answer section")]
    NoAddressRecord,

    #[error("Resolution failed after {attempts} attempts: {last_error}")]
    ResolutionFailed {
        attempts: u32,
        last_error: Box<DomainError>,
    },
}

impl DomainError {
    /// Transient failures that a fresh attempt with a new transaction id may fix.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. }
                | Self::Transport { .. }
                | Self::ServerFailure { .. }
                | Self::MismatchedTransaction { .. }
        )
    }

    /// Short status label for logs.
    pub fn status(&self) -> &'static str {
        match self {
            Self::InvalidDomainName(_) => "BADNAME",
            Self::Transport { .. } => "TRANSPORT",
            Self::Timeout { .. } => "TIMEOUT",
            Self::NameError => "NXDOMAIN",
            Self::ServerFailure { rcode } => rcode.as_str(),
            Self::ResolutionFailed { .. } => "FAILED",
            Self::MismatchedTransaction { .. }
            | Self::NotAResponse
            | Self::TruncatedMessage
            | Self::MalformedName(_)
            | Self::QuestionMismatch
            | Self::InvalidDnsResponse(_)
            | Self::UnsupportedRecordType(_)
            | Self::NoAddressRecord => "BADREPLY",
        }
    }
}
