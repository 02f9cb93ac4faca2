use super::response_builder::ResponseBuilder;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use stubdns_domain::DomainError;
use stubdns_infrastructure::dns::transport::{DnsTransport, TransportResponse};

pub type ReplyFn = Arc<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>;

#[derive(Clone)]
pub enum Reply {
    Answer(Ipv4Addr, u32),
    Rcode(u8),
    Timeout,
    Refused,
    Custom(ReplyFn),
}

/// Transport that answers from a script instead of the network.
///
/// Replies are consumed in order; once the script runs out the fallback
/// reply is used for every further send.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Reply>>,
    fallback: Reply,
    sends: AtomicUsize,
    sent_ids: Mutex<Vec<u16>>,
}

impl ScriptedTransport {
    pub fn new(fallback: Reply) -> Arc<Self> {
        Self::with_script(Vec::new(), fallback)
    }

    pub fn with_script(script: Vec<Reply>, fallback: Reply) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            fallback,
            sends: AtomicUsize::new(0),
            sent_ids: Mutex::new(Vec::new()),
        })
    }

    pub fn answering(address: Ipv4Addr, ttl: u32) -> Arc<Self> {
        Self::new(Reply::Answer(address, ttl))
    }

    pub fn sends(&self) -> usize {
        self.sends.load(Ordering::SeqCst)
    }

    pub fn sent_ids(&self) -> Vec<u16> {
        self.sent_ids.lock().unwrap().clone()
    }

    fn next_reply(&self) -> Reply {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[async_trait]
impl DnsTransport for ScriptedTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        self.sent_ids
            .lock()
            .unwrap()
            .push(u16::from_be_bytes([message_bytes[0], message_bytes[1]]));

        let bytes = match self.next_reply() {
            Reply::Answer(address, ttl) => ResponseBuilder::answering(message_bytes)
                .a(address, ttl)
                .build(),
            Reply::Rcode(rcode) => ResponseBuilder::answering(message_bytes)
                .rcode(rcode)
                .build(),
            Reply::Timeout => return Err(DomainError::Timeout { server }),
            Reply::Refused => {
                return Err(DomainError::Transport {
                    server,
                    reason: "connection refused".to_string(),
                })
            }
            Reply::Custom(build) => build(message_bytes),
        };

        Ok(TransportResponse {
            bytes,
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
