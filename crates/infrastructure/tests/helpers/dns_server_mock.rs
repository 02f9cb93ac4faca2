use super::response_builder::ResponseBuilder;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy)]
pub enum ServerBehavior {
    Answer { address: Ipv4Addr, ttl: u32 },
    /// Sends a reply with a wrong transaction id before the real one.
    WrongIdFirst { address: Ipv4Addr, ttl: u32 },
    NxDomain,
    Silent,
}

/// UDP DNS server on loopback, bound to an OS-assigned port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: ServerBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            for response in Self::build_responses(&buf[..len], behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_responses(query: &[u8], behavior: ServerBehavior) -> Vec<Vec<u8>> {
        if query.len() < 12 {
            return vec![];
        }

        match behavior {
            ServerBehavior::Answer { address, ttl } => {
                vec![ResponseBuilder::answering(query).a(address, ttl).build()]
            }
            ServerBehavior::WrongIdFirst { address, ttl } => {
                let real = ResponseBuilder::answering(query).a(address, ttl).build();
                let mut spoofed = ResponseBuilder::answering(query)
                    .a(Ipv4Addr::new(6, 6, 6, 6), ttl)
                    .build();
                spoofed[0] ^= 0xFF;
                vec![spoofed, real]
            }
            ServerBehavior::NxDomain => vec![ResponseBuilder::answering(query).rcode(3).build()],
            ServerBehavior::Silent => vec![],
        }
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
