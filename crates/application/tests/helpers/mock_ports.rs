#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use stubdns_application::ports::{
    CacheMetricsSnapshot, CacheRow, DnsCachePort, DnsResolution, DnsResolver,
};
use stubdns_domain::{DomainError, DomainName, ResourceAnswer};

pub fn upstream() -> SocketAddr {
    "8.8.8.8:53".parse().unwrap()
}

pub fn answer(ip: &str, ttl: u32) -> ResourceAnswer {
    ResourceAnswer::new(ip.parse::<Ipv4Addr>().unwrap(), ttl, 1_700_000_000)
}

#[derive(Default)]
pub struct MockDnsResolver {
    responses: Mutex<HashMap<String, Result<DnsResolution, DomainError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, resolution: DnsResolution) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), Ok(resolution));
    }

    pub fn set_response_error(&self, domain: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), Err(error));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, name: &DomainName) -> Result<DnsResolution, DomainError> {
        self.calls.lock().unwrap().push(name.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(name.as_str())
            .cloned()
            .unwrap_or(Err(DomainError::NoAddressRecord))
    }
}

#[derive(Default)]
pub struct MockDnsCache {
    rows: Mutex<Vec<CacheRow>>,
    clear_calls: AtomicUsize,
}

impl MockDnsCache {
    pub fn with_rows(rows: Vec<CacheRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
            clear_calls: AtomicUsize::new(0),
        }
    }

    pub fn clear_calls(&self) -> usize {
        self.clear_calls.load(Ordering::Relaxed)
    }
}

impl DnsCachePort for MockDnsCache {
    fn list(&self) -> Vec<CacheRow> {
        self.rows.lock().unwrap().clone()
    }

    fn clear(&self) -> usize {
        self.clear_calls.fetch_add(1, Ordering::Relaxed);
        let mut rows = self.rows.lock().unwrap();
        let removed = rows.len();
        rows.clear();
        removed
    }

    fn cache_size(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn cache_metrics_snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            total_entries: self.cache_size(),
            ..Default::default()
        }
    }
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
