use dashmap::DashSet;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::time::{Duration, Instant};
use stubdns_domain::{DomainName, QueryId};

pub type InflightIds = Arc<DashSet<QueryId, FxBuildHasher>>;

pub fn new_inflight_ids() -> InflightIds {
    Arc::new(DashSet::with_hasher(FxBuildHasher))
}

/// One upstream attempt and the transaction id reserved for it.
///
/// Ids are drawn at random and are unique among in-flight attempts that
/// share the same set. The id is released when the guard is dropped,
/// including when the owning future is cancelled.
pub struct PendingQuery {
    id: QueryId,
    name: DomainName,
    sent_at: Instant,
    inflight: InflightIds,
}

impl PendingQuery {
    pub fn reserve(inflight: &InflightIds, name: &DomainName) -> Self {
        loop {
            let id = fastrand::u16(..);
            if inflight.insert(id) {
                return Self {
                    id,
                    name: name.clone(),
                    sent_at: Instant::now(),
                    inflight: Arc::clone(inflight),
                };
            }
        }
    }

    pub fn id(&self) -> QueryId {
        self.id
    }

    pub fn name(&self) -> &DomainName {
        &self.name
    }

    pub fn elapsed(&self) -> Duration {
        self.sent_at.elapsed()
    }
}

impl Drop for PendingQuery {
    fn drop(&mut self) {
        self.inflight.remove(&self.id);
    }
}
