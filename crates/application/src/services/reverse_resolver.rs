//! Reverse-DNS client enrichment.
//!
//! `ReverseResolver` turns observed client addresses into hostnames without
//! touching the hot request path: `begin` only consults a TTL cache and
//! offers the address to a bounded queue, while a single background worker
//! performs the PTR lookups and feeds results into the client registry.

use crate::ports::{ClientRegistry, DnsExchanger, NetworkClassifier};
use crate::services::ptr_query::build_ptr_query;
use futures::FutureExt;
use hickory_proto::rr::RData;
use lru::LruCache;
use rdns_domain::{ClientSource, DomainError, RdnsConfig};
use std::any::Any;
use std::net::IpAddr;
use std::num::NonZeroUsize;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, error, trace, warn};

/// Asynchronous reverse resolver for client addresses.
///
/// An address stays in the suppression cache for the configured TTL whether
/// or not its resolution succeeded, so unresolvable addresses are not
/// re-attempted until the window expires.
pub struct ReverseResolver {
    /// address -> absolute expiry, Unix seconds.
    cache: Mutex<LruCache<IpAddr, u64>>,
    cache_ttl_secs: u64,
    queue: mpsc::Sender<IpAddr>,
    registry: Arc<dyn ClientRegistry>,
}

impl ReverseResolver {
    /// Create the resolver and spawn its worker. Must be called from within
    /// a tokio runtime.
    pub fn new(
        config: &RdnsConfig,
        upstream: Arc<dyn DnsExchanger>,
        local_resolvers: Arc<dyn DnsExchanger>,
        classifier: Arc<dyn NetworkClassifier>,
        registry: Arc<dyn ClientRegistry>,
    ) -> Self {
        let (tx, rx) = mpsc::channel(config.queue_capacity.max(1));

        let worker = Worker {
            upstream,
            local_resolvers,
            classifier,
            registry: Arc::clone(&registry),
        };
        tokio::spawn(worker.run(rx));

        let capacity = NonZeroUsize::new(config.cache_size).unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: Mutex::new(LruCache::new(capacity)),
            cache_ttl_secs: config.cache_ttl_secs,
            queue: tx,
            registry,
        }
    }

    /// Queue the address for resolution unless it is suppressed by the cache
    /// or already known to the registry. Never blocks: a full queue drops
    /// the request.
    pub async fn begin(&self, ip: IpAddr) {
        let now = unix_now();

        {
            let mut cache = match self.cache.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(&expiry) = cache.get(&ip) {
                if expiry > now {
                    return;
                }
            }
            // Refreshed before the outcome is known, so failed lookups are
            // suppressed for the same window as successful ones.
            cache.put(ip, now + self.cache_ttl_secs);
        }

        if self.registry.exists(ip, ClientSource::Rdns).await {
            return;
        }

        match self.queue.try_send(ip) {
            Ok(()) => trace!(ip = %ip, "queued for reverse resolution"),
            Err(TrySendError::Full(_)) => trace!(ip = %ip, "resolution queue is full"),
            Err(TrySendError::Closed(_)) => warn!(ip = %ip, "resolution queue is closed"),
        }
    }
}

struct Worker {
    upstream: Arc<dyn DnsExchanger>,
    local_resolvers: Arc<dyn DnsExchanger>,
    classifier: Arc<dyn NetworkClassifier>,
    registry: Arc<dyn ClientRegistry>,
}

impl Worker {
    /// Consume the queue until it is closed. A fault in one item never
    /// terminates the loop.
    async fn run(self, mut queue: mpsc::Receiver<IpAddr>) {
        while let Some(ip) = queue.recv().await {
            let outcome = AssertUnwindSafe(self.process(ip)).catch_unwind().await;
            if let Err(payload) = outcome {
                error!(ip = %ip, panic = panic_message(payload.as_ref()), "reverse resolution panicked");
            }
        }
        debug!("reverse resolution worker stopped");
    }

    async fn process(&self, ip: IpAddr) {
        let host = match self.resolve(ip).await {
            Ok(host) => host,
            Err(e) => {
                debug!(ip = %ip, error = %e, "reverse resolution failed");
                return;
            }
        };

        // add_host currently never fails for rDNS bindings, but the registry
        // contract allows it to.
        match self.registry.add_host(ip, &host, ClientSource::Rdns).await {
            Ok(true) => debug!(ip = %ip, host = %host, "client hostname recorded"),
            Ok(false) => trace!(ip = %ip, host = %host, "registry declined binding"),
            Err(e) => warn!(ip = %ip, error = %e, "storing resolved hostname"),
        }
    }

    async fn resolve(&self, ip: IpAddr) -> Result<String, DomainError> {
        trace!(ip = %ip, "resolving host");

        let query = build_ptr_query(&ip)?;

        let response = if self.classifier.is_locally_served(ip) {
            self.local_resolvers.exchange(&query).await
        } else {
            self.upstream.exchange(&query).await
        }
        .map_err(|e| DomainError::LookupFailed {
            ip: ip.to_string(),
            source: Box::new(e),
        })?;

        let answers = response.answers();
        let first = answers
            .first()
            .ok_or_else(|| DomainError::EmptyAnswer(ip.to_string()))?;

        // First-record-only contract: later records are not scanned.
        let RData::PTR(ptr) = first.data() else {
            return Err(DomainError::NotPtr(ip.to_string()));
        };

        let host = ptr.to_utf8();
        Ok(host.strip_suffix('.').unwrap_or(&host).to_string())
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}
