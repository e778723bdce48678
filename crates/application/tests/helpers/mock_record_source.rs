#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use zonewatch_application::ports::{
    LookupError, MxEntry, RecordSource, RecordSourceFactory, SrvEntry,
};
use zonewatch_domain::DomainError;

// ============================================================================
// Mock RecordSource
// ============================================================================

#[derive(Default, Clone)]
struct NameRecords {
    mx: Vec<MxEntry>,
    ns: Vec<String>,
    addresses: Vec<IpAddr>,
    txt: Vec<String>,
    cname: Vec<String>,
    srv: Vec<SrvEntry>,
}

/// In-memory record source. Fixture data is installed through the
/// builder-style `with_*` methods; lookups for anything else answer
/// `NoRecords`. Tracks every call plus a concurrency high-water mark so
/// tests can observe the admission bound.
pub struct MockRecordSource {
    records: HashMap<String, NameRecords>,
    failing_categories: HashSet<&'static str>,
    delay: Option<Duration>,
    calls: Mutex<Vec<(String, String)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockRecordSource {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            failing_categories: HashSet::new(),
            delay: None,
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_addresses(mut self, name: &str, addrs: &[&str]) -> Self {
        self.entry(name).addresses = addrs.iter().map(|a| a.parse().unwrap()).collect();
        self
    }

    pub fn with_ns(mut self, name: &str, hosts: &[&str]) -> Self {
        self.entry(name).ns = hosts.iter().map(|h| h.to_string()).collect();
        self
    }

    pub fn with_mx(mut self, name: &str, entries: &[(&str, u16)]) -> Self {
        self.entry(name).mx = entries
            .iter()
            .map(|(exchange, preference)| MxEntry {
                exchange: exchange.to_string(),
                preference: *preference,
            })
            .collect();
        self
    }

    pub fn with_txt(mut self, name: &str, texts: &[&str]) -> Self {
        self.entry(name).txt = texts.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_cname(mut self, name: &str, targets: &[&str]) -> Self {
        self.entry(name).cname = targets.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_srv(mut self, name: &str, entries: &[(&str, u16, u16, u16)]) -> Self {
        self.entry(name).srv = entries
            .iter()
            .map(|(target, port, priority, weight)| SrvEntry {
                target: target.to_string(),
                port: *port,
                priority: *priority,
                weight: *weight,
            })
            .collect();
        self
    }

    /// Make every lookup of the given category fail with a transport error.
    pub fn with_failing_category(mut self, category: &'static str) -> Self {
        self.failing_categories.insert(category);
        self
    }

    /// Hold each lookup open for `delay`, making overlap observable.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn categories_queried_for(&self, name: &str) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, n)| n == name)
            .map(|(category, _)| category.clone())
            .collect()
    }

    /// Highest number of lookups ever in flight at once. Lookups within a
    /// zone run sequentially, so this equals the peak number of
    /// concurrently active zone builds.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn entry(&mut self, name: &str) -> &mut NameRecords {
        self.records.entry(name.to_string()).or_default()
    }

    async fn lookup<T: Clone>(
        &self,
        category: &'static str,
        name: &str,
        select: impl FnOnce(&NameRecords) -> Vec<T>,
    ) -> Result<Vec<T>, LookupError> {
        self.calls
            .lock()
            .unwrap()
            .push((category.to_string(), name.to_string()));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_categories.contains(category) {
            return Err(LookupError::Transport(format!("{category} unreachable")));
        }

        let found = self.records.get(name).map(select).unwrap_or_default();
        if found.is_empty() {
            Err(LookupError::NoRecords)
        } else {
            Ok(found)
        }
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn srv(&self, name: &str) -> Result<Vec<SrvEntry>, LookupError> {
        self.lookup("srv", name, |r| r.srv.clone()).await
    }

    async fn mx(&self, name: &str) -> Result<Vec<MxEntry>, LookupError> {
        self.lookup("mx", name, |r| r.mx.clone()).await
    }

    async fn ns(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.lookup("ns", name, |r| r.ns.clone()).await
    }

    async fn addresses(&self, name: &str) -> Result<Vec<IpAddr>, LookupError> {
        self.lookup("addresses", name, |r| r.addresses.clone()).await
    }

    async fn txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.lookup("txt", name, |r| r.txt.clone()).await
    }

    async fn cname(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.lookup("cname", name, |r| r.cname.clone()).await
    }
}

// ============================================================================
// Mock RecordSourceFactory
// ============================================================================

/// Hands the same mock source to every zone and remembers which nameserver
/// override each zone asked for.
pub struct MockSourceFactory {
    source: Arc<MockRecordSource>,
    requested: Mutex<Vec<Option<String>>>,
    fail: bool,
}

impl MockSourceFactory {
    pub fn new(source: Arc<MockRecordSource>) -> Self {
        Self {
            source,
            requested: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A factory that cannot produce any source, for exercising the
    /// zone-local degradation path.
    pub fn broken(source: Arc<MockRecordSource>) -> Self {
        Self {
            source,
            requested: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn requested_nameservers(&self) -> Vec<Option<String>> {
        self.requested.lock().unwrap().clone()
    }
}

impl RecordSourceFactory for MockSourceFactory {
    fn source_for(
        &self,
        nameserver: Option<&str>,
    ) -> Result<Arc<dyn RecordSource>, DomainError> {
        self.requested
            .lock()
            .unwrap()
            .push(nameserver.map(|ns| ns.to_string()));
        if self.fail {
            return Err(DomainError::ResolverSetup(
                "no resolver available".to_string(),
            ));
        }
        Ok(self.source.clone())
    }
}
