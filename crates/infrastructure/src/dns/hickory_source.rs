use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;
use tracing::debug;

use zonewatch_application::ports::{
    LookupError, MxEntry, RecordSource, RecordSourceFactory, SrvEntry,
};
use zonewatch_domain::DomainError;

const DNS_PORT: u16 = 53;

/// [`RecordSource`] adapter over hickory's stub resolver. Every lookup
/// carries the configured timeout so one unreachable nameserver cannot
/// stall a whole check cycle.
pub struct HickoryRecordSource {
    resolver: TokioAsyncResolver,
}

impl HickoryRecordSource {
    /// Resolver from the system configuration (/etc/resolv.conf).
    pub fn from_system(timeout: Duration) -> Result<Self, DomainError> {
        let (config, mut opts) =
            read_system_conf().map_err(|e| DomainError::ResolverSetup(e.to_string()))?;
        opts.timeout = timeout;
        Ok(Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        })
    }

    /// Resolver that queries a single nameserver over UDP port 53. The
    /// host may be an IP address or a name resolvable by the system.
    pub fn with_nameserver(host: &str, timeout: Duration) -> Result<Self, DomainError> {
        let addr = nameserver_addr(host)?;
        let mut config = ResolverConfig::new();
        config.add_name_server(NameServerConfig::new(addr, Protocol::Udp));

        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 2;

        debug!(nameserver = %addr, "using explicit nameserver");
        Ok(Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        })
    }
}

#[async_trait]
impl RecordSource for HickoryRecordSource {
    async fn srv(&self, name: &str) -> Result<Vec<SrvEntry>, LookupError> {
        let lookup = self.resolver.srv_lookup(name).await.map_err(map_err)?;
        Ok(lookup
            .iter()
            .map(|srv| SrvEntry {
                target: srv.target().to_string(),
                port: srv.port(),
                priority: srv.priority(),
                weight: srv.weight(),
            })
            .collect())
    }

    async fn mx(&self, name: &str) -> Result<Vec<MxEntry>, LookupError> {
        let lookup = self.resolver.mx_lookup(name).await.map_err(map_err)?;
        Ok(lookup
            .iter()
            .map(|mx| MxEntry {
                exchange: mx.exchange().to_string(),
                preference: mx.preference(),
            })
            .collect())
    }

    async fn ns(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let lookup = self.resolver.ns_lookup(name).await.map_err(map_err)?;
        Ok(lookup.iter().map(|ns| ns.0.to_string()).collect())
    }

    async fn addresses(&self, name: &str) -> Result<Vec<IpAddr>, LookupError> {
        let lookup = self.resolver.lookup_ip(name).await.map_err(map_err)?;
        Ok(lookup.iter().collect())
    }

    async fn txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let lookup = self.resolver.txt_lookup(name).await.map_err(map_err)?;
        Ok(lookup
            .iter()
            .map(|txt| {
                // Character-strings of one TXT record concatenate into a
                // single line.
                txt.iter()
                    .map(|part| String::from_utf8_lossy(part))
                    .collect::<String>()
            })
            .collect())
    }

    async fn cname(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let lookup = self
            .resolver
            .lookup(name, RecordType::CNAME)
            .await
            .map_err(map_err)?;
        Ok(lookup
            .iter()
            .filter_map(|rdata| rdata.as_cname())
            .map(|cname| cname.0.to_string())
            .collect())
    }
}

/// Hands each zone a resolver: the shared process-wide one, or a dedicated
/// resolver when the zone carries its own nameserver override.
pub struct HickorySourceFactory {
    timeout: Duration,
    default_source: Arc<HickoryRecordSource>,
}

impl HickorySourceFactory {
    pub fn new(default_nameserver: Option<&str>, timeout: Duration) -> Result<Self, DomainError> {
        let default_source = match default_nameserver {
            Some(host) => HickoryRecordSource::with_nameserver(host, timeout)?,
            None => HickoryRecordSource::from_system(timeout)?,
        };
        Ok(Self {
            timeout,
            default_source: Arc::new(default_source),
        })
    }
}

impl RecordSourceFactory for HickorySourceFactory {
    fn source_for(
        &self,
        nameserver: Option<&str>,
    ) -> Result<Arc<dyn RecordSource>, DomainError> {
        match nameserver {
            Some(host) => Ok(Arc::new(HickoryRecordSource::with_nameserver(
                host,
                self.timeout,
            )?)),
            None => Ok(self.default_source.clone()),
        }
    }
}

/// A negative answer is a normal condition for the engine; everything else
/// is transport trouble.
fn map_err(err: ResolveError) -> LookupError {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => LookupError::NoRecords,
        _ => LookupError::Transport(err.to_string()),
    }
}

fn nameserver_addr(host: &str) -> Result<SocketAddr, DomainError> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DNS_PORT));
    }
    (host, DNS_PORT)
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .ok_or_else(|| DomainError::InvalidNameserver(host.to_string()))
}
