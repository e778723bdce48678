use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::Arc;
use thiserror::Error;
use zonewatch_domain::DomainError;

/// Why a single record-category lookup produced nothing. The collector
/// swallows both variants (a name without a record type is not an error
/// for the engine), but keeping them distinct lets transport trouble be
/// logged differently from a plain negative answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no records")]
    NoRecords,

    #[error("transport error: {0}")]
    Transport(String),
}

/// One MX answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxEntry {
    pub exchange: String,
    pub preference: u16,
}

/// One SRV answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvEntry {
    pub target: String,
    pub port: u16,
    pub priority: u16,
    pub weight: u16,
}

/// The lookup contract the engine needs from a resolver. Names handed in
/// are always fully qualified (dot-terminated); answers keep whatever
/// canonical text the resolver returns.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn srv(&self, name: &str) -> Result<Vec<SrvEntry>, LookupError>;

    async fn mx(&self, name: &str) -> Result<Vec<MxEntry>, LookupError>;

    async fn ns(&self, name: &str) -> Result<Vec<String>, LookupError>;

    /// A and AAAA combined, one entry per address.
    async fn addresses(&self, name: &str) -> Result<Vec<IpAddr>, LookupError>;

    async fn txt(&self, name: &str) -> Result<Vec<String>, LookupError>;

    async fn cname(&self, name: &str) -> Result<Vec<String>, LookupError>;
}

/// Hands out a [`RecordSource`] for a zone, honoring its nameserver
/// override. `None` means the process-wide source (global override or
/// system resolver).
pub trait RecordSourceFactory: Send + Sync {
    fn source_for(&self, nameserver: Option<&str>)
        -> Result<Arc<dyn RecordSource>, DomainError>;
}
