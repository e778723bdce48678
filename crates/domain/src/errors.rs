use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Malformed baseline entry: {0}")]
    MalformedBaselineEntry(String),

    #[error("Invalid zone name: {0}")]
    InvalidZoneName(String),

    #[error("Invalid nameserver address: {0}")]
    InvalidNameserver(String),

    #[error("Resolver setup failed: {0}")]
    ResolverSetup(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
