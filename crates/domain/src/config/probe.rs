use serde::{Deserialize, Serialize};

/// Resolution and concurrency settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Maximum number of zones resolved in parallel.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Per-lookup timeout in milliseconds. One unreachable nameserver must
    /// not stall the whole batch.
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,

    /// Union the default subdomain label set into every zone.
    #[serde(default)]
    pub add_default_subdomains: bool,

    /// Process-wide nameserver override (hostname or IP, queried over UDP
    /// port 53). Per-zone overrides in the baseline file take precedence.
    #[serde(default)]
    pub nameserver: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            lookup_timeout_ms: default_lookup_timeout_ms(),
            add_default_subdomains: false,
            nameserver: None,
        }
    }
}

fn default_workers() -> usize {
    100
}

fn default_lookup_timeout_ms() -> u64 {
    5000
}
