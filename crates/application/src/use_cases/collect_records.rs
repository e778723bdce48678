use std::sync::Arc;
use tracing::debug;

use crate::ports::{LookupError, RecordSource};

/// Issues the fixed set of lookups for one fully-qualified name and
/// renders the answers as record lines. A failed or empty category simply
/// contributes no lines; output order carries no meaning.
pub struct RecordCollector {
    source: Arc<dyn RecordSource>,
}

impl RecordCollector {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    pub async fn collect(&self, name: &str) -> Vec<String> {
        let mut lines = Vec::new();

        // Underscore names follow the service-record convention: a single
        // SRV lookup, nothing else.
        if name.starts_with('_') {
            match self.source.srv(name).await {
                Ok(entries) => {
                    for e in entries {
                        lines.push(format!(
                            "SRV: {} {} {} {} {}",
                            name, e.target, e.port, e.priority, e.weight
                        ));
                    }
                }
                Err(err) => log_miss(name, "SRV", &err),
            }
            return lines;
        }

        match self.source.mx(name).await {
            Ok(entries) => {
                for e in entries {
                    lines.push(format!("MX: {} {}", e.exchange, e.preference));
                }
            }
            Err(err) => log_miss(name, "MX", &err),
        }

        match self.source.ns(name).await {
            Ok(hosts) => {
                for host in hosts {
                    lines.push(format!("NS: {host}"));
                }
            }
            Err(err) => log_miss(name, "NS", &err),
        }

        match self.source.addresses(name).await {
            Ok(addrs) => {
                for addr in addrs {
                    lines.push(format!("IP: {addr}"));
                }
            }
            Err(err) => log_miss(name, "IP", &err),
        }

        match self.source.txt(name).await {
            Ok(texts) => {
                for text in texts {
                    lines.push(format!("TXT: {text}"));
                }
            }
            Err(err) => log_miss(name, "TXT", &err),
        }

        match self.source.cname(name).await {
            Ok(targets) => {
                for target in targets {
                    lines.push(format!("CNAME: {target}"));
                }
            }
            Err(err) => log_miss(name, "CNAME", &err),
        }

        lines
    }
}

fn log_miss(name: &str, category: &str, err: &LookupError) {
    match err {
        LookupError::NoRecords => {
            debug!(name, category, "no records");
        }
        LookupError::Transport(reason) => {
            debug!(name, category, reason, "lookup failed");
        }
    }
}
