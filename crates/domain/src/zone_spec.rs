use std::collections::BTreeSet;

use crate::errors::DomainError;

/// Well-known hostnames unioned into every zone when the caller asks for
/// guessed subdomains (`--defaults`).
pub const DEFAULT_SUBDOMAIN_LABELS: &[&str] =
    &["ftp", "imap", "mail", "pop3", "smtp", "webmail", "www"];

/// One zone to probe: the apex domain, the subdomain labels to expand,
/// an optional per-zone nameserver and the fingerprint recorded at the
/// last baseline update.
///
/// Built either from a baseline-file entry
/// (`apex:fingerprint[:labelsCSV[:nameserver]]`) or ad hoc from a bare
/// domain name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSpec {
    /// Apex domain, always dot-terminated.
    pub apex: String,

    /// Unique, non-empty subdomain labels. Sorted so probe-name expansion
    /// is deterministic.
    pub subdomains: BTreeSet<String>,

    /// Nameserver to query instead of the process-wide resolver.
    pub nameserver: Option<String>,

    /// Fingerprint recorded in the baseline; `None` means the zone has
    /// never been fingerprinted (ad-hoc check or fresh entry).
    pub expected_fingerprint: Option<String>,
}

impl ZoneSpec {
    /// Parse one baseline-file entry.
    ///
    /// Field layout: `apex:fingerprint[:labelsCSV[:nameserver]]`. Empty
    /// trailing fields are tolerated; extra fields beyond the fourth are
    /// ignored. Entries with fewer than two fields are malformed.
    pub fn from_baseline_line(line: &str) -> Result<Self, DomainError> {
        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() < 2 {
            return Err(DomainError::MalformedBaselineEntry(line.to_string()));
        }

        let apex = normalize_apex(fields[0])?;
        let expected_fingerprint = non_empty(fields[1]);

        let mut subdomains = BTreeSet::new();
        if let Some(csv) = fields.get(2) {
            for label in csv.split(',') {
                if !label.is_empty() {
                    subdomains.insert(label.to_string());
                }
            }
        }

        let nameserver = fields.get(3).and_then(|f| non_empty(f));

        Ok(Self {
            apex,
            subdomains,
            nameserver,
            expected_fingerprint,
        })
    }

    /// A single-domain check with no baseline: nothing to compare against,
    /// so the outcome will classify as Unverified.
    pub fn ad_hoc(domain: &str) -> Result<Self, DomainError> {
        Ok(Self {
            apex: normalize_apex(domain)?,
            subdomains: BTreeSet::new(),
            nameserver: None,
            expected_fingerprint: None,
        })
    }

    /// Union the fixed default label set into this zone's subdomains.
    pub fn add_default_subdomains(&mut self) {
        for label in DEFAULT_SUBDOMAIN_LABELS {
            self.subdomains.insert((*label).to_string());
        }
    }

    /// The fully-qualified names to probe: the apex itself (exactly once,
    /// first) followed by `label.apex` for every label in sorted order.
    pub fn probe_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.subdomains.len() + 1);
        names.push(self.apex.clone());
        for label in &self.subdomains {
            names.push(format!("{}.{}", label, self.apex));
        }
        names
    }

    /// Render this zone as a baseline-file entry carrying `fingerprint`.
    pub fn baseline_line(&self, fingerprint: &str) -> String {
        let labels = self
            .subdomains
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        match &self.nameserver {
            Some(ns) => format!("{}:{}:{}:{}", self.apex, fingerprint, labels, ns),
            None => format!("{}:{}:{}", self.apex, fingerprint, labels),
        }
    }
}

/// Dot-terminate the apex so lookups are absolute, never search-path
/// relative.
fn normalize_apex(name: &str) -> Result<String, DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidZoneName("empty zone name".to_string()));
    }
    if name.ends_with('.') {
        Ok(name.to_string())
    } else {
        Ok(format!("{name}."))
    }
}

fn non_empty(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}
