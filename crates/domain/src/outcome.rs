use crate::severity::Severity;
use crate::snapshot::ZoneSnapshot;

/// How a zone's computed fingerprint relates to its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Baseline present and identical.
    Match,
    /// Baseline present and different: the zone drifted.
    Mismatch,
    /// No baseline to compare against (ad-hoc check or fresh entry).
    Unverified,
}

/// The completed result for one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneOutcome {
    pub zone: String,
    pub fingerprint: String,
    pub expected: Option<String>,
    pub record_lines: Vec<String>,
    pub classification: Classification,
}

impl ZoneOutcome {
    pub fn from_snapshot(snapshot: ZoneSnapshot, expected: Option<String>) -> Self {
        let classification = match &expected {
            None => Classification::Unverified,
            Some(e) if *e == snapshot.fingerprint => Classification::Match,
            Some(_) => Classification::Mismatch,
        };
        Self {
            zone: snapshot.zone,
            fingerprint: snapshot.fingerprint,
            expected,
            record_lines: snapshot.record_lines,
            classification,
        }
    }

    /// Per-zone severity used as the numeric prefix of its report line.
    pub fn severity(&self) -> Severity {
        match self.classification {
            Classification::Match => Severity::Ok,
            Classification::Mismatch => Severity::Warning,
            Classification::Unverified => Severity::Unknown,
        }
    }
}
