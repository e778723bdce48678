use std::fmt::Write;

use zonewatch_domain::{Classification, Severity, ZoneOutcome};

/// The aggregated result of one check cycle: the report text handed to the
/// monitoring supervisor and the overall severity that selects the exit
/// code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub body: String,
    pub severity: Severity,
}

/// Renders one line per outcome — matches included — and escalates the
/// overall severity to WARNING when any zone drifted. Unverified outcomes
/// never affect the overall severity; the caller decides what an
/// unverified ad-hoc check exits with.
pub struct ReportBuilder {
    include_records: bool,
}

impl ReportBuilder {
    pub fn new(include_records: bool) -> Self {
        Self { include_records }
    }

    pub fn build(&self, outcomes: &[ZoneOutcome]) -> CheckReport {
        let mut body = String::new();
        let mut severity = Severity::Ok;

        for outcome in outcomes {
            if outcome.classification == Classification::Mismatch {
                severity = Severity::Warning;
            }
            self.render_line(&mut body, outcome);
        }

        CheckReport { body, severity }
    }

    fn render_line(&self, body: &mut String, outcome: &ZoneOutcome) {
        let code = outcome.severity().exit_code();
        let _ = write!(body, "{} ZONE_{} -", code, outcome.zone);
        if let Some(expected) = &outcome.expected {
            let _ = write!(body, " exp:{expected}");
        }
        let _ = write!(body, " calc:{}", outcome.fingerprint);
        if self.include_records {
            let _ = write!(body, " records:[{}]", outcome.record_lines.join(", "));
        }
        body.push('\n');
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(true)
    }
}
