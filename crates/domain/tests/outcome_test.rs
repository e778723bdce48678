use zonewatch_domain::{Classification, Severity, ZoneOutcome, ZoneSnapshot};

fn snapshot(fingerprint: &str) -> ZoneSnapshot {
    ZoneSnapshot {
        zone: "example.com.".to_string(),
        record_lines: vec!["IP: 192.0.2.1".to_string()],
        fingerprint: fingerprint.to_string(),
    }
}

#[test]
fn test_matching_fingerprint_classifies_match() {
    let outcome = ZoneOutcome::from_snapshot(snapshot("abc"), Some("abc".to_string()));
    assert_eq!(outcome.classification, Classification::Match);
    assert_eq!(outcome.severity(), Severity::Ok);
}

#[test]
fn test_differing_fingerprint_classifies_mismatch() {
    let outcome = ZoneOutcome::from_snapshot(snapshot("abc"), Some("def".to_string()));
    assert_eq!(outcome.classification, Classification::Mismatch);
    assert_eq!(outcome.severity(), Severity::Warning);
}

#[test]
fn test_missing_baseline_classifies_unverified() {
    let outcome = ZoneOutcome::from_snapshot(snapshot("abc"), None);
    assert_eq!(outcome.classification, Classification::Unverified);
    assert_eq!(outcome.severity(), Severity::Unknown);
}

#[test]
fn test_outcome_carries_snapshot_fields() {
    let outcome = ZoneOutcome::from_snapshot(snapshot("abc"), Some("abc".to_string()));
    assert_eq!(outcome.zone, "example.com.");
    assert_eq!(outcome.fingerprint, "abc");
    assert_eq!(outcome.record_lines, vec!["IP: 192.0.2.1".to_string()]);
}

#[test]
fn test_severity_exit_codes() {
    assert_eq!(Severity::Ok.exit_code(), 0);
    assert_eq!(Severity::Warning.exit_code(), 1);
    assert_eq!(Severity::Critical.exit_code(), 2);
    assert_eq!(Severity::Unknown.exit_code(), 3);
}

#[test]
fn test_severity_display() {
    assert_eq!(Severity::Ok.to_string(), "OK");
    assert_eq!(Severity::Warning.to_string(), "WARNING");
    assert_eq!(Severity::Critical.to_string(), "CRITICAL");
    assert_eq!(Severity::Unknown.to_string(), "UNKNOWN");
}

#[test]
fn test_severity_ordering_matches_escalation() {
    assert!(Severity::Ok < Severity::Warning);
    assert!(Severity::Warning < Severity::Critical);
    assert!(Severity::Critical < Severity::Unknown);
}
