/// The canonicalized DNS state of one zone at probe time.
///
/// `record_lines` is sorted lexicographically before the fingerprint is
/// computed, so the snapshot is independent of lookup-completion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSnapshot {
    /// Dot-terminated apex of the probed zone.
    pub zone: String,

    /// All record lines discovered across every probe name, sorted.
    pub record_lines: Vec<String>,

    /// Lowercase hex SHA-1 over the sorted lines' raw bytes.
    pub fingerprint: String,
}
