use std::sync::Arc;
use tracing::{debug, instrument, warn};

use zonewatch_domain::{ZoneSnapshot, ZoneSpec};

use crate::fingerprint;
use crate::ports::RecordSourceFactory;
use crate::use_cases::RecordCollector;

/// Builds the canonical snapshot of one zone: expand the probe names,
/// collect record lines for each, sort the whole accumulation and fold it
/// into the fingerprint.
pub struct SnapshotBuilder {
    factory: Arc<dyn RecordSourceFactory>,
}

impl SnapshotBuilder {
    pub fn new(factory: Arc<dyn RecordSourceFactory>) -> Self {
        Self { factory }
    }

    #[instrument(skip(self), fields(zone = %spec.apex))]
    pub async fn build(&self, spec: &ZoneSpec) -> ZoneSnapshot {
        let source = match self.factory.source_for(spec.nameserver.as_deref()) {
            Ok(source) => source,
            Err(err) => {
                // Zone-local failure: the batch goes on and this zone
                // fingerprints as empty, surfacing as a mismatch.
                warn!(zone = %spec.apex, %err, "resolver unavailable for zone");
                return Self::empty_snapshot(spec);
            }
        };
        let collector = RecordCollector::new(source);

        let mut lines = Vec::new();
        for name in spec.probe_names() {
            lines.extend(collector.collect(&name).await);
        }

        // Answer order and probe completion order are not stable; the sort
        // is what makes the fingerprint deterministic.
        lines.sort();
        let fingerprint = fingerprint::digest_lines(&lines);

        debug!(
            zone = %spec.apex,
            records = lines.len(),
            fingerprint = %fingerprint,
            "zone snapshot built"
        );

        ZoneSnapshot {
            zone: spec.apex.clone(),
            record_lines: lines,
            fingerprint,
        }
    }

    fn empty_snapshot(spec: &ZoneSpec) -> ZoneSnapshot {
        let lines: Vec<String> = Vec::new();
        let fingerprint = fingerprint::digest_lines(&lines);
        ZoneSnapshot {
            zone: spec.apex.clone(),
            record_lines: lines,
            fingerprint,
        }
    }
}
