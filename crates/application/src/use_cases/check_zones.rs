use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::info;

use zonewatch_domain::{ZoneOutcome, ZoneSpec};

use crate::use_cases::SnapshotBuilder;

/// Runs the snapshot builder across all requested zones with bounded
/// parallelism. The bound lives in the stream itself
/// (`buffer_unordered`), so admission and release are symmetric on every
/// exit path by construction.
pub struct ZoneCheckRunner {
    builder: Arc<SnapshotBuilder>,
    workers: usize,
}

impl ZoneCheckRunner {
    pub fn new(builder: Arc<SnapshotBuilder>, workers: usize) -> Self {
        Self {
            builder,
            // A limit of zero would admit nothing and hang the stream.
            workers: workers.max(1),
        }
    }

    /// Every zone is dispatched exactly once; outcomes arrive in
    /// completion order. The returned vector holds one outcome per input
    /// zone — a zone whose lookups all failed still completes with an
    /// empty-snapshot fingerprint.
    pub async fn run(&self, specs: Vec<ZoneSpec>) -> Vec<ZoneOutcome> {
        let total = specs.len();
        info!(zones = total, workers = self.workers, "starting zone checks");

        let outcomes: Vec<ZoneOutcome> = stream::iter(specs)
            .map(|spec| {
                let builder = Arc::clone(&self.builder);
                async move {
                    let snapshot = builder.build(&spec).await;
                    ZoneOutcome::from_snapshot(snapshot, spec.expected_fingerprint)
                }
            })
            .buffer_unordered(self.workers)
            .collect()
            .await;

        info!(zones = outcomes.len(), "zone checks finished");
        outcomes
    }
}
