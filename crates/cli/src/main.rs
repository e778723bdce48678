//! # zonewatch
//!
//! Monitoring probe that fingerprints DNS zones and reports drift against a
//! recorded baseline. The report goes to stdout, diagnostics to stderr, and
//! the exit code follows the conventional OK/WARNING/CRITICAL/UNKNOWN table.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use zonewatch_application::{ReportBuilder, SnapshotBuilder, ZoneCheckRunner};
use zonewatch_domain::{CliOverrides, Config, Severity, ZoneSpec};
use zonewatch_infrastructure::{BaselineFileStore, HickorySourceFactory};

mod bootstrap;

#[derive(Parser)]
#[command(name = "zonewatch")]
#[command(version)]
#[command(about = "Detects DNS zone drift by fingerprinting zone records")]
struct Cli {
    /// Baseline file with one zone entry per line
    #[arg(short = 'f', long, default_value = "zonewatch.hosts")]
    hostfile: String,

    /// Check a single domain instead of the baseline file
    #[arg(short, long, conflicts_with = "update")]
    domain: Option<String>,

    /// Nameserver to query instead of the system resolver
    #[arg(short, long)]
    nameserver: Option<String>,

    /// Also probe the well-known default subdomains
    #[arg(long)]
    defaults: bool,

    /// Rewrite the baseline file with freshly computed fingerprints
    #[arg(short, long)]
    update: bool,

    /// Number of zones checked concurrently
    #[arg(short, long)]
    workers: Option<usize>,

    /// Omit the per-zone record listing from the report
    #[arg(short, long)]
    quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        workers: cli.workers,
        nameserver: cli.nameserver.clone(),
        add_default_subdomains: cli.defaults,
        log_level: cli.verbose.then(|| "debug".to_string()),
    };

    let severity = match bootstrap::load_config(cli.config.as_deref(), overrides) {
        Ok(config) => {
            bootstrap::init_logging(&config);
            match run(&cli, &config).await {
                Ok(severity) => severity,
                Err(err) => {
                    error!(%err, "check failed");
                    println!("UNKNOWN: {err}");
                    Severity::Unknown
                }
            }
        }
        Err(err) => {
            println!("UNKNOWN: {err}");
            Severity::Unknown
        }
    };

    std::process::exit(severity.exit_code());
}

async fn run(cli: &Cli, config: &Config) -> anyhow::Result<Severity> {
    let (mut specs, store) = load_zones(cli)?;
    if config.probe.add_default_subdomains {
        for spec in &mut specs {
            spec.add_default_subdomains();
        }
    }

    let factory = HickorySourceFactory::new(
        config.probe.nameserver.as_deref(),
        Duration::from_millis(config.probe.lookup_timeout_ms),
    )?;
    let builder = Arc::new(SnapshotBuilder::new(Arc::new(factory)));
    let runner = ZoneCheckRunner::new(builder, config.probe.workers);

    let outcomes = runner.run(specs.clone()).await;

    if cli.update {
        if let Some(store) = &store {
            let fingerprints: HashMap<&str, &str> = outcomes
                .iter()
                .map(|o| (o.zone.as_str(), o.fingerprint.as_str()))
                .collect();
            let mut lines: Vec<String> = specs
                .iter()
                .filter_map(|spec| {
                    fingerprints
                        .get(spec.apex.as_str())
                        .map(|fp| spec.baseline_line(fp))
                })
                .collect();
            lines.sort();
            store.save(&lines)?;
        }
    }

    let report = ReportBuilder::new(!cli.quiet).build(&outcomes);
    print!("{}", report.body);

    // An ad-hoc check has no baseline to verify against, so its result is
    // informational only.
    if cli.domain.is_some() {
        return Ok(Severity::Unknown);
    }
    Ok(report.severity)
}

fn load_zones(cli: &Cli) -> anyhow::Result<(Vec<ZoneSpec>, Option<BaselineFileStore>)> {
    match &cli.domain {
        Some(domain) => {
            info!(%domain, "ad-hoc check");
            Ok((vec![ZoneSpec::ad_hoc(domain)?], None))
        }
        None => {
            let store = BaselineFileStore::new(&cli.hostfile);
            let specs = store.load()?;
            Ok((specs, Some(store)))
        }
    }
}
