//! Simulation driver: config load, logging setup, one full run.

use anyhow::{Context, Result};
use hiveclass_core::{setup_logging, ConsoleReporter, Dataset, RoundOrchestrator, SimConfig};
use rand::thread_rng;
use tracing::info;

fn main() -> Result<()> {
    setup_logging(std::env::var("RUST_LOG").ok());

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing config file {path}"))?
        }
        None => SimConfig::default(),
    };

    let mut rng = thread_rng();
    let dataset = Dataset::synthetic(config.num_samples, config.sample_length, &mut rng)?;
    let mut orchestrator = RoundOrchestrator::new(config, dataset, &mut rng)?;
    let mut reporter = ConsoleReporter;
    let summary = orchestrator.run(&mut reporter, &mut rng)?;

    info!(
        "🏁 [Sim] {} rounds complete, final avg accuracy {:.2}, {} diversification events",
        summary.rounds_run, summary.final_average_accuracy, summary.diversification_events
    );
    Ok(())
}
