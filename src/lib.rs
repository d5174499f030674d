//! Hiveclass Core — queen-coordinated classifier swarm simulation
//!
//! A small population of classifier workers is driven through discrete
//! learning rounds by a single supervisory queen. Workers score a
//! shared binary dataset under replaceable strategies; the queen
//! watches the rolling average accuracy, detects stagnation, and
//! forces strategy diversification (mutation or fusion) plus an
//! accelerating adaptation boost when the swarm stops improving.

pub mod core;
pub mod data;
pub mod swarm;

// Re-export key types
pub use crate::core::config::SimConfig;
pub use crate::core::error::SimError;
pub use crate::data::{Dataset, Sample};
pub use crate::swarm::queen::{QueenAgent, QueenDecision};
pub use crate::swarm::report::{roster_json, ConsoleReporter, Reporter, RoundReport, WorkerSnapshot};
pub use crate::swarm::rounds::{RoundOrchestrator, SimulationSummary};
pub use crate::swarm::strategy::{PrimitiveStrategy, Strategy};
pub use crate::swarm::worker::{spawn_swarm, WorkerAgent};
pub use crate::swarm::RoundResult;

/// Initialize tracing for the library.
pub fn setup_logging(level: Option<String>) {
    let filter = level.unwrap_or_else(|| "info".to_string());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
