//! Swarm layer: workers, the queen, and the round loop that binds them.

pub mod queen;
pub mod report;
pub mod rounds;
pub mod stagnation_test;
pub mod strategy;
pub mod worker;

use serde::Serialize;
use strategy::Strategy;

pub use queen::{QueenAgent, QueenDecision};
pub use report::{ConsoleReporter, Reporter, RoundReport, WorkerSnapshot};
pub use rounds::{RoundOrchestrator, SimulationSummary};
pub use strategy::PrimitiveStrategy;
pub use worker::{spawn_swarm, WorkerAgent};

/// One worker's outcome for one round: id, the strategy it evaluated
/// under, and the measured accuracy. Immutable once produced.
#[derive(Clone, Debug, Serialize)]
pub struct RoundResult {
    pub worker_id: u32,
    pub strategy: Strategy,
    pub accuracy: f64,
}
