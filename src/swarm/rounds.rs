//! Round orchestration: the closed learning loop over the swarm.

use crate::core::config::SimConfig;
use crate::core::error::SimError;
use crate::data::Dataset;
use crate::swarm::queen::QueenAgent;
use crate::swarm::report::{Reporter, RoundReport, WorkerSnapshot};
use crate::swarm::worker::{spawn_swarm, WorkerAgent};
use crate::swarm::RoundResult;
use rand::Rng;
use serde::Serialize;
use tracing::info;

/// Aggregate outcome of a completed run.
#[derive(Clone, Debug, Serialize)]
pub struct SimulationSummary {
    pub rounds_run: usize,
    pub final_average_accuracy: f64,
    pub diversification_events: u64,
}

/// Drives the fixed number of rounds and sequences worker and queen
/// interactions. Owns the swarm, the queen, the shared dataset and the
/// regression-based stagnation streak; the queen gets the swarm handed
/// to it explicitly each round.
pub struct RoundOrchestrator {
    config: SimConfig,
    dataset: Dataset,
    swarm: Vec<WorkerAgent>,
    queen: QueenAgent,
    stagnation_streak: u32,
    last_average: f64,
}

impl RoundOrchestrator {
    /// Validates the configuration and spawns a fresh random swarm.
    pub fn new<R: Rng>(
        config: SimConfig,
        dataset: Dataset,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        config.validate()?;
        let swarm = spawn_swarm(&config, rng);
        Self::with_swarm(config, dataset, swarm)
    }

    /// Builds an orchestrator around an existing population.
    pub fn with_swarm(
        config: SimConfig,
        dataset: Dataset,
        swarm: Vec<WorkerAgent>,
    ) -> Result<Self, SimError> {
        config.validate()?;
        if swarm.is_empty() {
            return Err(SimError::NoWorkers);
        }
        let queen = QueenAgent::new(&config);
        Ok(RoundOrchestrator {
            config,
            dataset,
            swarm,
            queen,
            stagnation_streak: 0,
            last_average: 0.0,
        })
    }

    pub fn swarm(&self) -> &[WorkerAgent] {
        &self.swarm
    }

    /// Runs every configured round, emitting one report per round and a
    /// final roster through the reporter.
    pub fn run<R: Rng>(
        &mut self,
        reporter: &mut dyn Reporter,
        rng: &mut R,
    ) -> Result<SimulationSummary, SimError> {
        info!(
            "🐝 [Orchestrator] starting run: {} workers, {} samples, {} rounds",
            self.swarm.len(),
            self.dataset.len(),
            self.config.num_rounds
        );

        for round in 0..self.config.num_rounds {
            let report = self.run_round(round, rng)?;
            reporter.round_report(&report);
        }

        let roster: Vec<WorkerSnapshot> = self.swarm.iter().map(WorkerSnapshot::from).collect();
        reporter.final_roster(&roster);

        Ok(SimulationSummary {
            rounds_run: self.config.num_rounds,
            final_average_accuracy: self.last_average,
            diversification_events: self.queen.strategy_changes(),
        })
    }

    fn run_round<R: Rng>(&mut self, round: usize, rng: &mut R) -> Result<RoundReport, SimError> {
        let mut results = Vec::with_capacity(self.swarm.len());
        for worker in &mut self.swarm {
            let (_, accuracy) = worker.evaluate(&self.dataset, rng)?;
            // Strategy captured at evaluation time, before the queen
            // may replace it.
            results.push(RoundResult {
                worker_id: worker.id,
                strategy: worker.strategy,
                accuracy,
            });
        }

        let average = results.iter().map(|r| r.accuracy).sum::<f64>() / results.len() as f64;
        // A tie counts as stagnation here too, hence <= rather than <.
        if average <= self.last_average {
            self.stagnation_streak += 1;
        } else {
            self.stagnation_streak = 0;
        }
        self.last_average = average;

        let decision = self
            .queen
            .decide(&results, &mut self.swarm, self.stagnation_streak, rng)?;

        info!(
            "🐝 [Orchestrator] round {} avg {:.4}, streak {}",
            round + 1,
            average,
            self.stagnation_streak
        );

        Ok(RoundReport {
            round,
            results,
            average_accuracy: average,
            stagnation_streak: self.stagnation_streak,
            decision,
        })
    }
}
