//! Queen agent: stagnation detection and forced diversification.
//!
//! The queen is a two-mode controller re-evaluated every round. It
//! keeps a short rolling memory of average accuracies and, when the
//! swarm stops improving, sweeps the whole population with new
//! strategies and an adaptation boost.

use crate::core::config::SimConfig;
use crate::core::error::SimError;
use crate::swarm::strategy::Strategy;
use crate::swarm::worker::WorkerAgent;
use crate::swarm::RoundResult;
use rand::Rng;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, info};

/// Depth of the queen's rolling accuracy memory.
pub const MEMORY_DEPTH: usize = 3;

/// Outcome of one queen decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum QueenDecision {
    /// No significant stagnation; the swarm keeps its strategies.
    Stable,
    /// Stagnation confirmed; every worker was re-strategized.
    Diversified { workers_evolved: usize },
}

impl fmt::Display for QueenDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueenDecision::Stable => {
                f.write_str("Queen maintains current strategy. No significant stagnation detected.")
            }
            QueenDecision::Diversified { workers_evolved } => write!(
                f,
                "Queen detected stagnation and forced {workers_evolved} workers to evolve."
            ),
        }
    }
}

/// Supervisory agent over the worker population.
///
/// The queen does not own the swarm; the orchestrator passes it in
/// explicitly on every decision.
#[derive(Debug)]
pub struct QueenAgent {
    history: VecDeque<f64>,
    strategy_changes: u64,
    stagnation_threshold: u32,
    full_mutation_probability: f64,
}

impl QueenAgent {
    pub fn new(config: &SimConfig) -> Self {
        QueenAgent {
            history: VecDeque::with_capacity(MEMORY_DEPTH),
            strategy_changes: 0,
            stagnation_threshold: config.stagnation_threshold,
            full_mutation_probability: config.full_mutation_probability,
        }
    }

    /// Number of diversification events triggered so far.
    pub fn strategy_changes(&self) -> u64 {
        self.strategy_changes
    }

    /// Rolling memory of recent round averages, never longer than
    /// [`MEMORY_DEPTH`].
    pub fn history(&self) -> &VecDeque<f64> {
        &self.history
    }

    /// One decision cycle over the latest round results.
    ///
    /// The externally supplied streak counts regression across rounds;
    /// on top of that, two exactly equal consecutive averages in memory
    /// force the effective stagnation level to the threshold, so flat
    /// accuracy triggers diversification even with a zero streak.
    pub fn decide<R: Rng>(
        &mut self,
        results: &[RoundResult],
        swarm: &mut [WorkerAgent],
        stagnation_streak: u32,
        rng: &mut R,
    ) -> Result<QueenDecision, SimError> {
        if results.is_empty() {
            return Err(SimError::EmptyRoundResults);
        }

        let average = results.iter().map(|r| r.accuracy).sum::<f64>() / results.len() as f64;
        self.history.push_back(average);
        if self.history.len() > MEMORY_DEPTH {
            self.history.pop_front();
        }

        let mut effective_stagnation = stagnation_streak;
        if self.history.len() >= 2 {
            let latest = self.history[self.history.len() - 1];
            let previous = self.history[self.history.len() - 2];
            // Exact repeat, not approximate: flat accuracy detection.
            if latest == previous {
                effective_stagnation = effective_stagnation.max(self.stagnation_threshold);
                debug!(
                    "👑 [Queen] flat accuracy {:.4} across consecutive rounds",
                    latest
                );
            }
        }

        if effective_stagnation >= self.stagnation_threshold {
            self.strategy_changes += 1;
            for worker in swarm.iter_mut() {
                let next = if rng.gen::<f64>() < self.full_mutation_probability {
                    Strategy::random_primitive(rng)
                } else {
                    Strategy::fuse(rng)
                };
                worker.apply_strategy_update(next);
                worker.advance_adaptation_scalar();
            }
            info!(
                "👑 [Queen] stagnation level {} >= {}, diversified {} workers (event #{})",
                effective_stagnation,
                self.stagnation_threshold,
                swarm.len(),
                self.strategy_changes
            );
            return Ok(QueenDecision::Diversified {
                workers_evolved: swarm.len(),
            });
        }

        Ok(QueenDecision::Stable)
    }
}
