//! Worker agents: independent classifiers with an adaptive scalar.

use crate::core::config::SimConfig;
use crate::core::error::SimError;
use crate::data::Dataset;
use crate::swarm::strategy::Strategy;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An independent classifier agent.
///
/// Workers own their accuracy and fitness; the queen owns strategy
/// replacement and adaptation advances during diversification events.
/// The population is fixed for the whole simulation — workers are never
/// added or removed mid-run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkerAgent {
    pub id: u32,
    pub strategy: Strategy,
    /// Learning-rate-like adaptation scalar, only ever increased.
    pub learning_rate: f64,
    /// Accuracy from the most recent evaluation, in [0, 1].
    pub accuracy: f64,
    /// Sum of per-round accuracies across the whole run.
    pub fitness: f64,
    /// Step counter for the Fibonacci adaptation schedule. Increments
    /// on every advance and never resets.
    fib_step: u32,
    adaptation_scale: f64,
}

impl WorkerAgent {
    pub fn new(id: u32, strategy: Strategy, learning_rate: f64, adaptation_scale: f64) -> Self {
        WorkerAgent {
            id,
            strategy,
            learning_rate,
            accuracy: 0.0,
            fitness: 0.0,
            fib_step: 1,
            adaptation_scale,
        }
    }

    /// Classifies every sample under the current strategy and scores
    /// the predictions against the dataset's labels.
    ///
    /// Updates the worker's accuracy and accumulates fitness. An empty
    /// dataset is a domain error, not a silent zero division.
    pub fn evaluate<R: Rng>(
        &mut self,
        dataset: &Dataset,
        rng: &mut R,
    ) -> Result<(Vec<u8>, f64), SimError> {
        if dataset.is_empty() {
            return Err(SimError::EmptyDataset);
        }
        let predictions: Vec<u8> = dataset
            .samples()
            .iter()
            .map(|sample| self.strategy.evaluate(sample, rng))
            .collect();
        let hits = predictions
            .iter()
            .zip(dataset.labels())
            .filter(|(prediction, label)| prediction == label)
            .count();
        let accuracy = hits as f64 / predictions.len() as f64;
        self.accuracy = accuracy;
        self.fitness += accuracy;
        Ok((predictions, accuracy))
    }

    /// Replaces the current strategy wholesale.
    pub fn apply_strategy_update(&mut self, new_strategy: Strategy) {
        self.strategy = new_strategy;
    }

    /// Fibonacci-schedule adaptation boost.
    ///
    /// On the k-th call the seed sequence [0, 1] is extended by k terms
    /// and the last term, scaled by the adaptation constant, is added to
    /// the learning rate. Increments run 1, 2, 3, 5, 8, ... times the
    /// constant, so repeated forced evolution accelerates adaptation.
    pub fn advance_adaptation_scalar(&mut self) {
        let (mut a, mut b) = (0.0f64, 1.0f64);
        for _ in 0..self.fib_step {
            let next = a + b;
            a = b;
            b = next;
        }
        self.learning_rate += b * self.adaptation_scale;
        self.fib_step += 1;
        debug!(
            "🐜 [Worker {}] adaptation advanced to {:.4} (step {})",
            self.id, self.learning_rate, self.fib_step
        );
    }
}

/// Builds the fixed worker population: ids `0..num_workers`, a random
/// primitive strategy each, learning rate drawn from U(0.01, 0.1) and
/// a placeholder accuracy in U(0.4, 0.6) that the first evaluation
/// overwrites.
pub fn spawn_swarm<R: Rng>(config: &SimConfig, rng: &mut R) -> Vec<WorkerAgent> {
    (0..config.num_workers)
        .map(|i| {
            let mut worker = WorkerAgent::new(
                i as u32,
                Strategy::random_primitive(rng),
                rng.gen_range(0.01..0.1),
                config.adaptation_scale_constant,
            );
            worker.accuracy = rng.gen_range(0.4..0.6);
            worker
        })
        .collect()
}
