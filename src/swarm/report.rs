//! Reporting sink for per-round results and the final roster.

use crate::swarm::queen::QueenDecision;
use crate::swarm::strategy::Strategy;
use crate::swarm::worker::WorkerAgent;
use crate::swarm::RoundResult;
use serde::Serialize;

/// Everything emitted for one completed round.
#[derive(Clone, Debug, Serialize)]
pub struct RoundReport {
    /// Zero-based round index.
    pub round: usize,
    pub results: Vec<RoundResult>,
    pub average_accuracy: f64,
    pub stagnation_streak: u32,
    pub decision: QueenDecision,
}

/// Point-in-time view of a worker for the final roster.
#[derive(Clone, Debug, Serialize)]
pub struct WorkerSnapshot {
    pub id: u32,
    pub strategy: Strategy,
    pub accuracy: f64,
}

impl From<&WorkerAgent> for WorkerSnapshot {
    fn from(worker: &WorkerAgent) -> Self {
        WorkerSnapshot {
            id: worker.id,
            strategy: worker.strategy,
            accuracy: worker.accuracy,
        }
    }
}

/// Consumer of round reports and the final roster. The core never
/// writes to the console itself; it hands everything through this seam.
pub trait Reporter {
    fn round_report(&mut self, report: &RoundReport);
    fn final_roster(&mut self, roster: &[WorkerSnapshot]);
}

/// Console sink: one line per worker per round, the queen's decision,
/// and an aligned roster table at the end.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn round_report(&mut self, report: &RoundReport) {
        println!("\nRound {}:", report.round + 1);
        for r in &report.results {
            println!(
                "Worker {} used {} strategy, accuracy: {:.2}",
                r.worker_id, r.strategy, r.accuracy
            );
        }
        println!("{}\n", report.decision);
    }

    fn final_roster(&mut self, roster: &[WorkerSnapshot]) {
        let sep = "-".repeat(48);
        println!("{}", sep);
        println!(
            "{:<10} | {:<18} | {}",
            "Worker ID", "Final Strategy", "Final Accuracy"
        );
        println!("{}", sep);
        for snapshot in roster {
            println!(
                "{:<10} | {:<18} | {:.2}",
                snapshot.id,
                snapshot.strategy.to_string(),
                snapshot.accuracy
            );
        }
        println!("{}", sep);
    }
}

/// Serializes the final roster as pretty JSON.
pub fn roster_json(roster: &[WorkerSnapshot]) -> String {
    serde_json::to_string_pretty(roster).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
pub mod recording {
    use super::*;

    /// Test sink that keeps everything it is handed.
    #[derive(Default)]
    pub struct RecordingReporter {
        pub rounds: Vec<RoundReport>,
        pub roster: Vec<WorkerSnapshot>,
    }

    impl Reporter for RecordingReporter {
        fn round_report(&mut self, report: &RoundReport) {
            self.rounds.push(report.clone());
        }

        fn final_roster(&mut self, roster: &[WorkerSnapshot]) {
            self.roster = roster.to_vec();
        }
    }
}
