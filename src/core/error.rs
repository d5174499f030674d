use thiserror::Error;

/// Failure taxonomy for the simulation.
///
/// The pipeline is a deterministic batch computation, so there are no
/// retries: any of these aborts the current run. Configuration problems
/// are caught before the round loop starts; the empty-input variants
/// exist so an empty dataset or result set surfaces as an explicit
/// error instead of a silent divide-by-zero.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("swarm has no workers")]
    NoWorkers,

    #[error("dataset contains no samples")]
    EmptyDataset,

    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("dataset has {samples} samples but {labels} labels")]
    LabelMismatch { samples: usize, labels: usize },

    #[error("queen invoked with an empty result set")]
    EmptyRoundResults,

    #[error("unknown strategy tag '{0}'")]
    UnknownStrategy(String),
}
