use crate::core::error::SimError;
use serde::{Deserialize, Serialize};

/// Main hyperparameters for a simulation run.
///
/// All fields have defaults, so a partial JSON config file (or none at
/// all) works. `validate` must pass before the round loop starts.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed worker population size for the whole run.
    pub num_workers: usize,
    /// Number of samples in the synthetic dataset.
    pub num_samples: usize,
    /// Bits per sample.
    pub sample_length: usize,
    /// Number of learning rounds to drive.
    pub num_rounds: usize,
    /// Stagnation streak at which the queen forces diversification.
    pub stagnation_threshold: u32,
    /// Chance that a diversified worker gets a full primitive reset
    /// instead of a fused strategy.
    pub full_mutation_probability: f64,
    /// Scale applied to the Fibonacci adaptation increments.
    pub adaptation_scale_constant: f64,
}

impl SimConfig {
    /// Fail-fast configuration check, run before any rounds execute.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_workers == 0 {
            return Err(SimError::InvalidConfig {
                field: "num_workers",
                reason: "must be at least 1",
            });
        }
        if self.num_samples == 0 {
            return Err(SimError::InvalidConfig {
                field: "num_samples",
                reason: "must be at least 1",
            });
        }
        if self.sample_length == 0 {
            return Err(SimError::InvalidConfig {
                field: "sample_length",
                reason: "must be at least 1",
            });
        }
        if self.num_rounds == 0 {
            return Err(SimError::InvalidConfig {
                field: "num_rounds",
                reason: "must be at least 1",
            });
        }
        if !(0.0..=1.0).contains(&self.full_mutation_probability) {
            return Err(SimError::InvalidConfig {
                field: "full_mutation_probability",
                reason: "must lie in [0, 1]",
            });
        }
        if self.adaptation_scale_constant <= 0.0 {
            return Err(SimError::InvalidConfig {
                field: "adaptation_scale_constant",
                reason: "must be positive",
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            num_workers: 10,
            num_samples: 100,
            sample_length: 10,
            num_rounds: 5,
            stagnation_threshold: 2,
            full_mutation_probability: 0.3,
            adaptation_scale_constant: 0.001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_counts_are_rejected() {
        for field in ["num_workers", "num_samples", "sample_length", "num_rounds"] {
            let mut cfg = SimConfig::default();
            match field {
                "num_workers" => cfg.num_workers = 0,
                "num_samples" => cfg.num_samples = 0,
                "sample_length" => cfg.sample_length = 0,
                _ => cfg.num_rounds = 0,
            }
            let err = cfg.validate().unwrap_err();
            assert!(
                matches!(err, SimError::InvalidConfig { field: f, .. } if f == field),
                "expected rejection on {field}"
            );
        }
    }

    #[test]
    fn probability_outside_unit_interval_is_rejected() {
        let mut cfg = SimConfig::default();
        cfg.full_mutation_probability = 1.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: SimConfig = serde_json::from_str(r#"{"num_workers": 4}"#).unwrap();
        assert_eq!(cfg.num_workers, 4);
        assert_eq!(cfg.num_rounds, 5);
        assert_eq!(cfg.stagnation_threshold, 2);
    }
}
