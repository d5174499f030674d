//! Dataset provider.
//!
//! The core treats the dataset as opaque input: a fixed collection of
//! binary feature vectors plus an aligned label vector, validated once
//! at construction and read-only afterwards. The synthetic generator
//! here is the stand-in provider for driver runs and tests; it makes
//! no claim of statistical rigor.

use crate::core::error::SimError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A fixed-length vector of binary features.
pub type Sample = Vec<u8>;

/// Immutable collection of samples with index-aligned ground-truth labels.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dataset {
    samples: Vec<Sample>,
    labels: Vec<u8>,
}

impl Dataset {
    /// Builds a dataset, rejecting empty or misaligned input up front.
    pub fn new(samples: Vec<Sample>, labels: Vec<u8>) -> Result<Self, SimError> {
        if samples.is_empty() {
            return Err(SimError::EmptyDataset);
        }
        if samples.len() != labels.len() {
            return Err(SimError::LabelMismatch {
                samples: samples.len(),
                labels: labels.len(),
            });
        }
        Ok(Dataset { samples, labels })
    }

    /// Generates `num_samples` unbiased binary samples of `sample_length`
    /// bits each, with unbiased binary labels.
    pub fn synthetic<R: Rng>(
        num_samples: usize,
        sample_length: usize,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        let samples = (0..num_samples)
            .map(|_| (0..sample_length).map(|_| rng.gen_range(0..=1u8)).collect())
            .collect();
        let labels = (0..num_samples).map(|_| rng.gen_range(0..=1u8)).collect();
        Self::new(samples, labels)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }
}
