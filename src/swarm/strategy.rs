//! Classification strategies and their evaluator.
//!
//! A strategy is a value: either one of four primitives or a fused
//! pair of primitives combined by agreement (XNOR). Workers swap
//! strategies wholesale; nothing here is partially mutated.

use crate::core::error::SimError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four primitive decision rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveStrategy {
    /// Unbiased coin flip, independent per call.
    Random,
    /// Fires when the sample's bit sum is even.
    Pattern,
    /// Fires when the bit sum exceeds half the sample length.
    Majority,
    /// Fires when the bit sum is a multiple of 3 AND exceeds 5.
    /// Deliberately restrictive: both conditions are required, which
    /// means it rarely fires on short samples.
    Hybrid,
}

impl PrimitiveStrategy {
    pub const ALL: [PrimitiveStrategy; 4] = [
        PrimitiveStrategy::Random,
        PrimitiveStrategy::Pattern,
        PrimitiveStrategy::Majority,
        PrimitiveStrategy::Hybrid,
    ];

    /// Draws one primitive uniformly.
    pub fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    fn tag(&self) -> &'static str {
        match self {
            PrimitiveStrategy::Random => "random",
            PrimitiveStrategy::Pattern => "pattern",
            PrimitiveStrategy::Majority => "majority",
            PrimitiveStrategy::Hybrid => "hybrid",
        }
    }

    fn evaluate<R: Rng>(&self, sample: &[u8], rng: &mut R) -> u8 {
        let sum: u32 = sample.iter().map(|&b| b as u32).sum();
        let fired = match self {
            PrimitiveStrategy::Random => return rng.gen_range(0..=1),
            PrimitiveStrategy::Pattern => sum % 2 == 0,
            PrimitiveStrategy::Majority => f64::from(sum) > sample.len() as f64 / 2.0,
            PrimitiveStrategy::Hybrid => sum % 3 == 0 && sum > 5,
        };
        u8::from(fired)
    }

    /// Sub-evaluation inside a fused pair. `Hybrid` is not a valid
    /// fusion component and degrades to a neutral 0 contribution; this
    /// mirrors the historical behavior and is preserved deliberately
    /// rather than "fixed".
    fn evaluate_as_component<R: Rng>(&self, sample: &[u8], rng: &mut R) -> u8 {
        match self {
            PrimitiveStrategy::Hybrid => 0,
            other => other.evaluate(sample, rng),
        }
    }
}

/// A worker's decision rule: a primitive, or two primitives fused by
/// agreement. Fused `A-B` predicts 1 exactly when A and B concur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Primitive(PrimitiveStrategy),
    Fused(PrimitiveStrategy, PrimitiveStrategy),
}

impl Strategy {
    /// Uniformly random primitive strategy (a worker's "full reset").
    pub fn random_primitive<R: Rng>(rng: &mut R) -> Self {
        Strategy::Primitive(PrimitiveStrategy::sample_uniform(rng))
    }

    /// Fresh fused strategy from two uniform draws with replacement,
    /// so same-tag pairs like `pattern-pattern` are possible.
    pub fn fuse<R: Rng>(rng: &mut R) -> Self {
        Strategy::Fused(
            PrimitiveStrategy::sample_uniform(rng),
            PrimitiveStrategy::sample_uniform(rng),
        )
    }

    /// Pure prediction for one sample. Output is always 0 or 1; the
    /// only nondeterminism is the `Random` primitive's draw.
    pub fn evaluate<R: Rng>(&self, sample: &[u8], rng: &mut R) -> u8 {
        match self {
            Strategy::Primitive(p) => p.evaluate(sample, rng),
            Strategy::Fused(a, b) => {
                // XNOR: 1 when the two component predictions agree.
                let combined =
                    a.evaluate_as_component(sample, rng) + b.evaluate_as_component(sample, rng);
                u8::from(combined % 2 == 0)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Primitive(p) => f.write_str(p.tag()),
            Strategy::Fused(a, b) => write!(f, "{}-{}", a.tag(), b.tag()),
        }
    }
}

impl FromStr for PrimitiveStrategy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveStrategy::ALL
            .into_iter()
            .find(|p| p.tag() == s)
            .ok_or_else(|| SimError::UnknownStrategy(s.to_string()))
    }
}

impl FromStr for Strategy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((a, b)) => Ok(Strategy::Fused(a.parse()?, b.parse()?)),
            None => Ok(Strategy::Primitive(s.parse()?)),
        }
    }
}
