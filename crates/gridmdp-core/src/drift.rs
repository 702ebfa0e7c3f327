//! Stochastic drift transition model.

use crate::direction::Direction;
use crate::error::GridError;

/// Probability mass over the four outcomes of an intended move.
///
/// Weights are heading-relative: index 0 is the intended direction,
/// 1 is a quarter turn right of it, 2 is the reverse, 3 is a quarter turn
/// left. The same vector applies to every action.
///
/// The weights are not required to sum to one; see
/// [`is_normalized`](DriftModel::is_normalized).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftModel {
    weights: [f64; 4],
}

impl DriftModel {
    /// Tolerance used by [`is_normalized`](DriftModel::is_normalized).
    pub const SUM_TOLERANCE: f64 = 1e-9;

    /// Create a drift model from `[forward, right, back, left]` weights.
    pub const fn new(weights: [f64; 4]) -> Self {
        Self { weights }
    }

    /// Moves always succeed.
    pub const fn deterministic() -> Self {
        Self::new([1.0, 0.0, 0.0, 0.0])
    }

    /// Build from a slice, which must hold exactly four weights.
    pub fn from_slice(weights: &[f64]) -> Result<Self, GridError> {
        let weights: [f64; 4] = weights
            .try_into()
            .map_err(|_| GridError::DriftArity {
                found: weights.len(),
            })?;
        Ok(Self::new(weights))
    }

    /// The raw `[forward, right, back, left]` weights.
    pub fn weights(&self) -> [f64; 4] {
        self.weights
    }

    /// Sum of all four weights.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Returns `true` if the weights sum to one within
    /// [`SUM_TOLERANCE`](DriftModel::SUM_TOLERANCE).
    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() <= Self::SUM_TOLERANCE
    }

    /// Direction an agent intending `heading` ends up moving for outcome `k`.
    pub fn outcome(heading: Direction, k: usize) -> Direction {
        heading.rotate_cw(k)
    }

    /// Expected value of intending `heading`, given the value reached by
    /// moving in each absolute direction (indexed by [`Direction::index`]).
    pub fn expected_value(&self, heading: Direction, by_direction: &[f64; 4]) -> f64 {
        self.weights
            .iter()
            .enumerate()
            .map(|(k, p)| p * by_direction[Self::outcome(heading, k).index()])
            .sum()
    }
}

impl Default for DriftModel {
    /// The common 0.8 / 0.1 / 0 / 0.1 slip model.
    fn default() -> Self {
        Self::new([0.8, 0.1, 0.0, 0.1])
    }
}
