//! Errors raised while running value iteration.

use std::error::Error;
use std::fmt;

use gridmdp_arena::ArenaError;

use crate::config::ConfigError;

/// Errors from [`ValueIteration::run()`](crate::ValueIteration::run) and
/// [`ValueIteration::sweep()`](crate::ValueIteration::sweep).
#[derive(Debug, PartialEq)]
pub enum SolveError {
    /// The configured sweep limit was hit before convergence.
    SweepLimitReached {
        /// Sweeps executed in this run.
        sweeps: u64,
        /// Largest change in the final sweep.
        delta: f64,
        /// Threshold the change had to drop below.
        threshold: f64,
    },
    /// A backup produced NaN or infinity. The sweep was abandoned and the
    /// previous utilities remain published.
    NonFiniteUtility {
        /// Row of the first offending cell.
        row: usize,
        /// Column of the first offending cell.
        col: usize,
        /// 1-based sweep number (engine lifetime) that failed.
        sweep: u64,
    },
    /// Solver construction failed.
    Config(ConfigError),
    /// Buffer bookkeeping failed.
    Arena(ArenaError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SweepLimitReached {
                sweeps,
                delta,
                threshold,
            } => write!(
                f,
                "no convergence after {sweeps} sweeps (delta {delta:e}, threshold {threshold:e})"
            ),
            Self::NonFiniteUtility { row, col, sweep } => {
                write!(f, "non-finite utility at ({row}, {col}) in sweep {sweep}")
            }
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SolveError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ArenaError> for SolveError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}
