//! Solver configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use gridmdp_arena::ArenaError;
use gridmdp_space::GridWorld;

// ── SolverConfig ──────────────────────────────────────────────────

/// Configuration for [`ValueIteration`](crate::ValueIteration).
///
/// [`validate()`](SolverConfig::validate) checks the settings against the
/// grid they will be used with.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Maximum error allowed in the utility of any state. Default: 1e-5.
    pub epsilon: f64,
    /// Stop with [`SolveError::SweepLimitReached`](crate::SolveError) after
    /// this many sweeps. Default: `None` (run until convergence).
    pub max_sweeps: Option<u64>,
    /// Worker threads per sweep. `None` = single-threaded,
    /// `Some(0)` = auto-detect from available parallelism.
    pub workers: Option<usize>,
    /// Reject drift vectors that do not sum to one. Default: `false`
    /// (accepted with a warning).
    pub require_normalized_drift: bool,
}

impl SolverConfig {
    /// Default convergence tolerance.
    pub const DEFAULT_EPSILON: f64 = 1e-5;

    /// Upper bound on explicit worker counts.
    pub const MAX_WORKERS: usize = 64;

    /// Default settings with the given tolerance.
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            epsilon,
            ..Self::default()
        }
    }

    /// Check structural invariants against `grid`.
    pub fn validate(&self, grid: &GridWorld) -> Result<(), ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon {
                value: self.epsilon,
            });
        }
        if self.max_sweeps == Some(0) {
            return Err(ConfigError::ZeroSweepLimit);
        }
        if self.require_normalized_drift && !grid.drift().is_normalized() {
            return Err(ConfigError::UnnormalizedDrift {
                total: grid.drift().total(),
            });
        }
        Ok(())
    }

    /// Resolve the worker count for a grid with `nrows` rows.
    ///
    /// Explicit values are clamped to `[1, MAX_WORKERS]`; auto-detect
    /// falls back to 4 if parallelism cannot be queried. The result never
    /// exceeds `nrows` since sweeps are split by row bands.
    pub fn resolved_worker_count(&self, nrows: usize) -> usize {
        let requested = match self.workers {
            None => 1,
            Some(0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            Some(n) => n.clamp(1, Self::MAX_WORKERS),
        };
        requested.min(nrows.max(1))
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
            max_sweeps: None,
            workers: None,
            require_normalized_drift: false,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while constructing a solver.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Epsilon is NaN, infinite, zero, or negative.
    InvalidEpsilon {
        /// The invalid value.
        value: f64,
    },
    /// `max_sweeps` is `Some(0)`.
    ZeroSweepLimit,
    /// Drift probabilities do not sum to one and normalisation is required.
    UnnormalizedDrift {
        /// Actual sum of the drift vector.
        total: f64,
    },
    /// The utility arena could not be created.
    Arena(ArenaError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEpsilon { value } => {
                write!(f, "epsilon must be finite and positive, got {value}")
            }
            Self::ZeroSweepLimit => write!(f, "max_sweeps must be at least 1"),
            Self::UnnormalizedDrift { total } => {
                write!(f, "drift probabilities sum to {total}, expected 1")
            }
            Self::Arena(e) => write!(f, "arena: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmdp_core::{Cell, DriftModel};
    use gridmdp_space::MdpParams;

    fn grid_with_drift(drift: DriftModel) -> GridWorld {
        GridWorld::new(
            4,
            1,
            vec![Cell::open(); 4],
            MdpParams {
                drift,
                ..MdpParams::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        let g = grid_with_drift(DriftModel::default());
        assert_eq!(SolverConfig::default().validate(&g), Ok(()));
        assert_eq!(SolverConfig::default().epsilon, 1e-5);
    }

    #[test]
    fn rejects_bad_epsilon() {
        let g = grid_with_drift(DriftModel::default());
        for bad in [0.0, -1.0, f64::INFINITY] {
            assert_eq!(
                SolverConfig::with_epsilon(bad).validate(&g),
                Err(ConfigError::InvalidEpsilon { value: bad })
            );
        }
        assert!(matches!(
            SolverConfig::with_epsilon(f64::NAN).validate(&g),
            Err(ConfigError::InvalidEpsilon { .. })
        ));
    }

    #[test]
    fn rejects_zero_sweep_limit() {
        let g = grid_with_drift(DriftModel::default());
        let cfg = SolverConfig {
            max_sweeps: Some(0),
            ..SolverConfig::default()
        };
        assert_eq!(cfg.validate(&g), Err(ConfigError::ZeroSweepLimit));
    }

    #[test]
    fn drift_normalisation_is_opt_in() {
        let g = grid_with_drift(DriftModel::new([0.5, 0.0, 0.0, 0.0]));
        assert_eq!(SolverConfig::default().validate(&g), Ok(()));
        let strict = SolverConfig {
            require_normalized_drift: true,
            ..SolverConfig::default()
        };
        assert_eq!(
            strict.validate(&g),
            Err(ConfigError::UnnormalizedDrift { total: 0.5 })
        );
    }

    #[test]
    fn worker_count_resolution() {
        let cfg = |workers| SolverConfig {
            workers,
            ..SolverConfig::default()
        };
        assert_eq!(cfg(None).resolved_worker_count(100), 1);
        assert_eq!(cfg(Some(8)).resolved_worker_count(100), 8);
        assert_eq!(cfg(Some(1000)).resolved_worker_count(100), 64);
        assert_eq!(cfg(Some(8)).resolved_worker_count(3), 3);
        let auto = cfg(Some(0)).resolved_worker_count(1000);
        assert!((1..=1000).contains(&auto));
    }
}
