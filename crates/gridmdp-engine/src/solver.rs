//! The value-iteration solver.
//!
//! [`ValueIteration`] wires a [`GridWorld`] to a ping-pong
//! [`UtilityArena`] and drives sweeps until convergence.
//!
//! # Ownership model
//!
//! The solver owns the grid for its whole lifetime. Utilities live in the
//! arena while iterating; [`snapshot()`](ValueIteration::snapshot) and
//! [`into_grid()`](ValueIteration::into_grid) copy the published values
//! back into a [`GridWorld`].

use std::time::Instant;

use gridmdp_arena::UtilityArena;
use gridmdp_space::GridWorld;

use crate::config::{ConfigError, SolverConfig};
use crate::convergence::{convergence_threshold, has_converged};
use crate::error::SolveError;
use crate::metrics::SweepMetrics;
use crate::sweep;

// ── Convergence ─────────────────────────────────────────────────

/// Result of a successful [`ValueIteration::run()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Convergence {
    /// Sweeps executed by this run.
    pub sweeps: u64,
    /// Largest change in the final sweep.
    pub delta: f64,
    /// Threshold the final delta dropped below.
    pub threshold: f64,
}

// ── ValueIteration ──────────────────────────────────────────────

/// Synchronous value-iteration solver.
///
/// Created from a [`GridWorld`] and a [`SolverConfig`] via
/// [`new()`](ValueIteration::new). Each [`sweep()`](ValueIteration::sweep)
/// applies one Bellman backup to every ordinary cell from the previous
/// sweep's values; [`run()`](ValueIteration::run) sweeps until the
/// largest change drops below the convergence threshold.
pub struct ValueIteration {
    grid: GridWorld,
    arena: UtilityArena,
    config: SolverConfig,
    threshold: f64,
    workers: usize,
    last_metrics: SweepMetrics,
}

impl ValueIteration {
    /// Create a solver for `grid`.
    ///
    /// Validates the configuration and seeds the arena with the grid's
    /// current utilities. Out-of-range discount factors and unnormalised
    /// drift vectors are accepted but logged, since they may prevent
    /// convergence.
    pub fn new(grid: GridWorld, config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate(&grid)?;

        let gamma = grid.gamma();
        if !(gamma > 0.0 && gamma < 1.0) {
            log::warn!("gamma = {gamma} is outside (0, 1); value iteration may not converge");
        }
        if !grid.drift().is_normalized() {
            log::warn!(
                "drift probabilities sum to {}, not 1",
                grid.drift().total()
            );
        }

        let arena = UtilityArena::new(grid.utilities())?;
        let threshold = convergence_threshold(config.epsilon, gamma);
        let workers = config.resolved_worker_count(grid.nrows());
        log::debug!(
            "solver ready: {}x{} grid, {} ordinary cells, threshold {threshold:e}, {workers} worker(s)",
            grid.nrows(),
            grid.ncols(),
            grid.ordinary_count(),
        );

        Ok(Self {
            grid,
            arena,
            config,
            threshold,
            workers,
            last_metrics: SweepMetrics::default(),
        })
    }

    /// Execute one sweep and publish its result.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NonFiniteUtility`] if any backup is NaN or
    /// infinite. The sweep is abandoned and the previous utilities stay
    /// published.
    pub fn sweep(&mut self) -> Result<SweepMetrics, SolveError> {
        let start = Instant::now();
        let sweep_no = self.arena.generation() + 1;

        let guard = self.arena.begin_sweep();
        let outcome = match sweep::run_sweep(&self.grid, guard, self.workers, sweep_no) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.arena.abandon();
                return Err(e);
            }
        };
        self.arena.publish()?;

        let metrics = SweepMetrics {
            sweep: sweep_no,
            delta: outcome.delta,
            updated_cells: outcome.updated,
            workers: self.workers,
            elapsed_us: start.elapsed().as_micros() as u64,
        };
        log::debug!(
            "sweep {}: delta {:e} over {} cells ({} us)",
            metrics.sweep,
            metrics.delta,
            metrics.updated_cells,
            metrics.elapsed_us,
        );
        self.last_metrics = metrics.clone();
        Ok(metrics)
    }

    /// Sweep until the largest change drops below the threshold.
    ///
    /// At least one sweep always runs. Returns the number of sweeps this
    /// call executed.
    ///
    /// # Errors
    ///
    /// - [`SolveError::SweepLimitReached`] if `max_sweeps` is set and
    ///   exhausted first.
    /// - [`SolveError::NonFiniteUtility`] if a backup diverges.
    pub fn run(&mut self) -> Result<Convergence, SolveError> {
        let mut sweeps = 0u64;
        loop {
            let metrics = self.sweep()?;
            sweeps += 1;
            if has_converged(metrics.delta, self.threshold) {
                log::info!(
                    "converged after {sweeps} sweeps (delta {:e} < {:e})",
                    metrics.delta,
                    self.threshold,
                );
                return Ok(Convergence {
                    sweeps,
                    delta: metrics.delta,
                    threshold: self.threshold,
                });
            }
            if self.config.max_sweeps.is_some_and(|max| sweeps >= max) {
                log::warn!("sweep limit reached after {sweeps} sweeps");
                return Err(SolveError::SweepLimitReached {
                    sweeps,
                    delta: metrics.delta,
                    threshold: self.threshold,
                });
            }
        }
    }

    /// Convergence threshold in effect.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Total sweeps published over the solver's lifetime.
    pub fn sweeps(&self) -> u64 {
        self.arena.generation()
    }

    /// Worker threads used per sweep.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// The configuration the solver was built with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Metrics of the most recent successful sweep.
    pub fn last_metrics(&self) -> &SweepMetrics {
        &self.last_metrics
    }

    /// Grid layout and parameters. Its utilities are the initial ones;
    /// use [`snapshot()`](Self::snapshot) for current values.
    pub fn layout(&self) -> &GridWorld {
        &self.grid
    }

    /// Published utilities, row-major. Wall entries are meaningless.
    pub fn utilities(&self) -> &[f64] {
        self.arena.published()
    }

    /// Published utility at `(row, col)`; `None` for walls or out of bounds.
    pub fn utility(&self, row: usize, col: usize) -> Option<f64> {
        let cell = self.grid.cell(row, col)?;
        if cell.is_wall() {
            return None;
        }
        Some(self.arena.published()[self.grid.index(row, col)])
    }

    /// Copy of the grid carrying the published utilities.
    pub fn snapshot(&self) -> GridWorld {
        let mut grid = self.grid.clone();
        grid.set_utilities(self.arena.published()).expect("arena length matches grid");
        grid
    }

    /// Consume the solver, returning the grid with published utilities.
    pub fn into_grid(self) -> GridWorld {
        let Self {
            mut grid, arena, ..
        } = self;
        grid.set_utilities(&arena.into_published()).expect("arena length matches grid");
        grid
    }
}

/// Run value iteration on `grid` in place with tolerance `epsilon`.
///
/// Convenience wrapper over [`ValueIteration`] with otherwise default
/// settings. On success `grid` holds the converged utilities and the
/// number of sweeps is returned; on error `grid` is left unchanged.
pub fn value_iteration(grid: &mut GridWorld, epsilon: f64) -> Result<u64, SolveError> {
    let mut solver = ValueIteration::new(grid.clone(), SolverConfig::with_epsilon(epsilon))?;
    let outcome = solver.run()?;
    *grid = solver.into_grid();
    Ok(outcome.sweeps)
}
