//! Per-sweep metrics for the solver.
//!
//! [`SweepMetrics`] captures the convergence and timing data of a single
//! sweep, for logging and profiling.

/// Data collected during a single sweep.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepMetrics {
    /// 1-based sweep number over the solver's lifetime.
    pub sweep: u64,
    /// Largest absolute utility change in this sweep.
    pub delta: f64,
    /// Number of ordinary cells rewritten.
    pub updated_cells: usize,
    /// Worker threads used.
    pub workers: usize,
    /// Wall-clock time for the sweep, in microseconds.
    pub elapsed_us: u64,
}
