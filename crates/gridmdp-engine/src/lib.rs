//! Synchronous value iteration for grid MDPs.
//!
//! [`ValueIteration`] owns a [`GridWorld`](gridmdp_space::GridWorld) and
//! repeatedly applies the Bellman optimality backup to every ordinary cell
//! until the largest per-cell change in a sweep drops below the
//! convergence threshold.
//!
//! Each sweep reads only the previous sweep's utilities (Jacobi style),
//! so cell update order never matters and a sweep may be split across
//! worker threads by row bands without changing the result.
//!
//! # Example
//!
//! ```
//! use gridmdp_engine::{SolverConfig, ValueIteration};
//! use gridmdp_space::GridWorld;
//!
//! let grid: GridWorld = "0.9\n-0.04\n1 0 0 0\n* * 10\n".parse().unwrap();
//! let mut solver = ValueIteration::new(grid, SolverConfig::default()).unwrap();
//! let outcome = solver.run().unwrap();
//! assert!(outcome.sweeps > 0);
//! assert!((solver.utility(0, 1).unwrap() - 8.96).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bellman;
pub mod config;
pub mod convergence;
pub mod error;
pub mod metrics;
pub mod solver;
pub mod sweep;

pub use config::{ConfigError, SolverConfig};
pub use convergence::convergence_threshold;
pub use error::SolveError;
pub use metrics::SweepMetrics;
pub use solver::{value_iteration, Convergence, ValueIteration};
