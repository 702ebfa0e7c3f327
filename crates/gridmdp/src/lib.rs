//! gridmdp: value iteration for grid-world Markov decision processes.
//!
//! This is the facade crate that re-exports the public API of the gridmdp
//! sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use gridmdp::prelude::*;
//!
//! let text = "\
//! 0.9
//! -0.04
//! 0.8 0.1 0 0.1
//! * * * 1
//! * x * -1
//! * * * *
//! ";
//! let grid: GridWorld = text.parse().unwrap();
//! let mut solver = ValueIteration::new(grid, SolverConfig::default()).unwrap();
//! let outcome = solver.run().unwrap();
//! assert!(outcome.delta < outcome.threshold);
//!
//! // Walls have no utility; terminals keep their reward.
//! assert_eq!(solver.utility(1, 1), None);
//! assert_eq!(solver.utility(0, 3), Some(1.0));
//! println!("{}", solver.into_grid());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridmdp-core` | Cells, directions, drift model, load errors |
//! | [`space`] | `gridmdp-space` | `GridWorld`, the text loader and renderer |
//! | [`arena`] | `gridmdp-arena` | Ping-pong utility buffers |
//! | [`engine`] | `gridmdp-engine` | Bellman backup, sweeps, the solver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell kinds, compass directions and the drift model (`gridmdp-core`).
pub use gridmdp_core as types;

/// The grid world, its loader and its renderer (`gridmdp-space`).
///
/// [`space::GridWorld`] is the central type; it parses from the text
/// format via [`str::parse`] and prints via [`std::fmt::Display`].
pub use gridmdp_space as space;

/// Double-buffered utility storage (`gridmdp-arena`).
pub use gridmdp_arena as arena;

/// The value-iteration solver (`gridmdp-engine`).
///
/// [`engine::ValueIteration`] for step-by-step control,
/// [`engine::value_iteration`] for a one-shot in-place solve.
pub use gridmdp_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use gridmdp::prelude::*;
///
/// let mut grid: GridWorld = "0.9\n-0.04\n1 0 0 0\n* 10\n".parse().unwrap();
/// let sweeps = value_iteration(&mut grid, 1e-5).unwrap();
/// assert_eq!(sweeps, 2);
/// assert_eq!(format_utility(grid.utility(0, 0).unwrap()), "8.96");
/// ```
pub mod prelude {
    pub use gridmdp_core::{Cell, Direction, DriftModel, GridError};
    pub use gridmdp_space::{format_utility, GridWorld, MdpParams};

    pub use gridmdp_engine::{
        value_iteration, ConfigError, Convergence, SolveError, SolverConfig, SweepMetrics,
        ValueIteration,
    };
}
