//! Double-buffered utility storage for gridmdp sweeps.
//!
//! A synchronous (Jacobi) sweep must read only the previous sweep's
//! values while it writes the next ones. [`UtilityArena`] keeps exactly
//! two buffers that alternate between "published" (readable) and
//! "staging" (writable) roles:
//!
//! ```text
//! buffer_a: Vec<f64>  ←─── published (even generations) / staging (odd)
//! buffer_b: Vec<f64>  ←─── staging (even generations) / published (odd)
//! ```
//!
//! The lifecycle per sweep is:
//! 1. [`begin_sweep()`](UtilityArena::begin_sweep): borrow published
//!    read-only and staging mutably through a [`SweepGuard`]
//! 2. the solver writes every updated cell into staging
//! 3. [`publish()`](UtilityArena::publish): swap roles, bump generation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pingpong;

pub use error::ArenaError;
pub use pingpong::{SweepGuard, UtilityArena};
