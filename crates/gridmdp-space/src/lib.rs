//! Grid environment model for gridmdp.
//!
//! This crate defines [`GridWorld`], the rectangular MDP environment the
//! solver iterates over, together with its plain-text interchange format:
//!
//! - [`parse`]: load a [`GridWorld`] from the line-oriented description
//!   (discount, living cost, drift vector, then one token per cell).
//! - [`render`]: print utilities back out, one row per line.
//!
//! # Example
//!
//! ```
//! use gridmdp_space::GridWorld;
//!
//! let grid: GridWorld = "0.9\n-0.04\n1 0 0 0\n* * 10\n".parse().unwrap();
//! assert_eq!((grid.nrows(), grid.ncols()), (1, 3));
//! assert!(grid.is_open(0, 2));
//! assert!(!grid.is_open(0, 3));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod parse;
pub mod render;

pub use grid::{GridWorld, MdpParams};
pub use render::format_utility;
