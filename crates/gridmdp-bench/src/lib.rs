//! Benchmark profiles for the gridmdp solver.
//!
//! - [`reference_profile`]: 100x100 seeded field (10K cells)
//! - [`stress_profile`]: 316x316 seeded field (~100K cells)
//! - [`maze_profile`]: long serpentine corridor, the slowest case for
//!   utility propagation

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridmdp_core::Cell;
use gridmdp_space::{GridWorld, MdpParams};
use gridmdp_test_utils::open_field;

/// 100x100 random field with walls and exits.
pub fn reference_profile(seed: u64) -> GridWorld {
    open_field(100, 100, seed)
}

/// 316x316 random field, about ten times the reference cell count.
pub fn stress_profile(seed: u64) -> GridWorld {
    open_field(316, 316, seed)
}

/// `rows x cols` serpentine maze with a single +1 exit.
///
/// Every odd row is a wall except for one gap, alternating between the
/// right and left ends, so utility has to travel the full path length.
pub fn maze_profile(rows: usize, cols: usize) -> GridWorld {
    let mut cells = vec![Cell::open(); rows * cols];
    for r in (1..rows).step_by(2) {
        let gap = if (r / 2) % 2 == 0 { cols - 1 } else { 0 };
        for c in (0..cols).filter(|&c| c != gap) {
            cells[r * cols + c] = Cell::Wall;
        }
    }
    let exit = if (rows - 1) / 2 % 2 == 0 { cols - 1 } else { 0 };
    cells[(rows - 1) * cols + exit] = Cell::terminal(1.0);
    // Rows and columns are non-zero for every caller in this crate.
    GridWorld::new(rows, cols, cells, MdpParams::default()).unwrap()
}
