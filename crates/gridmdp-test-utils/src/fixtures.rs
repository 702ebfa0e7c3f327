//! Reusable environment fixtures.
//!
//! - [`CLASSIC_4X3`]: the textbook 4x3 world with +1/-1 exits and one wall.
//! - [`CORRIDOR`]: 1x3 deterministic corridor ending in a +10 exit.
//! - [`SINGLE_CELL`]: one ordinary cell, every move bounces.
//! - [`MALFORMED_TOKEN`]: a description the loader must reject.

use gridmdp_core::{Cell, DriftModel};
use gridmdp_space::{GridWorld, MdpParams};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const CLASSIC_4X3: &str = "\
0.9
-0.04
0.8 0.1 0 0.1
* * * 1
* x * -1
* * * *
";

pub const CORRIDOR: &str = "\
0.9
-0.04
1 0 0 0
* * 10
";

pub const SINGLE_CELL: &str = "\
0.9
-0.04
0.8 0.1 0 0.1
*
";

pub const MALFORMED_TOKEN: &str = "\
0.9
-0.04
0.8 0.1 0 0.1
* abc 10
";

/// A single ordinary cell with the given discount and living cost.
pub fn single_cell(gamma: f64, living_cost: f64, drift: DriftModel) -> GridWorld {
    GridWorld::new(
        1,
        1,
        vec![Cell::open()],
        MdpParams {
            gamma,
            living_cost,
            drift,
        },
    )
    .expect("1x1 grid is valid")
}

/// `len - 1` ordinary cells followed by one terminal worth `exit`.
pub fn corridor(len: usize, exit: f64, params: MdpParams) -> GridWorld {
    assert!(len >= 1, "corridor needs at least one cell");
    let mut row = vec![Cell::open(); len - 1];
    row.push(Cell::terminal(exit));
    GridWorld::from_rows(vec![row], params).expect("corridor is rectangular")
}

/// Seeded random grid: mostly open cells, some walls, some terminals with
/// values in `[-1, 1)`. Uses gamma 0.9, living cost -0.04 and the default
/// drift model.
pub fn open_field(rows: usize, cols: usize, seed: u64) -> GridWorld {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells = (0..rows * cols)
        .map(|_| {
            let roll: f64 = rng.random();
            if roll < 0.15 {
                Cell::Wall
            } else if roll < 0.25 {
                Cell::terminal(rng.random_range(-1.0..1.0))
            } else {
                Cell::open()
            }
        })
        .collect();
    GridWorld::new(rows, cols, cells, MdpParams::default()).expect("dimensions are non-zero")
}
