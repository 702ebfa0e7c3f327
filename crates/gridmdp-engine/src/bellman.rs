//! Bellman optimality backup for a single cell.
//!
//! All functions here read utilities from a flat row-major snapshot and
//! never write; the sweep decides where results go.

use gridmdp_core::{Direction, DriftModel};
use gridmdp_space::GridWorld;

/// Utility reached by moving from `(row, col)` in each absolute direction,
/// indexed by [`Direction::index`].
///
/// Blocked moves bounce, so their entry is the cell's own utility.
///
/// # Panics
///
/// Panics if `utilities` is shorter than [`GridWorld::cell_count`].
/// `(row, col)` must be inside the grid.
#[inline]
pub fn neighbour_utilities(
    grid: &GridWorld,
    utilities: &[f64],
    row: usize,
    col: usize,
) -> [f64; 4] {
    Direction::ALL.map(|dir| utilities[grid.target(row, col, dir)])
}

/// Expected next-state utility of each action, indexed by
/// [`Direction::index`].
///
/// Action `a` weights the outcome `a.rotate_cw(k)` by `drift[k]`, so the
/// same drift vector means "forward, right, back, left" for every action.
#[inline]
pub fn q_values(drift: &DriftModel, neighbours: &[f64; 4]) -> [f64; 4] {
    Direction::ALL.map(|heading| drift.expected_value(heading, neighbours))
}

/// Largest of the four action values.
#[inline]
pub fn best_q(q: &[f64; 4]) -> f64 {
    q.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// New utility of the ordinary cell at `(row, col)`:
/// `living_cost + gamma * max_a Q(a)`.
///
/// # Panics
///
/// Same preconditions as [`neighbour_utilities`].
#[inline]
pub fn backup(grid: &GridWorld, utilities: &[f64], row: usize, col: usize) -> f64 {
    let neighbours = neighbour_utilities(grid, utilities, row, col);
    let q = q_values(grid.drift(), &neighbours);
    grid.living_cost() + grid.gamma() * best_q(&q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmdp_core::Cell;
    use gridmdp_space::MdpParams;

    fn open_3x3(drift: DriftModel) -> GridWorld {
        GridWorld::new(
            3,
            3,
            vec![Cell::open(); 9],
            MdpParams {
                gamma: 0.9,
                living_cost: -0.04,
                drift,
            },
        )
        .unwrap()
    }

    #[test]
    fn neighbours_of_centre() {
        let g = open_3x3(DriftModel::default());
        let u: Vec<f64> = (0..9u8).map(f64::from).collect();
        // N=(0,1)=1, E=(1,2)=5, S=(2,1)=7, W=(1,0)=3
        assert_eq!(neighbour_utilities(&g, &u, 1, 1), [1.0, 5.0, 7.0, 3.0]);
    }

    #[test]
    fn corner_neighbours_bounce() {
        let g = open_3x3(DriftModel::default());
        let u: Vec<f64> = (0..9u8).map(f64::from).collect();
        // N and W leave the grid, so they read the corner itself.
        assert_eq!(neighbour_utilities(&g, &u, 0, 0), [0.0, 1.0, 3.0, 0.0]);
    }

    #[test]
    fn symmetric_field_gives_equal_north_and_south() {
        let drift = DriftModel::new([0.8, 0.1, 0.0, 0.1]);
        // up == down, left == right
        let q = q_values(&drift, &[2.0, 5.0, 2.0, 5.0]);
        assert_eq!(q[Direction::North.index()], q[Direction::South.index()]);
        assert_eq!(q[Direction::East.index()], q[Direction::West.index()]);
        assert!((q[Direction::North.index()] - (0.8 * 2.0 + 0.1 * 5.0 + 0.1 * 5.0)).abs() < 1e-12);
        assert!((q[Direction::East.index()] - (0.8 * 5.0 + 0.1 * 2.0 + 0.1 * 2.0)).abs() < 1e-12);
    }

    #[test]
    fn q_values_follow_cyclic_reindexing() {
        let drift = DriftModel::new([0.7, 0.2, 0.0, 0.1]);
        let (up, right, down, left) = (1.0, 2.0, 4.0, 8.0);
        let q = q_values(&drift, &[up, right, down, left]);
        let north = 0.7 * up + 0.2 * right + 0.0 * down + 0.1 * left;
        let south = 0.7 * down + 0.2 * left + 0.0 * up + 0.1 * right;
        let east = 0.7 * right + 0.2 * down + 0.0 * left + 0.1 * up;
        let west = 0.7 * left + 0.2 * up + 0.0 * right + 0.1 * down;
        assert!((q[Direction::North.index()] - north).abs() < 1e-12);
        assert!((q[Direction::South.index()] - south).abs() < 1e-12);
        assert!((q[Direction::East.index()] - east).abs() < 1e-12);
        assert!((q[Direction::West.index()] - west).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn short_utility_slice_panics() {
        let g = open_3x3(DriftModel::default());
        backup(&g, &[0.0; 4], 2, 2);
    }

    #[test]
    fn isolated_cell_backup_is_self_referential() {
        let g = GridWorld::new(1, 1, vec![Cell::open()], MdpParams::default()).unwrap();
        let b = backup(&g, &[3.0], 0, 0);
        assert!((b - (-0.04 + 0.9 * 3.0)).abs() < 1e-12);
    }

    #[test]
    fn backup_prefers_best_action() {
        let g: GridWorld = "0.5\n-1\n1 0 0 0\n* 10\n".parse().unwrap();
        let u = g.utilities();
        assert_eq!(backup(&g, &u, 0, 0), -1.0 + 0.5 * 10.0);
    }
}
