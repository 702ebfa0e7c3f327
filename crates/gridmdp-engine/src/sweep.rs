//! One synchronous sweep over the grid.
//!
//! A sweep reads the published utilities and writes the staging buffer.
//! Walls and terminals are skipped; they keep their initial value in both
//! buffers. Because no read observes a value written in the same sweep,
//! the grid can be split into row bands processed by scoped worker
//! threads, and the result is identical to the serial sweep.

use gridmdp_arena::SweepGuard;
use gridmdp_core::Cell;
use gridmdp_space::GridWorld;

use crate::bellman;
use crate::error::SolveError;

/// Summary of a completed sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SweepOutcome {
    /// Largest absolute utility change.
    pub delta: f64,
    /// Ordinary cells rewritten.
    pub updated: usize,
}

impl SweepOutcome {
    fn merge(self, other: SweepOutcome) -> SweepOutcome {
        SweepOutcome {
            delta: self.delta.max(other.delta),
            updated: self.updated + other.updated,
        }
    }
}

/// Run one sweep with `workers` threads.
///
/// `sweep` is only used to label a [`SolveError::NonFiniteUtility`].
pub fn run_sweep(
    grid: &GridWorld,
    guard: SweepGuard<'_>,
    workers: usize,
    sweep: u64,
) -> Result<SweepOutcome, SolveError> {
    let SweepGuard { published, staging } = guard;
    if workers <= 1 {
        sweep_band(grid, published, staging, 0, sweep)
    } else {
        sweep_parallel(grid, published, staging, workers, sweep)
    }
}

/// Update the rows stored in `band`, whose first row is `first_row`.
fn sweep_band(
    grid: &GridWorld,
    published: &[f64],
    band: &mut [f64],
    first_row: usize,
    sweep: u64,
) -> Result<SweepOutcome, SolveError> {
    let ncols = grid.ncols();
    let offset = first_row * ncols;
    let mut outcome = SweepOutcome::default();

    for (i, slot) in band.iter_mut().enumerate() {
        let index = offset + i;
        if !matches!(grid.cells()[index], Cell::Open { .. }) {
            continue;
        }
        let (row, col) = grid.position(index);
        let updated = bellman::backup(grid, published, row, col);
        if !updated.is_finite() {
            return Err(SolveError::NonFiniteUtility { row, col, sweep });
        }
        let change = (updated - published[index]).abs();
        if change > outcome.delta {
            outcome.delta = change;
        }
        *slot = updated;
        outcome.updated += 1;
    }
    Ok(outcome)
}

fn sweep_parallel(
    grid: &GridWorld,
    published: &[f64],
    staging: &mut [f64],
    workers: usize,
    sweep: u64,
) -> Result<SweepOutcome, SolveError> {
    let ncols = grid.ncols();
    let rows_per_band = grid.nrows().div_ceil(workers);

    let results: Vec<Result<SweepOutcome, SolveError>> = std::thread::scope(|s| {
        let handles: Vec<_> = staging
            .chunks_mut(rows_per_band * ncols)
            .enumerate()
            .map(|(band, chunk)| {
                let first_row = band * rows_per_band;
                s.spawn(move || sweep_band(grid, published, chunk, first_row, sweep))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    // Bands are in row order, so the first error is the lowest row.
    results
        .into_iter()
        .try_fold(SweepOutcome::default(), |acc, r| Ok(acc.merge(r?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmdp_arena::UtilityArena;
    use gridmdp_core::DriftModel;
    use gridmdp_space::MdpParams;
    use gridmdp_test_utils::{open_field, CLASSIC_4X3};
    use proptest::prelude::*;

    fn sweep_once(grid: &GridWorld, workers: usize) -> (SweepOutcome, Vec<f64>) {
        let mut arena = UtilityArena::new(grid.utilities()).unwrap();
        let outcome = run_sweep(grid, arena.begin_sweep(), workers, 1).unwrap();
        arena.publish().unwrap();
        (outcome, arena.into_published())
    }

    #[test]
    fn first_sweep_on_classic_grid() {
        let grid: GridWorld = CLASSIC_4X3.parse().unwrap();
        let (outcome, u) = sweep_once(&grid, 1);
        assert_eq!(outcome.updated, 9);
        // (0,2) is next to the +1 terminal: -0.04 + 0.9 * 0.8 * 1
        assert!((u[grid.index(0, 2)] - (-0.04 + 0.9 * 0.8)).abs() < 1e-12);
        // (1,2) is next to the -1 terminal; the best action walks west
        // into the wall and bounces, never drifting onto -1.
        assert!((u[grid.index(1, 2)] - (-0.04 + 0.9 * 0.0)).abs() < 1e-12);
        // terminals and wall are untouched
        assert_eq!(u[grid.index(0, 3)], 1.0);
        assert_eq!(u[grid.index(1, 3)], -1.0);
        assert_eq!(u[grid.index(1, 1)], 0.0);
    }

    #[test]
    fn non_finite_backup_is_reported() {
        let grid = GridWorld::from_rows(
            vec![vec![Cell::open(), Cell::terminal(f64::INFINITY)]],
            MdpParams {
                drift: DriftModel::deterministic(),
                ..MdpParams::default()
            },
        )
        .unwrap();
        let mut arena = UtilityArena::new(grid.utilities()).unwrap();
        let err = run_sweep(&grid, arena.begin_sweep(), 1, 7).unwrap_err();
        assert_eq!(
            err,
            SolveError::NonFiniteUtility {
                row: 0,
                col: 0,
                sweep: 7
            }
        );
    }

    #[test]
    fn parallel_error_reports_lowest_row() {
        let mut rows = vec![vec![Cell::open(); 2]; 6];
        rows[1][1] = Cell::terminal(f64::INFINITY);
        rows[4][1] = Cell::terminal(f64::INFINITY);
        let grid = GridWorld::from_rows(rows, MdpParams::default()).unwrap();
        let mut arena = UtilityArena::new(grid.utilities()).unwrap();
        let err = run_sweep(&grid, arena.begin_sweep(), 3, 1).unwrap_err();
        assert!(matches!(err, SolveError::NonFiniteUtility { row: 0, .. }));
    }

    proptest! {
        #[test]
        fn parallel_sweep_matches_serial(
            rows in 1usize..12,
            cols in 1usize..12,
            workers in 2usize..6,
            seed in any::<u64>(),
        ) {
            let grid = open_field(rows, cols, seed);
            let (serial, u_serial) = sweep_once(&grid, 1);
            let (parallel, u_parallel) = sweep_once(&grid, workers.min(rows));
            prop_assert_eq!(serial, parallel);
            prop_assert_eq!(u_serial, u_parallel);
        }
    }
}
