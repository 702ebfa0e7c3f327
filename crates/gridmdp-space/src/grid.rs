//! Rectangular grid environment with a four-direction bounce topology.

use gridmdp_core::{Cell, Direction, DriftModel, GridError};

/// Scalar parameters of the decision process.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MdpParams {
    /// Discount factor, nominally in `(0, 1]`.
    pub gamma: f64,
    /// Reward for entering any ordinary cell (typically negative).
    pub living_cost: f64,
    /// Heading-relative transition probabilities.
    pub drift: DriftModel,
}

impl Default for MdpParams {
    fn default() -> Self {
        Self {
            gamma: 0.9,
            living_cost: -0.04,
            drift: DriftModel::default(),
        }
    }
}

/// A two-dimensional grid MDP.
///
/// Cells are stored row-major; cell `(row, col)` lives at flat index
/// `row * ncols + col`. Moves that leave the grid or hit a wall bounce
/// back to the cell they started from.
///
/// The layout and parameters are fixed at construction. Only the
/// utilities of ordinary cells may change afterwards, through
/// [`set_utilities`](GridWorld::set_utilities).
#[derive(Clone, Debug, PartialEq)]
pub struct GridWorld {
    nrows: usize,
    ncols: usize,
    cells: Vec<Cell>,
    params: MdpParams,
}

impl GridWorld {
    /// Create a grid from a row-major cell buffer.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::CellCountMismatch)` if `cells.len() != nrows * ncols`.
    pub fn new(
        nrows: usize,
        ncols: usize,
        cells: Vec<Cell>,
        params: MdpParams,
    ) -> Result<Self, GridError> {
        if nrows == 0 || ncols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let expected = nrows * ncols;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            nrows,
            ncols,
            cells,
            params,
        })
    }

    /// Create a grid from nested rows.
    ///
    /// The first row fixes the width; a row of any other width is
    /// rejected with [`GridError::RaggedRow`] (its `line` is the 1-based
    /// row number).
    pub fn from_rows(rows: Vec<Vec<Cell>>, params: MdpParams) -> Result<Self, GridError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(nrows * ncols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(GridError::RaggedRow {
                    line: r + 1,
                    expected: ncols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Self::new(nrows, ncols, cells, params)
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Total number of cells, walls included.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of ordinary cells, i.e. cells a sweep updates.
    pub fn ordinary_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_ordinary()).count()
    }

    /// Process parameters.
    pub fn params(&self) -> &MdpParams {
        &self.params
    }

    /// Discount factor.
    pub fn gamma(&self) -> f64 {
        self.params.gamma
    }

    /// Reward for entering an ordinary cell.
    pub fn living_cost(&self) -> f64 {
        self.params.living_cost
    }

    /// Transition model.
    pub fn drift(&self) -> &DriftModel {
        &self.params.drift
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.ncols)
    }

    /// Flat index of `(row, col)`.
    ///
    /// The caller must pass in-bounds coordinates.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.nrows && col < self.ncols);
        row * self.ncols + col
    }

    /// `(row, col)` of a flat index.
    #[inline]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.ncols, index % self.ncols)
    }

    /// The cell at `(row, col)`, or `None` if out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.nrows && col < self.ncols {
            self.cells.get(self.index(row, col))
        } else {
            None
        }
    }

    /// Returns `true` iff `(row, col)` is inside the grid and not a wall.
    ///
    /// Takes signed coordinates so callers can probe one step past an
    /// edge without wrapping.
    pub fn is_open(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.cell(row as usize, col as usize)
            .is_some_and(|c| !c.is_wall())
    }

    /// Flat index of the cell reached by moving from `(row, col)` in `dir`.
    ///
    /// If the destination is off-grid or a wall, the move bounces and the
    /// starting cell's index is returned.
    #[inline]
    pub fn target(&self, row: usize, col: usize, dir: Direction) -> usize {
        let (dr, dc) = dir.offset_2d();
        let nr = row as isize + dr;
        let nc = col as isize + dc;
        if self.is_open(nr, nc) {
            self.index(nr as usize, nc as usize)
        } else {
            self.index(row, col)
        }
    }

    /// Reward for entering `(row, col)`; `None` for walls or out of bounds.
    pub fn reward(&self, row: usize, col: usize) -> Option<f64> {
        self.cell(row, col)
            .and_then(|c| c.reward(self.params.living_cost))
    }

    /// Utility of `(row, col)`; `None` for walls or out of bounds.
    pub fn utility(&self, row: usize, col: usize) -> Option<f64> {
        self.cell(row, col).and_then(Cell::utility)
    }

    /// Flat utility buffer, row-major. Walls hold `0.0`; nothing reads
    /// them because moves into walls bounce.
    pub fn utilities(&self) -> Vec<f64> {
        self.cells
            .iter()
            .map(|c| c.utility().unwrap_or(0.0))
            .collect()
    }

    /// Overwrite ordinary-cell utilities from a flat row-major buffer.
    ///
    /// Entries for walls and terminals are ignored. Returns
    /// `Err(GridError::CellCountMismatch)` and leaves the grid unchanged
    /// if `utilities.len() != self.cell_count()`.
    pub fn set_utilities(&mut self, utilities: &[f64]) -> Result<(), GridError> {
        if utilities.len() != self.cells.len() {
            return Err(GridError::CellCountMismatch {
                expected: self.cells.len(),
                found: utilities.len(),
            });
        }
        for (cell, &u) in self.cells.iter_mut().zip(utilities) {
            *cell = cell.with_utility(u);
        }
        Ok(())
    }
}
