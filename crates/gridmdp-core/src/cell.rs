//! Cell classification for grid environments.

/// One position in a grid environment.
///
/// A cell is exactly one of ordinary, wall, or terminal. The variant
/// carries the data that kind of cell needs, so combinations such as a
/// terminal wall cannot be expressed.
///
/// Ordinary cells do not store a reward: every ordinary cell earns the
/// grid's living cost, which the owning grid supplies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell {
    /// Traversable cell whose utility is rewritten by each sweep.
    Open {
        /// Current estimate of the expected discounted return.
        utility: f64,
    },
    /// Impassable cell, excluded from the state space.
    Wall,
    /// Absorbing cell. Its utility and reward both equal `value` and
    /// never change.
    Terminal {
        /// Fixed utility (and entry reward) of this state.
        value: f64,
    },
}

impl Cell {
    /// An ordinary cell with zero initial utility.
    pub const fn open() -> Self {
        Self::Open { utility: 0.0 }
    }

    /// A terminal cell with the given fixed value.
    pub const fn terminal(value: f64) -> Self {
        Self::Terminal { value }
    }

    /// Current utility, or `None` for walls.
    pub fn utility(&self) -> Option<f64> {
        match *self {
            Self::Open { utility } => Some(utility),
            Self::Terminal { value } => Some(value),
            Self::Wall => None,
        }
    }

    /// Reward for entering this cell.
    ///
    /// Ordinary cells earn `living_cost`; terminals earn their fixed value;
    /// walls have no reward.
    pub fn reward(&self, living_cost: f64) -> Option<f64> {
        match *self {
            Self::Open { .. } => Some(living_cost),
            Self::Terminal { value } => Some(value),
            Self::Wall => None,
        }
    }

    /// Returns `true` for walls.
    pub fn is_wall(&self) -> bool {
        matches!(self, Self::Wall)
    }

    /// Returns `true` for terminal cells.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal { .. })
    }

    /// Returns `true` for ordinary cells, the only ones a sweep updates.
    pub fn is_ordinary(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Returns a copy with the utility replaced.
    ///
    /// Only ordinary cells change; walls and terminals are returned as-is.
    pub fn with_utility(self, utility: f64) -> Self {
        match self {
            Self::Open { .. } => Self::Open { utility },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_cell_reward_is_living_cost() {
        let c = Cell::open();
        assert_eq!(c.reward(-0.04), Some(-0.04));
        assert_eq!(c.utility(), Some(0.0));
        assert!(c.is_ordinary());
    }

    #[test]
    fn terminal_reward_equals_value() {
        let c = Cell::terminal(-1.0);
        assert_eq!(c.reward(-0.04), Some(-1.0));
        assert_eq!(c.utility(), Some(-1.0));
        assert!(c.is_terminal());
        assert!(!c.is_wall());
    }

    #[test]
    fn wall_has_no_utility_or_reward() {
        assert_eq!(Cell::Wall.utility(), None);
        assert_eq!(Cell::Wall.reward(-0.04), None);
        assert!(Cell::Wall.is_wall());
    }

    #[test]
    fn with_utility_only_touches_open_cells() {
        assert_eq!(Cell::open().with_utility(2.5), Cell::Open { utility: 2.5 });
        assert_eq!(Cell::terminal(1.0).with_utility(2.5), Cell::terminal(1.0));
        assert_eq!(Cell::Wall.with_utility(2.5), Cell::Wall);
    }
}
