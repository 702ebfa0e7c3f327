//! Compass directions and heading-relative rotation.

/// One of the four compass moves available in every state.
///
/// Discriminants follow clockwise order starting at north, so rotating a
/// heading by a quarter turn is modular addition on the discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// One row up (row - 1).
    North = 0,
    /// One column right (col + 1).
    East = 1,
    /// One row down (row + 1).
    South = 2,
    /// One column left (col - 1).
    West = 3,
}

impl Direction {
    /// All directions in clockwise order from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the `(row_offset, col_offset)` for this direction.
    pub fn offset_2d(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotate clockwise by `quarter_turns` quarter turns.
    ///
    /// `rotate_cw(0)` is the heading itself, `1` is 90 degrees right,
    /// `2` is the reverse heading and `3` is 90 degrees left.
    pub fn rotate_cw(self, quarter_turns: usize) -> Direction {
        Self::ALL[(self.index() + quarter_turns) % 4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_matches_drift_ordering() {
        // forward, right, back, left for each intended heading
        let north: Vec<_> = (0..4).map(|k| Direction::North.rotate_cw(k)).collect();
        assert_eq!(
            north,
            [Direction::North, Direction::East, Direction::South, Direction::West]
        );
        let south: Vec<_> = (0..4).map(|k| Direction::South.rotate_cw(k)).collect();
        assert_eq!(
            south,
            [Direction::South, Direction::West, Direction::North, Direction::East]
        );
        let east: Vec<_> = (0..4).map(|k| Direction::East.rotate_cw(k)).collect();
        assert_eq!(
            east,
            [Direction::East, Direction::South, Direction::West, Direction::North]
        );
        let west: Vec<_> = (0..4).map(|k| Direction::West.rotate_cw(k)).collect();
        assert_eq!(
            west,
            [Direction::West, Direction::North, Direction::East, Direction::South]
        );
    }

    #[test]
    fn reverse_offsets_cancel() {
        for d in Direction::ALL {
            let (r, c) = d.offset_2d();
            let (or, oc) = d.rotate_cw(2).offset_2d();
            assert_eq!((r + or, c + oc), (0, 0));
        }
    }

    #[test]
    fn full_turn_is_identity() {
        for d in Direction::ALL {
            assert_eq!(d.rotate_cw(4), d);
            assert_eq!(d.rotate_cw(1).rotate_cw(3), d);
        }
    }
}
