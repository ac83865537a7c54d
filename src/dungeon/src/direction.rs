//! The four orthogonal movement directions.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Orthogonal direction on the grid. `y` grows downward.
///
/// Declaration order is the fixed scan order used for adjacency checks
/// (hero strikes, enemy contact): up, down, left, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in scan order; indexable for uniform random picks.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit delta `(dx, dy)` for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The cell one step from `(x, y)` in this direction.
    pub fn step(self, x: i32, y: i32) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (x + dx, y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_iteration_matches_scan_order() {
        let iterated: Vec<Direction> = Direction::iter().collect();
        assert_eq!(iterated, Direction::ALL);
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Direction::Up.step(5, 5), (5, 4));
        assert_eq!(Direction::Right.step(5, 5), (6, 5));
    }
}
