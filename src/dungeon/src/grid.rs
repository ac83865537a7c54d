//! Dense 2D tile grid with bounds-checked access.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tiles::Tile;

/// Row-major tile grid. Created once per session, never resized.
///
/// Access is total: reads outside the bounds return [`Tile::Wall`], writes
/// outside the bounds are silently ignored. Callers never need their own
/// bounds checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    pub width: i32,
    pub height: i32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// A grid of the given dimensions, filled with walls.
    pub fn new(width: i32, height: i32) -> Self {
        let cells = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; cells],
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Tile at `(x, y)`, or [`Tile::Wall`] when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Tile {
        if self.in_bounds(x, y) {
            self.tiles[self.index(x, y)]
        } else {
            Tile::Wall
        }
    }

    /// Overwrite the tile at `(x, y)`. No-op when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.tiles[idx] = tile;
        }
    }

    /// Iterate all cells as `(x, y, tile)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Tile)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.get(x, y))))
    }

    /// Number of cells currently holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.get(x, y).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_grid_is_all_wall() {
        let grid = TileGrid::new(4, 3);
        assert_eq!(grid.count(Tile::Wall), 12);
        assert_eq!(grid.get(0, 0), Tile::Wall);
        assert_eq!(grid.get(3, 2), Tile::Wall);
    }

    #[test]
    fn test_set_then_get() {
        let mut grid = TileGrid::new(4, 3);
        grid.set(2, 1, Tile::Floor);
        assert_eq!(grid.get(2, 1), Tile::Floor);
        assert_eq!(grid.count(Tile::Floor), 1);
    }

    #[test]
    fn test_out_of_bounds_reads_are_wall() {
        let grid = TileGrid::new(4, 3);
        assert_eq!(grid.get(-1, 0), Tile::Wall);
        assert_eq!(grid.get(0, -1), Tile::Wall);
        assert_eq!(grid.get(4, 0), Tile::Wall);
        assert_eq!(grid.get(0, 3), Tile::Wall);
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut grid = TileGrid::new(4, 3);
        grid.set(-1, 0, Tile::Floor);
        grid.set(4, 2, Tile::Floor);
        grid.set(0, 3, Tile::Floor);
        assert_eq!(grid.count(Tile::Floor), 0);
    }

    #[test]
    fn test_bounds_edges() {
        let grid = TileGrid::new(4, 3);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(3, 2));
        assert!(!grid.in_bounds(4, 2));
        assert!(!grid.in_bounds(3, 3));
    }

    #[test]
    fn test_display_renders_glyph_rows() {
        let mut grid = TileGrid::new(3, 2);
        grid.set(1, 0, Tile::Floor);
        grid.set(2, 1, Tile::Hero);
        assert_eq!(grid.to_string(), "#.#\n##@\n");
    }

    proptest! {
        /// Reads are total over the whole i32 plane and resolve to wall
        /// outside the bounds.
        #[test]
        fn test_get_never_panics(x in any::<i32>(), y in any::<i32>()) {
            let grid = TileGrid::new(40, 24);
            let tile = grid.get(x, y);
            if !grid.in_bounds(x, y) {
                prop_assert_eq!(tile, Tile::Wall);
            }
        }
    }
}
