//! Rectangular room footprints.

use crate::grid::TileGrid;
use crate::tiles::Tile;

/// A rectangular room anchored at its top-left corner. Rooms may overlap
/// each other and the cross passages; later carves simply win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    /// Mark the full rectangle as floor.
    pub fn carve(&self, grid: &mut TileGrid) {
        for yy in self.y..self.y + self.height {
            for xx in self.x..self.x + self.width {
                grid.set(xx, yy, Tile::Floor);
            }
        }
    }
}
