//! Tile classification for a single grid cell.

use serde::{Deserialize, Serialize};

/// What a grid cell currently holds.
///
/// A tile is a terrain/occupancy classification, not an entity: item and
/// marker tiles are floor that currently holds something. Every in-bounds
/// coordinate has exactly one tile; out-of-bounds reads resolve to `Wall`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor,
    Sword,
    Potion,
    /// The hero stands here. Mirrors the hero record's position.
    Hero,
    /// An enemy stands here. Mirrors exactly one enemy record's position.
    Enemy,
}

impl Tile {
    /// Plain walkable floor with nothing on it.
    pub fn is_floor(self) -> bool {
        matches!(self, Tile::Floor)
    }

    /// Whether the hero's movement is stopped by this tile. Enemies block
    /// movement entirely; there is no bump-attack.
    pub fn blocks_hero(self) -> bool {
        matches!(self, Tile::Wall | Tile::Enemy)
    }

    /// One-character map glyph, used for debug dumps and fixture maps.
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Sword => 's',
            Tile::Potion => 'p',
            Tile::Hero => '@',
            Tile::Enemy => 'e',
        }
    }

    /// Inverse of [`Tile::glyph`].
    pub fn from_glyph(c: char) -> Option<Tile> {
        match c {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Floor),
            's' => Some(Tile::Sword),
            'p' => Some(Tile::Potion),
            '@' => Some(Tile::Hero),
            'e' => Some(Tile::Enemy),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_round_trip() {
        for tile in [
            Tile::Wall,
            Tile::Floor,
            Tile::Sword,
            Tile::Potion,
            Tile::Hero,
            Tile::Enemy,
        ] {
            assert_eq!(Tile::from_glyph(tile.glyph()), Some(tile));
        }
        assert_eq!(Tile::from_glyph('?'), None);
    }

    #[test]
    fn test_hero_is_blocked_by_walls_and_enemies_only() {
        assert!(Tile::Wall.blocks_hero());
        assert!(Tile::Enemy.blocks_hero());
        assert!(!Tile::Floor.blocks_hero());
        assert!(!Tile::Sword.blocks_hero());
        assert!(!Tile::Potion.blocks_hero());
    }
}
