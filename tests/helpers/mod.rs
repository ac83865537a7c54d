//! Shared scenario builders for the integration suites.
#![allow(dead_code)] // not every suite uses every builder

use std::collections::HashSet;

use grid_crawler::{Enemy, GameSession, Hero, Tile, TileGrid};

/// Parse an ASCII map into its session parts: `#` wall, `.` floor,
/// `s` sword, `p` potion, `@` hero, `e` full-health enemy.
///
/// Returned separately so tests can tweak stats (hero hp, enemy hp)
/// before assembling the session with [`GameSession::from_parts`].
pub fn parts_from_map(rows: &[&str]) -> (TileGrid, Hero, Vec<Enemy>) {
    let height = rows.len() as i32;
    let width = rows.first().map_or(0, |row| row.chars().count()) as i32;
    let mut grid = TileGrid::new(width, height);
    let mut hero_at = None;
    let mut enemies = Vec::new();

    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            let (x, y) = (x as i32, y as i32);
            let tile = Tile::from_glyph(c).unwrap_or_else(|| panic!("bad map glyph {c:?}"));
            grid.set(x, y, tile);
            match tile {
                Tile::Hero => hero_at = Some((x, y)),
                Tile::Enemy => enemies.push(Enemy::new(x, y)),
                _ => {}
            }
        }
    }

    let (hero_x, hero_y) = hero_at.expect("fixture map needs a hero (@)");
    (grid, Hero::new(hero_x, hero_y), enemies)
}

/// Assemble a session straight from an ASCII map.
pub fn session_from_map(rows: &[&str]) -> GameSession {
    let (grid, hero, enemies) = parts_from_map(rows);
    GameSession::from_parts(grid, hero, enemies).expect("fixture map is consistent")
}

/// Assert the dual representation holds: exactly one hero marker sitting
/// on the hero record, and enemy markers matching the roster one-to-one.
pub fn assert_consistent(session: &GameSession) {
    let grid = session.grid();
    let hero = session.hero();

    let hero_cells: Vec<(i32, i32)> = grid
        .cells()
        .filter(|(_, _, tile)| *tile == Tile::Hero)
        .map(|(x, y, _)| (x, y))
        .collect();
    assert_eq!(hero_cells, vec![(hero.x, hero.y)], "hero marker mismatch");

    let marker_cells: HashSet<(i32, i32)> = grid
        .cells()
        .filter(|(_, _, tile)| *tile == Tile::Enemy)
        .map(|(x, y, _)| (x, y))
        .collect();
    let record_cells: HashSet<(i32, i32)> =
        session.enemies().iter().map(|e| (e.x, e.y)).collect();
    assert_eq!(marker_cells, record_cells, "enemy marker mismatch");
    assert_eq!(
        session.enemies().len(),
        record_cells.len(),
        "two enemy records share a cell"
    );
}
