//! World generation: rooms, passages, items, and spawn placement.

use combat::Enemy;
use error::GameError;
use log::debug;

use crate::config::GenerationConfig;
use crate::grid::TileGrid;
use crate::rng::WorldRng;
use crate::rooms::Room;
use crate::tiles::Tile;

/// A freshly generated world: the carved tile grid, the cell the hero
/// marker was written to, and the spawned enemy records.
///
/// Rooms and passages are generated independently, so full reachability is
/// probabilistic rather than guaranteed; callers must tolerate the odd
/// unreachable item.
#[derive(Debug, Clone)]
pub struct Level {
    pub grid: TileGrid,
    pub hero_spawn: (i32, i32),
    pub enemies: Vec<Enemy>,
}

impl Level {
    /// Generate a world from `config`, drawing every random choice from
    /// `rng`. Stages run in a fixed order — rooms, passages, swords,
    /// potions, hero, enemies — so the draw sequence is reproducible.
    pub fn generate(config: &GenerationConfig, rng: &mut WorldRng) -> Result<Self, GameError> {
        config.validate()?;

        let mut grid = TileGrid::new(config.width, config.height);

        let rooms = carve_rooms(&mut grid, config, rng);
        let passages = carve_passages(&mut grid, config, rng);
        debug!(
            "[worldgen] seed {}: carved {} rooms and {} passages, {} floor cells",
            rng.seed(),
            rooms,
            passages,
            grid.count(Tile::Floor)
        );

        place_items(&mut grid, config, rng)?;
        let hero_spawn = place_hero(&mut grid, config, rng)?;
        let enemies = place_enemies(&mut grid, config, rng)?;
        debug!(
            "[worldgen] placed {} swords, {} potions, hero at {:?}, {} enemies",
            config.swords,
            config.potions,
            hero_spawn,
            enemies.len()
        );

        Ok(Level {
            grid,
            hero_spawn,
            enemies,
        })
    }
}

fn carve_rooms(grid: &mut TileGrid, config: &GenerationConfig, rng: &mut WorldRng) -> u32 {
    let count = rng.random_range(config.min_rooms..=config.max_rooms);
    for _ in 0..count {
        let width = rng.random_range(config.min_room_size..=config.max_room_size);
        let height = rng.random_range(config.min_room_size..=config.max_room_size);
        let room = Room {
            x: rng.random_range(0..=config.width - width),
            y: rng.random_range(0..=config.height - height),
            width,
            height,
        };
        room.carve(grid);
    }
    count
}

/// Cross-shaped passages: each anchor floors its entire row and entire
/// column, not just the stretch inside a room.
fn carve_passages(grid: &mut TileGrid, config: &GenerationConfig, rng: &mut WorldRng) -> u32 {
    let count = rng.random_range(config.min_passages..=config.max_passages);
    for _ in 0..count {
        let anchor_x = rng.random_range(0..config.width);
        let anchor_y = rng.random_range(0..config.height);
        for x in 0..config.width {
            grid.set(x, anchor_y, Tile::Floor);
        }
        for y in 0..config.height {
            grid.set(anchor_x, y, Tile::Floor);
        }
    }
    count
}

fn place_items(
    grid: &mut TileGrid,
    config: &GenerationConfig,
    rng: &mut WorldRng,
) -> Result<(), GameError> {
    for _ in 0..config.swords {
        let (x, y) = sample_floor(grid, rng, config.max_placement_attempts, "sword")?;
        grid.set(x, y, Tile::Sword);
    }
    for _ in 0..config.potions {
        let (x, y) = sample_floor(grid, rng, config.max_placement_attempts, "potion")?;
        grid.set(x, y, Tile::Potion);
    }
    Ok(())
}

fn place_hero(
    grid: &mut TileGrid,
    config: &GenerationConfig,
    rng: &mut WorldRng,
) -> Result<(i32, i32), GameError> {
    let (x, y) = sample_floor(grid, rng, config.max_placement_attempts, "hero")?;
    grid.set(x, y, Tile::Hero);
    Ok((x, y))
}

fn place_enemies(
    grid: &mut TileGrid,
    config: &GenerationConfig,
    rng: &mut WorldRng,
) -> Result<Vec<Enemy>, GameError> {
    let mut enemies = Vec::with_capacity(config.enemies as usize);
    for _ in 0..config.enemies {
        let (x, y) = sample_floor(grid, rng, config.max_placement_attempts, "enemy")?;
        grid.set(x, y, Tile::Enemy);
        enemies.push(Enemy::new(x, y));
    }
    Ok(enemies)
}

/// Rejection-sample a plain floor cell: draw uniform in-bounds coordinates
/// until one lands on floor, up to `attempts` draws.
fn sample_floor(
    grid: &TileGrid,
    rng: &mut WorldRng,
    attempts: u32,
    stage: &'static str,
) -> Result<(i32, i32), GameError> {
    for _ in 0..attempts {
        let x = rng.random_range(0..grid.width);
        let y = rng.random_range(0..grid.height);
        if grid.get(x, y).is_floor() {
            return Ok((x, y));
        }
    }
    Err(GameError::GenerationFailed { stage, attempts })
}
