//! The game session: one world, one hero, one enemy roster.
//!
//! `GameSession` owns the tile grid and the entity records and keeps the
//! two representations in agreement: a hero marker exists exactly at the
//! hero's recorded position, and an enemy marker exists exactly where one
//! enemy record stands. All entity movement goes through the relocate
//! methods here so grid and records change together.

use anyhow::Context;
use combat::{Combatant, Enemy, balance};
use dungeon::{Direction, GenerationConfig, Level, Tile, TileGrid, WorldRng};
use error::GameError;
use hero::Hero;
use log::debug;
use strum::IntoEnumIterator;

use crate::report::{Outcome, TurnEvent};
use crate::snapshot::{EnemyView, HeroView, WorldSnapshot};

/// Mutable world state for one play-through.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) grid: TileGrid,
    pub(crate) hero: Hero,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) outcome: Outcome,
}

impl GameSession {
    /// Generate a fresh world from `seed` and spawn the hero and enemies.
    ///
    /// Enemies adjacent to the hero's spawn get one opening strike before
    /// the first player action.
    pub fn generate(config: &GenerationConfig, seed: u64) -> anyhow::Result<Self> {
        let mut rng = WorldRng::new(seed);
        let level = Level::generate(config, &mut rng)
            .with_context(|| format!("failed to generate world from seed {seed}"))?;

        let hero = Hero::new(level.hero_spawn.0, level.hero_spawn.1);
        let mut session = Self {
            grid: level.grid,
            hero,
            enemies: level.enemies,
            outcome: Outcome::Active,
        };
        if session.resolve_enemy_contact().is_some() {
            debug!("[session] hero spawned adjacent to an enemy and took an opening hit");
        }
        Ok(session)
    }

    /// Rebuild a session from explicit parts, for tests and collaborators
    /// that assemble fixed scenarios. Fails with
    /// [`GameError::InconsistentState`] when the grid markers and the
    /// entity records disagree.
    pub fn from_parts(
        grid: TileGrid,
        hero: Hero,
        enemies: Vec<Enemy>,
    ) -> Result<Self, GameError> {
        validate_consistency(&grid, &hero, &enemies)?;
        // victory is only ever signalled by a strike clearing the roster,
        // so an enemy-less rebuild starts active, not won
        let outcome = if !hero.is_alive() {
            Outcome::Defeat
        } else {
            Outcome::Active
        };
        Ok(Self {
            grid,
            hero,
            enemies,
            outcome,
        })
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The enemy standing at `(x, y)`, if any.
    pub fn enemy_at(&self, x: i32, y: i32) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.x == x && e.y == y)
    }

    /// Read-only world state for the presentation layer.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            grid: self.grid.clone(),
            hero: HeroView::of(&self.hero),
            enemies: self.enemies.iter().map(EnemyView::of).collect(),
            outcome: self.outcome,
        }
    }

    pub(crate) fn enemy_index_at(&self, x: i32, y: i32) -> Option<usize> {
        self.enemies.iter().position(|e| e.x == x && e.y == y)
    }

    /// Move the hero marker and record together.
    pub(crate) fn relocate_hero(&mut self, x: i32, y: i32) {
        self.grid.set(self.hero.x, self.hero.y, Tile::Floor);
        self.grid.set(x, y, Tile::Hero);
        self.hero.x = x;
        self.hero.y = y;
    }

    /// Move one enemy's marker and record together.
    pub(crate) fn relocate_enemy(&mut self, index: usize, x: i32, y: i32) {
        let enemy = &mut self.enemies[index];
        self.grid.set(enemy.x, enemy.y, Tile::Floor);
        self.grid.set(x, y, Tile::Enemy);
        enemy.x = x;
        enemy.y = y;
    }

    /// Remove one enemy, reverting its cell to floor. Registry order of
    /// the survivors is preserved.
    pub(crate) fn remove_enemy(&mut self, index: usize) {
        let enemy = self.enemies.remove(index);
        self.grid.set(enemy.x, enemy.y, Tile::Floor);
    }

    /// One enemy-contact resolution: scan the hero's four neighbours in
    /// fixed order and apply contact damage for the first enemy found. At
    /// most one hit per call, no matter how many enemies are adjacent.
    pub(crate) fn resolve_enemy_contact(&mut self) -> Option<TurnEvent> {
        for dir in Direction::iter() {
            let (x, y) = dir.step(self.hero.x, self.hero.y);
            if self.grid.get(x, y) == Tile::Enemy {
                self.hero.take_damage(balance::ENEMY_CONTACT_DAMAGE);
                if !self.hero.is_alive() {
                    self.outcome = Outcome::Defeat;
                }
                return Some(TurnEvent::HeroStruck {
                    x,
                    y,
                    damage: balance::ENEMY_CONTACT_DAMAGE,
                });
            }
        }
        None
    }
}

/// Check that markers and records tell the same story.
fn validate_consistency(
    grid: &TileGrid,
    hero: &Hero,
    enemies: &[Enemy],
) -> Result<(), GameError> {
    let mut hero_markers = 0;
    let mut enemy_markers = 0;

    for (x, y, tile) in grid.cells() {
        match tile {
            Tile::Hero => {
                hero_markers += 1;
                if (x, y) != (hero.x, hero.y) {
                    return Err(GameError::InconsistentState(format!(
                        "hero marker at ({x}, {y}) but hero record at ({}, {})",
                        hero.x, hero.y
                    )));
                }
            }
            Tile::Enemy => {
                enemy_markers += 1;
                let records = enemies.iter().filter(|e| e.x == x && e.y == y).count();
                if records != 1 {
                    return Err(GameError::InconsistentState(format!(
                        "enemy marker at ({x}, {y}) matches {records} records"
                    )));
                }
            }
            _ => {}
        }
    }

    if hero_markers != 1 {
        return Err(GameError::InconsistentState(format!(
            "expected exactly one hero marker, found {hero_markers}"
        )));
    }
    if enemy_markers != enemies.len() {
        return Err(GameError::InconsistentState(format!(
            "{} enemy markers for {} enemy records",
            enemy_markers,
            enemies.len()
        )));
    }
    for enemy in enemies {
        if grid.get(enemy.x, enemy.y) != Tile::Enemy {
            return Err(GameError::InconsistentState(format!(
                "enemy record at ({}, {}) has no marker",
                enemy.x, enemy.y
            )));
        }
    }
    Ok(())
}
