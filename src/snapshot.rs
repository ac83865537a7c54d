//! Read-only world state handed to the presentation layer.

use combat::balance;
use dungeon::TileGrid;
use serde::{Deserialize, Serialize};

use crate::report::Outcome;

/// Hero state as presentation sees it. `max_hp` is included so health bars
/// need no knowledge of balance constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroView {
    pub x: i32,
    pub y: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
}

/// Enemy state as presentation sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyView {
    pub x: i32,
    pub y: i32,
    pub hp: i32,
    pub max_hp: i32,
}

/// Full post-turn world state: tile grid, entity views, and the session
/// outcome. Cloned out of the session, so presentation can hold it across
/// later turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub grid: TileGrid,
    pub hero: HeroView,
    pub enemies: Vec<EnemyView>,
    pub outcome: Outcome,
}

impl HeroView {
    pub(crate) fn of(hero: &hero::Hero) -> Self {
        Self {
            x: hero.x,
            y: hero.y,
            hp: hero.hp,
            max_hp: balance::HERO_MAX_HP,
            attack: hero.attack,
        }
    }
}

impl EnemyView {
    pub(crate) fn of(enemy: &combat::Enemy) -> Self {
        Self {
            x: enemy.x,
            y: enemy.y,
            hp: enemy.hp,
            max_hp: balance::ENEMY_MAX_HP,
        }
    }
}
