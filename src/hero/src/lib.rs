//! The player-controlled hero.
//!
//! One hero exists per session. Its position is duplicated on the tile grid
//! as a hero marker; the session keeps both sides in sync. Stats only move
//! through the mutators here so pickups and combat share one code path.

use combat::{Combatant, balance};
use serde::{Deserialize, Serialize};

/// Hero state: position plus the two stats the game tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub x: i32,
    pub y: i32,
    /// May exceed [`balance::HERO_MAX_HP`] through potions, and go negative
    /// on a killing blow.
    pub hp: i32,
    pub attack: i32,
}

impl Hero {
    /// A fresh hero at the given cell with starting stats.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            hp: balance::HERO_MAX_HP,
            attack: balance::HERO_BASE_ATTACK,
        }
    }

    /// Restore hit points. Healing is uncapped.
    pub fn heal(&mut self, amount: i32) {
        self.hp += amount;
    }

    /// Permanently raise the attack stat.
    pub fn gain_attack(&mut self, amount: i32) {
        self.attack += amount;
    }
}

impl Combatant for Hero {
    fn hp(&self) -> i32 {
        self.hp
    }

    fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }
}
