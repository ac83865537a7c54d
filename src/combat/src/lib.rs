//! Enemy records and the combat balance table.
//!
//! Combat here is deliberately flat: the hero strikes for a fixed `attack`
//! value, enemies strike back for a fixed contact damage. The turn engine
//! owns adjacency scanning and removal; this crate owns the numbers and the
//! hit-point bookkeeping shared by every combatant.

use serde::{Deserialize, Serialize};

/// Combat and pickup balance constants.
///
/// Keep this list as the single source of truth for tuning; the turn
/// engine, entity constructors, and presentation snapshots all read from
/// here rather than carrying their own copies.
pub mod balance {
    /// Hit points a fresh hero starts with.
    pub const HERO_MAX_HP: i32 = 100;
    /// Attack value a fresh hero starts with.
    pub const HERO_BASE_ATTACK: i32 = 1;
    /// Hit points every enemy spawns with.
    pub const ENEMY_MAX_HP: i32 = 3;
    /// Damage the hero takes when ending a turn next to an enemy.
    pub const ENEMY_CONTACT_DAMAGE: i32 = 10;
    /// Hit points restored by walking over a potion (uncapped).
    pub const POTION_HEAL: i32 = 10;
    /// Attack gained by walking over a sword.
    pub const SWORD_ATTACK_BONUS: i32 = 1;
}

/// Shared hit-point bookkeeping for anything that can fight.
pub trait Combatant {
    /// Current hit points. May be negative after a killing blow.
    fn hp(&self) -> i32;

    /// Apply damage. Hit points are allowed to go below zero.
    fn take_damage(&mut self, amount: i32);

    fn is_alive(&self) -> bool {
        self.hp() > 0
    }
}

/// A roaming enemy. Position is duplicated on the tile grid as an enemy
/// marker; the session keeps both sides in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub hp: i32,
}

impl Enemy {
    /// Spawn a full-health enemy at the given cell.
    pub fn new(x: i32, y: i32) -> Self {
        Self::with_hp(x, y, balance::ENEMY_MAX_HP)
    }

    /// Spawn an enemy with explicit hit points. Used by scenario builders.
    pub fn with_hp(x: i32, y: i32, hp: i32) -> Self {
        Self { x, y, hp }
    }
}

impl Combatant for Enemy {
    fn hp(&self) -> i32 {
        self.hp
    }

    fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_enemy_has_full_health() {
        let enemy = Enemy::new(3, 7);
        assert_eq!(enemy.hp, balance::ENEMY_MAX_HP);
        assert!(enemy.is_alive());
    }

    #[test]
    fn test_damage_below_zero_is_dead() {
        let mut enemy = Enemy::with_hp(0, 0, 2);
        enemy.take_damage(1);
        assert!(enemy.is_alive());
        enemy.take_damage(5);
        assert_eq!(enemy.hp, -4);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_exactly_zero_is_dead() {
        let mut enemy = Enemy::with_hp(0, 0, 3);
        enemy.take_damage(3);
        assert_eq!(enemy.hp, 0);
        assert!(!enemy.is_alive());
    }
}
