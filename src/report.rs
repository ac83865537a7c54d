//! Per-turn results handed back to the caller.

use serde::{Deserialize, Serialize};

/// Session-level state machine. `Victory` and `Defeat` are terminal: once
/// entered, the engine refuses further turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Active,
    /// All enemies cleared.
    Victory,
    /// Hero hit points fell to zero or below.
    Defeat,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Active)
    }
}

/// Something observable that happened while resolving one turn.
///
/// Presentation turns these into messages and effects; the core only
/// records them. Coordinates are the cells where the event happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The hero stepped from one cell to another.
    HeroMoved { from: (i32, i32), to: (i32, i32) },
    /// The hero tried to step somewhere a wall or enemy blocks. The turn
    /// did not advance.
    MoveBlocked { x: i32, y: i32 },
    /// The hero walked over a potion and drank it.
    PotionTaken { x: i32, y: i32, healed: i32 },
    /// The hero walked over a sword and took it.
    SwordTaken { x: i32, y: i32, bonus: i32 },
    /// A hero strike connected but the enemy survived.
    EnemyStruck {
        x: i32,
        y: i32,
        damage: i32,
        remaining_hp: i32,
    },
    /// A hero strike removed the enemy from the map.
    EnemySlain { x: i32, y: i32 },
    /// An adjacent enemy struck the hero.
    HeroStruck { x: i32, y: i32, damage: i32 },
}

/// Everything a processed action produced: the event log for presentation
/// plus the session outcome after the turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub events: Vec<TurnEvent>,
    pub outcome: Outcome,
}

impl TurnReport {
    pub fn record(&mut self, event: TurnEvent) {
        self.events.push(event);
    }
}
