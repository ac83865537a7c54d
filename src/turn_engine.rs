//! Turn resolution: one player action in, one mutated world out.
//!
//! Every call to [`TurnEngine::process_action`] resolves exactly one turn
//! against the session it is given. Movement turns also advance the
//! enemies and resolve their contact damage; attack turns are an instant
//! hero strike with no enemy response. Once the session outcome is
//! terminal the engine refuses further turns as no-ops.

use combat::{Combatant, balance};
use dungeon::{Direction, Tile, WorldRng};
use log::debug;
use strum::IntoEnumIterator;

use crate::action::PlayerAction;
use crate::report::{Outcome, TurnEvent, TurnReport};
use crate::session::GameSession;

/// Resolves discrete turns. Owns the RNG that drives enemy wandering, so
/// two engines built from the same seed replay the same enemy moves.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    rng: WorldRng,
}

impl TurnEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: WorldRng::new(seed),
        }
    }

    /// Resolve one turn. Mutates the session in place and reports what
    /// happened plus the post-turn outcome.
    pub fn process_action(
        &mut self,
        session: &mut GameSession,
        action: PlayerAction,
    ) -> TurnReport {
        let mut report = TurnReport::default();
        if session.outcome().is_terminal() {
            // the session is over; nothing moves any more
            report.outcome = session.outcome();
            return report;
        }

        match action.direction() {
            Some(direction) => self.move_hero(session, direction, &mut report),
            None => self.attack_adjacent(session, &mut report),
        }

        report.outcome = session.outcome();
        debug!(
            "[turn] {:?} resolved with {} events, outcome {:?}",
            action,
            report.events.len(),
            report.outcome
        );
        report
    }

    /// Hero movement turn. A blocked target (wall, enemy, out of bounds)
    /// makes the whole turn a no-op: no enemy movement, no contact damage.
    fn move_hero(
        &mut self,
        session: &mut GameSession,
        direction: Direction,
        report: &mut TurnReport,
    ) {
        let (x, y) = direction.step(session.hero.x, session.hero.y);
        let target = session.grid.get(x, y);
        if target.blocks_hero() {
            report.record(TurnEvent::MoveBlocked { x, y });
            return;
        }

        match target {
            Tile::Potion => {
                session.hero.heal(balance::POTION_HEAL);
                report.record(TurnEvent::PotionTaken {
                    x,
                    y,
                    healed: balance::POTION_HEAL,
                });
            }
            Tile::Sword => {
                session.hero.gain_attack(balance::SWORD_ATTACK_BONUS);
                report.record(TurnEvent::SwordTaken {
                    x,
                    y,
                    bonus: balance::SWORD_ATTACK_BONUS,
                });
            }
            _ => {}
        }

        let from = (session.hero.x, session.hero.y);
        session.relocate_hero(x, y);
        report.record(TurnEvent::HeroMoved { from, to: (x, y) });

        self.move_enemies(session);
        if let Some(event) = session.resolve_enemy_contact() {
            report.record(event);
        }
    }

    /// Hero strike turn: hit all four orthogonally adjacent enemies at
    /// once. Clearing the roster wins the session. Enemies do not move or
    /// retaliate during a strike.
    fn attack_adjacent(&mut self, session: &mut GameSession, report: &mut TurnReport) {
        for dir in Direction::iter() {
            let (x, y) = dir.step(session.hero.x, session.hero.y);
            if session.grid.get(x, y) != Tile::Enemy {
                continue;
            }
            let Some(index) = session.enemy_index_at(x, y) else {
                continue;
            };

            let damage = session.hero.attack;
            session.enemies[index].take_damage(damage);
            let remaining_hp = session.enemies[index].hp;
            if remaining_hp <= 0 {
                session.remove_enemy(index);
                report.record(TurnEvent::EnemySlain { x, y });
            } else {
                report.record(TurnEvent::EnemyStruck {
                    x,
                    y,
                    damage,
                    remaining_hp,
                });
            }
        }

        if session.enemies.is_empty() {
            session.outcome = Outcome::Victory;
        }
    }

    /// Advance every enemy one wandering step, in registry order. Each
    /// picks a uniformly random direction and moves only if the target
    /// cell is plain floor; otherwise it stays put this turn. Resolution
    /// is against the live grid, so an earlier enemy can vacate a cell a
    /// later enemy then claims.
    fn move_enemies(&mut self, session: &mut GameSession) {
        for index in 0..session.enemies.len() {
            let pick = self.rng.random_range(0..Direction::ALL.len());
            let direction = Direction::ALL[pick];
            let (x, y) = direction.step(session.enemies[index].x, session.enemies[index].y);
            if session.grid.in_bounds(x, y) && session.grid.get(x, y).is_floor() {
                session.relocate_enemy(index, x, y);
            }
        }
    }
}
