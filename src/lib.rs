//! Turn-based dungeon-crawler simulation core.
//!
//! A procedurally generated grid world with rooms, passages, items, one
//! hero, and wandering enemies, advanced one discrete player action at a
//! time. Rendering and input capture live outside this crate: upstream
//! feeds [`PlayerAction`] values in, downstream reads a [`WorldSnapshot`]
//! back out after every turn.
//!
//! ```no_run
//! use grid_crawler::{GameSession, GenerationConfig, PlayerAction, TurnEngine};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = GenerationConfig::default();
//! let mut session = GameSession::generate(&config, 0xFEED)?;
//! let mut engine = TurnEngine::new(0xBEEF);
//!
//! let report = engine.process_action(&mut session, PlayerAction::MoveLeft);
//! let snapshot = session.snapshot();
//! # let _ = (report, snapshot);
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod report;
pub mod session;
pub mod snapshot;
pub mod turn_engine;

pub use action::PlayerAction;
pub use report::{Outcome, TurnEvent, TurnReport};
pub use session::GameSession;
pub use snapshot::{EnemyView, HeroView, WorldSnapshot};
pub use turn_engine::TurnEngine;

// Building blocks re-exported for collaborators and tests.
pub use combat::{Combatant, Enemy, balance};
pub use dungeon::{Direction, GenerationConfig, Level, Tile, TileGrid, WorldRng};
pub use error::GameError;
pub use hero::Hero;
