//! Game error taxonomy.
//!
//! The simulation core absorbs invalid player input as no-op turns, so the
//! fallible surface is small: building a world can run out of floor, a
//! config can be nonsensical, and a session rebuilt from explicit parts can
//! carry a grid that disagrees with its entity records.

use thiserror::Error;

/// Errors raised while building or rebuilding a game session.
#[derive(Debug, Error)]
pub enum GameError {
    /// Rejection sampling hit its attempt cap before finding a free floor
    /// cell. Indicates the generated map has too little floor area for the
    /// requested placements.
    #[error("generation ran out of floor placing {stage} after {attempts} attempts")]
    GenerationFailed { stage: &'static str, attempts: u32 },

    /// A generation config with impossible bounds or ranges.
    #[error("invalid generation config: {0}")]
    InvalidConfig(String),

    /// The tile grid and the entity records disagree about who stands where.
    #[error("grid and entity records disagree: {0}")]
    InconsistentState(String),
}
