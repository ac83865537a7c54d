//! Tunable world-generation parameters.

use error::GameError;
use serde::{Deserialize, Serialize};

/// Knobs for one generated world. All count ranges are inclusive.
///
/// The defaults reproduce the classic 40×24 layout: a handful of
/// overlapping rooms, a few full-length cross passages, two swords, ten
/// potions, and ten enemies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub width: i32,
    pub height: i32,
    pub min_rooms: u32,
    pub max_rooms: u32,
    pub min_room_size: i32,
    pub max_room_size: i32,
    pub min_passages: u32,
    pub max_passages: u32,
    pub swords: u32,
    pub potions: u32,
    pub enemies: u32,
    /// Rejection-sampling attempt cap per placement. Exhausting it fails
    /// generation with [`GameError::GenerationFailed`] instead of spinning
    /// forever on a floorless map.
    pub max_placement_attempts: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 24,
            min_rooms: 5,
            max_rooms: 10,
            min_room_size: 3,
            max_room_size: 8,
            min_passages: 3,
            max_passages: 5,
            swords: 2,
            potions: 10,
            enemies: 10,
            max_placement_attempts: 10_000,
        }
    }
}

impl GenerationConfig {
    /// Reject configs the generator cannot honor.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.min_rooms > self.max_rooms {
            return Err(GameError::InvalidConfig(format!(
                "min_rooms {} exceeds max_rooms {}",
                self.min_rooms, self.max_rooms
            )));
        }
        if self.min_passages > self.max_passages {
            return Err(GameError::InvalidConfig(format!(
                "min_passages {} exceeds max_passages {}",
                self.min_passages, self.max_passages
            )));
        }
        if self.min_room_size <= 0 || self.min_room_size > self.max_room_size {
            return Err(GameError::InvalidConfig(format!(
                "room size range {}..={} is not usable",
                self.min_room_size, self.max_room_size
            )));
        }
        if self.max_room_size > self.width || self.max_room_size > self.height {
            return Err(GameError::InvalidConfig(format!(
                "rooms up to {} cells do not fit a {}x{} grid",
                self.max_room_size, self.width, self.height
            )));
        }
        if self.max_placement_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "max_placement_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
