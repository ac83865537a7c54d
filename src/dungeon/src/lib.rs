//! Map generation and the tile grid.
//!
//! The grid is the single source of truth for terrain and occupancy; every
//! other component queries it rather than caching tile state. Generation is
//! fully driven by a seeded RNG so a fixed seed reproduces a world exactly.

pub mod config;
pub mod direction;
pub mod grid;
pub mod level;
pub mod rng;
pub mod rooms;
pub mod tiles;


pub use config::GenerationConfig;
pub use direction::Direction;
pub use grid::TileGrid;
pub use level::Level;
pub use rng::WorldRng;
pub use rooms::Room;
pub use tiles::Tile;
