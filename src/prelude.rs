//! Commonly used types and utilities for ease of import.

pub use crate::{
    Coord, EngineError, FireResult, GameEngine, GameState, Intent, Orientation, Phase, Player,
    ShipId,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, run_session};
