//! Common types for the engine: the failure taxonomy shared by every module.

use thiserror::Error;

use crate::ship::ShipId;

/// Errors returned by engine operations.
///
/// The `Display` text doubles as the message shown to the player when the
/// dispatcher absorbs a rejected intent.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Ship id not found in the fleet's specs.
    #[error("Unknown ship.")]
    UnknownShip,
    /// Attempted to place a ship that is already placed.
    #[error("Ship already placed.")]
    AlreadyPlaced,
    /// A coordinate falls outside the board.
    #[error("Out of bounds.")]
    OutOfBounds,
    /// Ship placement overlaps another ship.
    #[error("Overlaps another ship.")]
    Overlap,
    /// The human fleet is not fully placed yet.
    #[error("Place all your ships first.")]
    IncompletePlacement,
    /// Random placement ran out of attempts for a ship.
    #[error("Failed to place fleet: no room for {ship}.")]
    PlacementExhausted { ship: ShipId },
    /// Ships can only be placed during setup.
    #[error("Not in setup phase.")]
    NotInSetupPhase,
    /// Shots can only be fired during play.
    #[error("Not in play phase.")]
    NotInPlayPhase,
    /// The acting player does not hold the turn.
    #[error("Not your turn.")]
    NotYourTurn,
    /// Every cell of the target board has already been shot.
    #[error("No available shots.")]
    NoAvailableShots,
}
