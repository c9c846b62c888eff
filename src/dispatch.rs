//! Single entry point mapping player intents onto engine transitions.

use rand::Rng;

use crate::{
    ai::take_ai_turn,
    board::Coord,
    combat::fire_at,
    common::EngineError,
    game::{restart_game, start_play_phase, GameMessage, GameState, MessageKind, Phase, Player},
    placement::{place_ship, random_fleet},
    ship::{Orientation, ShipId},
};

/// Something the player wants to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Set the orientation used by subsequent placements.
    SetOrientation { orientation: Orientation },
    /// Place a ship at `start` using the current orientation.
    PlaceShip { ship_id: ShipId, start: Coord },
    /// Fire at a cell on the enemy board.
    Fire { target: Coord },
    Restart,
    ClearMessages,
}

/// Apply `intent` to `state` and return the resulting state.
///
/// Never fails: a rejected intent yields `state` with an `Error` message
/// appended and nothing else changed. `rng` drives the enemy fleet layout and
/// the opponent's counter shots.
pub fn dispatch<R: Rng + ?Sized>(state: &GameState, intent: &Intent, rng: &mut R) -> GameState {
    log::debug!("dispatch {:?}", intent);
    match *intent {
        Intent::SetOrientation { orientation } => state.with_orientation(orientation),
        Intent::PlaceShip { ship_id, start } => {
            absorb(state, setup_place(state, ship_id, start, rng))
        }
        Intent::Fire { target } => absorb(state, play_fire(state, target, rng)),
        Intent::Restart => {
            log::info!("game restarted");
            restart_game()
        }
        Intent::ClearMessages => state.with_messages_cleared(),
    }
}

/// Turn an engine failure into an error message on the last good state.
fn absorb(state: &GameState, result: Result<GameState, (GameState, EngineError)>) -> GameState {
    let next = match result {
        Ok(next) => next,
        Err((last_good, err)) => {
            log::warn!("intent rejected: {}", err);
            last_good.with_message(GameMessage::new(MessageKind::Error, alloc::format!("{}", err)))
        }
    };
    if next.phase != state.phase {
        log::info!("phase {:?} -> {:?}", state.phase, next.phase);
    }
    next
}

/// Place your next ship; once the fleet is complete, deploy the enemy fleet
/// and start the battle.
fn setup_place<R: Rng + ?Sized>(
    state: &GameState,
    ship_id: ShipId,
    start: Coord,
    rng: &mut R,
) -> Result<GameState, (GameState, EngineError)> {
    if state.phase != Phase::Setup {
        return Err((state.clone(), EngineError::NotInSetupPhase));
    }
    let next = place_ship(state, Player::You, ship_id, start, state.orientation)
        .map_err(|e| (state.clone(), e))?;
    if !next.you.fleet.is_fully_placed() {
        return Ok(next);
    }

    let enemy = random_fleet(next.enemy.fleet.specs(), rng).map_err(|e| (next.clone(), e))?;
    let started = start_play_phase(&next, enemy).map_err(|e| (next.clone(), e))?;
    Ok(started.with_message(GameMessage::new(MessageKind::Info, "Battle start!")))
}

/// Fire at the enemy; if the game goes on, the opponent answers at once so
/// that control returns with the turn back on your side.
fn play_fire<R: Rng + ?Sized>(
    state: &GameState,
    target: Coord,
    rng: &mut R,
) -> Result<GameState, (GameState, EngineError)> {
    let fired = fire_at(state, Player::You, target).map_err(|e| (state.clone(), e))?;
    let next = fired.state;
    if next.phase == Phase::Play && next.turn == Player::Enemy {
        return take_ai_turn(&next, rng).map_err(|e| (next.clone(), e));
    }
    Ok(next)
}
