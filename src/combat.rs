//! Shot resolution.

use crate::{
    board::{Coord, ShotStatus},
    common::EngineError,
    fleet::Side,
    game::{GameMessage, GameState, MessageKind, Phase, Player},
    ship::ShipId,
};

/// Tag describing how a shot attempt resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireResult {
    /// The cell had already been shot; nothing changed but the log.
    Repeat,
    Miss,
    Hit,
    /// The hit sank a ship while others remain afloat.
    Sunk,
    /// The hit sank the defender's last ship.
    Win,
}

/// Record of a single shot attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FireOutcome {
    pub attacker: Player,
    pub defender: Player,
    pub target: Coord,
    pub result: FireResult,
    /// Ship occupying the target cell, whatever the result.
    pub hit_ship: Option<ShipId>,
}

/// A resolved shot: the next state plus what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired {
    pub state: GameState,
    pub outcome: FireOutcome,
}

/// `attacker` fires at `target` on the defender's board.
///
/// Out-of-phase, out-of-turn and out-of-bounds shots are errors and change
/// nothing. A shot at an already-shot cell resolves as
/// [`FireResult::Repeat`], appends an error message and keeps the turn.
/// Otherwise the cell is marked, messages are appended and the turn passes to
/// the defender; a winning shot ends the game and leaves the turn as is.
pub fn fire_at(state: &GameState, attacker: Player, target: Coord) -> Result<Fired, EngineError> {
    if state.phase != Phase::Play {
        return Err(EngineError::NotInPlayPhase);
    }
    if state.turn != attacker {
        return Err(EngineError::NotYourTurn);
    }
    let defender = attacker.opponent();
    let def_side = state.side(defender);
    let cell = *def_side.board.cell(target).ok_or(EngineError::OutOfBounds)?;

    let outcome = |result| FireOutcome {
        attacker,
        defender,
        target,
        result,
        hit_ship: cell.occupant,
    };

    if cell.shot != ShotStatus::Unknown {
        let state = state.with_message(GameMessage::new(MessageKind::Error, "You already fired there."));
        return Ok(Fired {
            state,
            outcome: outcome(FireResult::Repeat),
        });
    }

    let label = attacker.label();
    let mut next = state.clone();
    let (board, fleet, result) = match cell.occupant {
        None => {
            next.messages.push(GameMessage::new(MessageKind::Miss, alloc::format!("{}: Miss.", label)));
            let board = def_side.board.with_shot(target, ShotStatus::Miss);
            (board, def_side.fleet.clone(), FireResult::Miss)
        }
        Some(ship) => {
            let board = def_side.board.with_shot(target, ShotStatus::Hit);
            let fleet = def_side.fleet.with_hit(ship);
            next.messages.push(GameMessage::new(MessageKind::Hit, alloc::format!("{}: Hit!", label)));

            let mut result = FireResult::Hit;
            if fleet.is_sunk(ship) {
                result = FireResult::Sunk;
                next.messages.push(GameMessage::new(
                    MessageKind::Sunk,
                    alloc::format!("{}: Sunk a ship!", label),
                ));
                if fleet.all_sunk() {
                    result = FireResult::Win;
                    next.messages.push(match attacker {
                        Player::You => GameMessage::new(MessageKind::Win, "You win!"),
                        Player::Enemy => GameMessage::new(MessageKind::Lose, "You lose."),
                    });
                }
            }
            (board, fleet, result)
        }
    };

    let mut next = next.with_side(defender, Side { board, fleet });
    if result == FireResult::Win {
        next.phase = Phase::GameOver;
        log::info!("{} sank the last {} ship at {}", label, defender, target);
    } else {
        next.turn = defender;
    }
    log::debug!("{} fired at {}: {:?}", label, target, result);

    Ok(Fired {
        state: next,
        outcome: outcome(result),
    })
}
