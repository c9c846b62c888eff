// Opponent targeting: uniform choice among cells not yet shot.
// The board's shot status is the source of truth for what may be targeted;
// `AiMemory` only records what the opponent has fired at.

use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::{Board, Coord},
    combat::fire_at,
    common::EngineError,
    game::{GameState, Phase, Player},
};

/// Ordered, duplicate-free list of coordinates the opponent has fired at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AiMemory {
    attempted: Vec<Coord>,
}

impl AiMemory {
    pub fn attempted(&self) -> &[Coord] {
        &self.attempted
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.attempted.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.attempted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempted.is_empty()
    }

    /// Copy with `coord` appended; recording a known coordinate is a no-op.
    pub fn record(&self, coord: Coord) -> Self {
        let mut next = self.clone();
        if !next.contains(coord) {
            next.attempted.push(coord);
        }
        next
    }
}

/// Pick a uniformly random coordinate whose shot status is unknown, or `None`
/// once the whole board has been shot.
pub fn choose_random_unshot_coord<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    let candidates = board.unshot_coords();
    if candidates.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..candidates.len());
    candidates.get(idx).copied()
}

/// Play one opponent turn: pick an unshot cell on your board, fire at it and
/// remember the target.
pub fn take_ai_turn<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Result<GameState, EngineError> {
    if state.phase != Phase::Play {
        return Err(EngineError::NotInPlayPhase);
    }
    if state.turn != Player::Enemy {
        return Err(EngineError::NotYourTurn);
    }
    let target = choose_random_unshot_coord(&state.you.board, rng).ok_or(EngineError::NoAvailableShots)?;

    let fired = fire_at(state, Player::Enemy, target)?;
    log::debug!("opponent targeted {}: {:?}", target, fired.outcome.result);

    let mut next = fired.state;
    next.ai = next.ai.record(target);
    Ok(next)
}
