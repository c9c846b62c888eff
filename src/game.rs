//! Root game state and phase transitions.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{ai::AiMemory, common::EngineError, fleet::Side, ship::Orientation};

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    You,
    Enemy,
}

impl Player {
    /// The other participant.
    pub fn opponent(self) -> Self {
        match self {
            Player::You => Player::Enemy,
            Player::Enemy => Player::You,
        }
    }

    /// Capitalised label used in log messages.
    pub fn label(self) -> &'static str {
        match self {
            Player::You => "You",
            Player::Enemy => "Enemy",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::You => write!(f, "you"),
            Player::Enemy => write!(f, "enemy"),
        }
    }
}

/// Top-level game stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Setup,
    Play,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    Info,
    Error,
    Hit,
    Miss,
    Sunk,
    Win,
    Lose,
}

/// One entry of the append-only game log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl GameMessage {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Everything about a game in progress.
///
/// Transitions never mutate a state in place: each accepted action builds a
/// new `GameState` and the previous value stays valid for undo or replay.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub phase: Phase,
    /// Orientation used for the next manual placement.
    pub orientation: Orientation,
    pub turn: Player,
    pub you: Side,
    pub enemy: Side,
    pub ai: AiMemory,
    pub messages: Vec<GameMessage>,
}

impl GameState {
    /// Fresh game: empty boards, standard fleets, setup phase, your turn.
    pub fn new() -> Self {
        Self {
            phase: Phase::Setup,
            orientation: Orientation::Horizontal,
            turn: Player::You,
            you: Side::default(),
            enemy: Side::default(),
            ai: AiMemory::default(),
            messages: Vec::new(),
        }
    }

    pub fn side(&self, player: Player) -> &Side {
        match player {
            Player::You => &self.you,
            Player::Enemy => &self.enemy,
        }
    }

    /// Copy of this state with `player`'s side replaced.
    pub fn with_side(&self, player: Player, side: Side) -> Self {
        let mut next = self.clone();
        match player {
            Player::You => next.you = side,
            Player::Enemy => next.enemy = side,
        }
        next
    }

    pub fn with_orientation(&self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self.clone()
        }
    }

    /// Copy of this state with `message` appended to the log.
    pub fn with_message(&self, message: GameMessage) -> Self {
        let mut next = self.clone();
        next.messages.push(message);
        next
    }

    pub fn with_messages_cleared(&self) -> Self {
        Self {
            messages: Vec::new(),
            ..self.clone()
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The winner once the game is over: whoever sank the other fleet.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_over() {
            return None;
        }
        if self.enemy.fleet.all_sunk() {
            Some(Player::You)
        } else if self.you.fleet.all_sunk() {
            Some(Player::Enemy)
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Enter the play phase with the supplied (already randomised) enemy side.
///
/// Requires your fleet to be fully placed. Hands the first turn to you and
/// clears the message log.
pub fn start_play_phase(state: &GameState, enemy: Side) -> Result<GameState, EngineError> {
    if !state.you.fleet.is_fully_placed() {
        return Err(EngineError::IncompletePlacement);
    }
    Ok(GameState {
        phase: Phase::Play,
        turn: Player::You,
        enemy,
        messages: Vec::new(),
        ..state.clone()
    })
}

/// A brand-new game, equivalent to the initial state.
pub fn restart_game() -> GameState {
    GameState::new()
}
