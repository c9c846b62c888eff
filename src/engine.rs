//! Stateful session wrapper around [`dispatch`].

use alloc::vec::Vec;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    dispatch::{dispatch, Intent},
    game::GameState,
};

/// Holds the current game state and the injected random source, journals
/// every applied intent and keeps earlier states for undo.
///
/// The random source is only ever drawn from by [`dispatch`], so a seeded
/// engine's state is always reproducible from its journal.
pub struct GameEngine<R = SmallRng> {
    state: GameState,
    rng: R,
    journal: Vec<Intent>,
    /// State and random source as they were before each journal entry.
    history: Vec<(GameState, R)>,
}

impl<R: Rng + Clone> GameEngine<R> {
    /// Create a new engine at the initial state using `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            state: GameState::new(),
            rng,
            journal: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Intents applied so far, oldest first.
    pub fn journal(&self) -> &[Intent] {
        &self.journal
    }

    /// Apply `intent` and return the new current state.
    pub fn apply(&mut self, intent: Intent) -> &GameState {
        let rng_before = self.rng.clone();
        let next = dispatch(&self.state, &intent, &mut self.rng);
        let prev = core::mem::replace(&mut self.state, next);
        self.history.push((prev, rng_before));
        self.journal.push(intent);
        &self.state
    }

    /// Return to the state before the last applied intent, rewinding the
    /// random source with it. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((prev, rng)) => {
                self.state = prev;
                self.rng = rng;
                self.journal.pop();
                true
            }
            None => false,
        }
    }
}

impl GameEngine<SmallRng> {
    /// Engine with a deterministic random source.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Rebuild the state reached by applying `intents` to a fresh game seeded
    /// with `seed`.
    pub fn replay<'a>(seed: u64, intents: impl IntoIterator<Item = &'a Intent>) -> GameState {
        let mut engine = Self::from_seed(seed);
        for intent in intents {
            engine.apply(*intent);
        }
        engine.state
    }
}
