use battlegrid::{
    all_coords, dispatch, Coord, GameEngine, GameMessage, GameState, Intent, MessageKind,
    Orientation, Phase, Player, ShipId, ShotStatus, BOARD_SIZE, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use rand::{rngs::SmallRng, SeedableRng};

/// Intents placing ship N horizontally on row N from column 0.
fn stacked_placements() -> Vec<Intent> {
    (0..NUM_SHIPS)
        .map(|i| Intent::PlaceShip {
            ship_id: ShipId::new(i as u8),
            start: Coord::new(i, 0),
        })
        .collect()
}

fn engine_in_play(seed: u64) -> GameEngine {
    let mut engine = GameEngine::from_seed(seed);
    for intent in stacked_placements() {
        engine.apply(intent);
    }
    engine
}

fn last_message(state: &GameState) -> &GameMessage {
    state.messages.last().expect("no messages")
}

#[test]
fn test_initial_state() {
    let state = GameState::new();
    assert_eq!(state.phase, Phase::Setup);
    assert_eq!(state.orientation, Orientation::Horizontal);
    assert_eq!(state.turn, Player::You);
    assert!(state.messages.is_empty());
    assert!(state.ai.is_empty());
    assert_eq!(state.you.fleet.placements().len(), 0);
    assert_eq!(state.enemy.board.occupied_count(), 0);
}

#[test]
fn test_set_orientation_used_for_placement() {
    let mut rng = SmallRng::seed_from_u64(0);
    let state = dispatch(
        &GameState::new(),
        &Intent::SetOrientation { orientation: Orientation::Vertical },
        &mut rng,
    );
    assert_eq!(state.orientation, Orientation::Vertical);

    let state = dispatch(
        &state,
        &Intent::PlaceShip { ship_id: ShipId::new(0), start: Coord::new(0, 0) },
        &mut rng,
    );
    let placement = state.you.fleet.placement(ShipId::new(0)).unwrap();
    assert_eq!(placement.orientation(), Orientation::Vertical);
    assert_eq!(placement.coords()[4], Coord::new(4, 0));
}

#[test]
fn test_rejected_placement_only_appends_error() {
    let mut rng = SmallRng::seed_from_u64(0);
    let state = GameState::new();
    let next = dispatch(
        &state,
        &Intent::PlaceShip { ship_id: ShipId::new(0), start: Coord::new(0, BOARD_SIZE - 2) },
        &mut rng,
    );
    assert_eq!(next.messages, vec![GameMessage::new(MessageKind::Error, "Out of bounds.")]);
    assert_eq!(GameState { messages: Vec::new(), ..next }, state);
}

#[test]
fn test_full_placement_starts_battle() {
    let engine = engine_in_play(17);
    let state = engine.state();
    assert_eq!(state.phase, Phase::Play);
    assert_eq!(state.turn, Player::You);
    assert_eq!(state.messages, vec![GameMessage::new(MessageKind::Info, "Battle start!")]);
    assert!(state.enemy.fleet.is_fully_placed());
    assert_eq!(state.enemy.board.occupied_count(), TOTAL_SHIP_CELLS);
    assert_eq!(state.you.board.occupied_count(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_out_of_phase_intents() {
    let mut rng = SmallRng::seed_from_u64(0);
    let setup = GameState::new();
    let fired = dispatch(&setup, &Intent::Fire { target: Coord::new(0, 0) }, &mut rng);
    assert_eq!(last_message(&fired).text, "Not in play phase.");
    assert_eq!(last_message(&fired).kind, MessageKind::Error);
    assert_eq!(fired.enemy, setup.enemy);

    let engine = engine_in_play(3);
    let placed = dispatch(
        engine.state(),
        &Intent::PlaceShip { ship_id: ShipId::new(0), start: Coord::new(9, 0) },
        &mut rng,
    );
    assert_eq!(last_message(&placed).text, "Not in setup phase.");
    assert_eq!(placed.you, engine.state().you);
}

#[test]
fn test_fire_triggers_one_counter_shot() {
    let mut engine = engine_in_play(21);
    let state = engine.apply(Intent::Fire { target: Coord::new(9, 9) }).clone();

    assert_ne!(state.enemy.board.cell(Coord::new(9, 9)).unwrap().shot, ShotStatus::Unknown);
    assert_eq!(state.ai.len(), 1);
    assert_eq!(state.you.board.unshot_coords().len(), BOARD_SIZE * BOARD_SIZE - 1);
    if state.phase == Phase::Play {
        assert_eq!(state.turn, Player::You);
    }
}

#[test]
fn test_repeat_fire_skips_counter_shot() {
    let mut engine = engine_in_play(4);
    engine.apply(Intent::Fire { target: Coord::new(5, 5) });
    let before = engine.state().clone();
    let after = engine.apply(Intent::Fire { target: Coord::new(5, 5) }).clone();

    assert_eq!(after.ai, before.ai);
    assert_eq!(after.you, before.you);
    assert_eq!(after.enemy, before.enemy);
    assert_eq!(after.turn, Player::You);
    assert_eq!(last_message(&after).text, "You already fired there.");
}

#[test]
fn test_clear_and_restart() {
    let mut engine = engine_in_play(9);
    engine.apply(Intent::Fire { target: Coord::new(0, 0) });
    assert!(!engine.state().messages.is_empty());

    let cleared = engine.apply(Intent::ClearMessages).clone();
    assert!(cleared.messages.is_empty());
    assert_eq!(cleared.phase, Phase::Play);

    let restarted = engine.apply(Intent::Restart).clone();
    assert_eq!(restarted, GameState::new());
}

#[test]
fn test_game_plays_to_completion() {
    let mut engine = engine_in_play(12345);
    let mut targets = all_coords();

    while !engine.state().is_over() {
        let target = targets.next().expect("board exhausted before game over");
        engine.apply(Intent::Fire { target });
        let state = engine.state();
        if state.phase == Phase::Play {
            assert_eq!(state.turn, Player::You);
        }
        assert!(state.messages.iter().all(|m| m.kind != MessageKind::Error));
    }

    let state = engine.state().clone();
    let winner = state.winner().expect("game over without a winner");
    match winner {
        Player::You => {
            assert!(state.enemy.fleet.all_sunk());
            assert_eq!(last_message(&state).kind, MessageKind::Win);
        }
        Player::Enemy => {
            assert!(state.you.fleet.all_sunk());
            assert_eq!(last_message(&state).kind, MessageKind::Lose);
        }
    }

    let after = engine.apply(Intent::Fire { target: Coord::new(0, 0) }).clone();
    assert_eq!(last_message(&after).text, "Not in play phase.");
    assert_eq!(after.phase, Phase::GameOver);
}

#[test]
fn test_replay_reproduces_state() {
    let mut engine = engine_in_play(77);
    for target in [Coord::new(1, 1), Coord::new(2, 7), Coord::new(8, 3)] {
        engine.apply(Intent::Fire { target });
    }
    let replayed = GameEngine::replay(77, engine.journal());
    assert_eq!(&replayed, engine.state());
}

#[test]
fn test_undo_restores_previous_state() {
    let mut engine = GameEngine::from_seed(1);
    assert!(!engine.undo());

    engine.apply(Intent::SetOrientation { orientation: Orientation::Vertical });
    engine.apply(Intent::PlaceShip { ship_id: ShipId::new(0), start: Coord::new(0, 0) });
    assert!(engine.state().you.fleet.is_placed(ShipId::new(0)));

    assert!(engine.undo());
    assert!(!engine.state().you.fleet.is_placed(ShipId::new(0)));
    assert_eq!(engine.state().orientation, Orientation::Vertical);
    assert_eq!(engine.journal().len(), 1);
}

#[test]
fn test_undo_rewinds_randomness_for_replay() {
    let mut engine = engine_in_play(77);
    engine.apply(Intent::Fire { target: Coord::new(9, 9) });
    let after_first = engine.state().clone();

    assert!(engine.undo());
    engine.apply(Intent::Fire { target: Coord::new(9, 9) });
    // the same shot draws the same counter shot again
    assert_eq!(engine.state(), &after_first);

    assert!(engine.undo());
    engine.apply(Intent::Fire { target: Coord::new(8, 8) });
    let replayed = GameEngine::replay(77, engine.journal());
    assert_eq!(&replayed, engine.state());
}

#[test]
fn test_undo_before_battle_start_replays_same_enemy_fleet() {
    let mut engine = engine_in_play(5);
    let enemy = engine.state().enemy.clone();

    assert!(engine.undo());
    assert_eq!(engine.state().phase, Phase::Setup);
    let last = *stacked_placements().last().unwrap();
    engine.apply(last);
    assert_eq!(engine.state().enemy, enemy);
    assert_eq!(&GameEngine::replay(5, engine.journal()), engine.state());
}
