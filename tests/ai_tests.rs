use std::collections::HashSet;

use battlegrid::{
    all_coords, choose_random_unshot_coord, default_ship_specs, random_fleet, start_play_phase,
    take_ai_turn, AiMemory, Coord, EngineError, GameState, Phase, Player, ShotStatus, BOARD_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn play_state(seed: u64) -> GameState {
    let mut rng = SmallRng::seed_from_u64(seed);
    let you = random_fleet(&default_ship_specs(), &mut rng).unwrap();
    let enemy = random_fleet(&default_ship_specs(), &mut rng).unwrap();
    let state = GameState {
        you,
        ..GameState::new()
    };
    start_play_phase(&state, enemy).unwrap()
}

fn enemy_turn(state: GameState) -> GameState {
    GameState {
        phase: Phase::Play,
        turn: Player::Enemy,
        ..state
    }
}

#[test]
fn test_choose_only_unshot_cells() {
    let mut state = enemy_turn(play_state(5));
    let mut rng = SmallRng::seed_from_u64(99);
    // shoot everything except the last cell
    for c in all_coords().take(BOARD_SIZE * BOARD_SIZE - 1) {
        state = enemy_turn(fire_as_enemy(&state, c));
    }
    let pick = choose_random_unshot_coord(&state.you.board, &mut rng);
    assert_eq!(pick, Some(Coord::new(BOARD_SIZE - 1, BOARD_SIZE - 1)));
}

/// Fire at a fixed cell as the enemy, bypassing random selection.
fn fire_as_enemy(state: &GameState, target: Coord) -> GameState {
    battlegrid::fire_at(state, Player::Enemy, target).unwrap().state
}

#[test]
fn test_choose_on_full_board_is_none() {
    let mut state = enemy_turn(play_state(6));
    for c in all_coords() {
        state = enemy_turn(fire_as_enemy(&state, c));
    }
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(choose_random_unshot_coord(&state.you.board, &mut rng), None);
    assert_eq!(take_ai_turn(&state, &mut rng), Err(EngineError::NoAvailableShots));
}

#[test]
fn test_ai_turn_preconditions() {
    let mut rng = SmallRng::seed_from_u64(3);
    let state = play_state(3);
    assert_eq!(take_ai_turn(&state, &mut rng), Err(EngineError::NotYourTurn));
    assert_eq!(
        take_ai_turn(&GameState::new(), &mut rng),
        Err(EngineError::NotInPlayPhase)
    );
}

#[test]
fn test_ai_turn_fires_and_remembers() {
    let mut rng = SmallRng::seed_from_u64(11);
    let state = enemy_turn(play_state(11));
    let next = take_ai_turn(&state, &mut rng).unwrap();

    assert_eq!(next.ai.len(), 1);
    let target = next.ai.attempted()[0];
    assert_ne!(next.you.board.cell(target).unwrap().shot, ShotStatus::Unknown);
    assert_eq!(next.you.board.unshot_coords().len(), BOARD_SIZE * BOARD_SIZE - 1);
    assert_eq!(next.enemy, state.enemy);
    if next.phase == Phase::Play {
        assert_eq!(next.turn, Player::You);
    }
}

#[test]
fn test_ai_never_repeats_across_many_turns() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut state = enemy_turn(play_state(2024));

    for _ in 0..100 {
        state = enemy_turn(take_ai_turn(&state, &mut rng).unwrap());
        let unique: HashSet<_> = state.ai.attempted().iter().collect();
        assert_eq!(unique.len(), state.ai.len());
    }
    assert_eq!(state.ai.len(), BOARD_SIZE * BOARD_SIZE);
    assert!(state.you.fleet.all_sunk());
    assert_eq!(take_ai_turn(&state, &mut rng), Err(EngineError::NoAvailableShots));
}

#[test]
fn test_memory_record_dedups() {
    let memory = AiMemory::default().record(Coord::new(1, 1));
    let again = memory.record(Coord::new(1, 1));
    assert_eq!(again, memory);
    let more = again.record(Coord::new(2, 2));
    assert_eq!(more.attempted(), &[Coord::new(1, 1), Coord::new(2, 2)]);
    assert!(more.contains(Coord::new(2, 2)));
    assert!(AiMemory::default().is_empty());
}

#[test]
fn test_selection_reproducible() {
    let state = enemy_turn(play_state(8));
    let a = take_ai_turn(&state, &mut SmallRng::seed_from_u64(8)).unwrap();
    let b = take_ai_turn(&state, &mut SmallRng::seed_from_u64(8)).unwrap();
    assert_eq!(a, b);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn memory_matches_shot_cells(seed in any::<u64>(), turns in 1..=100usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = enemy_turn(play_state(seed));
        for _ in 0..turns {
            state = enemy_turn(take_ai_turn(&state, &mut rng).unwrap());
        }
        let shot: HashSet<Coord> = all_coords()
            .filter(|&c| state.you.board.cell(c).unwrap().shot != ShotStatus::Unknown)
            .collect();
        let remembered: HashSet<Coord> = state.ai.attempted().iter().copied().collect();
        prop_assert_eq!(state.ai.len(), turns);
        prop_assert_eq!(shot, remembered);
    }
}
