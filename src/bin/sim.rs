use battlegrid::{
    choose_random_unshot_coord, init_logging, random_fleet, GameEngine, Intent, Player,
    ShotStatus,
};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play complete games with a random-firing stand-in for the human player
/// and print a JSON summary of each.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    games: u64,
}

/// Upper bound on intents per game; a full game needs at most 5 + 100.
const MAX_INTENTS: usize = 1000;

fn play(seed: u64) -> anyhow::Result<serde_json::Value> {
    let mut engine = GameEngine::from_seed(seed);
    // The stand-in player draws from its own stream so that the engine's
    // journal alone replays the game.
    let mut player_rng = SmallRng::seed_from_u64(!seed);

    let specs = engine.state().you.fleet.specs().to_vec();
    let layout = random_fleet(&specs, &mut player_rng).map_err(|e| anyhow::anyhow!(e))?;
    for placement in layout.fleet.placements() {
        engine.apply(Intent::SetOrientation {
            orientation: placement.orientation(),
        });
        engine.apply(Intent::PlaceShip {
            ship_id: placement.ship_id(),
            start: placement.start(),
        });
    }

    while !engine.state().is_over() {
        if engine.journal().len() > MAX_INTENTS {
            anyhow::bail!("game with seed {} did not finish", seed);
        }
        let target = choose_random_unshot_coord(&engine.state().enemy.board, &mut player_rng)
            .ok_or_else(|| anyhow::anyhow!("no unshot cells left on the enemy board"))?;
        engine.apply(Intent::Fire { target });
    }

    let state = engine.state();
    if GameEngine::replay(seed, engine.journal()) != *state {
        anyhow::bail!("journal for seed {} does not replay to the final state", seed);
    }
    let your_shots = state
        .enemy
        .board
        .rows()
        .flatten()
        .filter(|cell| cell.shot != ShotStatus::Unknown)
        .count();
    let winner = match state.winner() {
        Some(Player::You) => "you",
        Some(Player::Enemy) => "enemy",
        None => "none",
    };

    Ok(json!({
        "seed": seed,
        "winner": winner,
        "your_shots": your_shots,
        "enemy_shots": state.ai.len(),
        "intents": engine.journal().len(),
    }))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    for game in 0..args.games {
        let seed = args.seed.wrapping_add(game);
        let mut summary = play(seed)?;
        summary["game"] = json!(game);
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}
