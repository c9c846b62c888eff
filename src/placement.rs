//! Validating and applying ship placements, manual and randomised.

use rand::Rng;

use crate::{
    board::{Board, Coord},
    common::EngineError,
    config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS},
    fleet::{Fleet, Side},
    game::{GameState, Player},
    ship::{coords_for_placement, Orientation, ShipId, ShipPlacement, ShipSpec},
};

/// Check whether `ship` can be placed at `start` with `orientation` and build
/// the placement if so. Nothing is applied.
///
/// Checks run in order: unknown ship, already placed, any cell out of bounds,
/// any cell already occupied.
pub fn validate_placement(
    board: &Board,
    fleet: &Fleet,
    ship: ShipId,
    start: Coord,
    orientation: Orientation,
) -> Result<ShipPlacement, EngineError> {
    let spec = fleet.find_spec(ship).ok_or(EngineError::UnknownShip)?;
    if fleet.is_placed(ship) {
        return Err(EngineError::AlreadyPlaced);
    }
    let coords = coords_for_placement(start, orientation, spec.length());
    if !coords.iter().all(|c| c.in_bounds()) {
        return Err(EngineError::OutOfBounds);
    }
    let overlaps = coords
        .iter()
        .any(|&c| board.cell(c).map_or(false, |cell| cell.occupant.is_some()));
    if overlaps {
        return Err(EngineError::Overlap);
    }
    Ok(ShipPlacement::new(ship, start, orientation, coords))
}

/// New board with every placement cell occupied by the placed ship. Shot
/// status is untouched. Only call with a placement from
/// [`validate_placement`] against the same board.
pub fn apply_placement(board: &Board, placement: &ShipPlacement) -> Board {
    board.with_occupant(placement.coords(), placement.ship_id())
}

fn place_on_side(
    side: &Side,
    ship: ShipId,
    start: Coord,
    orientation: Orientation,
) -> Result<Side, EngineError> {
    let placement = validate_placement(&side.board, &side.fleet, ship, start, orientation)?;
    Ok(Side {
        board: apply_placement(&side.board, &placement),
        fleet: side.fleet.with_placement(placement),
    })
}

/// Place `ship` on `player`'s side. Phase and turn are left alone.
pub fn place_ship(
    state: &GameState,
    player: Player,
    ship: ShipId,
    start: Coord,
    orientation: Orientation,
) -> Result<GameState, EngineError> {
    let side = place_on_side(state.side(player), ship, start, orientation)?;
    log::debug!("{} placed {} at {} ({})", player.label(), ship, start, orientation);
    Ok(state.with_side(player, side))
}

/// Deploy a whole fleet at random on an empty board.
///
/// For each spec in order, draws an orientation and a start cell uniformly at
/// random and retries until the placement validates. Gives up with
/// [`EngineError::PlacementExhausted`] after [`MAX_PLACEMENT_ATTEMPTS`]
/// attempts for a single ship.
pub fn random_fleet<R: Rng + ?Sized>(specs: &[ShipSpec], rng: &mut R) -> Result<Side, EngineError> {
    let mut side = Side::new(Fleet::new(specs.to_vec()));

    for spec in specs {
        let mut attempts = 0;
        side = loop {
            if attempts >= MAX_PLACEMENT_ATTEMPTS {
                log::warn!("gave up placing {} after {} attempts", spec.id(), attempts);
                return Err(EngineError::PlacementExhausted { ship: spec.id() });
            }
            attempts += 1;

            let orientation = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let start = Coord::new(rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE));
            if let Ok(next) = place_on_side(&side, spec.id(), start, orientation) {
                break next;
            }
        };
    }

    Ok(side)
}
