use alloc::vec::Vec;

use crate::ship::{ShipId, ShipSpec};

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const DEFAULT_SHIP_LENGTHS: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Attempts allowed per ship before random fleet placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 5000;

/// Number of recent log entries a front end shows by default.
pub const DEFAULT_MESSAGE_WINDOW: usize = 8;

/// Ship specs for the standard fleet, with ids `ship-0` through `ship-4` in
/// the order of [`DEFAULT_SHIP_LENGTHS`].
pub fn default_ship_specs() -> Vec<ShipSpec> {
    DEFAULT_SHIP_LENGTHS
        .iter()
        .enumerate()
        .map(|(idx, &length)| ShipSpec::new(ShipId::new(idx as u8), length))
        .collect()
}
