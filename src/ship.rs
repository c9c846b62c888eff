//! Ship definitions and placement geometry.

use alloc::vec::Vec;
use core::{fmt, str::FromStr};

use crate::board::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Identity of a ship within one fleet. Displays as `ship-N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(u8);

impl ShipId {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ship-{}", self.0)
    }
}

impl FromStr for ShipId {
    type Err = core::num::ParseIntError;

    /// Accepts `ship-3` as well as a bare index such as `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("ship-").unwrap_or(s);
        digits.parse().map(ShipId)
    }
}

/// A ship in the fleet roster: identity and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpec {
    id: ShipId,
    length: usize,
}

impl ShipSpec {
    /// Create a new ship spec. `length` must be positive.
    pub const fn new(id: ShipId, length: usize) -> Self {
        debug_assert!(length > 0, "ship length must be positive");
        Self { id, length }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship bound to concrete board coordinates.
///
/// Only produced by [`crate::validate_placement`], so the coordinates are
/// always in bounds and contiguous along `orientation`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipPlacement {
    ship_id: ShipId,
    start: Coord,
    orientation: Orientation,
    coords: Vec<Coord>,
}

impl ShipPlacement {
    pub(crate) fn new(ship_id: ShipId, start: Coord, orientation: Orientation, coords: Vec<Coord>) -> Self {
        Self {
            ship_id,
            start,
            orientation,
            coords,
        }
    }

    pub fn ship_id(&self) -> ShipId {
        self.ship_id
    }

    /// Anchor cell: the top-most (vertical) or left-most (horizontal) cell.
    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.coords.len()
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }
}

/// The `length` cells extending from `start` along `orientation`.
///
/// No bounds clipping is done; callers validate the result.
pub fn coords_for_placement(start: Coord, orientation: Orientation, length: usize) -> Vec<Coord> {
    (0..length).map(|i| start.step(orientation, i)).collect()
}
