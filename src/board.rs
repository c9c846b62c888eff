//! Board grid and coordinate helpers.
//!
//! A [`Board`] is a value: every change goes through a method that returns a
//! new board and leaves the receiver untouched.

use alloc::vec::Vec;
use core::fmt;

use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, ShipId};

/// Zero-indexed board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True iff both axes lie in `[0, BOARD_SIZE)`.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The coordinate `dist` cells further along `orientation`.
    pub fn step(self, orientation: Orientation, dist: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.row, self.col.saturating_add(dist)),
            Orientation::Vertical => Self::new(self.row.saturating_add(dist), self.col),
        }
    }
}

/// Column letter followed by the 1-based row, e.g. `B7` for row 6, col 1.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.col) {
            Ok(c) if c < 26 => write!(f, "{}{}", (b'A' + c) as char, self.row + 1),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

pub fn in_bounds(coord: Coord) -> bool {
    coord.in_bounds()
}

/// Every board coordinate in row-major order.
pub fn all_coords() -> impl Iterator<Item = Coord> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
}

/// Result of shooting at a cell, if it has been shot at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotStatus {
    #[default]
    Unknown,
    Hit,
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardCell {
    pub occupant: Option<ShipId>,
    pub shot: ShotStatus,
}

type Grid = [[BoardCell; BOARD_SIZE]; BOARD_SIZE];

/// `BOARD_SIZE` x `BOARD_SIZE` grid of cells.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create an empty board: no occupants, nothing shot.
    pub fn new() -> Self {
        Self {
            cells: [[BoardCell::default(); BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell at `coord`, or `None` when out of bounds.
    pub fn cell(&self, coord: Coord) -> Option<&BoardCell> {
        self.cells.get(coord.row)?.get(coord.col)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[BoardCell; BOARD_SIZE]> {
        self.cells.iter()
    }

    /// Coordinates whose shot status is still [`ShotStatus::Unknown`].
    pub fn unshot_coords(&self) -> Vec<Coord> {
        all_coords()
            .filter(|&c| self.cells[c.row][c.col].shot == ShotStatus::Unknown)
            .collect()
    }

    /// Number of cells carrying `ship` as occupant.
    pub fn occupied_by(&self, ship: ShipId) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.occupant == Some(ship))
            .count()
    }

    /// Number of cells with any occupant.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.occupant.is_some())
            .count()
    }

    /// Copy of this board with `ship` set as the occupant of every coordinate
    /// in `coords`. Coordinates must be in bounds.
    pub(crate) fn with_occupant(&self, coords: &[Coord], ship: ShipId) -> Self {
        let mut next = self.clone();
        for c in coords {
            next.cells[c.row][c.col].occupant = Some(ship);
        }
        next
    }

    /// Copy of this board with the shot status at `coord` replaced.
    /// `coord` must be in bounds.
    pub(crate) fn with_shot(&self, coord: Coord, shot: ShotStatus) -> Self {
        let mut next = self.clone();
        next.cells[coord.row][coord.col].shot = shot;
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = match (cell.shot, cell.occupant) {
                    (ShotStatus::Hit, _) => 'X',
                    (ShotStatus::Miss, _) => 'o',
                    (ShotStatus::Unknown, Some(_)) => 'S',
                    (ShotStatus::Unknown, None) => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
