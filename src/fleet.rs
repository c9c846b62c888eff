//! Fleet roster, placements and damage, plus the per-player [`Side`].

use alloc::{collections::BTreeMap, vec::Vec};

use crate::board::Board;
use crate::config::default_ship_specs;
use crate::ship::{ShipId, ShipPlacement, ShipSpec};

/// One player's ships: the fixed roster, the placements made so far and the
/// hits taken by each placed ship.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    specs: Vec<ShipSpec>,
    placements: Vec<ShipPlacement>,
    hits: BTreeMap<ShipId, usize>,
}

impl Fleet {
    /// Create a fleet with nothing placed.
    pub fn new(specs: Vec<ShipSpec>) -> Self {
        Self {
            specs,
            placements: Vec::new(),
            hits: BTreeMap::new(),
        }
    }

    /// The standard five-ship fleet.
    pub fn standard() -> Self {
        Self::new(default_ship_specs())
    }

    pub fn specs(&self) -> &[ShipSpec] {
        &self.specs
    }

    pub fn placements(&self) -> &[ShipPlacement] {
        &self.placements
    }

    pub fn find_spec(&self, ship: ShipId) -> Option<&ShipSpec> {
        self.specs.iter().find(|s| s.id() == ship)
    }

    pub fn ship_length(&self, ship: ShipId) -> Option<usize> {
        self.find_spec(ship).map(ShipSpec::length)
    }

    pub fn placement(&self, ship: ShipId) -> Option<&ShipPlacement> {
        self.placements.iter().find(|p| p.ship_id() == ship)
    }

    pub fn is_placed(&self, ship: ShipId) -> bool {
        self.placement(ship).is_some()
    }

    /// Hits taken by `ship`; zero for unknown or unplaced ships.
    pub fn hit_count(&self, ship: ShipId) -> usize {
        self.hits.get(&ship).copied().unwrap_or(0)
    }

    /// A ship is sunk once its hit count reaches its length.
    pub fn is_sunk(&self, ship: ShipId) -> bool {
        match self.find_spec(ship) {
            Some(spec) => self.hit_count(ship) >= spec.length(),
            None => false,
        }
    }

    pub fn all_sunk(&self) -> bool {
        self.specs.iter().all(|s| self.is_sunk(s.id()))
    }

    pub fn is_fully_placed(&self) -> bool {
        self.placements.len() == self.specs.len()
    }

    /// First ship in roster order that has no placement yet.
    pub fn next_unplaced(&self) -> Option<ShipId> {
        self.specs
            .iter()
            .map(ShipSpec::id)
            .find(|&id| !self.is_placed(id))
    }

    /// Copy of this fleet with `placement` recorded and its hit count at zero.
    pub(crate) fn with_placement(&self, placement: ShipPlacement) -> Self {
        let mut next = self.clone();
        next.hits.insert(placement.ship_id(), 0);
        next.placements.push(placement);
        next
    }

    /// Copy of this fleet with one more hit recorded against `ship`.
    pub(crate) fn with_hit(&self, ship: ShipId) -> Self {
        let mut next = self.clone();
        *next.hits.entry(ship).or_insert(0) += 1;
        next
    }
}

/// A player's board together with the fleet deployed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Side {
    pub board: Board,
    pub fleet: Fleet,
}

impl Side {
    pub fn new(fleet: Fleet) -> Self {
        Self {
            board: Board::new(),
            fleet,
        }
    }
}

impl Default for Side {
    fn default() -> Self {
        Self::new(Fleet::standard())
    }
}
