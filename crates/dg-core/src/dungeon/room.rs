//! Room categories and room records
//!
//! Rooms live in an arena owned by [`RoomGraph`](super::RoomGraph) and are
//! referred to everywhere by [`RoomId`].

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::InvariantViolation;

use super::grid::{Direction, GridCoord, Sides};
use super::rect::Rect;

/// Stable index of a room in its graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub usize);

impl RoomId {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Functional category of a room
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RoomCategory {
    /// Entry room, always the first placed
    Start,
    /// Room farthest from the start on the grid
    Boss,
    Exit,
    Shop,
    Heal,
    #[default]
    Normal,
}

impl RoomCategory {
    /// Categories the generator assigns itself; never part of a quota
    pub const fn is_reserved(self) -> bool {
        matches!(self, RoomCategory::Start | RoomCategory::Boss)
    }

    /// Single-character map symbol
    pub const fn symbol(self) -> char {
        match self {
            RoomCategory::Start => 'S',
            RoomCategory::Boss => 'B',
            RoomCategory::Exit => 'E',
            RoomCategory::Shop => '$',
            RoomCategory::Heal => '+',
            RoomCategory::Normal => ' ',
        }
    }
}

/// A placed room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// World-space footprint
    pub bounds: Rect,
    /// Logical graph position, unique per room
    pub grid: GridCoord,
    /// Sides already carrying a corridor
    pub sides: Sides,
    pub category: RoomCategory,
}

impl Room {
    /// Create a new normal room with no used sides
    pub fn new(id: RoomId, grid: GridCoord, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            grid,
            sides: Sides::empty(),
            category: RoomCategory::Normal,
        }
    }

    pub fn side_used(&self, side: Direction) -> bool {
        self.sides.contains(side.side())
    }

    /// Mark a side as carrying a corridor.
    ///
    /// A side can be claimed once; a second claim is a generator defect.
    pub fn claim_side(&mut self, side: Direction) -> Result<(), InvariantViolation> {
        if self.side_used(side) {
            return Err(InvariantViolation::SideAlreadyUsed {
                room: self.id,
                side,
            });
        }
        self.sides.insert(side.side());
        Ok(())
    }

    /// Number of used sides
    pub fn connection_count(&self) -> usize {
        self.sides.bits().count_ones() as usize
    }
}
