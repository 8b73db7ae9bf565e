//! Floor and wall tile sets

use hashbrown::HashSet;
use serde::{Serialize, Serializer};

use crate::consts::NEIGHBOR_OFFSETS;

use super::graph::RoomGraph;
use super::rect::{Coord, Rect};

/// A set of world tiles. Inserting a tile twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileSet {
    tiles: HashSet<Coord>,
}

/// Room interiors plus corridors
pub type FloorSet = TileSet;
/// Tiles bordering the floor
pub type WallSet = TileSet;

impl TileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.tiles.contains(&c)
    }

    /// Add a tile; returns false if it was already present
    pub fn insert(&mut self, c: Coord) -> bool {
        self.tiles.insert(c)
    }

    /// Iterate in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.tiles.iter().copied()
    }

    /// Tiles in row-major order
    pub fn sorted(&self) -> Vec<Coord> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_unstable_by_key(|c| (c.y, c.x));
        v
    }

    /// Smallest rectangle covering every tile
    pub fn bounding_rect(&self) -> Option<Rect> {
        let mut it = self.iter();
        let first = it.next()?;
        let (mut lx, mut ly, mut hx, mut hy) = (first.x, first.y, first.x, first.y);
        for c in it {
            lx = lx.min(c.x);
            ly = ly.min(c.y);
            hx = hx.max(c.x);
            hy = hy.max(c.y);
        }
        Some(Rect::new(lx, ly, hx - lx + 1, hy - ly + 1))
    }

    pub fn is_disjoint(&self, other: &TileSet) -> bool {
        self.tiles.is_disjoint(&other.tiles)
    }
}

impl Extend<Coord> for TileSet {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.tiles.extend(iter);
    }
}

impl FromIterator<Coord> for TileSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

// Serialized as a row-major list so output is stable
impl Serialize for TileSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.sorted().serialize(serializer)
    }
}

/// Add every room's full rectangle to the floor. Returns the number of new tiles.
pub fn rasterize_rooms(graph: &RoomGraph, floor: &mut FloorSet) -> usize {
    let mut added = 0;
    for room in graph.rooms() {
        for c in room.bounds.cells() {
            if floor.insert(c) {
                added += 1;
            }
        }
    }
    added
}

/// Every non-floor tile in the 8-neighbourhood of a floor tile
pub fn derive_walls(floor: &FloorSet) -> WallSet {
    let mut walls = WallSet::new();
    for tile in floor.iter() {
        for &(dx, dy) in &NEIGHBOR_OFFSETS {
            let n = tile.offset(dx, dy);
            if !floor.contains(n) {
                walls.insert(n);
            }
        }
    }
    walls
}
