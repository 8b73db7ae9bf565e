//! Corridor carving
//!
//! Each connected pair of grid neighbours gets one straight, one-tile-wide
//! corridor. It runs along the axis joining the two rooms, at the midpoint of
//! the span their extents share on the other axis, and covers only the gap
//! between the facing edges.

use serde::Serialize;

use super::graph::RoomGraph;
use super::grid::Direction;
use super::rect::{shared_span_midpoint, Coord};
use super::room::{Room, RoomId};
use super::tiles::FloorSet;

/// A carved corridor between two rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Corridor {
    pub from: RoomId,
    pub to: RoomId,
    /// Direction from `from` to `to`
    pub direction: Direction,
    /// Tiles from `from`'s edge toward `to`'s edge, exclusive of both rooms
    pub tiles: Vec<Coord>,
}

impl Corridor {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Lay out the straight corridor from `a` to its neighbour `b` lying in `dir`
pub fn corridor_between(a: &Room, dir: Direction, b: &Room) -> Corridor {
    let (ra, rb) = (a.bounds, b.bounds);

    let tiles: Vec<Coord> = if dir.is_horizontal() {
        let y = shared_span_midpoint(ra.y, ra.bottom(), rb.y, rb.bottom());
        match dir {
            Direction::Right => (ra.right() + 1..rb.x).map(|x| Coord::new(x, y)).collect(),
            _ => (rb.right() + 1..ra.x).rev().map(|x| Coord::new(x, y)).collect(),
        }
    } else {
        let x = shared_span_midpoint(ra.x, ra.right(), rb.x, rb.right());
        match dir {
            Direction::Bottom => (ra.bottom() + 1..rb.y).map(|y| Coord::new(x, y)).collect(),
            _ => (rb.bottom() + 1..ra.y).rev().map(|y| Coord::new(x, y)).collect(),
        }
    };

    Corridor {
        from: a.id,
        to: b.id,
        direction: dir,
        tiles,
    }
}

/// Carve every connection in the graph into the floor.
///
/// Rooms are walked in placement order and each pair is carved once, from the
/// earlier room. Tiles already on the floor are left as they are.
pub fn carve_corridors(graph: &RoomGraph, floor: &mut FloorSet) -> Vec<Corridor> {
    let mut corridors = Vec::new();

    for room in graph.rooms() {
        for dir in Direction::all() {
            if !graph.is_connected(room.id, dir) {
                continue;
            }
            let Some(other) = graph.neighbor(room.id, dir) else {
                continue;
            };
            if other < room.id {
                continue;
            }

            let corridor = corridor_between(room, dir, graph.room(other));
            floor.extend(corridor.tiles.iter().copied());
            corridors.push(corridor);
        }
    }

    corridors
}
