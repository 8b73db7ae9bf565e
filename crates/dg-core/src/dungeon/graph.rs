//! Room graph construction
//!
//! Rooms are placed on an abstract integer grid and grown breadth-first from a
//! seed room at the grid origin:
//! 1. Place the seed room at [0, 0] and enqueue it.
//! 2. Pop a frontier room and try its four directions in random order. A
//!    direction is skipped when the neighbouring grid cell is taken, when the
//!    facing side is already used, or when a freshly sized candidate overlaps
//!    any placed room.
//! 3. A successful candidate is connected to the room that spawned it and
//!    enqueued. Under [`ExpansionPolicy::FirstFit`] the remaining directions
//!    are abandoned.
//! 4. Stop when the target count is reached or the frontier runs dry.
//!
//! Every room except the seed is connected to exactly one earlier room, so the
//! result is a tree over grid adjacency.

use std::collections::VecDeque;

use hashbrown::HashMap;
use log::trace;
use serde::Serialize;

use crate::config::{ExpansionPolicy, GeneratorConfig};
use crate::error::InvariantViolation;
use crate::rng::DungeonRng;

use super::grid::{Direction, GridCoord};
use super::rect::Rect;
use super::room::{Room, RoomId};

/// A corridor-bearing adjacency created during expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Connection {
    /// Room that was expanded
    pub parent: RoomId,
    /// Room placed next to it
    pub child: RoomId,
    /// Direction from parent to child
    pub direction: Direction,
}

/// Arena of rooms plus the grid-cell index
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    #[serde(skip)]
    by_grid: HashMap<GridCoord, RoomId>,
    connections: Vec<Connection>,
}

impl RoomGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms in placement order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub(crate) fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.index()]
    }

    /// The first placed room, if any
    pub fn seed(&self) -> Option<&Room> {
        self.rooms.first()
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn id_at(&self, grid: GridCoord) -> Option<RoomId> {
        self.by_grid.get(&grid).copied()
    }

    pub fn room_at(&self, grid: GridCoord) -> Option<&Room> {
        self.id_at(grid).map(|id| self.room(id))
    }

    /// Grid-adjacent room in a direction, connected or not
    pub fn neighbor(&self, id: RoomId, dir: Direction) -> Option<RoomId> {
        self.id_at(self.room(id).grid.step(dir))
    }

    /// Check if a corridor joins `id` to its neighbour in `dir`.
    ///
    /// Both facing sides must be marked used.
    pub fn is_connected(&self, id: RoomId, dir: Direction) -> bool {
        match self.neighbor(id, dir) {
            Some(other) => {
                self.room(id).side_used(dir) && self.room(other).side_used(dir.opposite())
            }
            None => false,
        }
    }

    /// Neighbours reachable through a corridor
    pub fn connected_neighbors(&self, id: RoomId) -> Vec<(Direction, RoomId)> {
        Direction::all()
            .into_iter()
            .filter(|&dir| self.is_connected(id, dir))
            .filter_map(|dir| self.neighbor(id, dir).map(|other| (dir, other)))
            .collect()
    }

    /// Corridor hop count from `from` to every room, `None` if unreachable
    pub fn graph_distance(&self, from: RoomId) -> Vec<Option<usize>> {
        let mut dist = vec![None; self.rooms.len()];
        if from.index() >= self.rooms.len() {
            return dist;
        }

        let mut queue = VecDeque::new();
        dist[from.index()] = Some(0);
        queue.push_back(from);

        while let Some(id) = queue.pop_front() {
            let d = dist[id.index()].unwrap_or(0);
            for (_, next) in self.connected_neighbors(id) {
                if dist[next.index()].is_none() {
                    dist[next.index()] = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }

        dist
    }

    /// Add a room at an unoccupied grid cell
    pub(crate) fn add_room(&mut self, grid: GridCoord, bounds: Rect) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(id, grid, bounds));
        self.by_grid.insert(grid, id);
        id
    }

    /// Claim the facing sides of two grid-adjacent rooms and record the edge
    pub(crate) fn connect(
        &mut self,
        parent: RoomId,
        direction: Direction,
        child: RoomId,
    ) -> Result<(), InvariantViolation> {
        self.room_mut(parent).claim_side(direction)?;
        self.room_mut(child).claim_side(direction.opposite())?;
        self.connections.push(Connection {
            parent,
            child,
            direction,
        });
        Ok(())
    }
}

/// Disjoint-set forest over room indices
///
/// Built from the corridors present in a graph so the verifier can count rooms
/// cut off from the seed without trusting the connection list.
#[derive(Debug, Clone)]
pub struct ConnectivityTracker {
    parent: Vec<usize>,
}

impl ConnectivityTracker {
    /// Every room starts in its own set
    pub fn new(num_rooms: usize) -> Self {
        Self {
            parent: (0..num_rooms).collect(),
        }
    }

    /// Union the rooms joined by every corridor actually present in `graph`
    pub fn from_graph(graph: &RoomGraph) -> Self {
        let mut tracker = Self::new(graph.len());
        for room in graph.rooms() {
            for (_, other) in graph.connected_neighbors(room.id) {
                tracker.merge(room.id, other);
            }
        }
        tracker
    }

    fn root(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// Join the sets holding `a` and `b`; out-of-range ids are ignored
    pub fn merge(&mut self, a: RoomId, b: RoomId) {
        if a.index() >= self.parent.len() || b.index() >= self.parent.len() {
            return;
        }
        let (ra, rb) = (self.root(a.index()), self.root(b.index()));
        if ra != rb {
            self.parent[rb.max(ra)] = ra.min(rb);
        }
    }

    /// Number of rooms outside the seed room's set
    pub fn unreachable_from_first(&mut self) -> usize {
        if self.parent.is_empty() {
            return 0;
        }
        let seed = self.root(0);
        (1..self.parent.len()).filter(|&i| self.root(i) != seed).count()
    }
}

/// Size a room for a grid cell and place it at that cell's world origin
fn room_rect(config: &GeneratorConfig, grid: GridCoord, rng: &mut DungeonRng) -> Rect {
    let width = rng.range(config.min_room_width, config.max_room_width);
    let height = rng.range(config.min_room_height, config.max_room_height);
    let x = config.map_width / 2 + grid.x * config.pitch_x();
    let y = config.map_height / 2 + grid.y * config.pitch_y();
    Rect::new(x, y, width, height)
}

/// Grow a room graph toward `config.target_rooms`.
///
/// `config` must have passed [`GeneratorConfig::validate`]; room placement
/// relies on its coordinate bounds.
///
/// Falling short of the target is not an error; callers compare
/// [`RoomGraph::len`] with the target. An `Err` means the graph broke one of
/// its own invariants.
pub fn build_room_graph(
    config: &GeneratorConfig,
    rng: &mut DungeonRng,
) -> Result<RoomGraph, InvariantViolation> {
    let mut graph = RoomGraph::new();
    if config.target_rooms == 0 {
        return Ok(graph);
    }

    let map = Rect::new(0, 0, config.map_width, config.map_height);
    let fits = |r: &Rect| !config.confine_to_map || map.contains_rect(r);

    let seed_rect = room_rect(config, GridCoord::ORIGIN, rng);
    if !fits(&seed_rect) {
        trace!("seed room {} does not fit the map", seed_rect);
        return Ok(graph);
    }
    let seed = graph.add_room(GridCoord::ORIGIN, seed_rect);

    let mut frontier = VecDeque::from([seed]);

    while graph.len() < config.target_rooms {
        let Some(current) = frontier.pop_front() else {
            break;
        };

        let mut directions = Direction::all();
        rng.shuffle(&mut directions);

        for dir in directions {
            if graph.len() >= config.target_rooms {
                break;
            }

            let cell = graph.room(current).grid.step(dir);
            if graph.id_at(cell).is_some() {
                continue;
            }
            if graph.room(current).side_used(dir) {
                continue;
            }

            let candidate = room_rect(config, cell, rng);
            if !fits(&candidate) {
                trace!("candidate at {} leaves the map", cell);
                continue;
            }
            if let Some(blocker) = graph.rooms().iter().find(|r| r.bounds.overlaps(&candidate)) {
                trace!("candidate at {} overlaps room {}", cell, blocker.id);
                continue;
            }

            let child = graph.add_room(cell, candidate);
            graph.connect(current, dir, child)?;
            frontier.push_back(child);

            if config.expansion == ExpansionPolicy::FirstFit {
                break;
            }
        }
    }

    Ok(graph)
}
