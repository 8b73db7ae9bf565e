//! Full generation pass
//!
//! Room graph -> categories -> room floor -> corridors -> walls, then an
//! invariant check before the result is handed out.

use log::{debug, warn};
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::consts::NEIGHBOR_OFFSETS;
use crate::error::{ConfigError, Diagnostic, GenError, InvariantViolation};
use crate::rng::DungeonRng;

use super::category::assign_categories;
use super::corridor::{carve_corridors, Corridor};
use super::graph::{build_room_graph, ConnectivityTracker, RoomGraph};
use super::room::{Room, RoomCategory};
use super::tiles::{derive_walls, rasterize_rooms, FloorSet, WallSet};

/// The published result of one pass
#[derive(Debug, Clone, Serialize)]
pub struct Dungeon {
    /// Seed of the stream the pass drew from
    pub rng_seed: u64,
    pub graph: RoomGraph,
    pub corridors: Vec<Corridor>,
    pub floor: FloorSet,
    pub walls: WallSet,
    /// Under-provisioning reports; empty when every target was met
    pub diagnostics: Vec<Diagnostic>,
}

impl Dungeon {
    /// Rooms in placement order
    pub fn rooms(&self) -> &[Room] {
        self.graph.rooms()
    }

    pub fn start(&self) -> Option<&Room> {
        self.rooms_with(RoomCategory::Start).next()
    }

    pub fn boss(&self) -> Option<&Room> {
        self.rooms_with(RoomCategory::Boss).next()
    }

    pub fn rooms_with(&self, category: RoomCategory) -> impl Iterator<Item = &Room> + '_ {
        self.rooms().iter().filter(move |r| r.category == category)
    }

    /// True when no diagnostic was raised
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Run one generation pass
pub fn generate(config: &GeneratorConfig, rng: &mut DungeonRng) -> Result<Dungeon, GenError> {
    config.validate()?;

    let mut diagnostics = Vec::new();

    let mut graph = build_room_graph(config, rng)?;
    if graph.len() < config.target_rooms {
        let diagnostic = Diagnostic::RoomShortfall {
            target: config.target_rooms,
            placed: graph.len(),
        };
        warn!("{}", diagnostic);
        diagnostics.push(diagnostic);
    }

    if let Some(diagnostic) = assign_categories(&mut graph, &config.quotas, rng) {
        diagnostics.push(diagnostic);
    }

    let mut floor = FloorSet::new();
    rasterize_rooms(&graph, &mut floor);
    let corridors = carve_corridors(&graph, &mut floor);
    let walls = derive_walls(&floor);

    let dungeon = Dungeon {
        rng_seed: rng.seed(),
        graph,
        corridors,
        floor,
        walls,
        diagnostics,
    };
    verify(&dungeon)?;

    debug!(
        "generated {} rooms, {} corridors, {} floor / {} wall tiles (seed {})",
        dungeon.rooms().len(),
        dungeon.corridors.len(),
        dungeon.floor.len(),
        dungeon.walls.len(),
        dungeon.rng_seed
    );

    Ok(dungeon)
}

/// Check the structural invariants of a finished dungeon
pub fn verify(dungeon: &Dungeon) -> Result<(), InvariantViolation> {
    let graph = &dungeon.graph;
    let rooms = graph.rooms();

    if let Some(room) = rooms.iter().find(|r| !r.bounds.is_valid()) {
        return Err(InvariantViolation::DegenerateRoom {
            room: room.id,
            bounds: room.bounds,
        });
    }

    for (i, a) in rooms.iter().enumerate() {
        if let Some(b) = rooms[i + 1..].iter().find(|b| a.bounds.overlaps(&b.bounds)) {
            return Err(InvariantViolation::Overlap { a: a.id, b: b.id });
        }
    }

    for room in rooms {
        if let Some(side) = room.sides.directions().find(|&d| !graph.is_connected(room.id, d)) {
            return Err(InvariantViolation::DanglingSide { room: room.id, side });
        }
    }

    let unreachable = ConnectivityTracker::from_graph(graph).unreachable_from_first();
    if unreachable > 0 {
        return Err(InvariantViolation::Disconnected { unreachable });
    }

    let starts = dungeon.rooms_with(RoomCategory::Start).count();
    let expected_starts = usize::from(!rooms.is_empty());
    if starts != expected_starts {
        return Err(InvariantViolation::StartCount { found: starts });
    }

    let bosses = dungeon.rooms_with(RoomCategory::Boss).count();
    if bosses > 1 {
        return Err(InvariantViolation::BossCount { found: bosses });
    }

    for tile in dungeon.walls.iter() {
        if dungeon.floor.contains(tile) {
            return Err(InvariantViolation::WallOnFloor { tile });
        }
        let touches_floor = NEIGHBOR_OFFSETS
            .iter()
            .any(|&(dx, dy)| dungeon.floor.contains(tile.offset(dx, dy)));
        if !touches_floor {
            return Err(InvariantViolation::FloatingWall { tile });
        }
    }

    Ok(())
}

/// Owns a configuration and RNG stream and produces dungeons on demand
#[derive(Debug, Clone)]
pub struct DungeonGenerator {
    config: GeneratorConfig,
    rng: DungeonRng,
    current: Option<Dungeon>,
}

impl DungeonGenerator {
    /// Validate the configuration up front; no pass is run yet
    pub fn new(config: GeneratorConfig, rng: DungeonRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            current: None,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Replace the configuration used by the next pass
    pub fn set_config(&mut self, config: GeneratorConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Seed of the generator's RNG stream
    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The last successfully generated dungeon
    pub fn current(&self) -> Option<&Dungeon> {
        self.current.as_ref()
    }

    /// Take ownership of the current dungeon, leaving none
    pub fn take(&mut self) -> Option<Dungeon> {
        self.current.take()
    }

    /// Discard the current dungeon and run a fresh pass.
    ///
    /// On error nothing is published and [`current`](Self::current) is `None`.
    pub fn regenerate(&mut self) -> Result<&Dungeon, GenError> {
        self.current = None;
        let dungeon = generate(&self.config, &mut self.rng)?;
        Ok(&*self.current.insert(dungeon))
    }
}
