//! Dungeon layout
//!
//! Geometry, the room graph, categories, corridors and the derived tile sets.

mod category;
mod corridor;
mod generation;
mod graph;
mod grid;
mod rect;
mod room;
mod tiles;

pub use category::{assign_categories, select_boss};
pub use corridor::{carve_corridors, corridor_between, Corridor};
pub use generation::{generate, verify, Dungeon, DungeonGenerator};
pub use graph::{build_room_graph, Connection, ConnectivityTracker, RoomGraph};
pub use grid::{Direction, GridCoord, Sides};
pub use rect::{Coord, Rect};
pub use room::{Room, RoomCategory, RoomId};
pub use tiles::{derive_walls, rasterize_rooms, FloorSet, TileSet, WallSet};
