//! Default generation parameters

/// Default map dimensions, in world tiles
pub const DEFAULT_MAP_WIDTH: i32 = 100;
pub const DEFAULT_MAP_HEIGHT: i32 = 100;

/// Default number of rooms a pass aims for
pub const DEFAULT_TARGET_ROOMS: usize = 10;

/// Default room size bounds (inclusive)
pub const DEFAULT_MIN_ROOM_WIDTH: i32 = 5;
pub const DEFAULT_MAX_ROOM_WIDTH: i32 = 10;
pub const DEFAULT_MIN_ROOM_HEIGHT: i32 = 5;
pub const DEFAULT_MAX_ROOM_HEIGHT: i32 = 10;

/// Gap added to the maximum room size to get the grid pitch
pub const DEFAULT_MARGIN: i32 = 4;

/// Farthest a room tile may lie from the world origin along either axis
pub const MAX_WORLD_EXTENT: i64 = 1 << 20;

/// Offsets of the 8-neighbourhood, row-major, centre excluded
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];
