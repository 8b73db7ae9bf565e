//! Error and diagnostic types for generation passes
//!
//! Three classes are kept apart:
//! - [`ConfigError`]: the configuration is unusable; rejected before a pass starts.
//! - [`InvariantViolation`]: the generator produced an inconsistent layout. This is
//!   a defect, and the pass is aborted without publishing anything.
//! - [`Diagnostic`]: under-provisioning (too few rooms, unmet quotas). The pass
//!   still completes and the diagnostic travels with the result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dungeon::{Coord, Direction, Rect, RoomCategory, RoomId};

/// Configuration rejected before a pass starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("map size must be positive, got {width}x{height}")]
    NonPositiveMapSize { width: i32, height: i32 },

    #[error(
        "room size bounds must be positive, got width {min_width}..={max_width}, \
         height {min_height}..={max_height}"
    )]
    NonPositiveRoomSize {
        min_width: i32,
        max_width: i32,
        min_height: i32,
        max_height: i32,
    },

    #[error("minimum room width {min} exceeds maximum {max}")]
    InvertedRoomWidth { min: i32, max: i32 },

    #[error("minimum room height {min} exceeds maximum {max}")]
    InvertedRoomHeight { min: i32, max: i32 },

    #[error("grid pitch must be positive, margin {margin} collapses it")]
    NonPositiveSpacing { margin: i32 },

    #[error("{category} is assigned by the generator and cannot appear in the quota list")]
    ReservedCategoryInQuota { category: RoomCategory },

    #[error("rooms could reach {extent} tiles from the origin, limit is {limit}")]
    LayoutTooLarge { extent: i64, limit: i64 },
}

/// A broken generator invariant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("rooms {a} and {b} overlap")]
    Overlap { a: RoomId, b: RoomId },

    #[error("room {room} already has a connection on its {side} side")]
    SideAlreadyUsed { room: RoomId, side: Direction },

    #[error("room {room} has a degenerate extent {bounds}")]
    DegenerateRoom { room: RoomId, bounds: Rect },

    #[error("room {room} marks its {side} side as used but no connection goes through it")]
    DanglingSide { room: RoomId, side: Direction },

    #[error("{unreachable} room(s) cannot be reached from the start room")]
    Disconnected { unreachable: usize },

    #[error("expected exactly one start room, found {found}")]
    StartCount { found: usize },

    #[error("expected at most one boss room, found {found}")]
    BossCount { found: usize },

    #[error("wall tile {tile} is also a floor tile")]
    WallOnFloor { tile: Coord },

    #[error("wall tile {tile} has no floor neighbour")]
    FloatingWall { tile: Coord },
}

/// Error aborting a generation pass
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("generator invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// Non-fatal under-provisioning report attached to a finished pass
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    #[error("placed {placed} of {target} requested rooms")]
    RoomShortfall { target: usize, placed: usize },

    #[error(
        "quotas require {required} rooms but only {available} are available; \
         quota categories skipped"
    )]
    QuotaShortfall { required: usize, available: usize },
}
