//! World-space geometry: tile coordinates and axis-aligned rectangles
//!
//! Rectangles are stored as origin plus size. Edge accessors (`right`, `bottom`)
//! are inclusive, so a 5-wide rectangle at x=10 covers columns 10..=14.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A world tile coordinate
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by an offset
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in world tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rightmost covered column
    pub const fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Bottom covered row
    pub const fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Both dimensions positive
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Check if two rectangles share at least one tile.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Check if this rectangle fully contains another
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// Check if a tile lies inside the rectangle
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= self.x && c.x <= self.right() && c.y >= self.y && c.y <= self.bottom()
    }

    /// Get center tile (rounded toward the origin corner)
    pub fn center(&self) -> Coord {
        Coord::new(self.x + (self.width - 1) / 2, self.y + (self.height - 1) / 2)
    }

    /// Rasterize into every covered tile, row by row
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (self.y..self.y + self.height.max(0))
            .flat_map(move |y| (self.x..self.x + self.width.max(0)).map(move |x| Coord::new(x, y)))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
    }
}

/// Midpoint of the span two intervals share along one axis.
///
/// When the intervals are disjoint the midpoint of the gap between them is
/// returned instead, so the result always lies between the two.
pub(crate) fn shared_span_midpoint(a_lo: i32, a_hi: i32, b_lo: i32, b_hi: i32) -> i32 {
    let lo = a_lo.max(b_lo);
    let hi = a_hi.min(b_hi);
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    lo + (hi - lo) / 2
}
