//! dg-core: grid-graph dungeon layout generation
//!
//! Builds a tree of non-overlapping rectangular rooms on a logical grid, labels
//! them (start, boss, quota categories), carves straight corridors between
//! connected neighbours and derives the surrounding walls.
//!
//! The crate is pure and synchronous: a pass takes a [`GeneratorConfig`] and a
//! [`DungeonRng`] and returns plain data. Rendering is left to the caller.

pub mod config;
pub mod dungeon;
pub mod error;

mod consts;
mod rng;

pub use config::{CategoryQuota, ExpansionPolicy, GeneratorConfig};
pub use consts::*;
pub use dungeon::{generate, Dungeon, DungeonGenerator};
pub use error::{ConfigError, Diagnostic, GenError, InvariantViolation};
pub use rng::DungeonRng;
