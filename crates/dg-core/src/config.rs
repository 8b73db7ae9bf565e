//! Generation configuration
//!
//! A [`GeneratorConfig`] is fixed for the duration of a pass. It is validated
//! before the pass starts; see [`GeneratorConfig::validate`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::dungeon::RoomCategory;
use crate::error::ConfigError;

/// Minimum number of rooms that must receive a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryQuota {
    pub category: RoomCategory,
    pub minimum: usize,
}

impl CategoryQuota {
    pub const fn new(category: RoomCategory, minimum: usize) -> Self {
        Self { category, minimum }
    }
}

/// How many children a frontier room may spawn when it is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionPolicy {
    /// Stop at the first direction that yields a room
    #[default]
    FirstFit,
    /// Try all four directions
    Exhaustive,
}

/// Parameters of a generation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub map_width: i32,
    pub map_height: i32,
    pub target_rooms: usize,
    pub min_room_width: i32,
    pub max_room_width: i32,
    pub min_room_height: i32,
    pub max_room_height: i32,
    /// Added to the maximum room size to get the distance between grid cells
    pub margin: i32,
    /// Ordered quota list; Start and Boss are not allowed here
    pub quotas: Vec<CategoryQuota>,
    pub expansion: ExpansionPolicy,
    /// Reject rooms that would extend past the map edges
    pub confine_to_map: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            target_rooms: DEFAULT_TARGET_ROOMS,
            min_room_width: DEFAULT_MIN_ROOM_WIDTH,
            max_room_width: DEFAULT_MAX_ROOM_WIDTH,
            min_room_height: DEFAULT_MIN_ROOM_HEIGHT,
            max_room_height: DEFAULT_MAX_ROOM_HEIGHT,
            margin: DEFAULT_MARGIN,
            quotas: vec![
                CategoryQuota::new(RoomCategory::Shop, 1),
                CategoryQuota::new(RoomCategory::Heal, 1),
                CategoryQuota::new(RoomCategory::Exit, 1),
            ],
            expansion: ExpansionPolicy::FirstFit,
            confine_to_map: false,
        }
    }
}

impl GeneratorConfig {
    pub fn with_map_size(mut self, width: i32, height: i32) -> Self {
        self.map_width = width;
        self.map_height = height;
        self
    }

    pub fn with_target_rooms(mut self, target: usize) -> Self {
        self.target_rooms = target;
        self
    }

    pub fn with_room_width(mut self, min: i32, max: i32) -> Self {
        self.min_room_width = min;
        self.max_room_width = max;
        self
    }

    pub fn with_room_height(mut self, min: i32, max: i32) -> Self {
        self.min_room_height = min;
        self.max_room_height = max;
        self
    }

    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_quotas(mut self, quotas: Vec<CategoryQuota>) -> Self {
        self.quotas = quotas;
        self
    }

    pub fn with_expansion(mut self, expansion: ExpansionPolicy) -> Self {
        self.expansion = expansion;
        self
    }

    pub fn with_confine_to_map(mut self, confine: bool) -> Self {
        self.confine_to_map = confine;
        self
    }

    /// World-space distance between horizontally adjacent grid cells.
    ///
    /// Saturates on configurations that [`validate`](Self::validate) rejects.
    pub fn pitch_x(&self) -> i32 {
        self.max_room_width.saturating_add(self.margin)
    }

    /// World-space distance between vertically adjacent grid cells
    pub fn pitch_y(&self) -> i32 {
        self.max_room_height.saturating_add(self.margin)
    }

    /// Total number of rooms the quota list asks for
    pub fn quota_total(&self) -> usize {
        self.quotas.iter().map(|q| q.minimum).sum()
    }

    /// Reject configurations a pass cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_width <= 0 || self.map_height <= 0 {
            return Err(ConfigError::NonPositiveMapSize {
                width: self.map_width,
                height: self.map_height,
            });
        }

        if self.min_room_width <= 0
            || self.max_room_width <= 0
            || self.min_room_height <= 0
            || self.max_room_height <= 0
        {
            return Err(ConfigError::NonPositiveRoomSize {
                min_width: self.min_room_width,
                max_width: self.max_room_width,
                min_height: self.min_room_height,
                max_height: self.max_room_height,
            });
        }

        if self.min_room_width > self.max_room_width {
            return Err(ConfigError::InvertedRoomWidth {
                min: self.min_room_width,
                max: self.max_room_width,
            });
        }

        if self.min_room_height > self.max_room_height {
            return Err(ConfigError::InvertedRoomHeight {
                min: self.min_room_height,
                max: self.max_room_height,
            });
        }

        let (Some(pitch_x), Some(pitch_y)) = (
            self.max_room_width.checked_add(self.margin),
            self.max_room_height.checked_add(self.margin),
        ) else {
            return Err(ConfigError::LayoutTooLarge {
                extent: i64::from(self.max_room_width.max(self.max_room_height))
                    + i64::from(self.margin),
                limit: MAX_WORLD_EXTENT,
            });
        };
        if pitch_x <= 0 || pitch_y <= 0 {
            return Err(ConfigError::NonPositiveSpacing {
                margin: self.margin,
            });
        }

        // A walk of n rooms stays within n - 1 cells of the origin on each axis.
        let steps = i64::try_from(self.target_rooms.saturating_sub(1)).unwrap_or(i64::MAX);
        let extent_along = |map: i32, pitch: i32, size: i32| {
            steps
                .saturating_mul(i64::from(pitch))
                .saturating_add(i64::from(map / 2))
                .saturating_add(i64::from(size))
        };
        let extent = extent_along(self.map_width, pitch_x, self.max_room_width).max(
            extent_along(self.map_height, pitch_y, self.max_room_height),
        );
        if extent > MAX_WORLD_EXTENT {
            return Err(ConfigError::LayoutTooLarge {
                extent,
                limit: MAX_WORLD_EXTENT,
            });
        }

        if let Some(q) = self.quotas.iter().find(|q| q.category.is_reserved()) {
            return Err(ConfigError::ReservedCategoryInQuota {
                category: q.category,
            });
        }

        Ok(())
    }
}
