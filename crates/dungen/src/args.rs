//! Command-line arguments and config assembly

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use dg_core::dungeon::RoomCategory;
use dg_core::{CategoryQuota, ExpansionPolicy, GeneratorConfig};

use crate::error::CliError;

/// Generate a grid-graph dungeon layout and print it
#[derive(Debug, Parser)]
#[command(name = "dungen", version, about)]
pub struct Args {
    /// JSON configuration file; flags given on the command line override it
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Map width in tiles
    #[arg(long)]
    pub width: Option<i32>,

    /// Map height in tiles
    #[arg(long)]
    pub height: Option<i32>,

    /// Number of rooms to aim for
    #[arg(long, short = 'n')]
    pub rooms: Option<usize>,

    #[arg(long)]
    pub min_room_width: Option<i32>,

    #[arg(long)]
    pub max_room_width: Option<i32>,

    #[arg(long)]
    pub min_room_height: Option<i32>,

    #[arg(long)]
    pub max_room_height: Option<i32>,

    /// Gap between grid cells, added to the maximum room size
    #[arg(long, allow_hyphen_values = true)]
    pub margin: Option<i32>,

    /// Category quotas, e.g. `shop=1,heal=2,exit=1`
    #[arg(long, short = 'q', value_delimiter = ',', value_parser = parse_quota)]
    pub quota: Option<Vec<CategoryQuota>>,

    /// Try every direction from each frontier room instead of stopping at the first
    #[arg(long)]
    pub exhaustive: bool,

    /// Reject rooms that extend past the map edges
    #[arg(long)]
    pub confine: bool,

    /// RNG seed; random when omitted
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    /// Number of passes to run; only the last is printed
    #[arg(long, default_value_t = 1)]
    pub passes: u32,

    /// Print JSON instead of an ASCII map
    #[arg(long)]
    pub json: bool,

    /// Log generation details (same as RUST_LOG=debug)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Parse `category=count`
pub fn parse_quota(s: &str) -> Result<CategoryQuota, String> {
    let (name, count) = s
        .split_once('=')
        .ok_or_else(|| format!("expected category=count, got `{}`", s))?;
    let category = RoomCategory::from_str(name.trim())
        .map_err(|_| format!("unknown room category `{}`", name.trim()))?;
    let minimum = count
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad count in `{}`: {}", s, e))?;
    Ok(CategoryQuota::new(category, minimum))
}

impl Args {
    /// Base config (file or defaults) with command-line overrides applied
    pub fn generator_config(&self) -> Result<GeneratorConfig, CliError> {
        let mut cfg = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&text).map_err(|source| CliError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            None => GeneratorConfig::default(),
        };

        if let Some(w) = self.width {
            cfg.map_width = w;
        }
        if let Some(h) = self.height {
            cfg.map_height = h;
        }
        if let Some(n) = self.rooms {
            cfg.target_rooms = n;
        }
        if let Some(v) = self.min_room_width {
            cfg.min_room_width = v;
        }
        if let Some(v) = self.max_room_width {
            cfg.max_room_width = v;
        }
        if let Some(v) = self.min_room_height {
            cfg.min_room_height = v;
        }
        if let Some(v) = self.max_room_height {
            cfg.max_room_height = v;
        }
        if let Some(m) = self.margin {
            cfg.margin = m;
        }
        if let Some(q) = &self.quota {
            cfg.quotas = q.clone();
        }
        if self.exhaustive {
            cfg.expansion = ExpansionPolicy::Exhaustive;
        }
        if self.confine {
            cfg.confine_to_map = true;
        }

        Ok(cfg)
    }
}
