//! Gameplay tuning
//!
//! Every gameplay number lives in one struct so the feel of the game can be
//! adjusted without touching simulation code. An optional JSON file, named by
//! the `GAPWING_TUNING` environment variable, may override any subset of
//! fields at startup; everything it omits keeps its default.

use std::env;
use std::fs;

use serde::{Deserialize, Serialize};

/// Environment variable naming an optional JSON tuning file.
pub const TUNING_FILE_ENV: &str = "GAPWING_TUNING";

/// Gameplay constants. World units are arbitrary; the defaults put the
/// playfield 24 units tall with the player just left of center.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Downward acceleration, units per second squared
    pub gravity: f32,
    /// Upward velocity set (not added) by a flap
    pub flap_impulse: f32,
    /// Height the player hovers at before the first flap
    pub start_height: f32,
    /// Fixed horizontal position of the player
    pub player_x: f32,
    /// Radius of the player's collision sphere
    pub player_radius: f32,

    // === Playfield ===
    /// Ceiling; strictly above it the run ends
    pub upper_bound: f32,
    /// Floor; strictly below it the run ends
    pub lower_bound: f32,

    // === Pillars ===
    /// Leftward pillar speed, units per second
    pub pillar_speed: f32,
    /// Pillar thickness along x
    pub pillar_width: f32,
    /// Pillar thickness along z
    pub pillar_depth: f32,
    /// Vertical opening between the two bodies of a pillar
    pub gap_height: f32,
    /// How far the gap center may wander from mid-field, either way
    pub max_gap_offset: f32,
    /// X where new pillars appear
    pub spawn_x: f32,
    /// Distance the newest pillar travels before the next one spawns
    pub spawn_interval: f32,
    /// Retention cap; the oldest pillar is dropped beyond this
    pub max_pillars: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            // Player
            gravity: -18.0,
            flap_impulse: 9.5,
            start_height: 1.5,
            player_x: -2.0,
            player_radius: 0.6,

            // Playfield
            upper_bound: 12.0,
            lower_bound: -12.0,

            // Pillars
            pillar_speed: 8.0,
            pillar_width: 2.2,
            pillar_depth: 2.2,
            gap_height: 4.5,
            max_gap_offset: 3.0,
            spawn_x: 18.0,
            spawn_interval: 6.0,
            max_pillars: 10,
        }
    }
}

impl Tuning {
    /// Load overrides from the file named by `GAPWING_TUNING`.
    ///
    /// An unset variable means defaults. A file that cannot be read or parsed
    /// logs a warning and falls back to defaults rather than aborting.
    pub fn load_or_default() -> Self {
        let path = match env::var(TUNING_FILE_ENV) {
            Ok(path) => path,
            Err(_) => return Self::default(),
        };

        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides from {path}");
                    tuning
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {path}: {err}");
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Cannot read tuning file {path}: {err}");
                Self::default()
            }
        }
    }
}
