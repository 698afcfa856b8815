//! Arena settings
//!
//! Loaded from a JSON file; every field falls back to its default, so a file
//! only needs the values it wants to change.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::color::{PASTEL_PALETTE, Rgb};
use crate::sim::zone::DeleteZone;

/// Settings load/validation errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File could not be read or written
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
    /// File is not valid settings JSON
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Values parsed but make no sense
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Inclusive `[min, max]` range for random spawning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRange {
    pub min: f32,
    pub max: f32,
}

impl SpawnRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Finite bounds with `min <= max`
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Random ball spawning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    /// Spawn area, x coordinate
    pub x: SpawnRange,
    /// Spawn area, y coordinate
    pub y: SpawnRange,
    /// Launch speed (units/s), rounded to whole units
    pub speed: SpawnRange,
    /// Ball radius, rounded to whole units
    pub radius: SpawnRange,
    /// Colors to pick from
    pub palette: Vec<Rgb>,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            x: SpawnRange::new(80.0, 600.0),
            y: SpawnRange::new(80.0, 350.0),
            speed: SpawnRange::new(60.0, 160.0),
            radius: SpawnRange::new(14.0, 26.0),
            palette: PASTEL_PALETTE.to_vec(),
        }
    }
}

/// Arena settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub world_width: f32,
    pub world_height: f32,
    pub delete_zone: DeleteZone,
    /// Mouse suction radius
    pub suction_radius: f32,
    /// Default emission speed
    pub spit_speed: f32,
    /// Emission direction used by the driver on click
    pub spit_direction: Vec2,
    /// Fixed simulation timestep (seconds)
    pub sim_dt: f32,
    /// Maximum fixed steps per rendered frame
    pub max_substeps: u32,
    /// Seed for random spawning
    pub seed: u64,
    pub spawn: SpawnSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            delete_zone: DeleteZone::bottom_bowl(
                WORLD_WIDTH,
                WORLD_HEIGHT,
                DELETE_ZONE_HEIGHT,
                DELETE_ZONE_SIDE_MARGIN,
                DELETE_ZONE_BOTTOM_MARGIN,
            ),
            suction_radius: SUCTION_RADIUS,
            spit_speed: SPIT_SPEED,
            // Slight lean to the left, like leaving an arch
            spit_direction: Vec2::new(-0.1, -1.0),
            sim_dt: SIM_DT,
            max_substeps: MAX_SUBSTEPS,
            seed: 0x5EED,
            spawn: SpawnSettings::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(msg: &str) -> Result<(), SettingsError> {
            Err(SettingsError::Invalid(msg.to_string()))
        }

        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return invalid("world width and height must be positive");
        }
        if !(self.sim_dt > 0.0 && self.sim_dt.is_finite()) {
            return invalid("sim_dt must be positive");
        }
        if self.max_substeps == 0 {
            return invalid("max_substeps must be at least 1");
        }
        if !(self.suction_radius >= 0.0) {
            return invalid("suction_radius must not be negative");
        }
        if !(self.spit_speed >= 0.0) {
            return invalid("spit_speed must not be negative");
        }

        let spawn = &self.spawn;
        if ![spawn.x, spawn.y, spawn.speed, spawn.radius]
            .iter()
            .all(SpawnRange::is_valid)
        {
            return invalid("spawn ranges need finite min <= max");
        }
        if spawn.radius.min <= 0.0 {
            return invalid("spawn radius must be positive");
        }
        if spawn.palette.is_empty() {
            return invalid("spawn palette must not be empty");
        }
        Ok(())
    }
}
