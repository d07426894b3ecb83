//! Tunable simulation parameters.
//!
//! Defaults mirror `constants.rs`. A JSON file may override any subset of the
//! fields; anything it leaves out keeps its default value.

use super::constants::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name looked up inside the platform config directory.
pub const TUNING_FILE_NAME: &str = "tuning.json";

/// Every constant the simulation reads. Field units throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: f64,
    pub field_height: f64,
    pub ground_y: f64,

    pub actor_x: f64,
    pub actor_width: f64,
    pub actor_height: f64,

    pub gravity: f64,
    pub jump_velocity: f64,

    pub base_speed: f64,
    pub speed_ramp_rate: f64,

    pub spawn_interval_base: u32,
    pub spawn_interval_min: u32,
    pub spawn_interval_slope: f64,

    /// Inclusive lower bound of obstacle width.
    pub obstacle_min_width: u32,
    /// Exclusive upper bound of obstacle width.
    pub obstacle_max_width: u32,
    pub obstacle_min_height: u32,
    pub obstacle_max_height: u32,
    pub obstacle_spawn_offset: f64,
    pub obstacle_prune_margin: f64,

    pub score_base_increment: f64,
    pub score_speed_bonus_factor: f64,
    pub pass_bonus: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_y: GROUND_Y,

            actor_x: ACTOR_X,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,

            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            base_speed: BASE_SPEED,
            speed_ramp_rate: SPEED_RAMP_RATE,

            spawn_interval_base: SPAWN_INTERVAL_BASE,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_interval_slope: SPAWN_INTERVAL_SLOPE,

            obstacle_min_width: OBSTACLE_MIN_WIDTH,
            obstacle_max_width: OBSTACLE_MAX_WIDTH,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,
            obstacle_spawn_offset: OBSTACLE_SPAWN_OFFSET,
            obstacle_prune_margin: OBSTACLE_PRUNE_MARGIN,

            score_base_increment: SCORE_BASE_INCREMENT,
            score_speed_bonus_factor: SCORE_SPEED_BONUS_FACTOR,
            pass_bonus: PASS_BONUS,
        }
    }
}

/// Where the active tuning came from (for the startup log line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuningSource {
    Defaults,
    File(PathBuf),
}

impl fmt::Display for TuningSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningSource::Defaults => write!(f, "built-in defaults"),
            TuningSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn invalid(message: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message.into())
}

impl Tuning {
    /// Actor y when standing on the ground line.
    pub fn ground_rest_y(&self) -> f64 {
        self.ground_y - self.actor_height
    }

    /// Apex of a jump above the ground-resting position (continuous approximation).
    pub fn jump_peak_height(&self) -> f64 {
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let tuning: Tuning = serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Pretty JSON, used by `--print-config`.
    pub fn to_json(&self) -> io::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| invalid(e.to_string()))
    }

    /// Default tuning file location for this platform.
    pub fn default_path() -> io::Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "jump-runner").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;
        Ok(project_dirs.config_dir().join(TUNING_FILE_NAME))
    }

    /// Resolve the tuning for a session.
    ///
    /// An explicit path must load. Without one, the platform default file is
    /// used when present, otherwise the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> io::Result<(Self, TuningSource)> {
        if let Some(path) = explicit {
            let tuning = Self::load_logged(path)?;
            return Ok((tuning, TuningSource::File(path.to_path_buf())));
        }

        match Self::default_path() {
            Ok(path) if path.exists() => {
                let tuning = Self::load_logged(&path)?;
                Ok((tuning, TuningSource::File(path)))
            }
            _ => Ok((Self::default(), TuningSource::Defaults)),
        }
    }

    fn load_logged(path: &Path) -> io::Result<Self> {
        Self::load(path).map_err(|e| {
            log::warn!("Failed to load tuning from {}: {}", path.display(), e);
            e
        })
    }

    /// Reject values that would break the simulation invariants.
    pub fn validate(&self) -> io::Result<()> {
        let floats = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ground_y", self.ground_y),
            ("actor_x", self.actor_x),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("base_speed", self.base_speed),
            ("speed_ramp_rate", self.speed_ramp_rate),
            ("spawn_interval_slope", self.spawn_interval_slope),
            ("obstacle_spawn_offset", self.obstacle_spawn_offset),
            ("obstacle_prune_margin", self.obstacle_prune_margin),
            ("score_base_increment", self.score_base_increment),
            ("score_speed_bonus_factor", self.score_speed_bonus_factor),
            ("pass_bonus", self.pass_bonus),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{} must be a finite number", name)));
        }

        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err(invalid("field dimensions must be positive"));
        }
        if self.ground_y <= 0.0 || self.ground_y > self.field_height {
            return Err(invalid("ground_y must lie inside the field"));
        }
        if self.actor_width <= 0.0 || self.actor_height <= 0.0 {
            return Err(invalid("actor dimensions must be positive"));
        }
        if self.actor_x < 0.0 || self.actor_x + self.actor_width > self.field_width {
            return Err(invalid("actor must fit horizontally inside the field"));
        }
        if self.ground_rest_y() < 0.0 {
            return Err(invalid("actor is taller than the space above the ground"));
        }
        if self.gravity <= 0.0 {
            return Err(invalid("gravity must be positive"));
        }
        if self.jump_velocity >= 0.0 {
            return Err(invalid("jump_velocity must be negative (upward)"));
        }
        if self.base_speed <= 0.0 {
            return Err(invalid("base_speed must be positive"));
        }
        if self.speed_ramp_rate < 0.0 {
            return Err(invalid("speed_ramp_rate must not be negative"));
        }
        if self.spawn_interval_min == 0 {
            return Err(invalid("spawn_interval_min must be at least 1"));
        }
        if self.spawn_interval_min > self.spawn_interval_base {
            return Err(invalid(
                "spawn_interval_min must not exceed spawn_interval_base",
            ));
        }
        if self.spawn_interval_slope < 0.0 {
            return Err(invalid("spawn_interval_slope must not be negative"));
        }
        if self.obstacle_min_width == 0 || self.obstacle_min_width >= self.obstacle_max_width {
            return Err(invalid("obstacle width range must be non-empty and positive"));
        }
        if self.obstacle_min_height == 0 || self.obstacle_min_height >= self.obstacle_max_height {
            return Err(invalid("obstacle height range must be non-empty and positive"));
        }
        if self.obstacle_max_height as f64 > self.ground_y {
            return Err(invalid("obstacles must fit above the ground line"));
        }
        if self.obstacle_spawn_offset < 0.0 || self.obstacle_prune_margin < 0.0 {
            return Err(invalid("obstacle spawn offset and prune margin must not be negative"));
        }
        if self.score_base_increment < 0.0
            || self.score_speed_bonus_factor < 0.0
            || self.pass_bonus < 0.0
        {
            return Err(invalid("score parameters must not be negative"));
        }
        if self.jump_peak_height() <= self.obstacle_max_height as f64 {
            return Err(invalid(format!(
                "jump apex {:.1} cannot clear obstacles up to {} tall",
                self.jump_peak_height(),
                self.obstacle_max_height
            )));
        }

        Ok(())
    }
}
