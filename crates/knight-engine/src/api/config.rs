use std::fmt;
use serde::{Deserialize, Serialize};
use crate::input::state::KeyBindings;
use crate::tuning::{AttackTuning, PickupTuning, PlayerTuning};

/// Configuration for the engine and the game it runs.
/// Every field has a default, so a host JSON only needs the overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Most simulation ticks a single host frame may run (default: 10).
    pub max_steps_per_frame: u32,
    /// World width in game units. The player is kept inside `[0, world_width]`.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Downward acceleration in units per tick² (Y-down).
    pub gravity: f32,
    pub keys: KeyBindings,
    pub player: PlayerTuning,
    pub attack: AttackTuning,
    pub pickup: PickupTuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            world_width: 960.0,
            world_height: 540.0,
            gravity: 0.8,
            keys: KeyBindings::default(),
            player: PlayerTuning::default(),
            attack: AttackTuning::default(),
            pickup: PickupTuning::default(),
        }
    }
}

/// Errors from loading host config.
#[derive(Debug)]
pub enum ConfigError {
    ParseError(serde_json::Error),
    ValidationError(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::ParseError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(e) => write!(f, "config parse error: {}", e),
            ConfigError::ValidationError(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ParseError(e) => Some(e),
            ConfigError::ValidationError(_) => None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(ConfigError::ValidationError)?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        positive(self.fixed_dt, "fixed_dt")?;
        if self.max_steps_per_frame == 0 {
            return Err("max_steps_per_frame must be at least 1".into());
        }
        positive(self.world_width, "world_width")?;
        positive(self.world_height, "world_height")?;
        positive(self.gravity, "gravity")?;

        let player = &self.player;
        positive(player.width, "player.width")?;
        positive(player.height, "player.height")?;
        positive(player.speed, "player.speed")?;
        positive(player.jump_power, "player.jump_power")?;
        if player.max_jumps == 0 {
            return Err("player.max_jumps must be at least 1".into());
        }
        if player.max_health == 0 {
            return Err("player.max_health must be at least 1".into());
        }
        if !player.landing_tolerance.is_finite() || player.landing_tolerance < 0.0 {
            return Err(format!("player.landing_tolerance: invalid value {}", player.landing_tolerance));
        }
        if player.width > self.world_width {
            return Err(format!(
                "player.width {} exceeds world_width {}",
                player.width, self.world_width
            ));
        }

        if self.attack.duration == 0 {
            return Err("attack.duration must be at least 1".into());
        }
        positive(self.attack.hitbox_width, "attack.hitbox_width")?;
        positive(self.attack.hitbox_height, "attack.hitbox_height")?;
        positive(self.pickup.coin_radius, "pickup.coin_radius")?;
        Ok(())
    }
}

fn positive(v: f32, field: &str) -> Result<(), String> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(format!("{}: must be positive and finite, got {}", field, v))
    }
}
