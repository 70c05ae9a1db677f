use serde::{Deserialize, Serialize};

/// Movement, health and landing tuning for the knight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub width: f32,
    pub height: f32,

    /// Horizontal speed in units per tick while a direction is held.
    pub speed: f32,

    /// Upward launch speed. Applied as `vel.y = -jump_power`.
    pub jump_power: f32,

    /// Jumps available between landings. 1 = single jump, 2 = double jump.
    pub max_jumps: u8,

    pub max_health: u32,

    /// Ticks of contact-damage immunity after a hit.
    pub invincibility_ticks: u32,

    /// How far below a platform top the foot may start a tick and still land on it.
    pub landing_tolerance: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 50.0,
            speed: 5.0,
            jump_power: 15.0,
            max_jumps: 2,
            max_health: 5,
            invincibility_ticks: 60,
            landing_tolerance: 10.0,
        }
    }
}
