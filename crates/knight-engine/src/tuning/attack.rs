use serde::{Deserialize, Serialize};

/// Melee swing timing and reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackTuning {
    /// Ticks the hitbox stays live.
    pub duration: u32,
    /// Ticks from activation until the next swing may start.
    pub cooldown: u32,
    pub hitbox_width: f32,
    pub hitbox_height: f32,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            duration: 15,
            cooldown: 30,
            hitbox_width: 50.0,
            hitbox_height: 20.0,
        }
    }
}
