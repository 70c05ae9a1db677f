use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupTuning {
    /// Half-extent of the square pickup box around a coin's center.
    pub coin_radius: f32,
}

impl Default for PickupTuning {
    fn default() -> Self {
        Self { coin_radius: 10.0 }
    }
}
