use glam::Vec2;
use serde::{Deserialize, Serialize};
use crate::core::body::KinematicBody;
use crate::core::geometry::Rect;

/// How an enemy moves each tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnemyBehavior {
    /// Walk toward the player's x, bound to the floor by gravity.
    #[default]
    Chase,
    /// Walk back and forth between two x bounds (left edge of the body),
    /// bound to the floor by gravity.
    Patrol { min_x: f32, max_x: f32 },
    /// Home in on the player on both axes, ignoring gravity.
    Fly,
}

impl EnemyBehavior {
    pub fn uses_gravity(&self) -> bool {
        !matches!(self, EnemyBehavior::Fly)
    }
}

/// A live enemy. Dead enemies stay in the list (stable indices) but are
/// skipped by movement, collision and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: KinematicBody,
    /// Units per tick.
    pub speed: f32,
    pub behavior: EnemyBehavior,
    pub alive: bool,
    /// Last horizontal heading, ±1.
    pub heading: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, size: Vec2, speed: f32, behavior: EnemyBehavior) -> Self {
        Self {
            body: KinematicBody::new(pos, size),
            speed,
            behavior,
            alive: true,
            heading: 1.0,
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}
