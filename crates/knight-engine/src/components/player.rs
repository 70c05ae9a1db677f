use glam::Vec2;
use crate::core::body::KinematicBody;
use crate::core::geometry::Rect;
use crate::tuning::{AttackTuning, PlayerTuning};

/// Which way the knight is looking. Persists while no direction is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Melee swing state. At most one swing is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttackState {
    pub active: bool,
    /// Ticks left in the live window after the current one.
    pub timer: u32,
    /// Ticks until another swing may start.
    pub cooldown: u32,
}

impl AttackState {
    pub fn can_start(&self) -> bool {
        !self.active && self.cooldown == 0
    }

    pub fn start(&mut self, tuning: &AttackTuning) {
        self.active = true;
        self.timer = tuning.duration;
        self.cooldown = tuning.cooldown;
    }

    /// One tick of decay. The window closes on the tick after the timer hits zero,
    /// so a swing of duration `n` is live for exactly `n` ticks.
    pub fn tick(&mut self) {
        if self.active {
            if self.timer == 0 {
                self.active = false;
            } else {
                self.timer -= 1;
            }
        }
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}

/// The player-controlled knight.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: KinematicBody,
    pub facing: Facing,
    /// Always within `[0, max_health]`.
    pub health: u32,
    pub max_health: u32,
    /// Ticks of contact-damage immunity left.
    pub invincibility: u32,
    pub grounded: bool,
    pub jumps_remaining: u8,
    pub attack: AttackState,
}

impl Player {
    /// Fresh knight at `spawn` (top-left), full health, standing still.
    pub fn spawn(spawn: Vec2, tuning: &PlayerTuning) -> Self {
        Self {
            body: KinematicBody::new(spawn, Vec2::new(tuning.width, tuning.height)),
            facing: Facing::Right,
            health: tuning.max_health,
            max_health: tuning.max_health,
            invincibility: 0,
            grounded: false,
            jumps_remaining: tuning.max_jumps,
            attack: AttackState::default(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility > 0
    }

    /// Melee hitbox on the facing side, vertically centered on the body.
    /// `None` while no swing is active.
    pub fn attack_hitbox(&self, tuning: &AttackTuning) -> Option<Rect> {
        if !self.attack.active {
            return None;
        }
        let body = self.rect();
        let x = match self.facing {
            Facing::Right => body.right(),
            Facing::Left => body.x - tuning.hitbox_width,
        };
        let y = body.y + (body.h - tuning.hitbox_height) * 0.5;
        Some(Rect::new(x, y, tuning.hitbox_width, tuning.hitbox_height))
    }
}
