use glam::Vec2;
use crate::core::geometry::Rect;

/// Position/velocity/size shared by everything that moves.
/// Units are world units and world units per tick (no dt scaling).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    /// Top-left corner.
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl KinematicBody {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    /// Advance one tick: gravity goes into velocity first, then velocity into position.
    pub fn integrate(&mut self, gravity: f32) {
        self.vel.y += gravity;
        self.pos += self.vel;
    }

    /// Move without touching velocity (scripted motion).
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Y of the bottom edge.
    pub fn foot(&self) -> f32 {
        self.rect().bottom()
    }

    /// Snap the bottom edge onto `top` and stop vertical motion.
    pub fn land_on(&mut self, top: f32) {
        self.pos.y = top - self.size.y;
        self.vel.y = 0.0;
    }

    /// Whether the body is falling (or resting) and its foot crossed `top` during
    /// the last integration. `tolerance` lets a foot that started slightly below
    /// the top still count as crossing.
    pub fn crossed_top(&self, top: f32, tolerance: f32) -> bool {
        if self.vel.y < 0.0 {
            return false;
        }
        let foot = self.foot();
        let prev_foot = foot - self.vel.y;
        foot >= top && prev_foot <= top + tolerance
    }

    /// Horizontal span overlap with `[x, x + w)`.
    pub fn spans_x(&self, x: f32, w: f32) -> bool {
        self.pos.x < x + w && self.pos.x + self.size.x > x
    }
}
