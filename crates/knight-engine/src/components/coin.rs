use glam::Vec2;
use crate::core::geometry::Rect;

/// A collectible coin. `collected` only ever goes false → true within a level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    /// Center of the coin.
    pub pos: Vec2,
    pub collected: bool,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, collected: false }
    }

    /// Pickup box of half-extent `radius`.
    pub fn bounds(&self, radius: f32) -> Rect {
        Rect::around(self.pos, radius)
    }

    /// Mark as collected. Returns false if it already was.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}
