use crate::core::geometry::Rect;

/// Static one-way platform: solid from above, passable from below and the sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { rect: Rect::new(x, y, w, h) }
    }

    pub fn top(&self) -> f32 {
        self.rect.y
    }
}
