/// Frame snapshot layout.
/// Must stay in sync with the TypeScript renderer's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Player: 12 floats]
/// [Hitbox: 4 floats]            zeros while no swing is active
/// [Enemies: enemy_count × 6 floats]
/// [Platforms: platform_count × 4 floats]
/// [Coins: coin_count × 4 floats]
/// ```
///
/// Counts and section offsets are written into the header every frame, since
/// they change with the level. TypeScript reads them to slice the buffer.

use bytemuck::{Pod, Zeroable};
use crate::core::geometry::Rect;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_TICK: usize = 1;
pub const HEADER_LEVEL_INDEX: usize = 2;
pub const HEADER_COINS_COLLECTED: usize = 3;
pub const HEADER_COIN_TOTAL: usize = 4;
pub const HEADER_HEALTH: usize = 5;
pub const HEADER_MAX_HEALTH: usize = 6;
pub const HEADER_ENEMY_COUNT: usize = 7;
pub const HEADER_PLATFORM_COUNT: usize = 8;
pub const HEADER_COIN_COUNT: usize = 9;
pub const HEADER_WORLD_WIDTH: usize = 10;
pub const HEADER_WORLD_HEIGHT: usize = 11;
pub const HEADER_FLOOR_Y: usize = 12;
pub const HEADER_ENEMY_OFFSET: usize = 13;
pub const HEADER_PLATFORM_OFFSET: usize = 14;
pub const HEADER_COIN_OFFSET: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Player record (wire format, fixed layout).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PlayerRecord {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vx: f32,
    pub vy: f32,
    /// -1.0 left, 1.0 right.
    pub facing: f32,
    pub attacking: f32,
    pub attack_timer: f32,
    pub invincibility: f32,
    pub grounded: f32,
    pub jumps_remaining: f32,
}

impl PlayerRecord {
    pub const FLOATS: usize = 12;
}

/// Enemy record (wire format, fixed layout).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EnemyRecord {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// 1.0 alive, 0.0 dead (renderer skips).
    pub alive: f32,
    pub heading: f32,
}

impl EnemyRecord {
    pub const FLOATS: usize = 6;
}

/// Coin record (wire format, fixed layout). `x, y` is the center.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CoinRecord {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub collected: f32,
}

impl CoinRecord {
    pub const FLOATS: usize = 4;
}

/// Offset (in floats) where the player record begins.
pub const PLAYER_OFFSET: usize = HEADER_FLOATS;
/// Offset (in floats) where the hitbox rect begins.
pub const HITBOX_OFFSET: usize = PLAYER_OFFSET + PlayerRecord::FLOATS;
/// Offset (in floats) where the variable-length sections begin.
pub const ENTITIES_OFFSET: usize = HITBOX_OFFSET + Rect::FLOATS;

/// Section offsets for one frame, derived from the live entity counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotLayout {
    pub enemy_count: usize,
    pub platform_count: usize,
    pub coin_count: usize,

    /// Offset (in floats) where enemy data begins.
    pub enemy_offset: usize,
    /// Offset (in floats) where platform data begins.
    pub platform_offset: usize,
    /// Offset (in floats) where coin data begins.
    pub coin_offset: usize,

    /// Total buffer size in floats.
    pub total_floats: usize,
}

impl SnapshotLayout {
    pub fn new(enemy_count: usize, platform_count: usize, coin_count: usize) -> Self {
        let enemy_offset = ENTITIES_OFFSET;
        let platform_offset = enemy_offset + enemy_count * EnemyRecord::FLOATS;
        let coin_offset = platform_offset + platform_count * Rect::FLOATS;
        let total_floats = coin_offset + coin_count * CoinRecord::FLOATS;

        Self {
            enemy_count,
            platform_count,
            coin_count,
            enemy_offset,
            platform_offset,
            coin_offset,
            total_floats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sizes_match_float_counts() {
        assert_eq!(std::mem::size_of::<PlayerRecord>(), PlayerRecord::FLOATS * 4);
        assert_eq!(std::mem::size_of::<EnemyRecord>(), EnemyRecord::FLOATS * 4);
        assert_eq!(std::mem::size_of::<CoinRecord>(), CoinRecord::FLOATS * 4);
    }

    #[test]
    fn empty_level_layout() {
        let layout = SnapshotLayout::new(0, 0, 0);
        assert_eq!(layout.enemy_offset, 32);
        assert_eq!(layout.coin_offset, 32);
        assert_eq!(layout.total_floats, 32);
    }

    #[test]
    fn sections_are_contiguous() {
        let layout = SnapshotLayout::new(3, 5, 4);
        assert_eq!(layout.enemy_offset, ENTITIES_OFFSET);
        assert_eq!(layout.platform_offset, ENTITIES_OFFSET + 3 * 6);
        assert_eq!(layout.coin_offset, layout.platform_offset + 5 * 4);
        assert_eq!(layout.total_floats, layout.coin_offset + 4 * 4);
    }
}
