use crate::api::types::{EventRecord, GameEvent};
use crate::bridge::protocol::*;
use crate::core::geometry::Rect;
use crate::world::World;

/// Flat f32 frame snapshot the host reads after each tick.
/// Rebuilt in place every frame; the allocation is reused.
pub struct SnapshotBuffer {
    data: Vec<f32>,
    layout: SnapshotLayout,
}

impl SnapshotBuffer {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(256),
            layout: SnapshotLayout::new(0, 0, 0),
        }
    }

    /// Serialize everything the renderer and HUD need from `world`.
    pub fn write(&mut self, world: &World) {
        let level = &world.level;
        let player = &world.player;
        let config = &world.config;
        let layout = SnapshotLayout::new(level.enemies.len(), level.platforms.len(), level.coins.len());

        self.data.clear();
        self.data.resize(HEADER_FLOATS, 0.0);
        let header = &mut self.data[..HEADER_FLOATS];
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_TICK] = world.tick as f32;
        header[HEADER_LEVEL_INDEX] = level.index as f32;
        header[HEADER_COINS_COLLECTED] = world.coins_collected as f32;
        header[HEADER_COIN_TOTAL] = world.coin_total() as f32;
        header[HEADER_HEALTH] = player.health as f32;
        header[HEADER_MAX_HEALTH] = player.max_health as f32;
        header[HEADER_ENEMY_COUNT] = layout.enemy_count as f32;
        header[HEADER_PLATFORM_COUNT] = layout.platform_count as f32;
        header[HEADER_COIN_COUNT] = layout.coin_count as f32;
        header[HEADER_WORLD_WIDTH] = config.world_width;
        header[HEADER_WORLD_HEIGHT] = config.world_height;
        header[HEADER_FLOOR_Y] = level.floor_y;
        header[HEADER_ENEMY_OFFSET] = layout.enemy_offset as f32;
        header[HEADER_PLATFORM_OFFSET] = layout.platform_offset as f32;
        header[HEADER_COIN_OFFSET] = layout.coin_offset as f32;

        let body = &player.body;
        let record = PlayerRecord {
            x: body.pos.x,
            y: body.pos.y,
            w: body.size.x,
            h: body.size.y,
            vx: body.vel.x,
            vy: body.vel.y,
            facing: player.facing.sign(),
            attacking: player.attack.active as u8 as f32,
            attack_timer: player.attack.timer as f32,
            invincibility: player.invincibility as f32,
            grounded: player.grounded as u8 as f32,
            jumps_remaining: player.jumps_remaining as f32,
        };
        self.data.extend_from_slice(bytemuck::cast_slice(&[record]));

        let hitbox = player.attack_hitbox(&config.attack).unwrap_or_default();
        self.data.extend_from_slice(bytemuck::cast_slice(&[hitbox]));

        for enemy in &level.enemies {
            let r = enemy.rect();
            let record = EnemyRecord {
                x: r.x,
                y: r.y,
                w: r.w,
                h: r.h,
                alive: enemy.alive as u8 as f32,
                heading: enemy.heading,
            };
            self.data.extend_from_slice(bytemuck::cast_slice(&[record]));
        }

        let platforms: Vec<Rect> = level.platforms.iter().map(|p| p.rect).collect();
        self.data.extend_from_slice(bytemuck::cast_slice(&platforms));

        for coin in &level.coins {
            let record = CoinRecord {
                x: coin.pos.x,
                y: coin.pos.y,
                radius: config.pickup.coin_radius,
                collected: coin.collected as u8 as f32,
            };
            self.data.extend_from_slice(bytemuck::cast_slice(&[record]));
        }

        debug_assert_eq!(self.data.len(), layout.total_floats);
        self.layout = layout;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Raw pointer for direct reads from WASM memory.
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn layout(&self) -> &SnapshotLayout {
        &self.layout
    }
}

impl Default for SnapshotBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat event records for the host, rebuilt each frame.
pub struct EventBuffer {
    records: Vec<EventRecord>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(32),
        }
    }

    pub fn write(&mut self, events: &[GameEvent]) {
        self.records.clear();
        self.records.extend(events.iter().map(GameEvent::to_record));
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.records.as_ptr() as *const f32
    }

    /// Number of records (each `EventRecord::FLOATS` floats).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for EventBuffer {
    fn default() -> Self {
        Self::new()
    }
}
