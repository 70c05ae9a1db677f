use bytemuck::{Pod, Zeroable};

/// Something that happened during a tick. Level transitions are events, not
/// errors: they are expected and drive normal control flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Jumped { airborne: bool },
    AttackStarted,
    /// `index` is the enemy's slot in the level's enemy list.
    EnemyDefeated { index: usize },
    CoinCollected { index: usize, collected: u32, total: u32 },
    PlayerHurt { health: u32 },
    /// Health hit 0; `level` was reloaded.
    PlayerDied { level: usize },
    /// All coins collected; moved on to level `to`.
    LevelCompleted { from: usize, to: usize },
    /// All coins collected on the last level; `level` restarted fresh.
    GameWon { level: usize },
    /// Host asked for a campaign restart.
    Restarted,
}

/// Event kinds as written on the wire.
pub mod event_kind {
    pub const JUMPED: f32 = 1.0;
    pub const ATTACK_STARTED: f32 = 2.0;
    pub const ENEMY_DEFEATED: f32 = 3.0;
    pub const COIN_COLLECTED: f32 = 4.0;
    pub const PLAYER_HURT: f32 = 5.0;
    pub const PLAYER_DIED: f32 = 6.0;
    pub const LEVEL_COMPLETED: f32 = 7.0;
    pub const GAME_WON: f32 = 8.0;
    pub const RESTARTED: f32 = 9.0;
}

impl GameEvent {
    /// Whether this event replaced the live level.
    pub fn is_transition(&self) -> bool {
        matches!(
            self,
            GameEvent::PlayerDied { .. }
                | GameEvent::LevelCompleted { .. }
                | GameEvent::GameWon { .. }
                | GameEvent::Restarted
        )
    }

    /// Flatten into the 4-float record the host reads.
    pub fn to_record(&self) -> EventRecord {
        use event_kind::*;
        let (kind, a, b, c) = match *self {
            GameEvent::Jumped { airborne } => (JUMPED, airborne as u8 as f32, 0.0, 0.0),
            GameEvent::AttackStarted => (ATTACK_STARTED, 0.0, 0.0, 0.0),
            GameEvent::EnemyDefeated { index } => (ENEMY_DEFEATED, index as f32, 0.0, 0.0),
            GameEvent::CoinCollected { index, collected, total } => {
                (COIN_COLLECTED, index as f32, collected as f32, total as f32)
            }
            GameEvent::PlayerHurt { health } => (PLAYER_HURT, health as f32, 0.0, 0.0),
            GameEvent::PlayerDied { level } => (PLAYER_DIED, level as f32, 0.0, 0.0),
            GameEvent::LevelCompleted { from, to } => (LEVEL_COMPLETED, from as f32, to as f32, 0.0),
            GameEvent::GameWon { level } => (GAME_WON, level as f32, 0.0, 0.0),
            GameEvent::Restarted => (RESTARTED, 0.0, 0.0, 0.0),
        };
        EventRecord { kind, a, b, c }
    }
}

/// A game event as communicated from Rust to TypeScript.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    pub const FLOATS: usize = 4;
}
