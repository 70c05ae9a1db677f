pub mod api;
pub mod bridge;
pub mod components;
pub mod core;
pub mod input;
pub mod level;
pub mod systems;
pub mod tuning;
pub mod world;

// Re-export key types at crate root for convenience
pub use api::config::{ConfigError, GameConfig};
pub use api::types::{event_kind, EventRecord, GameEvent};
pub use bridge::protocol::{SnapshotLayout, PROTOCOL_VERSION};
pub use bridge::snapshot::{EventBuffer, SnapshotBuffer};
pub use components::coin::Coin;
pub use components::enemy::{Enemy, EnemyBehavior};
pub use components::platform::Platform;
pub use components::player::{AttackState, Facing, Player};
pub use core::body::KinematicBody;
pub use core::geometry::{rects_overlap, Rect};
pub use core::time::FixedTimestep;
pub use input::queue::{custom, InputEvent, InputQueue};
pub use input::state::{Buttons, InputSnapshot, InputState, KeyBindings};
pub use level::store::{LevelError, LevelStore};
pub use level::template::{LevelState, LevelTemplate};
pub use tuning::{AttackTuning, PickupTuning, PlayerTuning};
pub use world::{Hud, World};
