//! The per-tick simulation step.
//!
//! Order (load-bearing, e.g. the hitbox uses post-movement facing and position):
//!   1. horizontal intent      5. platform landing
//!   2. jump intent            6. attack timer decay
//!   3. attack intent          7. attack hits
//!   4. gravity + integration  8. coin pickup
//!                             9. invincibility decay
//!   then enemies: movement and contact damage.
//!
//! Level completion and death reload the level inline and end the tick, so
//! nothing runs against the freshly loaded level until the next tick.

use crate::api::types::GameEvent;
use crate::input::state::InputSnapshot;
use crate::systems::{enemy, pickup, player};
use crate::world::World;

/// Advance `world` by one tick. Returns the level transition fired, if any.
pub fn step(world: &mut World, input: &InputSnapshot) -> Option<GameEvent> {
    world.tick += 1;

    let config = &world.config;
    let knight = &mut world.player;
    let level = &mut world.level;
    let events = &mut world.events;

    player::apply_horizontal_intent(knight, input, &config.player);
    player::apply_jump_intent(knight, input, &config.player, events);
    player::apply_attack_intent(knight, input, &config.attack, events);
    knight.body.integrate(config.gravity);
    player::resolve_platforms(knight, &level.platforms, level.floor_y, config);
    knight.attack.tick();
    player::resolve_attack_hits(knight, &mut level.enemies, &config.attack, events);

    let completed = pickup::collect_coins(
        knight,
        &mut level.coins,
        config.pickup.coin_radius,
        &mut world.coins_collected,
        events,
    );
    if completed {
        return Some(world.complete_level());
    }

    player::tick_invincibility(knight);

    let died = enemy::update_enemies(
        &mut level.enemies,
        knight,
        config.gravity,
        level.floor_y,
        &config.player,
        events,
    );
    if died {
        return Some(world.player_died());
    }

    None
}
