//! Player controller: input intent, landing, and the melee swing.
//! Called by the step in a fixed order; see `systems::step`.

use crate::api::config::GameConfig;
use crate::api::types::GameEvent;
use crate::components::enemy::Enemy;
use crate::components::platform::Platform;
use crate::components::player::{Facing, Player};
use crate::input::state::{Buttons, InputSnapshot};
use crate::systems::emit;
use crate::tuning::{AttackTuning, PlayerTuning};

/// Horizontal velocity is re-derived every tick, never accumulated.
/// Facing only changes while exactly one direction is held: with both held the
/// player stops and keeps the facing it had.
pub fn apply_horizontal_intent(player: &mut Player, input: &InputSnapshot, tuning: &PlayerTuning) {
    let left = input.is_held(Buttons::LEFT);
    let right = input.is_held(Buttons::RIGHT);
    player.body.vel.x = match (left, right) {
        (true, false) => {
            player.facing = Facing::Left;
            -tuning.speed
        }
        (false, true) => {
            player.facing = Facing::Right;
            tuning.speed
        }
        _ => 0.0,
    };
}

pub fn apply_jump_intent(
    player: &mut Player,
    input: &InputSnapshot,
    tuning: &PlayerTuning,
    events: &mut Vec<GameEvent>,
) {
    if !input.just_pressed(Buttons::JUMP) {
        return;
    }
    if !player.grounded && player.jumps_remaining == 0 {
        return;
    }
    let airborne = !player.grounded;
    player.body.vel.y = -tuning.jump_power;
    player.grounded = false;
    player.jumps_remaining = player.jumps_remaining.saturating_sub(1);
    emit(events, GameEvent::Jumped { airborne });
}

/// A swing starts only when none is active and the cooldown has run out.
pub fn apply_attack_intent(
    player: &mut Player,
    input: &InputSnapshot,
    tuning: &AttackTuning,
    events: &mut Vec<GameEvent>,
) {
    if input.just_pressed(Buttons::ATTACK) && player.attack.can_start() {
        player.attack.start(tuning);
        emit(events, GameEvent::AttackStarted);
    }
}

/// Land on platforms and the floor, then keep the player inside the world.
///
/// Platforms are one-way: only a descending foot that crossed the top this tick
/// lands. When several platforms match, the last one in the list wins.
/// A player left airborne without having jumped (walked off a ledge) loses the
/// ground jump, so only the air jumps remain.
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform], floor_y: f32, config: &GameConfig) {
    let tuning = &config.player;
    player.grounded = false;

    for platform in platforms {
        let r = platform.rect;
        if player.body.spans_x(r.x, r.w)
            && player.body.crossed_top(platform.top(), tuning.landing_tolerance)
        {
            land(player, platform.top(), tuning);
        }
    }

    if player.body.foot() >= floor_y {
        land(player, floor_y, tuning);
    }

    if !player.grounded {
        let air_jumps = tuning.max_jumps.saturating_sub(1);
        player.jumps_remaining = player.jumps_remaining.min(air_jumps);
    }

    let max_x = (config.world_width - player.body.size.x).max(0.0);
    player.body.pos.x = player.body.pos.x.clamp(0.0, max_x);
}

fn land(player: &mut Player, top: f32, tuning: &PlayerTuning) {
    player.body.land_on(top);
    player.grounded = true;
    player.jumps_remaining = tuning.max_jumps;
}

/// Kill every living enemy the swing touches. Runs on every tick of the window.
pub fn resolve_attack_hits(
    player: &Player,
    enemies: &mut [Enemy],
    tuning: &AttackTuning,
    events: &mut Vec<GameEvent>,
) {
    let Some(hitbox) = player.attack_hitbox(tuning) else {
        return;
    };
    for (index, enemy) in enemies.iter_mut().enumerate() {
        if enemy.alive && hitbox.overlaps(&enemy.rect()) {
            enemy.kill();
            emit(events, GameEvent::EnemyDefeated { index });
        }
    }
}

pub fn tick_invincibility(player: &mut Player) {
    player.invincibility = player.invincibility.saturating_sub(1);
}
