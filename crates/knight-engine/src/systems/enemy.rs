//! Enemy controller: movement per behavior, then contact damage.

use glam::Vec2;
use crate::api::types::GameEvent;
use crate::components::enemy::{Enemy, EnemyBehavior};
use crate::components::player::Player;
use crate::systems::emit;
use crate::tuning::PlayerTuning;

/// Move one living enemy for one tick.
pub fn move_enemy(enemy: &mut Enemy, target: Vec2, gravity: f32, floor_y: f32) {
    let center = enemy.body.center();
    match enemy.behavior {
        EnemyBehavior::Chase => {
            let dx = step_toward(center.x, target.x, enemy.speed);
            enemy.body.translate(Vec2::new(dx, 0.0));
            face(enemy, dx);
        }
        EnemyBehavior::Patrol { min_x, max_x } => {
            let dx = enemy.heading * enemy.speed;
            enemy.body.translate(Vec2::new(dx, 0.0));
            if enemy.body.pos.x <= min_x {
                enemy.body.pos.x = min_x;
                enemy.heading = 1.0;
            } else if enemy.body.pos.x >= max_x {
                enemy.body.pos.x = max_x;
                enemy.heading = -1.0;
            }
        }
        EnemyBehavior::Fly => {
            let delta = Vec2::new(
                step_toward(center.x, target.x, enemy.speed),
                step_toward(center.y, target.y, enemy.speed),
            );
            enemy.body.translate(delta);
            face(enemy, delta.x);
        }
    }

    if enemy.behavior.uses_gravity() {
        enemy.body.integrate(gravity);
        if enemy.body.foot() >= floor_y {
            enemy.body.land_on(floor_y);
        }
    }
}

/// Signed step of at most `speed` from `from` toward `to`; stops exactly on arrival.
fn step_toward(from: f32, to: f32, speed: f32) -> f32 {
    (to - from).clamp(-speed, speed)
}

fn face(enemy: &mut Enemy, dx: f32) {
    if dx != 0.0 {
        enemy.heading = dx.signum();
    }
}

/// Hurt the player if `enemy` touches them outside the invincibility window.
/// Returns true when this hit took the last point of health.
pub fn apply_contact_damage(
    enemy: &Enemy,
    player: &mut Player,
    tuning: &PlayerTuning,
    events: &mut Vec<GameEvent>,
) -> bool {
    if !enemy.alive || player.is_invincible() || !enemy.rect().overlaps(&player.rect()) {
        return false;
    }
    player.health = player.health.saturating_sub(1);
    player.invincibility = tuning.invincibility_ticks;
    emit(events, GameEvent::PlayerHurt { health: player.health });
    player.health == 0
}

/// Move every living enemy toward the player and apply contact damage.
/// Stops early and returns true if the player died.
pub fn update_enemies(
    enemies: &mut [Enemy],
    player: &mut Player,
    gravity: f32,
    floor_y: f32,
    tuning: &PlayerTuning,
    events: &mut Vec<GameEvent>,
) -> bool {
    for enemy in enemies.iter_mut().filter(|e| e.alive) {
        move_enemy(enemy, player.body.center(), gravity, floor_y);
        if apply_contact_damage(enemy, player, tuning, events) {
            return true;
        }
    }
    false
}
