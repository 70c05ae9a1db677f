//! Level templates: the immutable source of truth for a level's layout.
//! Live state is always built fresh from these, never shared with them.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use crate::components::coin::Coin;
use crate::components::enemy::{Enemy, EnemyBehavior};
use crate::components::platform::Platform;

/// Validation limits for level data.
pub mod limits {
    /// Largest coordinate magnitude accepted.
    pub const MAX_COORD: f32 = 1_000_000.0;
    /// Most entities of any one kind in a level.
    pub const MAX_ENTITIES: usize = 1024;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointDef {
    pub x: f32,
    pub y: f32,
}

impl PointDef {
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyDef {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_enemy_size")]
    pub width: f32,
    #[serde(default = "default_enemy_size")]
    pub height: f32,
    /// Units per tick.
    pub speed: f32,
    #[serde(default)]
    pub behavior: EnemyBehavior,
}

fn default_enemy_size() -> f32 {
    40.0
}

/// One level's layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelTemplate {
    #[serde(default)]
    pub name: String,
    /// Player top-left at level start.
    pub spawn: PointDef,
    /// Y of the ground line. Everything gravity-bound rests on it.
    pub floor_y: f32,
    #[serde(default)]
    pub platforms: Vec<PlatformDef>,
    pub coins: Vec<PointDef>,
    #[serde(default)]
    pub enemies: Vec<EnemyDef>,
}

/// Live copies of everything a level spawns.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelState {
    pub index: usize,
    pub spawn: Vec2,
    pub floor_y: f32,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
}

impl LevelTemplate {
    /// Build fresh live entities for level `index`.
    pub fn instantiate(&self, index: usize) -> LevelState {
        LevelState {
            index,
            spawn: self.spawn.to_vec2(),
            floor_y: self.floor_y,
            platforms: self
                .platforms
                .iter()
                .map(|p| Platform::new(p.x, p.y, p.width, p.height))
                .collect(),
            coins: self.coins.iter().map(|c| Coin::new(c.to_vec2())).collect(),
            enemies: self
                .enemies
                .iter()
                .map(|e| {
                    Enemy::new(
                        Vec2::new(e.x, e.y),
                        Vec2::new(e.width, e.height),
                        e.speed,
                        e.behavior,
                    )
                })
                .collect(),
        }
    }

    /// Check the layout is playable. Returns a human-readable reason on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.coins.is_empty() {
            return Err("level has no coins and could never be completed".into());
        }
        if self.coins.len() > limits::MAX_ENTITIES
            || self.platforms.len() > limits::MAX_ENTITIES
            || self.enemies.len() > limits::MAX_ENTITIES
        {
            return Err(format!("more than {} entities of one kind", limits::MAX_ENTITIES));
        }
        validate_coord(self.floor_y, "floor_y")?;
        validate_point(&self.spawn, "spawn")?;

        for (i, p) in self.platforms.iter().enumerate() {
            let ctx = format!("platform[{}]", i);
            validate_coord(p.x, &ctx)?;
            validate_coord(p.y, &ctx)?;
            validate_size(p.width, p.height, &ctx)?;
        }
        for (i, c) in self.coins.iter().enumerate() {
            validate_point(c, &format!("coin[{}]", i))?;
        }
        for (i, e) in self.enemies.iter().enumerate() {
            let ctx = format!("enemy[{}]", i);
            validate_coord(e.x, &ctx)?;
            validate_coord(e.y, &ctx)?;
            validate_size(e.width, e.height, &ctx)?;
            if !e.speed.is_finite() || e.speed < 0.0 {
                return Err(format!("{}: invalid speed {}", ctx, e.speed));
            }
            if let EnemyBehavior::Patrol { min_x, max_x } = e.behavior {
                validate_coord(min_x, &ctx)?;
                validate_coord(max_x, &ctx)?;
                if min_x > max_x {
                    return Err(format!("{}: patrol min_x {} > max_x {}", ctx, min_x, max_x));
                }
            }
        }
        Ok(())
    }
}

fn validate_coord(v: f32, context: &str) -> Result<(), String> {
    if v.is_finite() && v.abs() <= limits::MAX_COORD {
        Ok(())
    } else {
        Err(format!("{}: invalid coordinate {}", context, v))
    }
}

fn validate_point(p: &PointDef, context: &str) -> Result<(), String> {
    validate_coord(p.x, context)?;
    validate_coord(p.y, context)
}

fn validate_size(w: f32, h: f32, context: &str) -> Result<(), String> {
    validate_coord(w, context)?;
    validate_coord(h, context)?;
    if w <= 0.0 || h <= 0.0 {
        return Err(format!("{}: non-positive size {}x{}", context, w, h));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> LevelTemplate {
        LevelTemplate {
            name: "test".into(),
            spawn: PointDef { x: 100.0, y: 410.0 },
            floor_y: 460.0,
            platforms: vec![PlatformDef { x: 200.0, y: 350.0, width: 120.0, height: 20.0 }],
            coins: vec![PointDef { x: 260.0, y: 320.0 }],
            enemies: vec![EnemyDef {
                x: 500.0,
                y: 420.0,
                width: 40.0,
                height: 40.0,
                speed: 1.5,
                behavior: EnemyBehavior::Chase,
            }],
        }
    }

    #[test]
    fn instantiate_copies_every_entity() {
        let state = template().instantiate(3);
        assert_eq!(state.index, 3);
        assert_eq!(state.platforms.len(), 1);
        assert_eq!(state.platforms[0].top(), 350.0);
        assert_eq!(state.coins[0].pos, Vec2::new(260.0, 320.0));
        assert!(!state.coins[0].collected);
        assert!(state.enemies[0].alive);
        assert_eq!(state.enemies[0].speed, 1.5);
    }

    #[test]
    fn valid_template_passes() {
        assert!(template().validate().is_ok());
    }

    #[test]
    fn zero_coins_rejected() {
        let mut t = template();
        t.coins.clear();
        assert!(t.validate().unwrap_err().contains("no coins"));
    }

    #[test]
    fn bad_platform_size_rejected() {
        let mut t = template();
        t.platforms[0].width = 0.0;
        assert!(t.validate().unwrap_err().contains("platform[0]"));
    }

    #[test]
    fn nan_rejected() {
        let mut t = template();
        t.spawn.x = f32::NAN;
        assert!(t.validate().is_err());
    }

    #[test]
    fn inverted_patrol_rejected() {
        let mut t = template();
        t.enemies[0].behavior = EnemyBehavior::Patrol { min_x: 500.0, max_x: 100.0 };
        assert!(t.validate().unwrap_err().contains("patrol"));
    }

    #[test]
    fn negative_speed_rejected() {
        let mut t = template();
        t.enemies[0].speed = -1.0;
        assert!(t.validate().is_err());
    }

    #[test]
    fn enemy_defaults_from_json() {
        let json = r#"{ "x": 10, "y": 20, "speed": 2 }"#;
        let def: EnemyDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.width, 40.0);
        assert_eq!(def.behavior, EnemyBehavior::Chase);

        let json = r#"{ "x": 10, "y": 20, "speed": 2, "behavior": { "kind": "patrol", "min_x": 0, "max_x": 50 } }"#;
        let def: EnemyDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.behavior, EnemyBehavior::Patrol { min_x: 0.0, max_x: 50.0 });
    }
}
