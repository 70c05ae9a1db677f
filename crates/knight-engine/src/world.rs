use crate::api::config::GameConfig;
use crate::api::types::GameEvent;
use crate::components::player::Player;
use crate::input::state::InputSnapshot;
use crate::level::store::{LevelError, LevelStore};
use crate::level::template::LevelState;
use crate::systems::{self, emit};

/// Read-only numbers the host shows in its HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub health: u32,
    pub max_health: u32,
    pub coins_collected: u32,
    pub coin_total: u32,
    pub level_index: usize,
}

/// The whole game session: one player plus the live copy of the current level.
/// Mutated only inside [`World::step`] and the explicit transition methods.
pub struct World {
    pub config: GameConfig,
    store: LevelStore,
    /// Live platforms, coins and enemies of the current level.
    pub level: LevelState,
    pub player: Player,
    /// Coins picked up in the current level. Never exceeds the level's coin count.
    pub coins_collected: u32,
    /// Ticks simulated since the world was created.
    pub tick: u64,
    /// Events emitted since the host last cleared them.
    pub events: Vec<GameEvent>,
}

impl World {
    /// Start at the first level of `store`.
    pub fn new(config: GameConfig, store: LevelStore) -> Self {
        let level = store.first_level();
        let player = Player::spawn(level.spawn, &config.player);
        log::info!(
            "world: starting level 0 of {} ({} coins, {} enemies)",
            store.len(),
            level.coins.len(),
            level.enemies.len()
        );
        Self {
            config,
            store,
            level,
            player,
            coins_collected: 0,
            tick: 0,
            events: Vec::with_capacity(32),
        }
    }

    /// World running the embedded campaign.
    pub fn builtin(config: GameConfig) -> Result<Self, LevelError> {
        Ok(Self::new(config, LevelStore::builtin()?))
    }

    /// Advance one fixed tick. Returns the level transition this tick caused, if any.
    pub fn step(&mut self, input: &InputSnapshot) -> Option<GameEvent> {
        systems::step::step(self, input)
    }

    pub fn level_index(&self) -> usize {
        self.level.index
    }

    pub fn coin_total(&self) -> u32 {
        self.level.coins.len() as u32
    }

    pub fn store(&self) -> &LevelStore {
        &self.store
    }

    pub fn hud(&self) -> Hud {
        Hud {
            health: self.player.health,
            max_health: self.player.max_health,
            coins_collected: self.coins_collected,
            coin_total: self.coin_total(),
            level_index: self.level.index,
        }
    }

    /// Replace live state with a fresh copy of level `index` and respawn the player.
    /// An index past the end falls back to the first level.
    pub fn enter_level(&mut self, index: usize) {
        self.level = match self.store.load_level(index) {
            Ok(level) => level,
            Err(e) => {
                log::warn!("world: {}; falling back to level 0", e);
                self.store.first_level()
            }
        };
        self.player = Player::spawn(self.level.spawn, &self.config.player);
        self.coins_collected = 0;
        let name = self.store.template(self.level.index).map_or("", |t| t.name.as_str());
        log::info!(
            "world: entered level {} \"{}\" ({} coins, {} enemies)",
            self.level.index,
            name,
            self.level.coins.len(),
            self.level.enemies.len()
        );
    }

    /// All coins collected: advance, or restart the last level as a win.
    pub(crate) fn complete_level(&mut self) -> GameEvent {
        let from = self.level.index;
        let event = if self.store.has_next_level(from) {
            self.enter_level(from + 1);
            GameEvent::LevelCompleted { from, to: from + 1 }
        } else {
            log::info!("world: campaign won on level {}", from);
            self.enter_level(from);
            GameEvent::GameWon { level: from }
        };
        emit(&mut self.events, event);
        event
    }

    /// Health reached zero: reload the current level with a full-health player.
    pub(crate) fn player_died(&mut self) -> GameEvent {
        let level = self.level.index;
        self.enter_level(level);
        let event = GameEvent::PlayerDied { level };
        emit(&mut self.events, event);
        event
    }

    /// Back to the first level (host restart button).
    pub fn restart_campaign(&mut self) -> GameEvent {
        self.enter_level(0);
        emit(&mut self.events, GameEvent::Restarted);
        GameEvent::Restarted
    }

    /// Swap in a new campaign and start it from the first level.
    pub fn replace_store(&mut self, store: LevelStore) {
        self.store = store;
        self.enter_level(0);
    }

    /// Apply new config. The current level restarts so tuning applies to a fresh player.
    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config;
        let index = self.level.index;
        self.enter_level(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::builtin(GameConfig::default()).unwrap()
    }

    #[test]
    fn starts_on_first_level() {
        let w = world();
        assert_eq!(w.level_index(), 0);
        assert_eq!(w.coins_collected, 0);
        assert_eq!(w.player.body.pos, w.level.spawn);
        assert_eq!(w.hud().health, w.config.player.max_health);
    }

    #[test]
    fn completing_advances_level() {
        let mut w = world();
        w.coins_collected = w.coin_total();
        let event = w.complete_level();
        assert_eq!(event, GameEvent::LevelCompleted { from: 0, to: 1 });
        assert_eq!(w.level_index(), 1);
        assert_eq!(w.coins_collected, 0);
        assert_eq!(w.events.last(), Some(&event));
    }

    #[test]
    fn completing_last_level_wins_and_restarts_it() {
        let mut w = world();
        let last = w.store().len() - 1;
        w.enter_level(last);
        w.level.enemies[0].kill();
        w.level.coins[0].collect();
        w.coins_collected = 1;
        w.player.health = 1;

        let event = w.complete_level();
        assert_eq!(event, GameEvent::GameWon { level: last });
        assert_eq!(w.level_index(), last);
        assert_eq!(w.coins_collected, 0);
        assert!(w.level.enemies[0].alive);
        assert!(!w.level.coins[0].collected);
        assert_eq!(w.player.health, w.player.max_health);
        assert_eq!(w.player.body.pos, w.level.spawn);
    }

    #[test]
    fn death_reloads_current_level() {
        let mut w = world();
        w.enter_level(1);
        w.level.coins[0].collect();
        w.coins_collected = 1;
        let event = w.player_died();
        assert_eq!(event, GameEvent::PlayerDied { level: 1 });
        assert_eq!(w.level_index(), 1);
        assert_eq!(w.coins_collected, 0);
        assert!(!w.level.coins[0].collected);
    }

    #[test]
    fn bad_index_falls_back_to_first_level() {
        let mut w = world();
        w.enter_level(99);
        assert_eq!(w.level_index(), 0);
    }

    #[test]
    fn set_config_respawns_with_new_tuning() {
        let mut w = world();
        let mut config = GameConfig::default();
        config.player.max_health = 9;
        w.set_config(config);
        assert_eq!(w.player.health, 9);
        assert_eq!(w.player.max_health, 9);
    }

    #[test]
    fn restart_goes_back_to_level_zero() {
        let mut w = world();
        w.enter_level(2);
        assert_eq!(w.restart_campaign(), GameEvent::Restarted);
        assert_eq!(w.level_index(), 0);
    }
}
