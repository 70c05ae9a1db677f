use knight_engine::{
    custom, EventBuffer, FixedTimestep, GameConfig, GameEvent, Hud, InputEvent, InputQueue,
    InputState, LevelError, LevelStore, SnapshotBuffer, World,
};

/// Wires the simulation to the host loop.
///
/// The browser crate keeps one `GameRunner` in a `thread_local!` and exports
/// free functions via `#[wasm_bindgen]`. Input is queued between frames and
/// folded in at the start of the next `tick`.
pub struct GameRunner {
    world: World,
    input: InputQueue,
    input_state: InputState,
    timestep: FixedTimestep,
    snapshot: SnapshotBuffer,
    events: EventBuffer,
}

impl GameRunner {
    /// Runner on the embedded campaign with default tuning.
    pub fn new() -> Result<Self, LevelError> {
        Ok(Self::with_world(World::builtin(GameConfig::default())?))
    }

    pub fn with_world(world: World) -> Self {
        let timestep = FixedTimestep::new(world.config.fixed_dt, world.config.max_steps_per_frame);
        let mut runner = Self {
            world,
            input: InputQueue::new(),
            input_state: InputState::new(),
            timestep,
            snapshot: SnapshotBuffer::new(),
            events: EventBuffer::new(),
        };
        runner.snapshot.write(&runner.world);
        runner
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: fold input, run the fixed ticks `dt` pays for,
    /// rebuild the snapshot and event buffers.
    pub fn tick(&mut self, dt: f32) {
        // Events are per host frame
        self.world.events.clear();

        for event in self.input.drain() {
            match event {
                InputEvent::Custom { kind, .. } if kind == custom::RESTART => {
                    self.input_state.clear();
                    self.timestep.reset();
                    self.world.restart_campaign();
                }
                InputEvent::Custom { kind, .. } => {
                    log::debug!("runner: ignoring custom event {}", kind);
                }
                key => self.input_state.apply(&key, &self.world.config.keys),
            }
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            let input = self.input_state.snapshot();
            self.world.step(&input);
        }

        self.snapshot.write(&self.world);
        self.events.write(&self.world.events);
    }

    /// Replace the campaign. Rejected JSON keeps the current one.
    pub fn load_levels(&mut self, json: &str) -> bool {
        match LevelStore::from_json(json) {
            Ok(store) => {
                log::info!("runner: loaded campaign with {} levels", store.len());
                self.timestep.reset();
                self.world.replace_store(store);
                self.snapshot.write(&self.world);
                true
            }
            Err(e) => {
                log::warn!("runner: rejected level data: {}", e);
                false
            }
        }
    }

    /// Replace config. JSON that fails to parse or validate keeps the current one.
    pub fn load_config(&mut self, json: &str) -> bool {
        match GameConfig::from_json(json) {
            Ok(config) => {
                self.timestep = FixedTimestep::new(config.fixed_dt, config.max_steps_per_frame);
                self.input_state.clear();
                self.world.set_config(config);
                self.snapshot.write(&self.world);
                true
            }
            Err(e) => {
                log::warn!("runner: rejected config: {}", e);
                false
            }
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn hud(&self) -> Hud {
        self.world.hud()
    }

    /// Events of the last frame.
    pub fn frame_events(&self) -> &[GameEvent] {
        &self.world.events
    }

    // ---- Pointer accessors for direct WASM memory reads ----

    pub fn snapshot_ptr(&self) -> *const f32 {
        self.snapshot.as_ptr()
    }

    pub fn snapshot_len(&self) -> u32 {
        self.snapshot.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr()
    }

    pub fn events_len(&self) -> u32 {
        self.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.world.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.world.config.world_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_engine::bridge::protocol::{HEADER_HEALTH, HEADER_TICK, PLAYER_OFFSET};

    const FRAME: f32 = 1.0 / 60.0;

    fn runner() -> GameRunner {
        GameRunner::new().unwrap()
    }

    #[test]
    fn new_runner_has_a_snapshot() {
        let r = runner();
        assert!(r.snapshot_len() > 0);
        assert_eq!(r.events_len(), 0);
        assert_eq!(r.world_width(), 960.0);
    }

    #[test]
    fn tick_runs_fixed_steps_and_rewrites_snapshot() {
        let mut r = runner();
        r.tick(FRAME * 3.5);
        let ticks = r.world().tick;
        assert!(ticks >= 3);

        let data = unsafe { std::slice::from_raw_parts(r.snapshot_ptr(), r.snapshot_len() as usize) };
        assert_eq!(data[HEADER_TICK], ticks as f32);
        assert_eq!(data[HEADER_HEALTH], 5.0);
    }

    #[test]
    fn frame_time_is_capped() {
        let mut r = runner();
        r.tick(10.0);
        assert!(r.world().tick <= 10);
    }

    #[test]
    fn bad_frame_time_runs_nothing() {
        let mut r = runner();
        r.tick(f32::NAN);
        r.tick(-1.0);
        assert_eq!(r.world().tick, 0);
    }

    #[test]
    fn key_press_moves_player() {
        let mut r = runner();
        let x0 = r.world().player.body.pos.x;
        r.push_input(InputEvent::KeyDown { key_code: 39 });
        r.tick(FRAME * 5.5);
        assert!(r.world().player.body.pos.x > x0);

        r.push_input(InputEvent::KeyUp { key_code: 39 });
        r.tick(FRAME * 1.5);
        let x1 = r.world().player.body.pos.x;
        r.tick(FRAME * 3.0);
        assert_eq!(r.world().player.body.pos.x, x1);
    }

    #[test]
    fn tap_between_frames_still_jumps_once() {
        let mut r = runner();
        r.tick(FRAME * 2.5);
        r.push_input(InputEvent::KeyDown { key_code: 32 });
        r.push_input(InputEvent::KeyUp { key_code: 32 });
        r.tick(FRAME * 3.0);
        let jumps = r
            .frame_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::Jumped { .. }))
            .count();
        assert_eq!(jumps, 1);
        assert_eq!(r.events_len(), r.frame_events().len() as u32);
    }

    #[test]
    fn events_clear_each_frame() {
        let mut r = runner();
        r.push_input(InputEvent::KeyDown { key_code: 88 });
        r.tick(FRAME * 1.5);
        assert!(r.frame_events().contains(&GameEvent::AttackStarted));
        r.tick(FRAME);
        assert!(!r.frame_events().contains(&GameEvent::AttackStarted));
    }

    #[test]
    fn restart_event_returns_to_first_level() {
        let mut r = runner();
        r.world.enter_level(2);
        r.push_input(InputEvent::Custom { kind: custom::RESTART, a: 0.0, b: 0.0, c: 0.0 });
        r.tick(0.0);
        assert_eq!(r.hud().level_index, 0);
        assert!(r.frame_events().contains(&GameEvent::Restarted));
    }

    #[test]
    fn rejected_levels_keep_campaign() {
        let mut r = runner();
        let levels = r.world().store().len();
        assert!(!r.load_levels("{ not json"));
        assert!(!r.load_levels(r#"{ "levels": [] }"#));
        assert_eq!(r.world().store().len(), levels);
    }

    #[test]
    fn load_levels_starts_new_campaign() {
        let mut r = runner();
        let json = r#"{ "levels": [ {
            "spawn": { "x": 50, "y": 410 },
            "floor_y": 460,
            "coins": [ { "x": 500, "y": 300 } ]
        } ] }"#;
        assert!(r.load_levels(json));
        assert_eq!(r.world().store().len(), 1);
        assert_eq!(r.world().player.body.pos.x, 50.0);

        let data = unsafe { std::slice::from_raw_parts(r.snapshot_ptr(), r.snapshot_len() as usize) };
        assert_eq!(data[PLAYER_OFFSET], 50.0);
    }

    #[test]
    fn load_config_applies_tuning() {
        let mut r = runner();
        assert!(r.load_config(r#"{ "world_width": 1280, "player": { "max_health": 3 } }"#));
        assert_eq!(r.world_width(), 1280.0);
        assert_eq!(r.hud().max_health, 3);
        assert!(!r.load_config("{ \"gravity\": "));
        assert_eq!(r.world_width(), 1280.0);
    }

    #[test]
    fn invalid_config_keeps_current_one() {
        let mut r = runner();
        assert!(!r.load_config(r#"{ "fixed_dt": -0.016, "player": { "max_health": 0 } }"#));
        assert_eq!(r.hud().health, 5);
        assert_eq!(r.hud().max_health, 5);

        // A zero-length frame still runs nothing.
        r.tick(0.0);
        assert_eq!(r.world().tick, 0);
        r.tick(FRAME * 1.5);
        assert_eq!(r.world().tick, 1);
    }

    #[test]
    fn restart_drops_partial_frame_time() {
        let mut r = runner();
        r.tick(FRAME * 0.9);
        assert_eq!(r.world().tick, 0);
        r.push_input(InputEvent::Custom { kind: custom::RESTART, a: 0.0, b: 0.0, c: 0.0 });
        r.tick(FRAME * 0.5);
        assert_eq!(r.world().tick, 0);
    }
}
