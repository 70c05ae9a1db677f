use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use knight_engine::InputEvent;

pub mod runner;

pub use runner::GameRunner;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = match GameRunner::new() {
        Ok(runner) => runner,
        Err(e) => {
            log::error!("knight: embedded campaign is invalid: {}", e);
            return;
        }
    };

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("knight: initialized");
}

/// Replace the campaign with host-supplied level JSON. Returns false and
/// keeps the current campaign if the data is rejected.
#[wasm_bindgen]
pub fn game_load_levels(json: &str) -> bool {
    with_runner(|r| r.load_levels(json))
}

/// Replace tuning with host-supplied config JSON. Returns false and keeps
/// the current config if the data is rejected.
#[wasm_bindgen]
pub fn game_load_config(json: &str) -> bool {
    with_runner(|r| r.load_config(json))
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

#[wasm_bindgen]
pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_snapshot_ptr() -> *const f32 {
    with_runner(|r| r.snapshot_ptr())
}

#[wasm_bindgen]
pub fn get_snapshot_len() -> u32 {
    with_runner(|r| r.snapshot_len())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}

#[wasm_bindgen]
pub fn get_health() -> u32 {
    with_runner(|r| r.hud().health)
}

#[wasm_bindgen]
pub fn get_coins_collected() -> u32 {
    with_runner(|r| r.hud().coins_collected)
}

#[wasm_bindgen]
pub fn get_level_index() -> u32 {
    with_runner(|r| r.hud().level_index as u32)
}
