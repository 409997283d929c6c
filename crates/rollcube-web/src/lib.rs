//! Browser exports for the rolling-cube level.
//!
//! wasm-bindgen cannot export a stateful struct with a generic floor, so the
//! runner lives in a `thread_local!` and every export borrows it.
//!
//! ```text
//! level_init(levelJson, configJson)   once per canvas
//! level_key_down(e.keyCode)           from the keydown listener
//! level_tick(dt)                      every requestAnimationFrame
//! get_snapshot_ptr()                  read 12 floats from wasm memory
//! ```

pub mod runner;

pub use runner::LevelRunner;

use std::cell::RefCell;
use rollcube::{ActorSnapshot, Direction, InputEvent, LevelConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<LevelRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut LevelRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("level not initialized, call level_init() first");
                None
            }
        }
    })
}

/// Load a level. An empty `config_json` uses the defaults.
/// Returns false (and keeps the current level) if either document is invalid.
#[wasm_bindgen]
pub fn level_init(level_json: &str, config_json: &str) -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = if config_json.trim().is_empty() {
        LevelConfig::default()
    } else {
        match LevelConfig::from_json(config_json) {
            Ok(config) => config,
            Err(err) => {
                log::error!("bad level config: {}", err);
                return false;
            }
        }
    };

    match LevelRunner::new(level_json, config) {
        Ok(runner) => {
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            log::info!("rollcube: level initialized");
            true
        }
        Err(err) => {
            log::error!("failed to load level: {}", err);
            false
        }
    }
}

#[wasm_bindgen]
pub fn level_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Move by direction index: 0 up, 1 down, 2 left, 3 right.
#[wasm_bindgen]
pub fn level_move(direction: u32) {
    match Direction::from_index(direction) {
        Some(dir) => {
            with_runner(|r| r.push_input(InputEvent::Move(dir)));
        }
        None => log::warn!("unknown direction index {}", direction),
    }
}

#[wasm_bindgen]
pub fn level_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

/// The page's "replay" button.
#[wasm_bindgen]
pub fn level_replay() {
    with_runner(|r| r.replay());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_snapshot_ptr() -> *const f32 {
    with_runner(|r| r.snapshot_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_snapshot_floats() -> u32 {
    ActorSnapshot::FLOATS as u32
}

#[wasm_bindgen]
pub fn is_level_completed() -> bool {
    with_runner(|r| r.is_completed()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn is_actor_settled() -> bool {
    with_runner(|r| r.is_settled()).unwrap_or(false)
}

/// Level event codes from the last tick (see `LevelEvent`).
#[wasm_bindgen]
pub fn get_events() -> js_sys::Uint32Array {
    with_runner(|r| js_sys::Uint32Array::from(r.events()))
        .unwrap_or_else(|| js_sys::Uint32Array::new_with_length(0))
}

#[wasm_bindgen]
pub fn get_sound_events_ptr() -> *const u8 {
    with_runner(|r| r.sound_events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_sound_events_len() -> u32 {
    with_runner(|r| r.sound_events_len()).unwrap_or(0)
}
