pub mod runner;
pub mod store;

pub use runner::SimRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use helio_engine::Action;

thread_local! {
    static RUNNER: RefCell<Option<SimRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SimRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Simulation not initialized. Call sim_init() first.");
        f(runner)
    })
}

/// Initialize the simulation. Call once before any other export.
/// `seed` scatters the planets along their orbits.
#[wasm_bindgen]
pub fn sim_init(seed: u64) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(SimRunner::new(seed));
    });
    log::info!("helio: initialized");
}

/// One frame tick; dt in seconds since the previous frame.
#[wasm_bindgen]
pub fn sim_frame(dt: f32) {
    with_runner(|r| r.frame(dt));
}

// ── Input events ─────────────────────────────────────────────────────

#[wasm_bindgen]
pub fn sim_key_down(symbol: &str) {
    with_runner(|r| r.key_down(symbol));
}

#[wasm_bindgen]
pub fn sim_key_up(symbol: &str) {
    with_runner(|r| r.key_up(symbol));
}

// ── Phase control ────────────────────────────────────────────────────

#[wasm_bindgen]
pub fn sim_start() {
    with_runner(|r| r.start());
}

#[wasm_bindgen]
pub fn sim_pause() {
    with_runner(|r| r.pause());
}

#[wasm_bindgen]
pub fn sim_resume() {
    with_runner(|r| r.resume());
}

#[wasm_bindgen]
pub fn sim_toggle_pause() {
    with_runner(|r| r.toggle_pause());
}

#[wasm_bindgen]
pub fn sim_restart() {
    with_runner(|r| r.restart());
}

#[wasm_bindgen]
pub fn sim_phase() -> u32 {
    with_runner(|r| r.phase_code())
}

/// Name of the body the ship crashed into, or undefined.
#[wasm_bindgen]
pub fn sim_crashed_into() -> Option<String> {
    with_runner(|r| r.crashed_body_name())
}

// ── Rebinding ────────────────────────────────────────────────────────

#[wasm_bindgen]
pub fn sim_action_count() -> u32 {
    Action::COUNT as u32
}

#[wasm_bindgen]
pub fn sim_request_rebind(action_index: u32) {
    with_runner(|r| r.request_rebind(action_index as usize));
}

#[wasm_bindgen]
pub fn sim_cancel_rebind() {
    with_runner(|r| r.cancel_rebind());
}

/// Index of the action currently listening for a key, or -1.
#[wasm_bindgen]
pub fn sim_rebind_pending() -> i32 {
    with_runner(|r| r.rebind_pending_index())
}

#[wasm_bindgen]
pub fn sim_reset_bindings() {
    with_runner(|r| r.reset_bindings());
}

#[wasm_bindgen]
pub fn sim_action_name(action_index: u32) -> Option<String> {
    with_runner(|r| r.action_display_name(action_index as usize))
}

#[wasm_bindgen]
pub fn sim_binding_display(action_index: u32) -> Option<String> {
    with_runner(|r| r.binding_display(action_index as usize))
}

// ── Ship model lifecycle ─────────────────────────────────────────────

#[wasm_bindgen]
pub fn sim_ship_model_loaded() {
    with_runner(|r| r.ship_model_loaded());
}

#[wasm_bindgen]
pub fn sim_ship_model_failed(err: &str) {
    with_runner(|r| r.ship_model_failed(err));
}

// ── Snapshot accessors (renderer reads wasm linear memory) ───────────

#[wasm_bindgen]
pub fn sim_header_ptr() -> *const f32 {
    with_runner(|r| r.snapshot().header_ptr())
}

#[wasm_bindgen]
pub fn sim_bodies_ptr() -> *const f32 {
    with_runner(|r| r.snapshot().bodies_ptr())
}

#[wasm_bindgen]
pub fn sim_body_count() -> u32 {
    with_runner(|r| r.snapshot().body_count())
}

#[wasm_bindgen]
pub fn sim_ship_ptr() -> *const f32 {
    with_runner(|r| r.snapshot().ship_ptr())
}

#[wasm_bindgen]
pub fn sim_camera_ptr() -> *const f32 {
    with_runner(|r| r.snapshot().camera_ptr())
}
