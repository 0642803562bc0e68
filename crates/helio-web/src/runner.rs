use helio_engine::{
    Action, InputQueue, KeyBindingMap, SceneSnapshot, Simulation, SimulationPhase,
};

use crate::store::LocalStore;

/// Owns the simulation, the input queue and the snapshot buffers, and wires
/// them into one per-frame call. The browser schedules `frame()` once per
/// display refresh and reads the snapshot buffers afterwards.
pub struct SimRunner {
    sim: Simulation,
    input: InputQueue,
    snapshot: SceneSnapshot,
    store: LocalStore,
}

impl SimRunner {
    pub fn new(seed: u64) -> Self {
        let store = LocalStore;
        let sim = Simulation::new(&store, seed);
        let capacity = sim.world().len();
        let mut runner = Self {
            sim,
            input: InputQueue::new(),
            snapshot: SceneSnapshot::with_capacity(capacity),
            store,
        };
        // Snapshot is valid before the first frame so the renderer can draw
        // the start-menu scene immediately
        runner.snapshot.rebuild(&runner.sim);
        runner
    }

    /// One scheduled frame: drain input, advance if running, rebuild the
    /// snapshot for the renderer.
    pub fn frame(&mut self, dt: f32) {
        self.sim.frame(dt, &mut self.input, &mut self.store);
        self.snapshot.rebuild(&self.sim);
    }

    // ── Input events ───────────────────────────────────────────────

    pub fn key_down(&mut self, symbol: &str) {
        self.input.push_key_down(symbol);
    }

    pub fn key_up(&mut self, symbol: &str) {
        self.input.push_key_up(symbol);
    }

    // ── Phase control ──────────────────────────────────────────────

    pub fn start(&mut self) {
        self.sim.start();
    }

    pub fn pause(&mut self) {
        self.sim.pause();
    }

    pub fn resume(&mut self) {
        self.sim.resume();
    }

    pub fn toggle_pause(&mut self) {
        self.sim.toggle_pause();
    }

    pub fn restart(&mut self) {
        self.sim.restart();
    }

    pub fn phase_code(&self) -> u32 {
        self.sim.phase().code()
    }

    pub fn crashed_body_name(&self) -> Option<String> {
        if self.sim.phase() == SimulationPhase::Crashed {
            self.sim.crash().map(|c| c.body_name.clone())
        } else {
            None
        }
    }

    // ── Rebinding ──────────────────────────────────────────────────

    pub fn request_rebind(&mut self, action_index: usize) {
        if let Some(action) = Action::from_index(action_index) {
            self.sim.tracker_mut().request_rebind(action);
        }
    }

    pub fn cancel_rebind(&mut self) {
        self.sim.tracker_mut().cancel_rebind();
    }

    /// Index of the action waiting for a capture key, or -1.
    pub fn rebind_pending_index(&self) -> i32 {
        self.sim
            .tracker()
            .rebind_pending()
            .map(|a| a.index() as i32)
            .unwrap_or(-1)
    }

    pub fn reset_bindings(&mut self) {
        self.sim.tracker_mut().reset_to_defaults(&mut self.store);
    }

    pub fn action_display_name(&self, action_index: usize) -> Option<String> {
        Action::from_index(action_index).map(|a| a.display_name().to_string())
    }

    /// Display form of the key bound to an action ("W", "SPACE", "arrowup").
    pub fn binding_display(&self, action_index: usize) -> Option<String> {
        let action = Action::from_index(action_index)?;
        let key = self.sim.tracker().bindings().get(action);
        Some(KeyBindingMap::display_key(key))
    }

    // ── Ship model lifecycle ───────────────────────────────────────

    pub fn ship_model_loaded(&mut self) {
        self.sim.ship_model_loaded();
    }

    pub fn ship_model_failed(&mut self, err: &str) {
        self.sim.ship_model_failed(err);
    }

    // ── Snapshot accessors for linear-memory reads ─────────────────

    pub fn snapshot(&self) -> &SceneSnapshot {
        &self.snapshot
    }
}
