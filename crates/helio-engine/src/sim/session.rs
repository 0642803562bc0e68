use crate::core::time::FrameClock;
use crate::input::queue::InputQueue;
use crate::input::store::BindingStore;
use crate::input::tracker::InputTracker;
use crate::ship::controller::{ShipController, ShipOutcome};
use crate::sim::phase::{CrashInfo, SessionState, SimulationPhase};
use crate::world::bodies::SolarSystem;
use crate::world::rng::Rng;

/// One running session: the frame loop driver plus all the state it
/// orchestrates. Each session owns its own tracker, world, ship and phase —
/// nothing is process-global, so tests get fresh state per instance.
///
/// Per tick, while Running: celestial bodies advance strictly before the
/// ship, the ship strictly before collision detection, collision strictly
/// before the camera update (the latter two happen inside the ship tick).
pub struct Simulation {
    tracker: InputTracker,
    world: SolarSystem,
    ship: ShipController,
    state: SessionState,
    clock: FrameClock,
    /// False until the host reports the ship model loaded; the ship tick is
    /// skipped while absent so a slow or failed asset never stalls the loop.
    ship_present: bool,
}

impl Simulation {
    /// A session over the default solar system, with bindings loaded from
    /// the store.
    pub fn new(store: &dyn BindingStore, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        Self::with_world(SolarSystem::default_system(&mut rng), store)
    }

    pub fn with_world(world: SolarSystem, store: &dyn BindingStore) -> Self {
        Self {
            tracker: InputTracker::from_store(store),
            world,
            ship: ShipController::new(),
            state: SessionState::new(),
            clock: FrameClock::default(),
            ship_present: false,
        }
    }

    // ── Frame loop ─────────────────────────────────────────────────

    /// One scheduled frame. Drains queued input events first (the single
    /// serialization point for event application), then advances the scene
    /// iff the phase is Running. The host renders from the snapshot
    /// afterwards regardless of phase.
    pub fn frame(&mut self, raw_dt: f32, queue: &mut InputQueue, store: &mut dyn BindingStore) {
        let dt = self.clock.advance(raw_dt);

        for event in queue.drain() {
            self.tracker.apply(&event, store);
        }

        if self.state.phase() != SimulationPhase::Running {
            return;
        }

        self.world.tick(dt);

        if !self.ship_present {
            return;
        }
        if let ShipOutcome::Crashed(name) =
            self.ship.tick(dt, self.tracker.actions(), self.world.bodies())
        {
            self.state.record_crash(name);
        }
    }

    // ── Phase control (forwarded to the state machine) ─────────────

    pub fn start(&mut self) {
        self.state.start_game();
    }

    pub fn pause(&mut self) {
        self.state.pause_game();
    }

    pub fn resume(&mut self) {
        self.state.resume_game();
    }

    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
    }

    /// Back to the start menu: clears crash info, restores the ship's
    /// initial pose and releases any keys held at the moment of restart.
    pub fn restart(&mut self) {
        self.state.restart_game();
        self.ship.reset();
        self.tracker.clear_pressed();
    }

    // ── Ship model lifecycle ───────────────────────────────────────

    /// The host finished loading the ship model; the ship participates in
    /// ticks from the next frame on.
    pub fn ship_model_loaded(&mut self) {
        self.ship_present = true;
        log::info!("ship model loaded");
    }

    /// The host failed to load the ship model. Logged; the simulation keeps
    /// running degraded (bodies still orbit, no ship).
    pub fn ship_model_failed(&mut self, err: &str) {
        log::error!("ship model failed to load: {err}");
    }

    pub fn ship_present(&self) -> bool {
        self.ship_present
    }

    // ── Read access for the snapshot and tests ─────────────────────

    pub fn phase(&self) -> SimulationPhase {
        self.state.phase()
    }

    pub fn crash(&self) -> Option<&CrashInfo> {
        self.state.crash()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn world(&self) -> &SolarSystem {
        &self.world
    }

    pub fn ship(&self) -> &ShipController {
        &self.ship
    }

    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut InputTracker {
        &mut self.tracker
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}
