/// Overall session phase. Exactly one value is active at a time; only
/// `Running` lets the frame loop advance the world and the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationPhase {
    StartMenu,
    Running,
    Paused,
    Crashed,
}

impl SimulationPhase {
    /// Stable numeric code for the snapshot protocol.
    pub fn code(self) -> u32 {
        match self {
            SimulationPhase::StartMenu => 0,
            SimulationPhase::Running => 1,
            SimulationPhase::Paused => 2,
            SimulationPhase::Crashed => 3,
        }
    }
}

/// What the ship hit. Set only on entering `Crashed`, cleared on returning
/// to the start menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashInfo {
    pub body_name: String,
}

/// The session state machine. Invalid-source transitions are no-ops, not
/// errors. A generation counter bumps on every actual phase change so UI
/// layers can poll for changes without any reactivity framework.
#[derive(Debug, Clone)]
pub struct SessionState {
    phase: SimulationPhase,
    crash: Option<CrashInfo>,
    generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: SimulationPhase::StartMenu,
            crash: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> SimulationPhase {
        self.phase
    }

    pub fn crash(&self) -> Option<&CrashInfo> {
        self.crash.as_ref()
    }

    /// Monotonic change counter; bumps whenever the phase actually changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn set_phase(&mut self, phase: SimulationPhase) {
        if self.phase != phase {
            self.phase = phase;
            self.generation += 1;
        }
    }

    /// StartMenu → Running.
    pub fn start_game(&mut self) {
        if self.phase == SimulationPhase::StartMenu {
            self.set_phase(SimulationPhase::Running);
        }
    }

    /// Running → Paused.
    pub fn pause_game(&mut self) {
        if self.phase == SimulationPhase::Running {
            self.set_phase(SimulationPhase::Paused);
        }
    }

    /// Paused → Running.
    pub fn resume_game(&mut self) {
        if self.phase == SimulationPhase::Paused {
            self.set_phase(SimulationPhase::Running);
        }
    }

    /// Running ↔ Paused; a no-op from any other phase.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            SimulationPhase::Running => self.set_phase(SimulationPhase::Paused),
            SimulationPhase::Paused => self.set_phase(SimulationPhase::Running),
            _ => {}
        }
    }

    /// Running → Crashed, recording what the ship hit.
    pub fn record_crash(&mut self, body_name: String) {
        if self.phase == SimulationPhase::Running {
            log::info!("ship crashed into {body_name}");
            self.crash = Some(CrashInfo { body_name });
            self.set_phase(SimulationPhase::Crashed);
        }
    }

    /// Back to the start menu from Running, Paused or Crashed, clearing
    /// crash info.
    pub fn restart_game(&mut self) {
        self.crash = None;
        self.set_phase(SimulationPhase::StartMenu);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_phase_is_start_menu() {
        let state = SessionState::new();
        assert_eq!(state.phase(), SimulationPhase::StartMenu);
        assert!(state.crash().is_none());
    }

    #[test]
    fn start_pause_resume_cycle() {
        let mut state = SessionState::new();
        state.start_game();
        assert_eq!(state.phase(), SimulationPhase::Running);
        state.pause_game();
        assert_eq!(state.phase(), SimulationPhase::Paused);
        state.resume_game();
        assert_eq!(state.phase(), SimulationPhase::Running);
    }

    #[test]
    fn toggle_pause_is_pairwise_idempotent() {
        let mut state = SessionState::new();
        state.start_game();
        state.toggle_pause();
        state.toggle_pause();
        assert_eq!(state.phase(), SimulationPhase::Running);
    }

    #[test]
    fn toggle_pause_from_start_menu_is_a_no_op() {
        let mut state = SessionState::new();
        state.toggle_pause();
        assert_eq!(state.phase(), SimulationPhase::StartMenu);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn resume_from_start_menu_is_a_no_op() {
        let mut state = SessionState::new();
        state.resume_game();
        assert_eq!(state.phase(), SimulationPhase::StartMenu);
    }

    #[test]
    fn crash_only_fires_while_running() {
        let mut state = SessionState::new();
        state.record_crash("Sun".to_string());
        assert_eq!(state.phase(), SimulationPhase::StartMenu);
        assert!(state.crash().is_none());

        state.start_game();
        state.record_crash("Sun".to_string());
        assert_eq!(state.phase(), SimulationPhase::Crashed);
        assert_eq!(state.crash().unwrap().body_name, "Sun");
    }

    #[test]
    fn restart_clears_crash_info() {
        let mut state = SessionState::new();
        state.start_game();
        state.record_crash("Mars".to_string());
        state.restart_game();
        assert_eq!(state.phase(), SimulationPhase::StartMenu);
        assert!(state.crash().is_none());
    }

    #[test]
    fn generation_bumps_on_each_change() {
        let mut state = SessionState::new();
        let g0 = state.generation();
        state.start_game();
        assert_eq!(state.generation(), g0 + 1);
        state.start_game(); // no-op, no bump
        assert_eq!(state.generation(), g0 + 1);
        state.pause_game();
        assert_eq!(state.generation(), g0 + 2);
    }
}
