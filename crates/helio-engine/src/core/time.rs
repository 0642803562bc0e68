/// Per-frame clock: one simulation tick per rendered frame, with whatever
/// dt the host scheduler reports.
///
/// Frame deltas are clamped to a maximum step so a backgrounded tab does not
/// come back with a multi-second dt and teleport the ship.
pub struct FrameClock {
    max_dt: f32,
    elapsed: f32,
    frames: u64,
}

/// Default cap: six nominal frames' worth of time.
pub const DEFAULT_MAX_DT: f32 = 0.1;

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt,
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Sanitize a raw frame delta: non-finite or negative becomes zero,
    /// spikes are capped at `max_dt`. Counts the frame either way.
    pub fn advance(&mut self, raw_dt: f32) -> f32 {
        let dt = if raw_dt.is_finite() && raw_dt > 0.0 {
            raw_dt.min(self.max_dt)
        } else {
            0.0
        };
        self.elapsed += dt;
        self.frames += 1;
        dt
    }

    /// Total simulated time, seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Number of frames seen.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_dt_passes_through() {
        let mut clock = FrameClock::default();
        let dt = clock.advance(1.0 / 60.0);
        assert!((dt - 1.0 / 60.0).abs() < 1e-9);
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn spike_is_capped() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(5.0), DEFAULT_MAX_DT);
    }

    #[test]
    fn garbage_dt_becomes_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(-1.0), 0.0);
        assert_eq!(clock.advance(f32::NAN), 0.0);
        assert_eq!(clock.advance(f32::INFINITY), 0.0);
        assert_eq!(clock.frames(), 3);
        assert_eq!(clock.elapsed(), 0.0);
    }
}
