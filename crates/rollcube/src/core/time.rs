/// Turns variable browser frame times into whole actor ticks.
///
/// The actor is frame-counted (a roll is N ticks, not N milliseconds), so the
/// host feeds elapsed seconds in and runs the returned number of ticks.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedTimestep {
    pub const DEFAULT_DT: f32 = 1.0 / 60.0;

    /// A `dt` that is not a positive finite number falls back to 60 Hz.
    pub fn new(dt: f32) -> Self {
        let dt = if dt.is_finite() && dt > 0.0 {
            dt
        } else {
            log::warn!("invalid fixed timestep {}, using {}", dt, Self::DEFAULT_DT);
            Self::DEFAULT_DT
        };
        Self {
            dt,
            accumulator: 0.0,
            max_steps: 10,
        }
    }

    /// Cap the ticks run for one frame (a backgrounded tab can report huge deltas).
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Add frame time. Returns the number of ticks to run now.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Drop any partial tick (after a level reload).
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tick_per_frame_at_60hz() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn partial_frames_carry_over() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut ts = FixedTimestep::new(1.0 / 60.0).with_max_steps(4);
        assert_eq!(ts.accumulate(1.0), 4);
    }

    #[test]
    fn reset_discards_remainder() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        ts.accumulate(0.015);
        ts.reset();
        assert_eq!(ts.accumulate(0.005), 0);
        assert!((ts.dt() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn non_positive_dt_falls_back_to_60hz() {
        for dt in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let mut ts = FixedTimestep::new(dt);
            assert_eq!(ts.dt(), FixedTimestep::DEFAULT_DT);
            assert_eq!(ts.accumulate(1.0 / 60.0), 1);
        }
    }
}
