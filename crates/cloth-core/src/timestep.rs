/// Fixed-timestep accumulator for the host loop.
///
/// Wall-clock time is banked with [`advance`](Self::advance) and drained in
/// `step`-sized slices with [`consume_step`](Self::consume_step). Whatever
/// is left over becomes the render interpolation factor.
pub struct FixedTimestep {
    /// Length of one physics step in seconds (default 1/60).
    pub step: f32,
    /// Longest frame that is banked in full; anything above is dropped
    /// so a stalled host does not spiral into ever longer catch-up frames.
    pub max_frame_time: f32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl FixedTimestep {
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(1e-6),
            max_frame_time: 0.25,
            accumulator: 0.0,
        }
    }

    /// Bank `elapsed` seconds of wall-clock time. Negative or NaN input is ignored.
    pub fn advance(&mut self, elapsed: f32) {
        if elapsed.is_nan() || elapsed <= 0.0 {
            return;
        }
        self.accumulator += elapsed.min(self.max_frame_time);
    }

    /// Take one step out of the bank if a whole one is available.
    pub fn consume_step(&mut self) -> bool {
        if self.accumulator >= self.step {
            self.accumulator -= self.step;
            true
        } else {
            false
        }
    }

    /// Fraction of a step still banked, in [0, 1].
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step).clamp(0.0, 1.0)
    }

    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drains_whole_steps_only() {
        let mut clock = FixedTimestep::new(0.01);
        clock.advance(0.035);
        let mut steps = 0;
        while clock.consume_step() {
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert!((clock.alpha() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut clock = FixedTimestep::new(0.0625);
        clock.advance(10.0);
        let mut steps = 0;
        while clock.consume_step() {
            steps += 1;
        }
        assert_eq!(steps, 4, "only 0.25 s is banked");
    }

    #[test]
    fn test_ignores_bad_input() {
        let mut clock = FixedTimestep::default();
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert_eq!(clock.pending(), 0.0);
        assert!(!clock.consume_step());
        assert_eq!(clock.alpha(), 0.0);
    }
}
