//! Fixed timestep accumulator
//!
//! Turns variable frame deltas into a whole number of fixed simulation steps,
//! carrying the remainder into the next frame.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FrameClock {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// Fixed step length in seconds
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add a frame delta and return how many fixed steps to run now.
    ///
    /// Deltas above `MAX_FRAME_DT` are clamped (e.g. after a stall), and at
    /// most `max_substeps` steps are returned to prevent a spiral of death.
    /// Non-finite deltas count as zero.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() {
            self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        }

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        substeps
    }

    /// Leftover time not yet simulated, as a fraction of a step
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_steps() {
        let mut clock = FrameClock::new(0.01, 8);
        assert_eq!(clock.advance(0.005), 0);
        assert_eq!(clock.advance(0.0075), 1);
        assert!(clock.alpha() > 0.2 && clock.alpha() < 0.3);
    }

    #[test]
    fn test_caps_substeps() {
        let mut clock = FrameClock::new(0.01, 4);
        assert_eq!(clock.advance(0.1), 4);
    }

    #[test]
    fn test_clamps_long_frames() {
        let mut clock = FrameClock::new(0.05, 100);
        // 5 seconds of stall is treated as 0.1
        assert_eq!(clock.advance(5.0), 2);
    }

    #[test]
    fn test_ignores_negative_delta() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.alpha(), 0.0);
    }

    #[test]
    fn test_non_finite_delta_does_not_stall() {
        let mut clock = FrameClock::new(0.01, 8);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(f32::INFINITY), 0);
        assert_eq!(clock.alpha(), 0.0);
        // Still steps normally afterwards
        assert_eq!(clock.advance(0.025), 2);
    }
}
