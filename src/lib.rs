//! NeoClassic Balls - a bounded 2D ball arena
//!
//! Core modules:
//! - `sim`: Simulation engine (movement, wall reflection, color mixing, suction inventory)
//! - `settings`: Data-driven arena configuration (JSON)
//! - `clock`: Fixed timestep accumulator for frame-driven callers
//!
//! Rendering, windowing and input polling live outside this crate. A driver
//! feeds world-space mouse coordinates and frame deltas in, and reads ball
//! positions, radii and colors back out.

pub mod clock;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use settings::{Settings, SettingsError, SpawnSettings};

use glam::Vec2;

/// Arena configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the clock will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default world dimensions (the playfield left of the inventory panel)
    pub const WORLD_WIDTH: f32 = 860.0;
    pub const WORLD_HEIGHT: f32 = 548.0;

    /// Delete zone "bowl" along the bottom of the world
    pub const DELETE_ZONE_HEIGHT: f32 = 90.0;
    pub const DELETE_ZONE_SIDE_MARGIN: f32 = 40.0;
    pub const DELETE_ZONE_BOTTOM_MARGIN: f32 = 20.0;

    /// Mouse suction radius
    pub const SUCTION_RADIUS: f32 = 80.0;
    /// Speed of a ball spat back out of the inventory (units/s)
    pub const SPIT_SPEED: f32 = 300.0;
}

/// Bound `value` to `[min, max]`.
///
/// Unlike `f32::clamp` this never panics on an inverted range; `min` wins.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(value))
}

/// Squared distance between two points (no sqrt, use for radius tests)
#[inline]
pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
    let d = a - b;
    d.x * d.x + d.y * d.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.5, 0.0, 10.0), 10.0);
        assert_eq!(clamp(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_clamp_inverted_range_does_not_panic() {
        assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn test_distance_squared() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);
        assert_eq!(distance_squared(a, b), 25.0);
        assert_eq!(distance_squared(b, a), 25.0);
        assert_eq!(distance_squared(a, a), 0.0);
    }
}
