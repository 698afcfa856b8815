//! Random ball spawning
//!
//! Seeded PCG RNG only, so a session replays identically from the same seed.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::color::Rgb;
use super::state::{BallId, GameLogic};
use crate::settings::{SpawnRange, SpawnSettings};

/// Everything needed to create one ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallParams {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
}

/// Seeded spawn RNG
pub fn spawn_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Draw from `range`; collapses to `min` (or 0 if that is not finite) when
/// the range is empty, inverted or non-finite.
fn sample(rng: &mut Pcg32, range: SpawnRange) -> f32 {
    if !range.is_valid() || range.max <= range.min {
        return if range.min.is_finite() { range.min } else { 0.0 };
    }
    rng.random_range(range.min..=range.max)
}

/// Roll a ball: position in the spawn area, whole-unit speed in a random
/// direction, whole-unit radius and a palette color.
///
/// Unvalidated settings never panic: bad ranges collapse to a single value.
pub fn random_ball_params(spawn: &SpawnSettings, rng: &mut Pcg32) -> BallParams {
    let pos = Vec2::new(sample(rng, spawn.x), sample(rng, spawn.y));

    let speed = sample(rng, spawn.speed).round();
    let angle = rng.random::<f32>() * TAU;
    let vel = Vec2::from_angle(angle) * speed;

    let radius = sample(rng, spawn.radius).round();

    let color = if spawn.palette.is_empty() {
        Rgb::new(255, 255, 255)
    } else {
        spawn.palette[rng.random_range(0..spawn.palette.len())]
    };

    BallParams {
        pos,
        vel,
        radius,
        color,
    }
}

impl GameLogic {
    /// Create a random ball in the world
    pub fn spawn_random_ball(&mut self, spawn: &SpawnSettings, rng: &mut Pcg32) -> BallId {
        let params = random_ball_params(spawn, rng);
        self.create_ball(params.pos, params.vel, params.radius, params.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::zone::DeleteZone;

    #[test]
    fn test_params_within_ranges() {
        let spawn = SpawnSettings::default();
        let mut rng = spawn_rng(7);
        for _ in 0..200 {
            let p = random_ball_params(&spawn, &mut rng);
            assert!(p.pos.x >= 80.0 && p.pos.x <= 600.0);
            assert!(p.pos.y >= 80.0 && p.pos.y <= 350.0);
            assert!(p.radius >= 14.0 && p.radius <= 26.0);
            assert_eq!(p.radius, p.radius.round());
            let speed = p.vel.length();
            assert!(speed >= 59.9 && speed <= 160.1, "speed {speed}");
            assert!(spawn.palette.contains(&p.color));
        }
    }

    #[test]
    fn test_same_seed_same_balls() {
        let spawn = SpawnSettings::default();
        let mut rng1 = spawn_rng(99);
        let mut rng2 = spawn_rng(99);
        for _ in 0..10 {
            assert_eq!(random_ball_params(&spawn, &mut rng1), random_ball_params(&spawn, &mut rng2));
        }
    }

    #[test]
    fn test_degenerate_range_is_constant() {
        let spawn = SpawnSettings {
            radius: SpawnRange::new(10.0, 10.0),
            ..Default::default()
        };
        let mut rng = spawn_rng(1);
        assert_eq!(random_ball_params(&spawn, &mut rng).radius, 10.0);
    }

    #[test]
    fn test_non_finite_ranges_do_not_panic() {
        let spawn = SpawnSettings {
            x: SpawnRange::new(f32::NAN, 100.0),
            y: SpawnRange::new(0.0, f32::INFINITY),
            speed: SpawnRange::new(f32::NEG_INFINITY, f32::NAN),
            radius: SpawnRange::new(30.0, 10.0),
            palette: Vec::new(),
        };
        let mut rng = spawn_rng(5);
        let p = random_ball_params(&spawn, &mut rng);
        assert_eq!(p.pos, Vec2::new(0.0, 0.0));
        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.radius, 30.0);
    }

    #[test]
    fn test_spawn_random_ball_adds_to_world() {
        let mut logic = GameLogic::new(800.0, 600.0, DeleteZone::new(0.0, 560.0, 200.0, 600.0));
        let mut rng = spawn_rng(3);
        let id = logic.spawn_random_ball(&SpawnSettings::default(), &mut rng);
        assert_eq!(logic.balls().len(), 1);
        assert_eq!(logic.balls()[0].id, id);
    }
}
