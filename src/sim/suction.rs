//! Mouse suction and emission
//!
//! Suction moves world balls near a point into the inventory. Emission takes
//! one ball back out and launches it from a point with a given velocity.

use glam::Vec2;

use super::events::GameEvent;
use super::state::{BallId, GameLogic};
use crate::distance_squared;

/// Launch direction used when none (or a zero vector) is given: straight up
/// on screen, since y grows downward.
pub const DEFAULT_SPIT_DIRECTION: Vec2 = Vec2::new(0.0, -1.0);

/// Optional knobs for `spit_ball_from_inventory`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpitOptions {
    /// Launch direction, need not be normalized
    pub direction: Option<Vec2>,
    /// Launch speed; defaults to `GameLogic::spit_speed`
    pub speed: Option<f32>,
    /// Specific inventory ball; defaults to the most recently stored
    pub ball: Option<BallId>,
}

impl SpitOptions {
    pub fn toward(direction: Vec2) -> Self {
        Self {
            direction: Some(direction),
            ..Default::default()
        }
    }
}

/// Normalize `direction`, falling back to straight up for `None` or zero length
pub fn spit_direction(direction: Option<Vec2>) -> Vec2 {
    match direction {
        Some(dir) => {
            let len = dir.length();
            if len == 0.0 || !len.is_finite() {
                DEFAULT_SPIT_DIRECTION
            } else {
                dir / len
            }
        }
        None => DEFAULT_SPIT_DIRECTION,
    }
}

impl GameLogic {
    /// Pull world balls within `radius` of `mouse_pos` into the inventory.
    ///
    /// `radius` defaults to `suction_radius`; `max_count` caps how many balls
    /// move in one call. Returns the moved balls in world order.
    pub fn suck_balls_with_mouse(
        &mut self,
        mouse_pos: Vec2,
        radius: Option<f32>,
        max_count: Option<usize>,
    ) -> Vec<BallId> {
        let radius = radius.unwrap_or(self.suction_radius);
        let radius_sq = radius * radius;
        let limit = max_count.unwrap_or(usize::MAX);

        // Pick first, then transfer, so the world list is never edited mid-scan
        let picked: Vec<BallId> = self
            .balls
            .iter()
            .filter(|b| distance_squared(b.pos, mouse_pos) <= radius_sq)
            .map(|b| b.id)
            .take(limit)
            .collect();

        for &id in &picked {
            if let Some(index) = self.world_index(id) {
                let ball = self.balls.remove(index);
                self.inventory.add(ball);
                self.record(GameEvent::Sucked { id });
            }
        }

        if !picked.is_empty() {
            log::debug!(
                "Sucked {} ball(s) at ({:.1}, {:.1}), inventory now {}",
                picked.len(),
                mouse_pos.x,
                mouse_pos.y,
                self.inventory.len()
            );
        }

        picked
    }

    /// Emit one ball from the inventory at `mouse_pos`.
    ///
    /// Returns `None` without touching anything when the inventory is empty
    /// or the requested ball is not stored.
    pub fn spit_ball_from_inventory(&mut self, mouse_pos: Vec2, options: SpitOptions) -> Option<BallId> {
        let mut ball = match options.ball {
            Some(id) => match self.inventory.remove(id) {
                Some(ball) => ball,
                None => {
                    log::warn!("Cannot spit {}: not in inventory", id);
                    return None;
                }
            },
            None => self.inventory.pop_last()?,
        };

        let speed = options.speed.unwrap_or(self.spit_speed);
        ball.pos = mouse_pos;
        ball.vel = spit_direction(options.direction) * speed;

        let id = ball.id;
        log::debug!(
            "Spat {} at ({:.1}, {:.1}) with velocity ({:.1}, {:.1})",
            id,
            mouse_pos.x,
            mouse_pos.y,
            ball.vel.x,
            ball.vel.y
        );
        self.balls.push(ball);
        self.record(GameEvent::Spat { id });
        Some(id)
    }
}
