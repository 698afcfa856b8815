//! Collision detection for balls
//!
//! Two kinds of contact exist in the arena:
//! - ball vs wall: the ball is pushed back inside and its velocity reflected
//! - ball vs ball: no physical response, the two balls only exchange color

use glam::Vec2;

use super::color::mix_colors;
use super::events::{GameEvent, Wall};
use super::state::Ball;
use crate::distance_squared;

/// True if two circles touch or overlap
#[inline]
pub fn circles_touch(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> bool {
    let min_dist = radius_a + radius_b;
    distance_squared(pos_a, pos_b) <= min_dist * min_dist
}

/// Walls touched during one clamp, at most one per axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub x: Option<Wall>,
    pub y: Option<Wall>,
}

impl WallContact {
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }

    pub fn walls(&self) -> impl Iterator<Item = Wall> {
        self.x.into_iter().chain(self.y)
    }
}

/// Keep a ball inside `[0, width] x [0, height]`, reflecting off the walls.
///
/// Each axis is handled independently. Crossing the near wall pins the ball
/// at `radius` and makes that velocity component non-negative; crossing the
/// far wall pins it at `size - radius` and makes it non-positive.
pub fn keep_inside_bounds(ball: &mut Ball, width: f32, height: f32) -> WallContact {
    let mut contact = WallContact::default();

    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = ball.vel.x.abs();
        contact.x = Some(Wall::Left);
    } else if ball.pos.x + ball.radius > width {
        ball.pos.x = width - ball.radius;
        ball.vel.x = -ball.vel.x.abs();
        contact.x = Some(Wall::Right);
    }

    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = ball.vel.y.abs();
        contact.y = Some(Wall::Top);
    } else if ball.pos.y + ball.radius > height {
        ball.pos.y = height - ball.radius;
        ball.vel.y = -ball.vel.y.abs();
        contact.y = Some(Wall::Bottom);
    }

    contact
}

/// Mix colors of every touching pair of world balls.
///
/// Pairs are visited in `(i, j)` order with `i < j` over the slice order.
/// Mixes are applied one pair at a time, so a ball touching several others
/// ends up with the color of its last pairing.
///
/// Mixes are recorded into `events` when given.
pub fn mix_colors_on_collisions(balls: &mut [Ball], mut events: Option<&mut Vec<GameEvent>>) {
    let n = balls.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (&balls[i], &balls[j]);
            if a.in_inventory() || b.in_inventory() {
                continue;
            }
            if !circles_touch(a.pos, a.radius, b.pos, b.radius) {
                continue;
            }

            let mixed = mix_colors(a.color, b.color);
            let (a_id, b_id) = (a.id, b.id);
            balls[i].color = mixed;
            balls[j].color = mixed;
            log::trace!("Mixed {} and {} -> {:?}", a_id, b_id, mixed);
            if let Some(events) = events.as_deref_mut() {
                events.push(GameEvent::ColorsMixed {
                    a: a_id,
                    b: b_id,
                    color: mixed,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::color::Rgb;
    use crate::sim::state::{BallId, BallLocation};

    fn ball(id: u32, pos: Vec2, vel: Vec2, radius: f32, color: Rgb) -> Ball {
        Ball::new(BallId(id), pos, vel, radius, color)
    }

    #[test]
    fn test_circles_touch() {
        // Exactly touching counts
        assert!(circles_touch(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0));
        assert!(circles_touch(Vec2::ZERO, 10.0, Vec2::new(5.0, 5.0), 1.0));
        assert!(!circles_touch(Vec2::ZERO, 10.0, Vec2::new(20.1, 0.0), 10.0));
    }

    #[test]
    fn test_left_wall_reflection() {
        let mut b = ball(1, Vec2::new(-3.0, 50.0), Vec2::new(-100.0, 0.0), 10.0, Rgb::RED);
        let contact = keep_inside_bounds(&mut b, 800.0, 600.0);
        assert_eq!(b.pos.x, 10.0);
        assert_eq!(b.vel.x, 100.0);
        assert_eq!(contact.x, Some(Wall::Left));
        assert_eq!(contact.y, None);
    }

    #[test]
    fn test_far_walls_reflection() {
        let mut b = ball(1, Vec2::new(795.0, 598.0), Vec2::new(40.0, 70.0), 10.0, Rgb::RED);
        let contact = keep_inside_bounds(&mut b, 800.0, 600.0);
        assert_eq!(b.pos, Vec2::new(790.0, 590.0));
        assert_eq!(b.vel, Vec2::new(-40.0, -70.0));
        assert_eq!(contact.walls().collect::<Vec<_>>(), vec![Wall::Right, Wall::Bottom]);
    }

    #[test]
    fn test_wall_keeps_outward_velocity_sign() {
        // Already moving back inside: velocity is not flipped again
        let mut b = ball(1, Vec2::new(5.0, 300.0), Vec2::new(20.0, 0.0), 10.0, Rgb::RED);
        keep_inside_bounds(&mut b, 800.0, 600.0);
        assert_eq!(b.pos.x, 10.0);
        assert_eq!(b.vel.x, 20.0);
    }

    #[test]
    fn test_inside_ball_untouched() {
        let mut b = ball(1, Vec2::new(400.0, 300.0), Vec2::new(20.0, -5.0), 10.0, Rgb::RED);
        let before = b.clone();
        assert!(keep_inside_bounds(&mut b, 800.0, 600.0).is_empty());
        assert_eq!(b, before);
    }

    #[test]
    fn test_mix_touching_pair() {
        let mut balls = vec![
            ball(1, Vec2::new(100.0, 100.0), Vec2::new(5.0, 0.0), 20.0, Rgb::RED),
            ball(2, Vec2::new(130.0, 100.0), Vec2::new(-5.0, 0.0), 20.0, Rgb::BLUE),
        ];
        let mut events = Vec::new();
        mix_colors_on_collisions(&mut balls, Some(&mut events));

        assert_eq!(balls[0].color, Rgb::new(128, 0, 128));
        assert_eq!(balls[1].color, Rgb::new(128, 0, 128));
        assert_eq!(balls[0].vel, Vec2::new(5.0, 0.0));
        assert_eq!(balls[1].pos, Vec2::new(130.0, 100.0));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_mix_compounds_sequentially() {
        // 1 touches 2 and 3; 2 and 3 are apart
        let mut balls = vec![
            ball(1, Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0, Rgb::new(200, 0, 0)),
            ball(2, Vec2::new(115.0, 100.0), Vec2::ZERO, 10.0, Rgb::new(0, 0, 0)),
            ball(3, Vec2::new(85.0, 100.0), Vec2::ZERO, 10.0, Rgb::new(0, 0, 100)),
        ];
        let mut events = Vec::new();
        mix_colors_on_collisions(&mut balls, Some(&mut events));

        // (1,2) -> (100,0,0); then (1,3) -> (50,0,50)
        assert_eq!(balls[0].color, Rgb::new(50, 0, 50));
        assert_eq!(balls[1].color, Rgb::new(100, 0, 0));
        assert_eq!(balls[2].color, Rgb::new(50, 0, 50));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_mix_skips_inventory_balls() {
        let mut stored = ball(2, Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0, Rgb::BLUE);
        stored.location = BallLocation::Inventory;
        let mut balls = vec![
            ball(1, Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0, Rgb::RED),
            stored,
        ];
        let mut events = Vec::new();
        mix_colors_on_collisions(&mut balls, Some(&mut events));
        assert_eq!(balls[0].color, Rgb::RED);
        assert!(events.is_empty());
    }

    #[test]
    fn test_mix_without_event_sink() {
        let mut balls = vec![
            ball(1, Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0, Rgb::RED),
            ball(2, Vec2::new(105.0, 100.0), Vec2::ZERO, 10.0, Rgb::BLUE),
        ];
        mix_colors_on_collisions(&mut balls, None);
        assert_eq!(balls[1].color, Rgb::new(128, 0, 128));
    }
}
