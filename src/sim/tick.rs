//! Per-frame simulation step
//!
//! Every call runs four passes over the world, each finishing before the next:
//! move, clamp to bounds, color mixing, delete-zone purge. The purge tests the
//! clamped position, not the raw moved one.

use super::collision::{keep_inside_bounds, mix_colors_on_collisions};
use super::events::GameEvent;
use super::state::GameLogic;

impl GameLogic {
    /// Advance the world by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.time_ticks += 1;

        // 1. Movement
        for ball in &mut self.balls {
            ball.advance(dt);
        }

        // 2. Walls
        for ball in &mut self.balls {
            let contact = keep_inside_bounds(ball, self.width, self.height);
            if self.events_enabled {
                for wall in contact.walls() {
                    self.events.push(GameEvent::WallBounce { id: ball.id, wall });
                }
            }
        }

        // 3. Color mixing between touching balls
        let events = self.events_enabled.then_some(&mut self.events);
        mix_colors_on_collisions(&mut self.balls, events);

        // 4. Delete zone
        self.purge_delete_zone();
    }

    /// Drop every world ball whose center is inside the delete zone
    fn purge_delete_zone(&mut self) {
        let zone = self.delete_zone;
        let enabled = self.events_enabled;
        let events = &mut self.events;
        let before = self.balls.len();

        self.balls.retain(|ball| {
            if zone.contains(ball.pos) {
                if enabled {
                    events.push(GameEvent::Deleted { id: ball.id });
                }
                false
            } else {
                true
            }
        });

        let removed = before - self.balls.len();
        if removed > 0 {
            log::debug!("Delete zone removed {} ball(s)", removed);
        }
    }
}
