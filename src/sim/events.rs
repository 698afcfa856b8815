//! Simulation events
//!
//! Recorded while the engine mutates state so a driver can hook sounds or
//! visual effects. Events are observations only; they never feed back into
//! the simulation.

use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::state::BallId;

/// Wall hit by a ball during bound clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Something that happened to a ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// New ball entered the world
    Spawned { id: BallId },
    /// Ball reflected off a wall
    WallBounce { id: BallId, wall: Wall },
    /// Two touching balls now share `color`
    ColorsMixed { a: BallId, b: BallId, color: Rgb },
    /// Ball pulled into the inventory
    Sucked { id: BallId },
    /// Ball emitted from the inventory back into the world
    Spat { id: BallId },
    /// Ball destroyed by the delete zone
    Deleted { id: BallId },
}

impl GameEvent {
    /// Primary ball this event concerns
    pub fn ball_id(&self) -> BallId {
        match *self {
            GameEvent::Spawned { id }
            | GameEvent::WallBounce { id, .. }
            | GameEvent::Sucked { id }
            | GameEvent::Spat { id }
            | GameEvent::Deleted { id } => id,
            GameEvent::ColorsMixed { a, .. } => a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_id() {
        assert_eq!(GameEvent::Deleted { id: BallId(4) }.ball_id(), BallId(4));
        let bounce = GameEvent::WallBounce {
            id: BallId(2),
            wall: Wall::Top,
        };
        assert_eq!(bounce.ball_id(), BallId(2));
        let mixed = GameEvent::ColorsMixed {
            a: BallId(1),
            b: BallId(3),
            color: Rgb::BLACK,
        };
        assert_eq!(mixed.ball_id(), BallId(1));
    }
}
