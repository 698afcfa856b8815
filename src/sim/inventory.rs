//! Player inventory
//!
//! A stack-like holding area for balls taken out of the world. Balls in here
//! do not move, collide or get deleted.

use serde::{Deserialize, Serialize};

use super::state::{Ball, BallId, BallLocation};

/// Ordered collection of balls removed from the world (newest last)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    balls: Vec<Ball>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { balls: Vec::new() }
    }

    /// Take ownership of `ball`, tag it as stored and append it to the tail.
    ///
    /// The ball must not already be stored here.
    pub fn add(&mut self, mut ball: Ball) {
        debug_assert!(
            !self.contains(ball.id),
            "ball {:?} is already in the inventory",
            ball.id
        );
        ball.location = BallLocation::Inventory;
        self.balls.push(ball);
    }

    /// Remove a specific ball. Returns `None` (and changes nothing) if absent.
    pub fn remove(&mut self, id: BallId) -> Option<Ball> {
        let index = self.balls.iter().position(|b| b.id == id)?;
        let mut ball = self.balls.remove(index);
        ball.location = BallLocation::World;
        Some(ball)
    }

    /// Remove the most recently added ball
    pub fn pop_last(&mut self) -> Option<Ball> {
        let mut ball = self.balls.pop()?;
        ball.location = BallLocation::World;
        Some(ball)
    }

    pub fn contains(&self, id: BallId) -> bool {
        self.balls.iter().any(|b| b.id == id)
    }

    pub fn get(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    /// Stored balls, oldest first
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }
}
