//! Ball entities and the engine state
//!
//! `GameLogic` is the single owner of every ball. A ball lives either in the
//! world list or in the inventory, never both; deleted balls are dropped.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::events::GameEvent;
use super::inventory::Inventory;
use super::zone::DeleteZone;
use crate::consts::*;
use crate::settings::Settings;

/// Unique ball identifier, assigned once at creation and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BallId(pub u32);

impl fmt::Display for BallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which container currently owns a ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallLocation {
    /// Free-moving in the arena
    #[default]
    World,
    /// Parked in the player inventory (frozen, no collisions, not deletable)
    Inventory,
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: BallId,
    pub pos: Vec2,
    /// Velocity in units/second
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub(crate) location: BallLocation,
}

impl Ball {
    pub fn new(id: BallId, pos: Vec2, vel: Vec2, radius: f32, color: Rgb) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            color,
            location: BallLocation::World,
        }
    }

    pub fn location(&self) -> BallLocation {
        self.location
    }

    #[inline]
    pub fn in_inventory(&self) -> bool {
        self.location == BallLocation::Inventory
    }

    /// Uniform motion for one step. Stored balls stay put.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        if self.in_inventory() {
            return;
        }
        self.pos += self.vel * dt;
    }
}

/// Complete engine state: arena, world balls, inventory and tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameLogic {
    /// Arena width (x runs 0..width)
    pub width: f32,
    /// Arena height (y runs 0..height, increasing downward)
    pub height: f32,
    pub delete_zone: DeleteZone,
    /// Default radius for `suck_balls_with_mouse`
    pub suction_radius: f32,
    /// Default speed for `spit_ball_from_inventory`
    pub spit_speed: f32,
    /// Active balls in insertion order
    pub(crate) balls: Vec<Ball>,
    pub(crate) inventory: Inventory,
    /// Record `GameEvent`s (off by default; the driver must drain them)
    #[serde(skip)]
    pub events_enabled: bool,
    /// Events since the last `drain_events`
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
    /// Simulation step counter
    pub time_ticks: u64,
    /// Next ball ID
    next_id: u32,
}

impl GameLogic {
    /// Create an empty arena. Width and height must be positive.
    pub fn new(width: f32, height: f32, delete_zone: DeleteZone) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "arena must have positive size");
        log::info!(
            "Arena {}x{}, delete zone ({}, {})..({}, {})",
            width,
            height,
            delete_zone.x1,
            delete_zone.y1,
            delete_zone.x2,
            delete_zone.y2
        );
        Self {
            width,
            height,
            delete_zone,
            suction_radius: SUCTION_RADIUS,
            spit_speed: SPIT_SPEED,
            balls: Vec::new(),
            inventory: Inventory::new(),
            events_enabled: false,
            events: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Build an arena from (already validated) settings
    pub fn from_settings(settings: &Settings) -> Self {
        let mut logic = Self::new(settings.world_width, settings.world_height, settings.delete_zone);
        logic.suction_radius = settings.suction_radius;
        logic.spit_speed = settings.spit_speed;
        logic
    }

    /// Allocate a new ball ID
    fn next_ball_id(&mut self) -> BallId {
        let id = BallId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create a ball in the world and return its handle.
    ///
    /// Radius and color are taken as given.
    pub fn create_ball(&mut self, pos: Vec2, vel: Vec2, radius: f32, color: Rgb) -> BallId {
        let id = self.next_ball_id();
        self.balls.push(Ball::new(id, pos, vel, radius, color));
        self.record(GameEvent::Spawned { id });
        id
    }

    /// Balls currently in the world, in insertion order
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Look up a ball wherever it lives. `None` once it has been deleted.
    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.balls
            .iter()
            .find(|b| b.id == id)
            .or_else(|| self.inventory.get(id))
    }

    /// Number of balls in world and inventory combined
    pub fn total_balls(&self) -> usize {
        self.balls.len() + self.inventory.len()
    }

    /// Turn event recording on, for drivers that drain every frame
    pub fn with_events(mut self) -> Self {
        self.events_enabled = true;
        self
    }

    /// Buffer an event if recording is on
    pub(crate) fn record(&mut self, event: GameEvent) {
        if self.events_enabled {
            self.events.push(event);
        }
    }

    /// Events waiting to be drained
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Take all events recorded since the previous call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Index of a world ball, if present
    pub(crate) fn world_index(&self, id: BallId) -> Option<usize> {
        self.balls.iter().position(|b| b.id == id)
    }
}
