//! Simulation module
//!
//! All arena logic lives here. Nothing in this module renders, polls input or
//! touches the platform:
//! - Caller-supplied timestep
//! - Seeded RNG only
//! - Stable iteration order (world balls in insertion order)

pub mod collision;
pub mod color;
pub mod events;
pub mod inventory;
pub mod spawn;
pub mod state;
pub mod suction;
pub mod tick;
pub mod zone;

pub use collision::{WallContact, circles_touch, keep_inside_bounds, mix_colors_on_collisions};
pub use color::{PASTEL_PALETTE, Rgb, mix_colors};
pub use events::{GameEvent, Wall};
pub use inventory::Inventory;
pub use spawn::{BallParams, random_ball_params, spawn_rng};
pub use state::{Ball, BallId, BallLocation, GameLogic};
pub use suction::{DEFAULT_SPIT_DIRECTION, SpitOptions, spit_direction};
pub use zone::DeleteZone;
