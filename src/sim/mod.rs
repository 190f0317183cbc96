//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Strict per-tick order (input → craft → projectiles → spawn → obstacles → collisions)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod templates;
pub mod tick;

pub use camera::Viewport;
pub use geometry::{centroid, normalize_or_keep, point_in_polygon, rotate, signed_area};
pub use state::{Craft, Obstacle, Projectile, SimState, Thrust, Turn};
pub use templates::{ObstacleTemplate, TemplateError, TemplateLibrary};
pub use tick::{TickInput, tick};
