//! Driftfield - simulation core for a camera-follow asteroids game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (craft physics, projectiles, obstacles, collisions)
//! - `config`: Immutable startup configuration
//!
//! Windowing, input polling and drawing live outside this crate. The host
//! samples its input device once per frame into a [`sim::TickInput`], calls
//! [`sim::tick`], and renders the resulting state read-only through the
//! [`sim::Viewport`] transform.

pub mod config;
pub mod sim;

pub use config::SimConfig;

/// Fixed gameplay constants
pub mod consts {
    use std::f32::consts::PI;

    /// Field dimensions (logical units, independent of viewport size)
    pub const FIELD_WIDTH: f32 = 2000.0;
    pub const FIELD_HEIGHT: f32 = 2000.0;

    /// Craft heading change per tick while a turn input is held (radians)
    pub const ROTATION_STEP: f32 = PI / 32.0;
    /// Speed change per tick while a thrust input is held
    pub const THRUST_STEP: f32 = 0.2;
    /// Craft speed clamp (field units per tick, either direction)
    pub const MAX_SPEED: f32 = 6.0;
    /// Linear speed decay per tick, floored at zero
    pub const DRAG: f32 = 0.07;
    /// Distance from craft position to each hull vertex
    pub const CRAFT_SIZE: f32 = 15.0;

    /// Projectile pool capacity
    pub const PROJECTILE_CAPACITY: usize = 100;
    /// Projectile travel per tick
    pub const PROJECTILE_SPEED: f32 = 15.0;

    /// Obstacle population target (spawn ceiling)
    pub const OBSTACLE_TARGET: usize = 8;
    /// Obstacle spin per tick (radians, about its own centroid)
    pub const OBSTACLE_SPIN: f32 = PI / 256.0;
    /// Obstacle translation speed range (field units per tick)
    pub const OBSTACLE_MIN_SPEED: f32 = 0.5;
    pub const OBSTACLE_MAX_SPEED: f32 = 2.5;
    /// Half-angle of the inward spawn cone (radians)
    pub const SPAWN_CONE: f32 = PI / 3.0;

    /// Grid line spacing for the background net (render hint)
    pub const NET_GAP: f32 = 100.0;

    /// Initial viewport dimensions (pixels; 1 field unit = 1 pixel)
    pub const INIT_VIEWPORT_WIDTH: f32 = 1600.0;
    pub const INIT_VIEWPORT_HEIGHT: f32 = 900.0;

    /// Guard against near-zero denominators in the ray-casting edge test.
    /// Tunable; no deeper meaning than "smaller than any real edge slope".
    pub const EDGE_EPSILON: f32 = 1e-6;
}
