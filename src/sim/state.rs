//! Simulation state and core entity types
//!
//! One `SimState` per session: the persistent craft, the bounded projectile
//! and obstacle collections, the score, and the seeded RNG that makes a run
//! reproducible. All per-entity movement rules live on the entity types;
//! cross-entity logic (spawning, collisions) lives in `tick`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geometry::rotate;
use super::templates::ObstacleTemplate;
use crate::config::SimConfig;

/// Turn input direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// Thrust input direction (along or against the craft heading)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thrust {
    Forward,
    Backward,
}

/// The player-controlled craft. One persistent instance; never destroyed.
#[derive(Debug, Clone)]
pub struct Craft {
    /// Unit heading vector
    pub dir: Vec2,
    /// Position in field coordinates
    pub pos: Vec2,
    /// Signed speed along `dir` (negative = reversing)
    pub speed: f32,
    /// True only on ticks where a thrust input was applied (render hint)
    pub engine_active: bool,
}

impl Craft {
    /// Spawn at field center, facing +x.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            dir: Vec2::new(1.0, 0.0),
            pos: Vec2::new(config.field_width / 2.0, config.field_height / 2.0),
            speed: 0.0,
            engine_active: false,
        }
    }

    /// Rotate the heading by one fixed step. Instantaneous; no angular momentum.
    pub fn turn(&mut self, turn: Turn, config: &SimConfig) {
        let step = match turn {
            Turn::Left => -config.rotation_step,
            Turn::Right => config.rotation_step,
        };
        self.dir = rotate(self.dir, step);
    }

    /// Apply one tick of thrust, clamped to [-max_speed, max_speed].
    pub fn thrust(&mut self, thrust: Thrust, config: &SimConfig) {
        let step = match thrust {
            Thrust::Forward => config.thrust_step,
            Thrust::Backward => -config.thrust_step,
        };
        self.speed = (self.speed + step).clamp(-config.max_speed, config.max_speed);
        self.engine_active = true;
    }

    /// Move along the heading and apply drag.
    ///
    /// Each axis is updated independently and only if the new value stays
    /// within [0, field_dim); a rejected axis is skipped for the tick, not
    /// clamped, so the craft can slide along the boundary on the other axis.
    pub fn integrate(&mut self, config: &SimConfig) {
        if self.speed != 0.0 {
            let new_pos = self.pos + self.dir * self.speed;
            if (0.0..config.field_width).contains(&new_pos.x) {
                self.pos.x = new_pos.x;
            }
            if (0.0..config.field_height).contains(&new_pos.y) {
                self.pos.y = new_pos.y;
            }
        }

        // Linear drag, floored exactly at zero once within one step
        if self.speed.abs() <= config.drag {
            self.speed = 0.0;
        } else {
            self.speed -= config.drag * self.speed.signum();
        }
    }

    /// The craft's three world-space hull vertices: tip along the heading,
    /// wings at 3π/4 and 5π/4. Shared by the renderer and collision checks.
    pub fn hull_vertices(&self, config: &SimConfig) -> [Vec2; 3] {
        let nose = self.dir * config.craft_size;
        [
            self.pos + nose,
            self.pos + rotate(nose, 3.0 * std::f32::consts::FRAC_PI_4),
            self.pos + rotate(nose, 5.0 * std::f32::consts::FRAC_PI_4),
        ]
    }
}

/// A fired projectile. Heading is fixed at fire time.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub pos: Vec2,
    pub dir: Vec2,
}

impl Projectile {
    pub fn advance(&mut self, config: &SimConfig) {
        self.pos += self.dir * config.projectile_speed;
    }

    /// Still inside the field (inclusive bounds)?
    pub fn on_field(&self, config: &SimConfig) -> bool {
        (0.0..=config.field_width).contains(&self.pos.x)
            && (0.0..=config.field_height).contains(&self.pos.y)
    }
}

/// A drifting polygonal obstacle instantiated from a template.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Reference position in field coordinates
    pub pos: Vec2,
    /// Constant translation per tick
    pub vel: Vec2,
    /// Ordered polygon vertices as local offsets from `pos`
    pub vertices: Vec<Vec2>,
    /// Local-space centroid; the spin pivot
    pub centroid: Vec2,
    /// Rotation per tick about the centroid (radians)
    pub spin: f32,
}

impl Obstacle {
    /// Instantiate from a template at a spawn position.
    pub fn from_template(template: &ObstacleTemplate, pos: Vec2, vel: Vec2, spin: f32) -> Self {
        Self {
            pos,
            vel,
            vertices: template.vertices.clone(),
            centroid: template.centroid,
            spin,
        }
    }

    /// One lifecycle step: spin about the centroid, then translate.
    /// Rotation about the centroid leaves the centroid itself fixed.
    pub fn advance(&mut self) {
        for v in &mut self.vertices {
            *v = self.centroid + rotate(*v - self.centroid, self.spin);
        }
        self.pos += self.vel;
    }

    /// World-space vertex positions for rendering and collision.
    pub fn world_vertices(&self) -> Vec<Vec2> {
        self.vertices.iter().map(|&v| self.pos + v).collect()
    }

    /// Fully outside the field: both the reference position and every
    /// world-space vertex. Straddling the boundary keeps it alive.
    pub fn is_off_field(&self, config: &SimConfig) -> bool {
        let outside = |p: Vec2| {
            !((0.0..=config.field_width).contains(&p.x)
                && (0.0..=config.field_height).contains(&p.y))
        };
        outside(self.pos) && self.vertices.iter().all(|&v| outside(self.pos + v))
    }
}

/// Complete simulation state for one session.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed, for reproducing a session
    pub seed: u64,
    /// Spawner RNG, advanced only by the spawner
    pub rng: Pcg32,
    /// Tick counter
    pub time_ticks: u64,
    /// Obstacles destroyed by projectiles
    pub score: u64,
    pub craft: Craft,
    /// Live projectiles; never exceeds `projectile_capacity`
    pub projectiles: Vec<Projectile>,
    /// Live obstacles; never exceeds `obstacle_target`
    pub obstacles: Vec<Obstacle>,
}

impl SimState {
    pub fn new(config: &SimConfig, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            score: 0,
            craft: Craft::new(config),
            projectiles: Vec::with_capacity(config.projectile_capacity),
            obstacles: Vec::with_capacity(config.obstacle_target),
        }
    }
}
