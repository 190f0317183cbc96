//! Fixed-step simulation tick
//!
//! One call per display frame. Strict per-tick order: input → craft →
//! projectile advance/cull → obstacle top-up → obstacle advance/cull →
//! collision resolution. The host renders read-only after the call returns.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::geometry::{normalize_or_keep, rotate};
use super::state::{Obstacle, Projectile, SimState, Thrust, Turn};
use super::templates::TemplateLibrary;
use crate::config::SimConfig;

/// Input sampled once per tick by the host.
///
/// Turn and thrust fields are held-state, fire is edge-triggered. `aim` is an
/// optional field-space reticle point; when present, projectiles head toward
/// it instead of along the craft heading.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust_forward: bool,
    pub thrust_backward: bool,
    pub fire: bool,
    pub aim: Option<Vec2>,
}

/// Advance the simulation by one tick.
pub fn tick(
    state: &mut SimState,
    input: &TickInput,
    config: &SimConfig,
    templates: &TemplateLibrary,
) {
    state.time_ticks += 1;
    state.craft.engine_active = false;

    // Fire before turning, so the projectile heading matches what the player
    // saw when they pressed the button
    if input.fire {
        fire_projectile(state, input.aim, config);
    }

    if input.turn_left {
        state.craft.turn(Turn::Left, config);
    }
    if input.turn_right {
        state.craft.turn(Turn::Right, config);
    }
    if input.thrust_forward {
        state.craft.thrust(Thrust::Forward, config);
    }
    if input.thrust_backward {
        state.craft.thrust(Thrust::Backward, config);
    }

    state.craft.integrate(config);

    advance_projectiles(state, config);
    spawn_obstacles(state, config, templates);
    advance_obstacles(state, config);

    collision::resolve(state, config);
}

/// Spawn a projectile at the craft position, capacity permitting.
fn fire_projectile(state: &mut SimState, aim: Option<Vec2>, config: &SimConfig) {
    if state.projectiles.len() >= config.projectile_capacity {
        log::debug!("fire rejected: pool at capacity {}", config.projectile_capacity);
        return;
    }
    let dir = match aim {
        // Zero aim offset keeps the craft heading
        Some(point) if point != state.craft.pos => normalize_or_keep(point - state.craft.pos),
        _ => state.craft.dir,
    };
    state.projectiles.push(Projectile {
        pos: state.craft.pos,
        dir,
    });
}

/// Advance all live projectiles, then drop the ones that left the field.
fn advance_projectiles(state: &mut SimState, config: &SimConfig) {
    for projectile in &mut state.projectiles {
        projectile.advance(config);
    }

    let mut gone: Vec<usize> = Vec::new();
    for (i, projectile) in state.projectiles.iter().enumerate() {
        if !projectile.on_field(config) {
            gone.push(i);
        }
    }
    for &i in gone.iter().rev() {
        state.projectiles.remove(i);
    }
}

/// Top the obstacle population back up to the configured target.
///
/// Each new obstacle uses a uniformly chosen template, spawns on a uniformly
/// chosen field edge at a random offset, and drifts inward at a random speed
/// within a cone about the edge normal. All obstacles share one spin rate.
fn spawn_obstacles(state: &mut SimState, config: &SimConfig, templates: &TemplateLibrary) {
    let deficit = config.obstacle_target.saturating_sub(state.obstacles.len());
    if deficit == 0 {
        return;
    }
    log::debug!("topping up {deficit} obstacle(s)");

    while state.obstacles.len() < config.obstacle_target {
        let template = templates.pick(&mut state.rng);

        let (pos, inward) = match state.rng.random_range(0..4u8) {
            0 => (
                Vec2::new(state.rng.random_range(0.0..=config.field_width), 0.0),
                Vec2::new(0.0, 1.0),
            ),
            1 => (
                Vec2::new(config.field_width, state.rng.random_range(0.0..=config.field_height)),
                Vec2::new(-1.0, 0.0),
            ),
            2 => (
                Vec2::new(state.rng.random_range(0.0..=config.field_width), config.field_height),
                Vec2::new(0.0, -1.0),
            ),
            _ => (
                Vec2::new(0.0, state.rng.random_range(0.0..=config.field_height)),
                Vec2::new(1.0, 0.0),
            ),
        };

        let speed = state
            .rng
            .random_range(config.obstacle_min_speed..=config.obstacle_max_speed);
        let jitter = state.rng.random_range(-config.spawn_cone..=config.spawn_cone);
        let vel = rotate(inward, jitter) * speed;

        log::debug!("spawned '{}' at {pos} vel {vel}", template.name);
        state
            .obstacles
            .push(Obstacle::from_template(template, pos, vel, config.obstacle_spin));
    }
}

/// Rotate and translate every obstacle, then drop the fully off-field ones.
fn advance_obstacles(state: &mut SimState, config: &SimConfig) {
    for obstacle in &mut state.obstacles {
        obstacle.advance();
    }

    let mut gone: Vec<usize> = Vec::new();
    for (i, obstacle) in state.obstacles.iter().enumerate() {
        if obstacle.is_off_field(config) {
            gone.push(i);
        }
    }
    for &i in gone.iter().rev() {
        state.obstacles.remove(i);
    }
}
