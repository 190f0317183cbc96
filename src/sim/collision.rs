//! Collision resolution
//!
//! Runs after all movement for the tick. Craft hull vertices and projectile
//! positions are tested as point sets against each obstacle's world-space
//! polygon; there is no polygon-vs-polygon sweep, so a fast thin entity can
//! tunnel through a thin obstacle edge between ticks. Accepted limitation.
//!
//! Hits are collected first and removals applied back-to-front by index, so
//! a tick with several simultaneous hits never invalidates a pending index.

use super::geometry::point_in_polygon;
use super::state::SimState;
use crate::config::SimConfig;

/// Cross-test the craft and all live projectiles against all live obstacles,
/// apply removals, and award score for projectile kills.
///
/// A craft hit removes the obstacle only; the craft itself is indestructible.
pub fn resolve(state: &mut SimState, config: &SimConfig) {
    let hull = state.craft.hull_vertices(config);

    // Collect phase: indices only, no mutation while scanning
    let mut dead_obstacles: Vec<usize> = Vec::new();
    let mut dead_projectiles: Vec<usize> = Vec::new();
    let mut kills: u64 = 0;

    for (oi, obstacle) in state.obstacles.iter().enumerate() {
        let polygon = obstacle.world_vertices();

        if hull.iter().any(|&v| point_in_polygon(v, &polygon)) {
            log::debug!("craft struck obstacle {oi}");
            dead_obstacles.push(oi);
            continue;
        }

        for (pi, projectile) in state.projectiles.iter().enumerate() {
            if dead_projectiles.contains(&pi) {
                continue;
            }
            if point_in_polygon(projectile.pos, &polygon) {
                dead_obstacles.push(oi);
                dead_projectiles.push(pi);
                kills += 1;
                break;
            }
        }
    }

    // Apply phase: back-to-front so earlier indices stay valid
    for &oi in dead_obstacles.iter().rev() {
        state.obstacles.remove(oi);
    }
    dead_projectiles.sort_unstable();
    for &pi in dead_projectiles.iter().rev() {
        state.projectiles.remove(pi);
    }

    if kills > 0 {
        state.score += kills;
        log::debug!("{kills} obstacle(s) destroyed, score {}", state.score);
    }
}
