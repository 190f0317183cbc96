//! Immutable simulation configuration
//!
//! Built once at startup and passed explicitly to the simulation and the
//! renderer; nothing in the crate reads tunables from anywhere else.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// All tunables for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Field rectangle [0, field_width) x [0, field_height)
    pub field_width: f32,
    pub field_height: f32,

    /// Craft handling
    pub rotation_step: f32,
    pub thrust_step: f32,
    pub max_speed: f32,
    pub drag: f32,
    pub craft_size: f32,

    /// Projectiles
    pub projectile_capacity: usize,
    pub projectile_speed: f32,

    /// Obstacles
    pub obstacle_target: usize,
    pub obstacle_spin: f32,
    pub obstacle_min_speed: f32,
    pub obstacle_max_speed: f32,
    /// Half-angle of the inward spawn velocity cone (radians)
    pub spawn_cone: f32,

    /// Background grid spacing (consumed by the renderer only)
    pub net_gap: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            rotation_step: ROTATION_STEP,
            thrust_step: THRUST_STEP,
            max_speed: MAX_SPEED,
            drag: DRAG,
            craft_size: CRAFT_SIZE,
            projectile_capacity: PROJECTILE_CAPACITY,
            projectile_speed: PROJECTILE_SPEED,
            obstacle_target: OBSTACLE_TARGET,
            obstacle_spin: OBSTACLE_SPIN,
            obstacle_min_speed: OBSTACLE_MIN_SPEED,
            obstacle_max_speed: OBSTACLE_MAX_SPEED,
            spawn_cone: SPAWN_CONE,
            net_gap: NET_GAP,
        }
    }
}

impl SimConfig {
    /// Load configuration from a JSON file, falling back to defaults.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {path}");
                    config
                }
                Err(e) => {
                    log::warn!("Bad config in {path}: {e}; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {path}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_sane() {
        let config = SimConfig::default();
        assert!(config.field_width > 0.0 && config.field_height > 0.0);
        assert!(config.max_speed > 0.0);
        assert!(config.drag > 0.0 && config.drag < config.thrust_step);
        assert!(config.projectile_capacity > 0);
        assert!(config.obstacle_target > 0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{"max_speed": 9.0}"#).unwrap();
        assert_eq!(config.max_speed, 9.0);
        assert_eq!(config.field_width, FIELD_WIDTH);
    }
}
