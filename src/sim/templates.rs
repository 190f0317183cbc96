//! Obstacle template library
//!
//! A small fixed set of named local-coordinate polygons that the spawner
//! instantiates from. Validated once at load: every template needs at least
//! three vertices and nonzero signed area, otherwise the centroid math the
//! simulation relies on would divide by zero mid-run.

use glam::Vec2;
use rand::Rng;
use thiserror::Error;

use super::geometry::{centroid, signed_area};

/// Templates whose area magnitude falls below this are rejected as degenerate.
const MIN_TEMPLATE_AREA: f32 = 1e-3;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template '{name}' has {count} vertices, need at least 3")]
    TooFewVertices { name: String, count: usize },
    #[error("template '{name}' has (near-)zero signed area; vertices are degenerate")]
    DegenerateArea { name: String },
}

/// A named polygon in local coordinates with its precomputed centroid.
#[derive(Debug, Clone)]
pub struct ObstacleTemplate {
    pub name: String,
    pub vertices: Vec<Vec2>,
    pub centroid: Vec2,
}

impl ObstacleTemplate {
    /// Validate and build a template; the only fallible step in the crate.
    pub fn new(name: &str, vertices: Vec<Vec2>) -> Result<Self, TemplateError> {
        if vertices.len() < 3 {
            return Err(TemplateError::TooFewVertices {
                name: name.to_string(),
                count: vertices.len(),
            });
        }
        if signed_area(&vertices).abs() < MIN_TEMPLATE_AREA {
            return Err(TemplateError::DegenerateArea {
                name: name.to_string(),
            });
        }
        let centroid = centroid(&vertices);
        Ok(Self {
            name: name.to_string(),
            vertices,
            centroid,
        })
    }
}

/// The immutable template set, loaded once at startup.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    templates: Vec<ObstacleTemplate>,
}

impl TemplateLibrary {
    /// The built-in set of asteroid shapes.
    pub fn builtin() -> Result<Self, TemplateError> {
        let templates = vec![
            ObstacleTemplate::new(
                "boulder",
                vec![
                    Vec2::new(40.0, 0.0),
                    Vec2::new(22.0, 32.0),
                    Vec2::new(-18.0, 36.0),
                    Vec2::new(-42.0, 6.0),
                    Vec2::new(-26.0, -30.0),
                    Vec2::new(16.0, -38.0),
                ],
            )?,
            ObstacleTemplate::new(
                "shard",
                vec![
                    Vec2::new(34.0, 4.0),
                    Vec2::new(-8.0, 20.0),
                    Vec2::new(-30.0, -2.0),
                    Vec2::new(-4.0, -24.0),
                ],
            )?,
            ObstacleTemplate::new(
                "slab",
                vec![
                    Vec2::new(48.0, 12.0),
                    Vec2::new(8.0, 28.0),
                    Vec2::new(-44.0, 18.0),
                    Vec2::new(-50.0, -14.0),
                    Vec2::new(30.0, -26.0),
                ],
            )?,
            ObstacleTemplate::new(
                "pebble",
                vec![
                    Vec2::new(16.0, 2.0),
                    Vec2::new(4.0, 14.0),
                    Vec2::new(-14.0, 6.0),
                    Vec2::new(-10.0, -10.0),
                    Vec2::new(8.0, -12.0),
                ],
            )?,
        ];
        log::info!("Loaded {} obstacle templates", templates.len());
        Ok(Self { templates })
    }

    /// Build a library from caller-supplied templates (must be non-empty).
    pub fn from_templates(templates: Vec<ObstacleTemplate>) -> Self {
        assert!(!templates.is_empty(), "template library cannot be empty");
        Self { templates }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Pick a template uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &ObstacleTemplate {
        &self.templates[rng.random_range(0..self.templates.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_builtin_library_loads() {
        let lib = TemplateLibrary::builtin().unwrap();
        assert!(lib.len() >= 3);
        for t in &lib.templates {
            assert!(t.vertices.len() >= 3, "{}", t.name);
            assert!(signed_area(&t.vertices).abs() > MIN_TEMPLATE_AREA, "{}", t.name);
        }
    }

    #[test]
    fn test_too_few_vertices_rejected() {
        let err = ObstacleTemplate::new("line", vec![Vec2::ZERO, Vec2::new(1.0, 1.0)]);
        assert!(matches!(err, Err(TemplateError::TooFewVertices { count: 2, .. })));
    }

    #[test]
    fn test_degenerate_area_rejected() {
        // Three collinear points: enough vertices, zero area
        let err = ObstacleTemplate::new(
            "flat",
            vec![Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)],
        );
        assert!(matches!(err, Err(TemplateError::DegenerateArea { .. })));
    }

    #[test]
    fn test_custom_library() {
        let wedge = ObstacleTemplate::new(
            "wedge",
            vec![Vec2::new(20.0, 0.0), Vec2::new(-20.0, 15.0), Vec2::new(-20.0, -15.0)],
        )
        .unwrap();
        let lib = TemplateLibrary::from_templates(vec![wedge]);
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(lib.pick(&mut rng).name, "wedge");
    }

    #[test]
    fn test_pick_is_uniformish() {
        let lib = TemplateLibrary::builtin().unwrap();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut counts = vec![0usize; lib.len()];
        for _ in 0..1000 {
            let t = lib.pick(&mut rng);
            let idx = lib.templates.iter().position(|x| x.name == t.name).unwrap();
            counts[idx] += 1;
        }
        assert!(counts.iter().all(|&c| c > 0));
    }
}
