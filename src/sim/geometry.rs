//! Vector and polygon primitives
//!
//! Everything the rest of the simulation does geometrically bottoms out here:
//! rotation of direction vectors, the polygon centroid used as the spin pivot
//! for obstacles, and the even-odd point-in-polygon test behind every
//! collision check.

use glam::Vec2;

use crate::consts::EDGE_EPSILON;

/// Rotate a vector by `angle` radians (counter-clockwise).
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Normalize a vector, leaving a zero vector unchanged.
///
/// Direction vectors must never collapse to NaN; a zero aim vector simply
/// keeps whatever heading was already in effect.
#[inline]
pub fn normalize_or_keep(v: Vec2) -> Vec2 {
    let n = v.normalize_or_zero();
    if n == Vec2::ZERO { v } else { n }
}

/// Signed area of an ordered closed polygon (shoelace formula).
///
/// Positive for counter-clockwise winding.
pub fn signed_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    let mut area = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        area += a.x * b.y - b.x * a.y;
    }
    area / 2.0
}

/// Centroid of an ordered closed polygon with nonzero signed area.
///
/// Precondition: `signed_area(vertices) != 0`. Templates are validated at
/// load time, so simulation code never re-checks.
pub fn centroid(vertices: &[Vec2]) -> Vec2 {
    let n = vertices.len();
    let mut area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        area += cross;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    Vec2::new(cx / (3.0 * area), cy / (3.0 * area))
}

/// Even-odd point-in-polygon test.
///
/// Casts a horizontal ray from `point` toward +x and counts edge crossings;
/// an odd count means inside. The strict `>` comparison pair keeps vertices
/// on the ray from double-counting, and [`EDGE_EPSILON`] guards the
/// intersection denominator for near-horizontal edges.
pub fn point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    let n = vertices.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[j];
        if (a.y > point.y) != (b.y > point.y) {
            let denom = b.y - a.y;
            if denom.abs() > EDGE_EPSILON {
                let x_cross = a.x + (point.y - a.y) / denom * (b.x - a.x);
                if point.x < x_cross {
                    inside = !inside;
                }
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    fn regular_polygon(sides: usize, radius: f32) -> Vec<Vec2> {
        (0..sides)
            .map(|i| {
                let theta = i as f32 / sides as f32 * TAU;
                Vec2::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect()
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate(Vec2::new(1.0, 0.0), std::f32::consts::FRAC_PI_2);
        assert!((v - Vec2::new(0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_vector_unchanged() {
        assert_eq!(normalize_or_keep(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_normalize_scales_to_unit() {
        let n = normalize_or_keep(Vec2::new(3.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_unit_square_area() {
        assert!((signed_area(&unit_square()) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_clockwise_winding_negative_area() {
        let mut square = unit_square();
        square.reverse();
        assert!(signed_area(&square) < 0.0);
    }

    #[test]
    fn test_unit_square_centroid() {
        let c = centroid(&unit_square());
        assert!((c - Vec2::new(0.5, 0.5)).length() < 1e-6);
    }

    #[test]
    fn test_regular_polygon_centroid_at_origin() {
        for sides in [3, 5, 8, 12] {
            let c = centroid(&regular_polygon(sides, 40.0));
            assert!(c.length() < 1e-3, "{sides}-gon centroid {c}");
        }
    }

    #[test]
    fn test_point_in_unit_square() {
        let square = unit_square();
        assert!(point_in_polygon(Vec2::new(0.5, 0.5), &square));
        assert!(!point_in_polygon(Vec2::new(1.5, 0.5), &square));
        assert!(!point_in_polygon(Vec2::new(0.5, -0.5), &square));
    }

    #[test]
    fn test_point_in_concave_polygon() {
        // A "C" shape; the notch at (2, 1) is outside
        let poly = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(3.0, 0.5),
            Vec2::new(1.0, 0.5),
            Vec2::new(1.0, 1.5),
            Vec2::new(3.0, 1.5),
            Vec2::new(3.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        assert!(point_in_polygon(Vec2::new(0.5, 1.0), &poly));
        assert!(!point_in_polygon(Vec2::new(2.0, 1.0), &poly));
    }

    proptest! {
        #[test]
        fn prop_rotation_preserves_length(x in -100.0f32..100.0, y in -100.0f32..100.0, angle in -TAU..TAU) {
            let v = Vec2::new(x, y);
            let r = rotate(v, angle);
            prop_assert!((r.length() - v.length()).abs() < 1e-2);
        }

        #[test]
        fn prop_centroid_of_regular_polygon_tracks_offset(
            sides in 3usize..12,
            dx in -500.0f32..500.0,
            dy in -500.0f32..500.0,
        ) {
            let poly: Vec<Vec2> = regular_polygon(sides, 30.0)
                .into_iter()
                .map(|p| p + Vec2::new(dx, dy))
                .collect();
            let c = centroid(&poly);
            // f32 shoelace terms cancel at large offsets; allow a loose bound
            prop_assert!((c - Vec2::new(dx, dy)).length() < 0.5);
        }
    }
}
