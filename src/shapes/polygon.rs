//! Helpers over convex polygons given as world-space vertex lists.
//!
//! Vertices are expected counter-clockwise, with an implicit edge from the last
//! vertex back to the first.

use crate::math::vec2::Vec2;

/// Corners of an axis-aligned rectangle centered at `center`, counter-clockwise
/// starting from the bottom-left corner.
pub fn rectangle(center: Vec2, width: f64, height: f64) -> Vec<Vec2> {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    vec![
        Vec2::new(center.x - half_w, center.y - half_h),
        Vec2::new(center.x + half_w, center.y - half_h),
        Vec2::new(center.x + half_w, center.y + half_h),
        Vec2::new(center.x - half_w, center.y + half_h),
    ]
}

/// Vertices of a regular polygon with `sides` corners on a circle of `radius`.
///
/// Panics if fewer than 3 sides are requested.
pub fn regular_polygon(center: Vec2, radius: f64, sides: usize) -> Vec<Vec2> {
    if sides < 3 {
        panic!("A polygon needs at least 3 sides, got {}.", sides);
    }
    let step = std::f64::consts::TAU / sides as f64;
    (0..sides)
        .map(|i| center + Vec2::new(radius, 0.0).rotate(step * i as f64))
        .collect()
}

/// Edge vectors `v[i] - v[i + 1]`, wrapping around at the end.
pub fn edges(vertices: &[Vec2]) -> Vec<Vec2> {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i] - vertices[(i + 1) % n])
        .collect()
}

/// Signed area via the shoelace formula. Positive for counter-clockwise order.
pub fn signed_area(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let twice_area: f64 = (0..n)
        .map(|i| vertices[i].cross(vertices[(i + 1) % n]))
        .sum();
    twice_area / 2.0
}

/// Arithmetic mean of the vertices. This is the body's logical position, not the
/// area-weighted center of mass.
pub fn vertex_mean(vertices: &[Vec2]) -> Vec2 {
    if vertices.is_empty() {
        return Vec2::ZERO;
    }
    let sum = vertices.iter().fold(Vec2::ZERO, |acc, &v| acc + v);
    sum / vertices.len() as f64
}

/// True if the outline is a simple convex polygon in either winding.
///
/// Every turn between consecutive edges must go the same way and the turns must
/// add up to exactly one revolution, which rules out self-intersecting stars.
/// Collinear vertices (a turn whose sine is below `1e-12`) are tolerated, a
/// vertex that doubles back on its edge is not.
pub fn is_convex(vertices: &[Vec2]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0_f64;
    let mut winding = 0.0_f64;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];
        let (incoming, outgoing) = (b - a, c - b);
        let turn = incoming.cross(outgoing);
        let along = incoming.dot(outgoing);

        // Relative to the edge lengths so the tolerance holds at any scale
        if turn.abs() <= 1e-12 * incoming.magnitude() * outgoing.magnitude() {
            if along < 0.0 {
                return false;
            }
            continue;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
        winding += turn.atan2(along);
    }
    // All-collinear input has no area at all
    sign != 0.0 && (winding.abs() - std::f64::consts::TAU).abs() < 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-9;

    /// Corners of a regular pentagon visited every second one.
    fn pentagram(radius: f64) -> Vec<Vec2> {
        let pentagon = regular_polygon(Vec2::ZERO, radius, 5);
        (0..5).map(|i| pentagon[i * 2 % 5]).collect()
    }

    #[test]
    fn test_rectangle_is_ccw_and_centered() {
        let rect = rectangle(Vec2::new(150.0, 110.0), 100.0, 20.0);
        assert_eq!(rect.len(), 4);
        assert_eq!(rect[0], Vec2::new(100.0, 100.0));
        assert_eq!(rect[2], Vec2::new(200.0, 120.0));
        assert!((signed_area(&rect) - 2000.0).abs() < EPSILON);
        let c = vertex_mean(&rect);
        assert!((c.x - 150.0).abs() < EPSILON);
        assert!((c.y - 110.0).abs() < EPSILON);
    }

    #[test]
    fn test_regular_polygon() {
        let hex = regular_polygon(Vec2::new(5.0, -2.0), 3.0, 6);
        assert_eq!(hex.len(), 6);
        for v in &hex {
            assert_abs_diff_eq!(v.distance(Vec2::new(5.0, -2.0)), 3.0, epsilon = EPSILON);
        }
        assert!(signed_area(&hex) > 0.0);
        assert!(is_convex(&hex));
        let c = vertex_mean(&hex);
        assert_abs_diff_eq!(c.x, 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(c.y, -2.0, epsilon = EPSILON);
    }

    #[test]
    #[should_panic]
    fn test_regular_polygon_too_few_sides() {
        regular_polygon(Vec2::ZERO, 1.0, 2);
    }

    #[test]
    fn test_edges_wrap_around() {
        let tri = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        let e = edges(&tri);
        assert_eq!(e, vec![Vec2::new(-1.0, 0.0), Vec2::new(1.0, -1.0), Vec2::new(0.0, 1.0)]);
    }

    #[test]
    fn test_signed_area_orientation() {
        let mut tri = vec![Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(0.0, 3.0)];
        assert!((signed_area(&tri) - 4.5).abs() < EPSILON);
        tri.reverse();
        assert!((signed_area(&tri) + 4.5).abs() < EPSILON);
    }

    #[test]
    fn test_is_convex() {
        let square = rectangle(Vec2::ZERO, 2.0, 2.0);
        assert!(is_convex(&square));

        let mut clockwise = square.clone();
        clockwise.reverse();
        assert!(is_convex(&clockwise));

        // Extra collinear vertex on the bottom edge
        let with_midpoint = vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(0.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
        ];
        assert!(is_convex(&with_midpoint));

        let arrow = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(1.0, 1.0),
        ];
        assert!(!is_convex(&arrow));

        let line = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)];
        assert!(!is_convex(&line));

        // Every turn goes the same way but the outline wraps around twice
        assert!(!is_convex(&pentagram(10.0)));

        // Doubles back along the bottom edge
        let spike = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
        ];
        assert!(!is_convex(&spike));
    }

    #[test]
    fn test_is_convex_independent_of_scale() {
        for scale in [1e-9, 1e-7, 1e-3, 1.0, 1e6] {
            let tri = vec![Vec2::new(0.0, 0.0), Vec2::new(scale, 0.0), Vec2::new(0.0, scale)];
            assert!(is_convex(&tri), "triangle at scale {} rejected", scale);
            assert!(!is_convex(&pentagram(scale)), "pentagram at scale {} accepted", scale);
        }
    }
}
