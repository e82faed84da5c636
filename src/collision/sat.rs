//! Separating Axis Theorem test between two convex polygons.

use crate::math::vec2::Vec2;
use crate::objects::body::Body;

/// Result of a collision query.
///
/// `axis` is only meaningful when `collided` is true. It is a unit edge normal of
/// one of the two polygons; its sign depends on which edge won, so callers that
/// need a direction must orient it themselves (e.g. against the centroids).
/// This is the edge normal itself, not the edge direction a quarter turn away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    pub collided: bool,
    pub axis: Vec2,
}

impl CollisionInfo {
    pub const NONE: CollisionInfo = CollisionInfo {
        collided: false,
        axis: Vec2::ZERO,
    };
}

/// Checks two bodies for overlap. Only their shapes are read.
pub fn find_collision(body_a: &Body, body_b: &Body) -> CollisionInfo {
    find_collision_shapes(body_a.vertices(), body_b.vertices())
}

/// Checks two convex vertex lists for overlap.
///
/// Both polygons' edge normals are tried. If either set contains a separating
/// axis the shapes are apart. Otherwise the axis is taken from whichever sweep
/// scored lower; on a tie the second polygon's axis wins.
///
/// Neither list may contain a zero-length edge; `Body::new` enforces this.
pub fn find_collision_shapes(shape_a: &[Vec2], shape_b: &[Vec2]) -> CollisionInfo {
    let Some((axis_a, score_a)) = sweep_edges(shape_a, shape_b) else {
        return CollisionInfo::NONE;
    };
    let Some((axis_b, score_b)) = sweep_edges(shape_b, shape_a) else {
        return CollisionInfo::NONE;
    };

    let axis = if score_a < score_b { axis_a } else { axis_b };
    CollisionInfo {
        collided: true,
        axis,
    }
}

/// Projects every vertex onto `axis`, returning the `(min, max)` interval.
fn project_onto_axis(vertices: &[Vec2], axis: Vec2) -> (f64, f64) {
    vertices
        .iter()
        .map(|v| v.dot(axis))
        .fold((f64::MAX, -f64::MAX), |(min, max), p| (min.min(p), max.max(p)))
}

/// Tries every edge normal of `reference` as a separating axis.
///
/// Returns `None` as soon as one separates the shapes. Otherwise returns the
/// axis with the lowest overlap score and that score. The score is the dot
/// product of the two `(min, max)` intervals; later edges win ties.
fn sweep_edges(reference: &[Vec2], other: &[Vec2]) -> Option<(Vec2, f64)> {
    let n = reference.len();
    let mut best_score = f64::MAX;
    let mut best_axis = Vec2::ZERO;

    for i in 0..n {
        let edge = reference[i] - reference[(i + 1) % n];
        debug_assert!(edge != Vec2::ZERO, "zero-length edge at vertex {}", i);
        let axis = edge.perpendicular().normalize();

        let (min_r, max_r) = project_onto_axis(reference, axis);
        let (min_o, max_o) = project_onto_axis(other, axis);

        if min_r > max_o || min_o > max_r {
            return None;
        }

        let score = Vec2::new(min_r, max_r).dot(Vec2::new(min_o, max_o));
        if score <= best_score {
            best_score = score;
            best_axis = axis;
        }
    }

    Some((best_axis, best_score))
}
