use std::fmt;

use crate::collision::Aabb;
use crate::math::vec2::Vec2;
use crate::objects::tag::BodyTag;
use crate::shapes::polygon;

/// Mass sentinel for immovable bodies (platforms, walls, elevators).
pub const INFINITE_MASS: f64 = f64::INFINITY;

/// Why a body could not be built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyError {
    /// A polygon needs at least three vertices.
    TooFewVertices(usize),
    /// Vertex at this index has a NaN or infinite coordinate.
    NonFiniteVertex(usize),
    /// Vertex at this index coincides with the next one, giving a zero-length edge.
    DegenerateEdge(usize),
    /// The vertices do not describe a convex polygon.
    NotConvex,
    /// Mass must be positive (or `INFINITE_MASS`).
    InvalidMass(f64),
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::TooFewVertices(n) => {
                write!(f, "polygon must have at least 3 vertices, got {}", n)
            }
            BodyError::NonFiniteVertex(i) => write!(f, "vertex {} is not finite", i),
            BodyError::DegenerateEdge(i) => {
                write!(f, "edge starting at vertex {} has zero length", i)
            }
            BodyError::NotConvex => f.write_str("polygon is not convex"),
            BodyError::InvalidMass(m) => write!(f, "invalid mass {}", m),
        }
    }
}

impl std::error::Error for BodyError {}

/// A convex polygonal body. Vertices are absolute world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    shape: Vec<Vec2>,
    mass: f64,
    velocity: Vec2,
    // Accumulators, cleared after every integration
    force: Vec2,
    impulse: Vec2,
    rotation: f64,
    tag: BodyTag,
    alive: bool,
}

impl Body {
    /// Creates a body from a counter-clockwise convex polygon.
    ///
    /// Fails on fewer than 3 vertices, non-finite or repeated consecutive
    /// vertices, a non-convex outline, or a mass that is NaN or not positive.
    /// `INFINITE_MASS` makes the body static.
    pub fn new(shape: Vec<Vec2>, mass: f64, tag: BodyTag) -> Result<Self, BodyError> {
        validate_shape(&shape)?;
        if mass.is_nan() || mass <= 0.0 {
            return Err(BodyError::InvalidMass(mass));
        }
        Ok(Self {
            shape,
            mass,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            impulse: Vec2::ZERO,
            rotation: 0.0,
            tag,
            alive: true,
        })
    }

    /// Creates an immovable body.
    pub fn static_body(shape: Vec<Vec2>, tag: BodyTag) -> Result<Self, BodyError> {
        Self::new(shape, INFINITE_MASS, tag)
    }

    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Vec2 {
        polygon::vertex_mean(&self.shape)
    }

    /// Moves the body so its centroid lands on `centroid`. Size and orientation
    /// are unchanged.
    pub fn set_centroid(&mut self, centroid: Vec2) {
        let delta = centroid - self.centroid();
        self.translate(delta);
    }

    pub fn translate(&mut self, delta: Vec2) {
        for v in self.shape.iter_mut() {
            *v += delta;
        }
    }

    /// Accumulated rotation in radians since construction.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Rotates the vertices about the centroid so the accumulated rotation
    /// becomes `angle`.
    pub fn set_rotation(&mut self, angle: f64) {
        let delta = angle - self.rotation;
        let pivot = self.centroid();
        for v in self.shape.iter_mut() {
            *v = pivot + (*v - pivot).rotate(delta);
        }
        self.rotation = angle;
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn is_static(&self) -> bool {
        self.mass == INFINITE_MASS
    }

    /// Independent copy of the vertex list.
    pub fn shape(&self) -> Vec<Vec2> {
        self.shape.clone()
    }

    /// Read-only view of the vertices, for hot paths that should not allocate.
    pub fn vertices(&self) -> &[Vec2] {
        &self.shape
    }

    pub fn tag(&self) -> BodyTag {
        self.tag
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Flags the body for removal at the end of the current (or next) tick.
    /// Calling it again has no further effect.
    pub fn mark_for_removal(&mut self) {
        self.alive = false;
    }

    /// Adds a force applied over the next integration step. Ignored by static bodies.
    pub fn add_force(&mut self, force: Vec2) {
        if !self.is_static() {
            self.force += force;
        }
    }

    /// Adds an instantaneous change of momentum, applied at the next integration
    /// step. Ignored by static bodies.
    pub fn add_impulse(&mut self, impulse: Vec2) {
        if !self.is_static() {
            self.impulse += impulse;
        }
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    pub fn impulse(&self) -> Vec2 {
        self.impulse
    }

    pub(crate) fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
        self.impulse = Vec2::ZERO;
    }

    pub fn aabb(&self) -> Aabb {
        // Shape is never empty once constructed
        Aabb::from_points(&self.shape).unwrap_or_else(|| Aabb::new(Vec2::ZERO, Vec2::ZERO))
    }
}

fn validate_shape(shape: &[Vec2]) -> Result<(), BodyError> {
    let n = shape.len();
    if n < 3 {
        return Err(BodyError::TooFewVertices(n));
    }
    if let Some(i) = shape.iter().position(|v| !v.is_finite()) {
        return Err(BodyError::NonFiniteVertex(i));
    }
    if let Some(i) = (0..n).find(|&i| shape[i] == shape[(i + 1) % n]) {
        return Err(BodyError::DegenerateEdge(i));
    }
    if !polygon::is_convex(shape) {
        return Err(BodyError::NotConvex);
    }
    Ok(())
}
