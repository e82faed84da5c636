use crate::forces::ForceCreator;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;

/// Closer than this, `NewtonianGravity` stops pulling to avoid the 1/r² blow-up.
pub const MIN_GRAVITY_DISTANCE: f64 = 5.0;

/// Constant downward acceleration `g` on every non-static target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformGravity {
    pub g: f64,
}

impl UniformGravity {
    pub fn new(g: f64) -> Self {
        Self { g }
    }
}

impl ForceCreator for UniformGravity {
    fn apply(&mut self, bodies: &mut [&mut Body]) {
        for body in bodies.iter_mut().filter(|b| !b.is_static()) {
            let weight = Vec2::new(0.0, -self.g * body.mass());
            body.add_force(weight);
        }
    }
}

/// Mutual attraction `g * m_a * m_b / r²` between exactly two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64,
}

impl NewtonianGravity {
    pub fn new(g: f64) -> Self {
        Self { g }
    }
}

impl ForceCreator for NewtonianGravity {
    fn apply(&mut self, bodies: &mut [&mut Body]) {
        let count = bodies.len();
        let [a, b] = bodies else {
            log::warn!("NewtonianGravity needs exactly 2 bodies, got {}", count);
            return;
        };
        if a.is_static() || b.is_static() {
            return;
        }

        let delta = b.centroid() - a.centroid();
        let distance = delta.magnitude();
        if distance < MIN_GRAVITY_DISTANCE {
            return;
        }

        let magnitude = self.g * a.mass() * b.mass() / (distance * distance);
        let force = delta / distance * magnitude;
        a.add_force(force);
        b.add_force(-force);
    }
}
