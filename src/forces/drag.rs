use crate::forces::ForceCreator;
use crate::objects::body::Body;

/// Linear drag: force `-gamma * velocity` on every non-static target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub gamma: f64,
}

impl Drag {
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }
}

impl ForceCreator for Drag {
    fn apply(&mut self, bodies: &mut [&mut Body]) {
        for body in bodies.iter_mut() {
            let resistance = body.velocity() * -self.gamma;
            body.add_force(resistance);
        }
    }
}
