//! Forces applied once per tick, before integration.

use crate::objects::body::Body;

pub mod drag;
pub mod gravity;
pub mod spring;

pub use drag::Drag;
pub use gravity::{NewtonianGravity, UniformGravity, MIN_GRAVITY_DISTANCE};
pub use spring::Spring;

/// Something that pushes on a fixed set of bodies every tick.
///
/// `bodies` holds the binding's targets in the order they were registered.
/// Implementations act through `Body::add_force` / `Body::add_impulse` or by
/// writing the velocity directly.
pub trait ForceCreator {
    fn apply(&mut self, bodies: &mut [&mut Body]);
}

impl<F> ForceCreator for F
where
    F: FnMut(&mut [&mut Body]),
{
    fn apply(&mut self, bodies: &mut [&mut Body]) {
        self(bodies)
    }
}
