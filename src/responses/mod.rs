//! Collision responses invoked by the stepper for every colliding binding.

use crate::math::vec2::Vec2;
use crate::objects::body::Body;

pub mod stock;

pub use stock::{consume, destructive, elastic, halt};

/// Reaction to two bound bodies overlapping during a tick.
///
/// Called on every tick the pair overlaps, not only on first contact. `axis` is
/// the unit separation axis from `find_collision`. A handler may move either
/// body, change velocities, or mark bodies for removal; velocity changes take
/// effect from the next integration.
pub trait CollisionHandler {
    fn on_collision(&mut self, a: &mut Body, b: &mut Body, axis: Vec2);
}

impl<F> CollisionHandler for F
where
    F: FnMut(&mut Body, &mut Body, Vec2),
{
    fn on_collision(&mut self, a: &mut Body, b: &mut Body, axis: Vec2) {
        self(a, b, axis)
    }
}
