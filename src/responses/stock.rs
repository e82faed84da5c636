//! Ready-made responses for the common platformer interactions.

use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::responses::CollisionHandler;

/// Both bodies are removed.
pub fn destructive() -> impl CollisionHandler {
    |a: &mut Body, b: &mut Body, _axis: Vec2| {
        a.mark_for_removal();
        b.mark_for_removal();
    }
}

/// The second body is removed; the first one collected it.
pub fn consume() -> impl CollisionHandler {
    |_collector: &mut Body, item: &mut Body, _axis: Vec2| {
        item.mark_for_removal();
    }
}

/// Stops the first body from moving into the second one: each velocity
/// component that points toward the second body's centroid is zeroed.
pub fn halt() -> impl CollisionHandler {
    |mover: &mut Body, obstacle: &mut Body, _axis: Vec2| {
        let toward = obstacle.centroid() - mover.centroid();
        let mut velocity = mover.velocity();
        if velocity.x * toward.x > 0.0 {
            velocity.x = 0.0;
        }
        if velocity.y * toward.y > 0.0 {
            velocity.y = 0.0;
        }
        mover.set_velocity(velocity);
    }
}

/// Bounces the bodies off each other along the collision axis.
///
/// `elasticity` 1.0 keeps all the approach speed, 0.0 none. A static body acts
/// as a wall. No impulse is applied once the bodies are already moving apart,
/// so a pair that stays overlapping for several ticks is not pushed repeatedly.
pub fn elastic(elasticity: f64) -> impl CollisionHandler {
    move |a: &mut Body, b: &mut Body, axis: Vec2| {
        let reduced_mass = match (a.is_static(), b.is_static()) {
            (true, true) => return,
            (true, false) => b.mass(),
            (false, true) => a.mass(),
            (false, false) => a.mass() * b.mass() / (a.mass() + b.mass()),
        };

        let normal = if (b.centroid() - a.centroid()).dot(axis) < 0.0 {
            -axis
        } else {
            axis
        };
        let approach_speed = (a.velocity() - b.velocity()).dot(normal);
        if approach_speed <= 0.0 {
            return;
        }

        let j = reduced_mass * (1.0 + elasticity) * approach_speed;
        a.add_impulse(normal * -j);
        b.add_impulse(normal * j);
    }
}
