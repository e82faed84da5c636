use crate::objects::body::Body;

/// Advances one body by `dt` with explicit Euler.
///
/// Accumulated force and impulse update the velocity first (static bodies never
/// accumulate either), then the shape is translated by `velocity * dt`. Static
/// bodies still move if they were given a velocity, e.g. elevators.
/// Accumulators are cleared afterwards.
pub fn integrate(body: &mut Body, dt: f64) {
    if !body.is_static() {
        let inv_mass = 1.0 / body.mass();
        let acceleration = body.force() * inv_mass;
        let velocity = body.velocity() + acceleration * dt + body.impulse() * inv_mass;
        body.set_velocity(velocity);
    }

    let displacement = body.velocity() * dt;
    body.translate(displacement);

    body.clear_accumulators();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::objects::BodyTag;
    use crate::shapes::polygon::rectangle;

    const EPSILON: f64 = 1e-9;

    fn test_body(mass: f64) -> Body {
        Body::new(rectangle(Vec2::ZERO, 2.0, 2.0), mass, BodyTag::Player).unwrap()
    }

    #[test]
    fn test_integrate_constant_velocity() {
        let mut body = test_body(1.0);
        body.set_velocity(Vec2::new(10.0, -5.0));

        integrate(&mut body, 0.1);

        let c = body.centroid();
        assert!((c.x - 1.0).abs() < EPSILON);
        assert!((c.y - -0.5).abs() < EPSILON);
        assert_eq!(body.velocity(), Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_integrate_constant_force() {
        let mut body = test_body(2.0);
        body.add_force(Vec2::new(10.0, 0.0)); // a = (5, 0)

        integrate(&mut body, 0.1);

        assert!((body.velocity().x - 0.5).abs() < EPSILON);
        assert!((body.centroid().x - 0.05).abs() < EPSILON);
        assert_eq!(body.force(), Vec2::ZERO);
    }

    #[test]
    fn test_integrate_impulse_is_independent_of_dt() {
        let mut body = test_body(4.0);
        body.add_impulse(Vec2::new(0.0, 8.0));

        integrate(&mut body, 0.5);

        assert!((body.velocity().y - 2.0).abs() < EPSILON);
        assert!((body.centroid().y - 1.0).abs() < EPSILON);
        assert_eq!(body.impulse(), Vec2::ZERO);
    }

    #[test]
    fn test_static_body_moves_with_its_velocity() {
        let mut elevator = Body::static_body(rectangle(Vec2::ZERO, 4.0, 1.0), BodyTag::Elevator).unwrap();
        elevator.set_velocity(Vec2::new(0.0, 3.0));
        elevator.add_force(Vec2::new(0.0, -1000.0));

        integrate(&mut elevator, 0.5);

        assert_eq!(elevator.velocity(), Vec2::new(0.0, 3.0));
        assert!((elevator.centroid().y - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_zero_dt_leaves_position() {
        let mut body = test_body(1.0);
        body.set_velocity(Vec2::new(3.0, 3.0));
        let before = body.shape();

        integrate(&mut body, 0.0);

        assert_eq!(body.vertices(), before.as_slice());
    }
}
