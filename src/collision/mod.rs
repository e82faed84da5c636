pub mod aabb;
pub mod sat;

pub use aabb::Aabb;
pub use sat::{find_collision, find_collision_shapes, CollisionInfo};
