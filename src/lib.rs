//! A small 2D rigid-body core for convex polygons: bodies with velocity and mass,
//! a Separating Axis Theorem collision test, and a scene that applies registered
//! forces, integrates motion and dispatches registered collision responses once
//! per tick.

pub mod collision;
pub mod forces;
pub mod integration;
pub mod math;
pub mod objects;
pub mod responses;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{find_collision, Aabb, CollisionInfo};
pub use forces::ForceCreator;
pub use math::vec2::Vec2;
pub use objects::{Body, BodyError, BodyTag, INFINITE_MASS};
pub use responses::CollisionHandler;
pub use world::{BodyHandle, Scene, SceneConfig, TickReport};
