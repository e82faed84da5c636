mod bindings;
pub mod config;
pub mod scene;

pub use config::SceneConfig;
pub use scene::{BodyHandle, Scene, TickReport};
