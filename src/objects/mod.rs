pub mod body;
pub mod tag;

pub use body::{Body, BodyError, INFINITE_MASS};
pub use tag::BodyTag;
