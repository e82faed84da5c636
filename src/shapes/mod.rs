pub mod polygon;

pub use polygon::{edges, is_convex, rectangle, regular_polygon, signed_area, vertex_mean};
