//! Geometric primitives and the queries between them

pub mod aabb;
pub mod frustum;
pub mod hypersphere;
pub mod line;
pub mod obb;
pub mod plane;
pub mod polygon;
pub mod query;
pub mod triangle;

pub use aabb::Aabb;
pub use frustum::Frustum;
pub use hypersphere::{Disk, Hypersphere, Sphere};
pub use line::{Line, Ray, Segment};
pub use obb::Obb;
pub use plane::Plane;
pub use polygon::{Polygon2D, Winding};
pub use query::QueryCode;
pub use triangle::Triangle;
