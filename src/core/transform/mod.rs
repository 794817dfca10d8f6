pub mod plane_transform;

pub use plane_transform::PlaneTransform;
