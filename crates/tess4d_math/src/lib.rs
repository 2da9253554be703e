//! 4D Mathematics Library
//!
//! This crate provides the linear-algebra core of the tesseract viewer.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Mat4`] - 4x4 matrix with in-place and copying vector mapping
//! - [`RotationAngles`] - the four incremental plane-rotation deltas
//!
//! ## Geometry
//!
//! - [`Tesseract`] - the 4D hypercube wireframe (16 vertices, 32 edges)
//! - [`Edge`] - an index pair into the vertex set

mod vec4;
mod mat4;
mod rotation;
pub mod tesseract;

pub use vec4::Vec4;
pub use mat4::Mat4;
pub use rotation::{RotationAngles, RotationPair};
pub use tesseract::{Edge, Tesseract};
