//! Wireframe Rendering Library
//!
//! This crate provides the wgpu-based pipeline that turns the rotated
//! tesseract into a 2D wireframe on screen.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`view::View`] - pan/zoom state and the zoom-derived field of view
//! - [`projector::Projector`] - 4D -> 2D perspective projection
//! - [`pipeline::WireframePipeline`] - edge rendering (line list)
//! - [`pipeline::MarkerPipeline`] - vertex disc rendering (instanced quads)

pub mod context;
pub mod view;
pub mod projector;
pub mod pipeline;

pub use context::RenderContext;
pub use view::View;
pub use projector::{painter_order, ProjectedVertex, Projector};

// Re-export math types for convenience
pub use tess4d_math::{Edge, Mat4, RotationAngles, RotationPair, Tesseract, Vec4};
