//! Render pipelines for the 2D wireframe
//!
//! Two passes per frame: [`WireframePipeline`] clears the frame and draws
//! the 32 edges as a line list, then [`MarkerPipeline`] composites a disc
//! over each vertex.

pub mod types;
mod wireframe_pipeline;
mod marker_pipeline;

pub use types::{LineVertex, MarkerInstance, ViewUniforms};
pub use wireframe_pipeline::WireframePipeline;
pub use marker_pipeline::MarkerPipeline;
