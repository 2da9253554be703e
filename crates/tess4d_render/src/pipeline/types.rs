//! GPU-compatible data types for the wireframe pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// An endpoint of a projected edge, in screen-plane units
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
}

/// Per-instance center of a vertex marker, in screen-plane units
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct MarkerInstance {
    pub center: [f32; 2],
}

/// Uniforms shared by both pipelines
/// Layout: 80 bytes total (must match wireframe.wgsl and marker.wgsl)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ViewUniforms {
    /// Screen-space scale in pixels per projected unit
    pub scale: f32,
    /// Vertex marker radius in pixels
    pub marker_radius: f32,
    /// Pan offset in projected units
    pub offset: [f32; 2],
    /// Window size in pixels
    pub resolution: [f32; 2],
    pub _padding: [f32; 2],
    /// Edge line color
    pub edge_color: [f32; 4],
    /// Marker disc fill color
    pub fill_color: [f32; 4],
    /// Marker outline ring color
    pub outline_color: [f32; 4],
}

impl Default for ViewUniforms {
    fn default() -> Self {
        Self {
            scale: 100.0,
            marker_radius: 4.0,
            offset: [0.0; 2],
            resolution: [1.0; 2],
            _padding: [0.0; 2],
            edge_color: [0.0, 0.0, 0.0, 1.0],
            fill_color: [1.0, 0.0, 0.0, 1.0],
            outline_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_line_vertex_size() {
        // 2 floats position = 8 bytes
        assert_eq!(size_of::<LineVertex>(), 8);
    }

    #[test]
    fn test_marker_instance_size() {
        // 2 floats center = 8 bytes
        assert_eq!(size_of::<MarkerInstance>(), 8);
    }

    #[test]
    fn test_view_uniforms_size() {
        // 2 floats + 3 vec2 + 3 vec4 = 20 floats = 80 bytes
        assert_eq!(size_of::<ViewUniforms>(), 80);
    }

    #[test]
    fn test_alignment() {
        // All types should be 4-byte aligned (f32 alignment)
        assert_eq!(std::mem::align_of::<LineVertex>(), 4);
        assert_eq!(std::mem::align_of::<MarkerInstance>(), 4);
        assert_eq!(std::mem::align_of::<ViewUniforms>(), 4);
    }
}
