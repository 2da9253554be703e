//! 4D -> 2D perspective projection
//!
//! Vertices are pushed down the view axis, given a homogeneous coordinate,
//! mapped by the perspective matrix, and divided by w. The pre-projection
//! depth is kept for painter ordering of the vertex markers.

use tess4d_math::{Mat4, Vec4};

/// A vertex after projection: screen-plane coordinates plus camera-space depth
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedVertex {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

/// The 4D -> 2D projection pipeline
pub struct Projector {
    view_offset: Vec4,
    near: f32,
    far: f32,
}

impl Projector {
    /// Create a projector with the shape pushed `view_distance` units down
    /// the z axis.
    pub fn new(view_distance: f32, near: f32, far: f32) -> Self {
        Self {
            view_offset: Vec4::new(0.0, 0.0, view_distance, 0.0),
            near,
            far,
        }
    }

    /// Project every vertex with the given field of view.
    ///
    /// The perspective matrix is rebuilt per call because the FOV follows
    /// the zoom scale.
    pub fn project_all(&self, fov: f32, vertices: &[Vec4]) -> Vec<ProjectedVertex> {
        let perspective = Mat4::perspective(fov, self.near, self.far);

        vertices
            .iter()
            .map(|&vertex| {
                let mut p = vertex + self.view_offset;
                let depth = p.z;

                p.w = 1.0;
                perspective.map(&mut p);
                p = p / p.w;

                ProjectedVertex { x: p.x, y: p.y, depth }
            })
            .collect()
    }
}

/// Vertex draw order for the painter's algorithm: farthest first.
///
/// Returns indices into the projected slice; the slice itself is not
/// reordered, so edge indices stay valid.
pub fn painter_order(projected: &[ProjectedVertex]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..projected.len()).collect();
    order.sort_by(|&i, &j| projected[j].depth.total_cmp(&projected[i].depth));
    order
}
