//! Tesseract (4D hypercube) wireframe geometry
//!
//! A tesseract has 16 vertices (all combinations of +/-h for x,y,z,w) and
//! 32 edges connecting vertices that differ in exactly one coordinate.
//!
//! The topology is fixed at construction. Rotation mutates only the vertex
//! coordinates, in place, with no persistent orientation state.

use crate::{RotationAngles, Vec4};

/// An edge of the wireframe: an ordered pair of vertex indices
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

/// The 4D hypercube wireframe
#[derive(Clone)]
pub struct Tesseract {
    /// The 16 vertices, mutated by rotation
    vertices: [Vec4; 16],
    /// The 32 edges, fixed at construction
    edges: Vec<Edge>,
}

impl Tesseract {
    pub const VERTEX_COUNT: usize = 16;
    pub const EDGE_COUNT: usize = 32;

    /// Create a new tesseract centered at origin with given side length.
    ///
    /// Vertex `i` has coordinate `k` at `+h` when bit `k` of `i` is set and
    /// `-h` otherwise; two vertices share an edge exactly when their indices
    /// differ in a single bit.
    pub fn new(size: f32) -> Self {
        let h = size * 0.5;

        let mut vertices = [Vec4::ZERO; 16];
        for (i, v) in vertices.iter_mut().enumerate() {
            for k in 0..4 {
                v[k] = if i & (1 << k) != 0 { h } else { -h };
            }
        }

        let mut edges = Vec::with_capacity(Self::EDGE_COUNT);
        for i in 0usize..16 {
            for j in (i + 1)..16 {
                if (i ^ j).count_ones() == 1 {
                    edges.push(Edge { a: i, b: j });
                }
            }
        }

        Self { vertices, edges }
    }

    /// Current vertex positions
    #[inline]
    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    /// The edge list
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Apply the four plane rotations successively to every vertex.
    ///
    /// Rotations are incremental: repeated calls accumulate on the stored
    /// coordinates and small floating-point drift is accepted.
    pub fn rotate(&mut self, angles: RotationAngles) {
        let matrices = angles.matrices();

        for v in &mut self.vertices {
            for m in &matrices {
                m.map(v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_vertex_count() {
        let t = Tesseract::new(2.0);
        assert_eq!(t.vertices().len(), Tesseract::VERTEX_COUNT);
    }

    #[test]
    fn test_edge_count() {
        let t = Tesseract::new(2.0);
        assert_eq!(t.edges().len(), Tesseract::EDGE_COUNT);
    }

    #[test]
    fn test_vertex_positions() {
        let t = Tesseract::new(2.0);

        assert_eq!(t.vertices()[0], Vec4::new(-1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices()[15], Vec4::new(1.0, 1.0, 1.0, 1.0));
        // Bit 3 selects w
        assert_eq!(t.vertices()[8], Vec4::new(-1.0, -1.0, -1.0, 1.0));
    }

    #[test]
    fn test_every_vertex_has_degree_four() {
        let t = Tesseract::new(2.0);

        let mut degree = [0usize; 16];
        for edge in t.edges() {
            degree[edge.a] += 1;
            degree[edge.b] += 1;
        }

        for (i, &d) in degree.iter().enumerate() {
            assert_eq!(d, 4, "vertex {} has degree {}", i, d);
        }
    }

    #[test]
    fn test_edges_connect_adjacent_vertices() {
        let t = Tesseract::new(2.0);

        for edge in t.edges() {
            assert!(edge.a < 16 && edge.b < 16);
            assert_eq!((edge.a ^ edge.b).count_ones(), 1,
                "edge ({}, {}) does not differ in exactly one coordinate", edge.a, edge.b);
        }
    }

    #[test]
    fn test_rotation_preserves_topology() {
        let mut t = Tesseract::new(2.0);
        let edges_before = t.edges().to_vec();

        t.rotate(RotationAngles { xz: 0.1, yz: 0.2, xw: 0.3, yw: 0.4 });

        assert_eq!(t.edges(), edges_before.as_slice());
        assert_eq!(t.vertices().len(), 16);
    }

    #[test]
    fn test_rotation_preserves_vertex_norms() {
        let mut t = Tesseract::new(2.0);
        let norm = t.vertices()[0].length();

        t.rotate(RotationAngles { xz: 0.3, yz: -0.5, xw: 0.7, yw: 0.2 });

        for v in t.vertices() {
            assert!((v.length() - norm).abs() < EPSILON);
        }
    }

    #[test]
    fn test_quarter_turn_xw_swaps_axes() {
        let mut t = Tesseract::new(2.0);
        t.rotate(RotationAngles { xw: FRAC_PI_2, ..Default::default() });

        // Vertex 0 was (-1,-1,-1,-1); a quarter turn in XW sends x to w and
        // w to -x
        let v = t.vertices()[0];
        assert!((v.x - 1.0).abs() < EPSILON);
        assert!((v.w + 1.0).abs() < EPSILON);
        assert!((v.y + 1.0).abs() < EPSILON);
        assert!((v.z + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let mut t = Tesseract::new(2.0);
        let before = t.vertices().to_vec();

        t.rotate(RotationAngles::ZERO);

        assert_eq!(t.vertices(), before.as_slice());
    }
}
