//! Double 4D rotation composition
//!
//! A rotation drag updates one of two independent plane pairs: the spatial
//! pair (XZ and YZ) spins the hypercube within visible 3D space, the ana/kata
//! pair (XW and YW) mixes the fourth dimension into the visible axes. Every
//! rotation event applies all four plane rotations; the pair not being
//! dragged keeps its last deltas until they are overwritten or reset.

use crate::Mat4;

/// Incremental rotation deltas for both drag-controlled plane pairs
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationAngles {
    /// XZ plane delta (spatial pair, horizontal drag)
    pub xz: f32,
    /// YZ plane delta (spatial pair, vertical drag)
    pub yz: f32,
    /// XW plane delta (ana/kata pair, horizontal drag)
    pub xw: f32,
    /// YW plane delta (ana/kata pair, vertical drag)
    pub yw: f32,
}

impl RotationAngles {
    pub const ZERO: Self = Self { xz: 0.0, yz: 0.0, xw: 0.0, yw: 0.0 };

    /// The four plane-rotation matrices in application order
    pub fn matrices(&self) -> [Mat4; 4] {
        [
            Mat4::plane_rotation(self.xz, 0, 2),
            Mat4::plane_rotation(self.yz, 1, 2),
            Mat4::plane_rotation(self.xw, 0, 3),
            Mat4::plane_rotation(self.yw, 1, 3),
        ]
    }
}

/// Which angle pair a rotation drag updates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationPair {
    /// XZ/YZ rotations (plain right-drag)
    Spatial,
    /// XW/YW rotations (right-drag with Ctrl held)
    AnaKata,
}
