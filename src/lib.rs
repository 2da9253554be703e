//! Tess4D - interactive tesseract wireframe viewer
//!
//! The binary crate wires configuration, input mapping, and the winit
//! application loop together. The math, projection, and rendering layers
//! live in the workspace crates.

pub mod config;
pub mod input;
