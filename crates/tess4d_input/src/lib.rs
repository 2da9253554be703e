//! Input Handling
//!
//! This crate translates raw mouse state into view commands:
//! left-drag pans, right-drag rotates (Ctrl selects the ana/kata plane
//! pair), the wheel zooms.

mod view_controller;

pub use view_controller::{ViewControl, ViewController};
