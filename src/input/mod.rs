//! Input mapping for the application layer

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper};
