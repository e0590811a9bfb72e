//! Geometry primitives for track surface generation.
//!
//! This module contains zero-dependency core types with C-compatible layout.

mod frame;
mod math;

pub use frame::Frame;
pub use math::{Float2, Float3};
