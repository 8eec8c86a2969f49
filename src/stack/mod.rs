//! Image stack representation
//!
//! This module provides the in-memory 3D image volume that regions are
//! measured against and cropped from.

mod image_stack;

pub use image_stack::{ImageStack, Pixel, Plane};
