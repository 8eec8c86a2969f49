//! Bounding geometry and cropping
//!
//! This module derives the 3D extent of a ROI collection over a stack and
//! composes cropped stacks from the pixels the regions cover.

mod limits;
mod crop;
mod points;
#[cfg(test)]
mod tests;

pub use limits::{get_limits, safe_roi_bounds, Limits};
pub use crop::{crop_stack, crop_to_limits, CropOptions, PADDING_LABEL};
pub use points::{point_coordinates, Calibration};
