//! Cropping a stack to the limits of its regions of interest

use log::{debug, info};

use super::limits::{get_limits, Limits};
use crate::errors::{RoiError, RoiResult};
use crate::roi::{slice_rois, Region, RoiManager};
use crate::stack::{ImageStack, Pixel, Plane};

/// Label given to planes that lie wholly outside the source stack
pub const PADDING_LABEL: &str = "padding";

/// Options controlling how a cropped stack is composed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CropOptions {
    /// Set pixels not covered by any region to `fill_value`
    pub fill_background: bool,
    /// Value used for background and padding pixels
    pub fill_value: Pixel,
    /// Empty pixels added to each face of the cropped stack
    pub padding: usize,
}

impl CropOptions {
    pub fn new(fill_background: bool, fill_value: Pixel, padding: usize) -> Self {
        CropOptions { fill_background, fill_value, padding }
    }
}

/// Crop a stack to the limits of the regions in a manager
///
/// The result is a new stack; the source is never modified. Only pixels
/// inside a region active on their plane are copied, honouring masks, and
/// later regions overwrite earlier ones where they overlap.
///
/// # Returns
/// The cropped stack, or [`RoiError::NoValidRois`] if [`get_limits`] finds
/// no usable region. Callers are expected to check the limits first.
pub fn crop_stack(manager: &RoiManager, stack: &ImageStack, options: &CropOptions) -> RoiResult<ImageStack> {
    let limits = get_limits(Some(manager), Some(stack)).ok_or(RoiError::NoValidRois)?;
    crop_to_limits(manager, stack, &limits, options)
}

/// Crop a stack to precomputed limits
///
/// `limits` must come from [`get_limits`] on the same manager and stack.
pub fn crop_to_limits(
    manager: &RoiManager,
    stack: &ImageStack,
    limits: &Limits,
    options: &CropOptions,
) -> RoiResult<ImageStack> {
    let depth = stack.depth() as i64;
    let padding = options.padding as i64;
    let z_min = limits.z_min as i64;
    let z_max = (limits.z_max as i64).min(depth);

    // target stack dimensions
    let w = (limits.x_max as i64 - limits.x_min as i64 + 2 * padding).max(0) as usize;
    let h = (limits.y_max as i64 - limits.y_min as i64 + 2 * padding).max(0) as usize;
    let d = (z_max - z_min + 2 * padding).max(0);

    // origin of the source stack relative to the origin of the target stack
    let x_off = padding - limits.x_min as i64;
    let y_off = padding - limits.y_min as i64;
    let z_off = padding - z_min;

    info!("Cropping {}x{}x{} stack to {}x{}x{} ({})",
          stack.width(), stack.height(), stack.depth(), w, h, d, limits);

    let mut out = ImageStack::new(w, h);
    for z in 1..=d {
        let source_index = z - z_off;
        let source = if source_index < 1 || source_index > depth {
            None
        } else {
            stack.plane(source_index as usize)
        };

        let source = match source {
            Some(plane) => plane,
            None => {
                debug!("Target plane {} is padding", z);
                out.add_plane(Plane::filled(w, h, options.fill_value).with_label(PADDING_LABEL))?;
                continue;
            }
        };

        let mut plane = if options.fill_background {
            Plane::filled(w, h, options.fill_value)
        } else {
            Plane::new(w, h)
        };

        let rois = slice_rois(Some(manager), Some(stack), source_index as usize);
        debug!("Target plane {} <- source plane {} with {} ROIs", z, source_index, rois.len());
        for region in rois {
            copy_region(region, source, &mut plane, x_off, y_off);
        }

        plane.label = source.label.clone();
        out.add_plane(plane)?;
    }

    Ok(out)
}

/// Copy the masked pixels of `region` from `source` into `target`
///
/// Pixels outside the source plane or landing outside the target are skipped.
fn copy_region(region: &Region, source: &Plane, target: &mut Plane, x_off: i64, y_off: i64) {
    let r = &region.bounds;
    let x_start = (r.x as i64).max(0);
    let y_start = (r.y as i64).max(0);
    let x_end = (r.end_x() as i64).min(source.width() as i64);
    let y_end = (r.end_y() as i64).min(source.height() as i64);

    for y in y_start..y_end {
        for x in x_start..x_end {
            if !region.contains(x as i32, y as i32) {
                continue;
            }
            if let Some(value) = source.get(x, y) {
                target.set(x + x_off, y + y_off, value);
            }
        }
    }
}
