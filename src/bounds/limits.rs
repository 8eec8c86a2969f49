//! Bounding limits of a ROI collection within a stack

use std::fmt;

use log::{debug, info};

use crate::roi::{resolve_plane, Rect, RoiManager};
use crate::stack::ImageStack;

/// 3D bounding box of the regions in a collection
///
/// `x_max` and `y_max` are exclusive pixel bounds; `z_min` and `z_max` are
/// inclusive 1-based plane indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Minimum X coordinate
    pub x_min: i32,
    /// Maximum X coordinate (exclusive)
    pub x_max: i32,
    /// Minimum Y coordinate
    pub y_min: i32,
    /// Maximum Y coordinate (exclusive)
    pub y_max: i32,
    /// First plane
    pub z_min: usize,
    /// Last plane
    pub z_max: usize,
}

impl Limits {
    /// Get the width of the box in pixels
    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    /// Get the height of the box in pixels
    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    /// Get the distance between the first and last plane
    pub fn z_span(&self) -> usize {
        self.z_max - self.z_min
    }

    /// Limits in `[x_min, x_max, y_min, y_max, z_min, z_max]` order
    pub fn to_array(&self) -> [i64; 6] {
        [
            self.x_min as i64,
            self.x_max as i64,
            self.y_min as i64,
            self.y_max as i64,
            self.z_min as i64,
            self.z_max as i64,
        ]
    }
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: {}..{}, y: {}..{}, z: {}..={}",
            self.x_min, self.x_max, self.y_min, self.y_max, self.z_min, self.z_max
        )
    }
}

fn clamp(value: i32, min: i32, max: i32) -> i32 {
    value.max(min).min(max)
}

/// Crop a rectangle to the area `[0, width] x [0, height]`
///
/// # Returns
/// The clamped copy of `bounds`, and `false` if its width or height
/// collapsed to zero (the rectangle lies entirely outside the area)
pub fn safe_roi_bounds(bounds: &Rect, width: i32, height: i32) -> (Rect, bool) {
    let x_min = clamp(bounds.x, 0, width);
    let x_max = clamp(bounds.end_x(), 0, width);
    let y_min = clamp(bounds.y, 0, height);
    let y_max = clamp(bounds.end_y(), 0, height);
    let new_width = x_max - x_min;
    let new_height = y_max - y_min;

    let clamped = Rect::new(x_min, y_min, new_width, new_height);
    (clamped, new_width > 0 && new_height > 0)
}

/// Find the x, y and z limits of the regions in a collection
///
/// Each region's rectangle is clamped to the stack's plane; regions that
/// fall entirely outside are skipped. The z range spans the planes named by
/// plane-specific regions, or the whole stack as soon as one region applies
/// to all planes. A region whose plane lies outside the stack still widens
/// the xy extent but contributes nothing to z.
///
/// # Returns
/// `None` if the manager or the stack is absent, the collection is empty,
/// or no region has both a valid rectangle and a usable plane
pub fn get_limits(manager: Option<&RoiManager>, stack: Option<&ImageStack>) -> Option<Limits> {
    let manager = match manager {
        Some(m) if !m.is_empty() => m,
        _ => return None,
    };
    let stack = stack?;

    let depth = stack.depth();
    if depth == 0 {
        return None;
    }
    let width = i32::try_from(stack.width()).unwrap_or(i32::MAX);
    let height = i32::try_from(stack.height()).unwrap_or(i32::MAX);

    let mut x_min = i32::MAX;
    let mut x_max = 0;
    let mut y_min = i32::MAX;
    let mut y_max = 0;
    let mut z_range: Option<(usize, usize)> = None;
    let mut spans_all_planes = false;

    for region in manager.regions() {
        let (r, valid) = safe_roi_bounds(&region.bounds, width, height);
        if !valid {
            debug!("ROI {:?} lies outside the {}x{} plane, skipping", region.name(), width, height);
            continue;
        }

        x_min = x_min.min(r.x);
        x_max = x_max.max(r.end_x());
        y_min = y_min.min(r.y);
        y_max = y_max.max(r.end_y());

        let association = resolve_plane(region, manager);
        match association.plane_within(depth) {
            Some(slice) => {
                z_range = Some(match z_range {
                    Some((lo, hi)) => (lo.min(slice), hi.max(slice)),
                    None => (slice, slice),
                });
            }
            None if association.is_all_planes() => spans_all_planes = true,
            None => {
                debug!("ROI {:?} names slice {:?} outside 1..={}", region.name(), association.index(), depth);
            }
        }
    }

    let (z_min, z_max) = match (spans_all_planes, z_range) {
        (true, _) => (1, depth),
        (false, Some(range)) => range,
        (false, None) => {
            info!("No valid ROIs among {} in the manager", manager.count());
            return None;
        }
    };

    Some(Limits { x_min, x_max, y_min, y_max, z_min, z_max })
}
