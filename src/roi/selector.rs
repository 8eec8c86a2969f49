//! Per-plane selection of regions

use log::debug;

use super::manager::RoiManager;
use super::region::Region;
use super::resolver::matches_plane;
use crate::stack::ImageStack;

/// Return the regions that are active on plane `slice`
///
/// Regions whose label names no plane are active on every plane. The result
/// keeps collection order and contains every match; overlapping regions are
/// not merged.
///
/// # Returns
/// An empty list when the manager or the stack is absent, when `slice` lies
/// outside `[1, depth]`, or when nothing matches.
pub fn slice_rois<'a>(
    manager: Option<&'a RoiManager>,
    stack: Option<&ImageStack>,
    slice: usize,
) -> Vec<&'a Region> {
    let (manager, stack) = match (manager, stack) {
        (Some(manager), Some(stack)) => (manager, stack),
        _ => return Vec::new(),
    };

    if slice < 1 || slice > stack.depth() {
        debug!("Slice {} is outside the stack (depth {})", slice, stack.depth());
        return Vec::new();
    }

    manager
        .regions()
        .iter()
        .filter(|region| region.name().is_some())
        .filter(|region| matches_plane(region, manager, slice))
        .collect()
}
