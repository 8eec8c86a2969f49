//! Calibrated coordinates of point regions

use crate::roi::{resolve_plane, RegionKind, RoiManager};

/// Physical size of one voxel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub pixel_width: f64,
    pub pixel_height: f64,
    pub pixel_depth: f64,
}

impl Calibration {
    pub fn new(pixel_width: f64, pixel_height: f64, pixel_depth: f64) -> Self {
        Calibration { pixel_width, pixel_height, pixel_depth }
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration::new(1.0, 1.0, 1.0)
    }
}

/// Get the calibrated 3D coordinates of the point regions in a manager
///
/// The z coordinate comes from a point's position attribute, falling back
/// to the plane its label names, and is 0 when neither is available.
///
/// # Returns
/// One `[x, y, z]` per point region in collection order, or `None` if the
/// manager holds no point regions
pub fn point_coordinates(manager: &RoiManager, calibration: &Calibration) -> Option<Vec<[f64; 3]>> {
    let points: Vec<[f64; 3]> = manager
        .regions()
        .iter()
        .filter(|region| region.kind == RegionKind::Point)
        .map(|region| {
            let slice = region
                .position
                .map(|p| p as f64)
                .or_else(|| resolve_plane(region, manager).index().map(|i| i as f64))
                .unwrap_or(0.0);
            [
                region.bounds.x as f64 * calibration.pixel_width,
                region.bounds.y as f64 * calibration.pixel_height,
                slice * calibration.pixel_depth,
            ]
        })
        .collect();

    if points.is_empty() {
        None
    } else {
        Some(points)
    }
}
