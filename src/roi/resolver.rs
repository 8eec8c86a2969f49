//! Resolution of the plane a single region belongs to

use super::label::PlaneAssociation;
use super::manager::RoiManager;
use super::region::Region;

/// Resolve the plane a region's label names
///
/// A region without a label, or with an empty one, applies to all planes.
/// Otherwise the manager's label convention decides; labels naming no plane
/// also resolve to `AllPlanes`. Resolution never fails.
pub fn resolve_plane(region: &Region, manager: &RoiManager) -> PlaneAssociation {
    match region.name() {
        None | Some("") => PlaneAssociation::AllPlanes,
        Some(label) => manager.slice_number(label),
    }
}

/// Check whether a region is drawn on a given plane
///
/// The label-derived plane and the explicit position attribute are both
/// consulted; either one naming `plane` is enough, and a label naming no
/// plane matches every plane.
pub fn matches_plane(region: &Region, manager: &RoiManager, plane: usize) -> bool {
    match resolve_plane(region, manager) {
        PlaneAssociation::AllPlanes => true,
        PlaneAssociation::Specific(index) if index == plane as i64 => true,
        PlaneAssociation::Specific(_) => region.position == Some(plane),
    }
}

/// Check whether a region applies to every plane
///
/// Regions without any label have no identity and are never reported as
/// active on all slices, even though they resolve to `AllPlanes`.
pub fn is_active_on_all_slices(manager: &RoiManager, region: &Region) -> bool {
    match region.name() {
        None => false,
        Some(_) => resolve_plane(region, manager).is_all_planes(),
    }
}
