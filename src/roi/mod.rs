//! Regions of interest and their association with stack planes
//!
//! This module provides the ROI data model, the label conventions that
//! encode plane numbers, and the per-plane selection built on them.

mod region;
mod label;
mod manager;
mod resolver;
mod selector;
#[cfg(test)]
pub(crate) mod tests;

pub use region::{Mask, Rect, Region, RegionKind};
pub use label::{parser_by_name, DashedLabelParser, LabelParser, LeadingNumberParser, PlaneAssociation};
pub use manager::{delete_all, RoiManager};
pub use resolver::{is_active_on_all_slices, matches_plane, resolve_plane};
pub use selector::slice_rois;
