//! Ordered collection of regions of interest
//!
//! The manager owns the regions in insertion order, which is significant:
//! selection preserves it, and cropping composites regions in it.

use std::fmt;

use log::debug;

use super::label::{DashedLabelParser, LabelParser, PlaneAssociation};
use super::region::Region;

/// Ordered ROI collection with an injected label convention
pub struct RoiManager {
    regions: Vec<Region>,
    parser: Box<dyn LabelParser>,
}

impl RoiManager {
    /// Create an empty manager using the dashed label convention
    pub fn new() -> Self {
        Self::with_parser(Box::new(DashedLabelParser))
    }

    /// Create an empty manager using the given label convention
    pub fn with_parser(parser: Box<dyn LabelParser>) -> Self {
        RoiManager {
            regions: Vec::new(),
            parser,
        }
    }

    /// Create a manager from existing regions using the dashed label convention
    pub fn from_regions(regions: Vec<Region>) -> Self {
        let mut manager = Self::new();
        manager.regions = regions;
        manager
    }

    /// Append a region at the end of the collection
    pub fn add(&mut self, region: Region) {
        self.regions.push(region);
    }

    /// Remove the region at `index`, shifting later regions down
    ///
    /// Returns the removed region, or `None` if `index` is out of range.
    pub fn delete(&mut self, index: usize) -> Option<Region> {
        if index >= self.regions.len() {
            return None;
        }
        Some(self.regions.remove(index))
    }

    /// Remove every region from the collection
    ///
    /// Regions are removed from the front one at a time and the count is
    /// re-queried after each removal, so index shifts cannot skip entries.
    pub fn delete_all(&mut self) {
        while self.count() > 0 {
            if let Some(region) = self.delete(0) {
                debug!("Deleted ROI {:?}", region.name());
            }
        }
    }

    pub fn count(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions in collection order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    /// Plane named by a label under this manager's convention
    pub fn slice_number(&self, label: &str) -> PlaneAssociation {
        self.parser.slice_number(label)
    }

    /// Name of the label convention in use
    pub fn convention(&self) -> &'static str {
        self.parser.name()
    }
}

impl Default for RoiManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoiManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoiManager")
            .field("convention", &self.parser.name())
            .field("regions", &self.regions)
            .finish()
    }
}

/// Remove every region from `manager`
pub fn delete_all(manager: &mut RoiManager) {
    manager.delete_all();
}
