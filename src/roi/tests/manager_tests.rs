//! Tests for the ROI manager

extern crate std;

use crate::roi::{delete_all, RoiManager};
use super::test_utils::{labelled, slice_label};

fn manager_with(count: usize) -> RoiManager {
    let mut manager = RoiManager::new();
    for i in 0..count {
        manager.add(labelled(i as i32, i as i32, 5, 5, &slice_label(1, i)));
    }
    manager
}

#[test]
fn test_delete_all_empties_manager() {
    for count in [0, 1, 2, 7] {
        let mut manager = manager_with(count);
        std::assert_eq!(manager.count(), count);
        delete_all(&mut manager);
        std::assert_eq!(manager.count(), 0, "Manager with {} ROIs not emptied", count);
    }
}

#[test]
fn test_delete_shifts_later_rois() {
    let mut manager = manager_with(3);
    let removed = manager.delete(0).unwrap();
    std::assert_eq!(removed.name(), Some(slice_label(1, 0).as_str()));
    std::assert_eq!(manager.count(), 2);
    std::assert_eq!(manager.get(0).and_then(|r| r.name()), Some(slice_label(1, 1).as_str()));
    std::assert!(manager.delete(5).is_none());
}

#[test]
fn test_manager_preserves_insertion_order() {
    let manager = manager_with(4);
    let xs: Vec<i32> = manager.regions().iter().map(|r| r.bounds.x).collect();
    std::assert_eq!(xs, vec![0, 1, 2, 3]);
    std::assert_eq!(manager.convention(), "dashed");
}
