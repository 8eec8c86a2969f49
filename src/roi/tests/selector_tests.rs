//! Tests for per-plane ROI selection

extern crate std;

use crate::roi::{slice_rois, Region, RoiManager};
use super::test_utils::{create_test_stack, labelled, slice_label, TEST_IMAGE_DEPTH};

fn names(rois: &[&Region]) -> Vec<String> {
    rois.iter().map(|r| r.name().unwrap_or_default().to_string()).collect()
}

#[test]
fn test_slice_rois_returns_empty_list_if_manager_is_none() {
    let stack = create_test_stack();
    std::assert!(slice_rois(None, Some(&stack), 1).is_empty());
}

#[test]
fn test_slice_rois_returns_empty_list_if_stack_is_none() {
    let manager = RoiManager::from_regions(vec![labelled(0, 0, 5, 5, "")]);
    std::assert!(slice_rois(Some(&manager), None, 1).is_empty());
}

#[test]
fn test_slice_rois_returns_empty_list_if_slice_is_out_of_bounds() {
    let stack = create_test_stack();
    let manager = RoiManager::from_regions(vec![labelled(0, 0, 5, 5, "")]);

    std::assert_eq!(slice_rois(Some(&manager), Some(&stack), 0).len(), 0,
                    "Out of bounds slice number should return no ROIs");
    std::assert_eq!(slice_rois(Some(&manager), Some(&stack), TEST_IMAGE_DEPTH + 1).len(), 0,
                    "Out of bounds slice number should return no ROIs");
}

#[test]
fn test_slice_rois() {
    let stack = create_test_stack();
    let single = slice_label(3, 1);
    let multi1 = slice_label(4, 1);
    let multi2 = slice_label(4, 2);
    let no_slice = "NO_SLICE".to_string();

    let manager = RoiManager::from_regions(vec![
        labelled(10, 10, 10, 10, &single),
        labelled(10, 10, 10, 10, &multi1),
        labelled(30, 30, 10, 10, &multi2),
        labelled(50, 50, 10, 10, &no_slice),
    ]);

    // slice with no associated ROIs
    let result = slice_rois(Some(&manager), Some(&stack), 2);
    std::assert_eq!(names(&result), vec![no_slice.clone()]);

    // slice with one ROI
    let result = slice_rois(Some(&manager), Some(&stack), 3);
    std::assert_eq!(names(&result), vec![single.clone(), no_slice.clone()],
                    "Wrong ROI returned, or ROIs in wrong order");

    // slice with multiple ROIs
    let result = slice_rois(Some(&manager), Some(&stack), 4);
    std::assert_eq!(names(&result), vec![multi1, multi2, no_slice],
                    "Wrong ROI returned, or ROIs in wrong order");
}

#[test]
fn test_roi_without_plane_is_selected_on_every_slice() {
    let stack = create_test_stack();
    let manager = RoiManager::from_regions(vec![labelled(50, 50, 10, 10, "NO_SLICE")]);

    for slice in 1..=TEST_IMAGE_DEPTH {
        std::assert_eq!(slice_rois(Some(&manager), Some(&stack), slice).len(), 1,
                        "NO_SLICE ROI missing on slice {}", slice);
    }
}

#[test]
fn test_plane_specific_roi_is_selected_on_its_slice_only() {
    let stack = create_test_stack();
    let manager = RoiManager::from_regions(vec![labelled(10, 10, 10, 10, &slice_label(2, 1))]);

    for slice in 1..=TEST_IMAGE_DEPTH {
        let expected = if slice == 2 { 1 } else { 0 };
        std::assert_eq!(slice_rois(Some(&manager), Some(&stack), slice).len(), expected);
    }
}

#[test]
fn test_position_attribute_selects_roi() {
    let stack = create_test_stack();
    let roi = labelled(10, 10, 10, 10, &slice_label(1, 1)).with_position(4);
    let manager = RoiManager::from_regions(vec![roi]);

    std::assert_eq!(slice_rois(Some(&manager), Some(&stack), 1).len(), 1);
    std::assert_eq!(slice_rois(Some(&manager), Some(&stack), 2).len(), 0);
    std::assert_eq!(slice_rois(Some(&manager), Some(&stack), 4).len(), 1);
}

#[test]
fn test_roi_without_identity_is_dropped() {
    let stack = create_test_stack();
    let manager = RoiManager::from_regions(vec![
        Region::new(0, 0, 10, 10).with_position(1),
        labelled(0, 0, 10, 10, ""),
    ]);

    let result = slice_rois(Some(&manager), Some(&stack), 1);
    std::assert_eq!(result.len(), 1);
    std::assert_eq!(result[0].name(), Some(""));
}

#[test]
fn test_negative_slice_label_is_selected_on_no_slice() {
    let stack = create_test_stack();
    let manager = RoiManager::from_regions(vec![labelled(10, 10, 10, 10, "-003-0000-0001")]);

    for slice in 1..=TEST_IMAGE_DEPTH {
        std::assert!(slice_rois(Some(&manager), Some(&stack), slice).is_empty(),
                     "ROI naming slice -3 selected on slice {}", slice);
    }
}

#[test]
fn test_fractional_slice_label_is_truncated() {
    let stack = create_test_stack();
    let manager = RoiManager::from_regions(vec![labelled(10, 10, 10, 10, "02.7-0000-0001")]);

    std::assert_eq!(slice_rois(Some(&manager), Some(&stack), 2).len(), 1);
    std::assert!(slice_rois(Some(&manager), Some(&stack), 3).is_empty());
}
