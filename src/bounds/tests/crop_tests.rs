//! Tests for stack cropping

extern crate std;

use crate::bounds::{crop_stack, get_limits, CropOptions, PADDING_LABEL};
use crate::errors::RoiError;
use crate::roi::tests::test_utils::{create_gradient_stack, labelled, slice_label};
use crate::roi::{Mask, RoiManager};

fn two_plane_manager() -> RoiManager {
    RoiManager::from_regions(vec![
        labelled(2, 3, 4, 2, &slice_label(1, 1)),
        labelled(1, 1, 2, 2, &slice_label(2, 1)),
    ])
}

#[test]
fn test_crop_stack_without_limits_is_an_error() {
    let stack = create_gradient_stack(10, 10, 3);
    let manager = RoiManager::new();

    let result = crop_stack(&manager, &stack, &CropOptions::default());
    std::assert!(matches!(result, Err(RoiError::NoValidRois)));
}

#[test]
fn test_crop_stack_dimensions() {
    let stack = create_gradient_stack(10, 10, 3);
    let manager = two_plane_manager();
    let limits = get_limits(Some(&manager), Some(&stack)).unwrap();
    std::assert_eq!(limits.to_array(), [1, 6, 1, 5, 1, 2]);

    for padding in [0usize, 1, 3] {
        let out = crop_stack(&manager, &stack, &CropOptions::new(false, 0, padding)).unwrap();
        std::assert_eq!(out.width(), limits.width() as usize + 2 * padding);
        std::assert_eq!(out.height(), limits.height() as usize + 2 * padding);
        std::assert_eq!(out.depth(), limits.z_span() + 2 * padding);
    }
}

#[test]
fn test_crop_stack_copies_roi_pixels_only() {
    let stack = create_gradient_stack(10, 10, 3);
    let manager = two_plane_manager();

    let out = crop_stack(&manager, &stack, &CropOptions::default()).unwrap();
    std::assert_eq!((out.width(), out.height(), out.depth()), (5, 4, 1));

    // the single target plane is drawn from source plane 2
    let plane = out.plane(1).unwrap();
    std::assert_eq!(plane.label.as_deref(), Some("slice2"));
    std::assert_eq!(plane.get(0, 0), Some(211));
    std::assert_eq!(plane.get(1, 1), Some(222));
    std::assert_eq!(plane.get(2, 2), Some(0));
    std::assert_eq!(plane.get(4, 3), Some(0));
}

#[test]
fn test_crop_stack_fills_background_and_padding() {
    let stack = create_gradient_stack(10, 10, 3);
    let manager = two_plane_manager();

    let out = crop_stack(&manager, &stack, &CropOptions::new(true, 7, 1)).unwrap();
    std::assert_eq!((out.width(), out.height(), out.depth()), (7, 6, 3));

    let first = out.plane(1).unwrap();
    std::assert_eq!(first.label.as_deref(), Some("slice1"));
    std::assert_eq!(first.get(2, 3), Some(132));
    std::assert_eq!(first.get(5, 4), Some(145));
    std::assert_eq!(first.get(0, 0), Some(7));
    std::assert_eq!(first.get(1, 1), Some(7), "ROI of slice 2 leaked into slice 1");

    let second = out.plane(2).unwrap();
    std::assert_eq!(second.get(1, 1), Some(211));
    std::assert_eq!(second.get(2, 3), Some(7));

    // slice 3 exists in the source but has no ROIs
    let third = out.plane(3).unwrap();
    std::assert_eq!(third.label.as_deref(), Some("slice3"));
    std::assert!(third.pixels().iter().all(|&p| p == 7));
}

#[test]
fn test_planes_outside_source_are_padding() {
    let stack = create_gradient_stack(10, 10, 3);
    let manager = two_plane_manager();

    let out = crop_stack(&manager, &stack, &CropOptions::new(false, 9, 2)).unwrap();
    std::assert_eq!(out.depth(), 5);

    for z in [1, 5] {
        let plane = out.plane(z).unwrap();
        std::assert_eq!(plane.label.as_deref(), Some(PADDING_LABEL));
        std::assert!(plane.pixels().iter().all(|&p| p == 9));
    }

    // background is left at zero when not filled
    let inner = out.plane(2).unwrap();
    std::assert_eq!(inner.label.as_deref(), Some("slice1"));
    std::assert_eq!(inner.get(0, 0), Some(0));
    std::assert_eq!(inner.get(3, 4), Some(132));
}

#[test]
fn test_crop_stack_honours_mask() {
    let stack = create_gradient_stack(10, 10, 3);
    let diagonal = Mask::from_fn(3, 3, |x, y| x == y);
    let manager = RoiManager::from_regions(vec![labelled(0, 0, 3, 3, "").with_mask(diagonal)]);

    let out = crop_stack(&manager, &stack, &CropOptions::default()).unwrap();
    std::assert_eq!((out.width(), out.height(), out.depth()), (3, 3, 2));

    let plane = out.plane(1).unwrap();
    std::assert_eq!(plane.get(0, 0), Some(200));
    std::assert_eq!(plane.get(1, 1), Some(211));
    std::assert_eq!(plane.get(2, 2), Some(222));
    std::assert_eq!(plane.get(1, 0), Some(0));
    std::assert_eq!(plane.get(0, 2), Some(0));
}

#[test]
fn test_crop_stack_composites_every_roi_on_a_plane() {
    let stack = create_gradient_stack(10, 10, 2);
    let manager = RoiManager::from_regions(vec![
        labelled(0, 0, 2, 2, ""),
        labelled(4, 4, 2, 2, ""),
        labelled(1, 1, 2, 2, ""),
    ]);

    let out = crop_stack(&manager, &stack, &CropOptions::default()).unwrap();
    std::assert_eq!((out.width(), out.height(), out.depth()), (6, 6, 1));

    let plane = out.plane(1).unwrap();
    std::assert_eq!(plane.get(0, 0), Some(200));
    std::assert_eq!(plane.get(2, 2), Some(222));
    std::assert_eq!(plane.get(5, 5), Some(255));
    std::assert_eq!(plane.get(3, 3), Some(0));
}

#[test]
fn test_crop_stack_ignores_pixels_outside_source() {
    let stack = create_gradient_stack(10, 10, 2);
    let manager = RoiManager::from_regions(vec![labelled(-5, -5, 8, 8, "")]);

    let out = crop_stack(&manager, &stack, &CropOptions::new(true, 1, 0)).unwrap();
    std::assert_eq!((out.width(), out.height()), (3, 3));

    let plane = out.plane(1).unwrap();
    std::assert_eq!(plane.get(0, 0), Some(200));
    std::assert_eq!(plane.get(2, 2), Some(222));
}

#[test]
fn test_crop_stack_does_not_mutate_source() {
    let stack = create_gradient_stack(10, 10, 3);
    let before = stack.clone();
    let manager = two_plane_manager();

    let _ = crop_stack(&manager, &stack, &CropOptions::new(true, 42, 2)).unwrap();
    std::assert_eq!(stack, before);
}
