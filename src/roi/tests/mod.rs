//! Tests for ROI selection and the ROI manager

mod selector_tests;
mod manager_tests;
