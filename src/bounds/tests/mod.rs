//! Tests for stack limits, cropping and point coordinates

mod crop_tests;
