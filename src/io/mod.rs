//! File I/O for ROI sets and image stacks
//!
//! This module is the boundary between the in-memory model and disk: ROI
//! descriptions are TOML files and stacks are sequences of image files.

pub mod roi_file;
pub mod stack_io;

pub use roi_file::{load_roi_file, parse_roi_set, to_toml_string};
pub use stack_io::{load_stack, load_stack_files, save_stack};
