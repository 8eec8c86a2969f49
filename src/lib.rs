pub mod errors;
pub mod roi;
pub mod stack;
pub mod bounds;
pub mod io;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::RoiStack;

pub use errors::{RoiError, RoiResult};
pub use roi::{Region, RoiManager, PlaneAssociation, LabelParser};
pub use stack::{ImageStack, Plane};
pub use bounds::{get_limits, crop_stack, CropOptions, Limits};
