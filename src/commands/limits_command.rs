//! Stack limits command
//!
//! This module implements the command that reports the 3D bounding box
//! of a ROI set over an image stack.

use clap::ArgMatches;
use log::info;

use crate::bounds::get_limits;
use crate::commands::{required_path, Command, InputPaths};
use crate::errors::RoiResult;
use crate::io::{load_roi_file, load_stack};
use crate::utils::logger::Logger;

/// Command for printing the limits of a ROI set
pub struct LimitsCommand<'a> {
    /// Stack and ROI file locations
    inputs: InputPaths,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> LimitsCommand<'a> {
    /// Create a new limits command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RoiResult<Self> {
        let inputs = InputPaths {
            stack: required_path(args, "stack")?,
            rois: required_path(args, "rois")?,
        };
        Ok(LimitsCommand { inputs, logger })
    }
}

impl<'a> Command for LimitsCommand<'a> {
    fn execute(&self) -> RoiResult<()> {
        let stack = load_stack(&self.inputs.stack)?;
        let manager = load_roi_file(&self.inputs.rois)?;

        let limits = get_limits(Some(&manager), Some(&stack));
        self.logger.log_limits(limits.as_ref())?;

        match limits {
            Some(l) => {
                info!("Limits of {} ROIs: {}", manager.count(), l);
                println!("xmin={} xmax={} ymin={} ymax={} zmin={} zmax={}",
                         l.x_min, l.x_max, l.y_min, l.y_max, l.z_min, l.z_max);
            }
            None => println!("No valid ROIs"),
        }
        Ok(())
    }
}
