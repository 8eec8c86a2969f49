//! Stack cropping command
//!
//! This module implements the command that crops a stack to the limits of
//! a ROI set and writes the result as a sequence of PNG planes.

use clap::ArgMatches;
use log::{error, info};

use crate::bounds::{crop_to_limits, get_limits, CropOptions};
use crate::commands::{parse_arg, required_path, Command, InputPaths};
use crate::errors::{RoiError, RoiResult};
use crate::io::{load_roi_file, load_stack, save_stack};
use crate::stack::Pixel;
use crate::utils::logger::Logger;
use crate::utils::progress::PlaneProgress;

/// Command for cropping a stack to its ROIs
pub struct CropCommand<'a> {
    /// Stack and ROI file locations
    inputs: InputPaths,
    /// Directory receiving the cropped planes
    output_dir: String,
    /// File name prefix of the written planes
    prefix: String,
    /// Fill, background and padding settings
    options: CropOptions,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CropCommand<'a> {
    /// Create a new crop command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new CropCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RoiResult<Self> {
        let inputs = InputPaths {
            stack: required_path(args, "stack")?,
            rois: required_path(args, "rois")?,
        };

        let output_dir = args.get_one::<String>("output")
            .ok_or_else(|| RoiError::GenericError("Missing output directory for cropping".to_string()))?
            .clone();
        info!("Output directory: {}", output_dir);

        let prefix = args.get_one::<String>("prefix")
            .cloned()
            .unwrap_or_else(|| "crop".to_string());

        let fill_value = parse_arg::<Pixel>(args, "fill-value")?.unwrap_or(0);
        let padding = parse_arg::<usize>(args, "padding")?.unwrap_or(0);
        let options = CropOptions::new(args.get_flag("fill-background"), fill_value, padding);
        info!("Crop options: {:?}", options);

        Ok(CropCommand {
            inputs,
            output_dir,
            prefix,
            options,
            logger,
        })
    }
}

impl<'a> Command for CropCommand<'a> {
    fn execute(&self) -> RoiResult<()> {
        let stack = load_stack(&self.inputs.stack)?;
        let manager = load_roi_file(&self.inputs.rois)?;

        let limits = match get_limits(Some(&manager), Some(&stack)) {
            Some(l) => l,
            None => {
                error!("Cannot crop {}: no valid ROIs in {}", self.inputs.stack, self.inputs.rois);
                self.logger.log_limits(None)?;
                return Err(RoiError::NoValidRois);
            }
        };
        self.logger.log_limits(Some(&limits))?;

        let cropped = crop_to_limits(&manager, &stack, &limits, &self.options)?;

        let progress = PlaneProgress::new(cropped.depth(), "Writing planes");
        save_stack(&cropped, &self.output_dir, &self.prefix, |index| progress.plane_done(index))?;

        let summary = format!("Cropped stack {}x{}x{} written to {}",
                              cropped.width(), cropped.height(), cropped.depth(), self.output_dir);
        progress.finish(&summary);
        info!("{}", summary);
        self.logger.log(&summary)?;
        Ok(())
    }
}
