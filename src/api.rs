use std::path::PathBuf;

use log::info;

use crate::bounds::{crop_to_limits, get_limits, point_coordinates, Calibration, CropOptions, Limits};
use crate::errors::{RoiError, RoiResult};
use crate::io::{load_roi_file, load_stack, save_stack};
use crate::roi::{slice_rois, RoiManager};
use crate::stack::ImageStack;
use crate::utils::logger::Logger;

/// Main interface to the roistack library
///
/// Wraps the file formats around the in-memory operations so callers can
/// work from paths. Every operation is recorded in the instance's log file.
pub struct RoiStack {
    logger: Logger,
}

impl RoiStack {
    /// Create a new RoiStack instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "roistack.log"
    ///
    /// # Returns
    /// A RoiStack instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> RoiResult<Self> {
        let log_path = log_file.unwrap_or("roistack.log");
        let logger = Logger::new(log_path)?;
        Ok(RoiStack { logger })
    }

    /// Load a stack and a ROI set from disk
    ///
    /// # Arguments
    /// * `stack_path` - Image file or directory of plane images
    /// * `rois_path` - TOML ROI description
    pub fn open(&self, stack_path: &str, rois_path: &str) -> RoiResult<(ImageStack, RoiManager)> {
        let stack = load_stack(stack_path)?;
        let manager = load_roi_file(rois_path)?;
        self.logger.log(&format!("Opened {} ({} planes) with {} ROIs from {}",
                                 stack_path, stack.depth(), manager.count(), rois_path))?;
        Ok((stack, manager))
    }

    /// Compute the limits of the ROIs in `rois_path` over the stack at `stack_path`
    ///
    /// # Returns
    /// The limits, or `None` if no ROI is usable
    pub fn limits(&self, stack_path: &str, rois_path: &str) -> RoiResult<Option<Limits>> {
        let (stack, manager) = self.open(stack_path, rois_path)?;
        let limits = get_limits(Some(&manager), Some(&stack));
        self.logger.log_limits(limits.as_ref())?;
        Ok(limits)
    }

    /// Names of the ROIs active on each slice of the stack
    pub fn slices(&self, stack_path: &str, rois_path: &str) -> RoiResult<Vec<(usize, Vec<String>)>> {
        let (stack, manager) = self.open(stack_path, rois_path)?;
        let selection: Vec<(usize, Vec<String>)> = (1..=stack.depth())
            .map(|slice| {
                let names = slice_rois(Some(&manager), Some(&stack), slice)
                    .iter()
                    .map(|roi| roi.name().unwrap_or_default().to_string())
                    .collect();
                (slice, names)
            })
            .collect();
        self.logger.log_slice_selection(&selection)?;
        Ok(selection)
    }

    /// Crop a stack to its ROIs and write the planes into `output_dir`
    ///
    /// # Arguments
    /// * `stack_path` - Image file or directory of plane images
    /// * `rois_path` - TOML ROI description
    /// * `output_dir` - Directory receiving `crop_NNNN.png` planes
    /// * `options` - Fill, background and padding settings
    ///
    /// # Returns
    /// Paths of the written planes, or [`RoiError::NoValidRois`]
    pub fn crop(&self,
                stack_path: &str,
                rois_path: &str,
                output_dir: &str,
                options: &CropOptions) -> RoiResult<Vec<PathBuf>> {
        let (stack, manager) = self.open(stack_path, rois_path)?;

        let limits = get_limits(Some(&manager), Some(&stack)).ok_or(RoiError::NoValidRois)?;
        self.logger.log_limits(Some(&limits))?;
        info!("Cropping {} to {}", stack_path, limits);

        let cropped = crop_to_limits(&manager, &stack, &limits, options)?;
        let written = save_stack(&cropped, output_dir, "crop", |_| {})?;
        self.logger.log(&format!("Wrote {} planes to {}", written.len(), output_dir))?;
        Ok(written)
    }

    /// Calibrated coordinates of the point ROIs in `rois_path`
    pub fn points(&self, rois_path: &str, calibration: &Calibration) -> RoiResult<Option<Vec<[f64; 3]>>> {
        let manager = load_roi_file(rois_path)?;
        Ok(point_coordinates(&manager, calibration))
    }
}
