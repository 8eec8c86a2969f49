//! Per-slice ROI listing command

use clap::ArgMatches;

use crate::commands::{required_path, Command, InputPaths};
use crate::errors::RoiResult;
use crate::io::{load_roi_file, load_stack};
use crate::roi::slice_rois;
use crate::utils::logger::Logger;

/// Command for listing the ROIs active on each slice
pub struct SlicesCommand<'a> {
    inputs: InputPaths,
    logger: &'a Logger,
}

impl<'a> SlicesCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RoiResult<Self> {
        let inputs = InputPaths {
            stack: required_path(args, "stack")?,
            rois: required_path(args, "rois")?,
        };
        Ok(SlicesCommand { inputs, logger })
    }
}

impl<'a> Command for SlicesCommand<'a> {
    fn execute(&self) -> RoiResult<()> {
        let stack = load_stack(&self.inputs.stack)?;
        let manager = load_roi_file(&self.inputs.rois)?;

        let selection: Vec<(usize, Vec<String>)> = (1..=stack.depth())
            .map(|slice| {
                let names = slice_rois(Some(&manager), Some(&stack), slice)
                    .iter()
                    .map(|roi| roi.name().unwrap_or_default().to_string())
                    .collect();
                (slice, names)
            })
            .collect();

        for (slice, names) in &selection {
            println!("{}\t{}", slice, names.join(", "));
        }
        self.logger.log_slice_selection(&selection)?;
        Ok(())
    }
}
