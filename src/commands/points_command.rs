//! Point ROI coordinate command

use clap::ArgMatches;
use log::info;

use crate::bounds::{point_coordinates, Calibration};
use crate::commands::{parse_arg, required_path, Command};
use crate::errors::RoiResult;
use crate::io::load_roi_file;
use crate::utils::logger::Logger;

/// Command for printing calibrated coordinates of point ROIs
pub struct PointsCommand<'a> {
    rois: String,
    calibration: Calibration,
    logger: &'a Logger,
}

impl<'a> PointsCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RoiResult<Self> {
        let rois = required_path(args, "rois")?;
        let calibration = Calibration::new(
            parse_arg::<f64>(args, "pixel-width")?.unwrap_or(1.0),
            parse_arg::<f64>(args, "pixel-height")?.unwrap_or(1.0),
            parse_arg::<f64>(args, "pixel-depth")?.unwrap_or(1.0),
        );
        Ok(PointsCommand { rois, calibration, logger })
    }
}

impl<'a> Command for PointsCommand<'a> {
    fn execute(&self) -> RoiResult<()> {
        let manager = load_roi_file(&self.rois)?;

        match point_coordinates(&manager, &self.calibration) {
            Some(points) => {
                info!("Found {} point ROIs", points.len());
                for [x, y, z] in points {
                    println!("{}\t{}\t{}", x, y, z);
                    self.logger.log(&format!("Point: ({}, {}, {})", x, y, z))?;
                }
            }
            None => {
                println!("No point ROIs");
                self.logger.log("No point ROIs")?;
            }
        }
        Ok(())
    }
}
