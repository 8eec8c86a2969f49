//! CLI commands
//!
//! Each mode of the `roistack` binary (limits, slices, crop, points) is a
//! [`Command`] built from the parsed arguments by [`RoistackCommandFactory`].

pub mod limits_command;
pub mod slices_command;
pub mod crop_command;
pub mod points_command;

pub use limits_command::LimitsCommand;
pub use slices_command::SlicesCommand;
pub use crop_command::CropCommand;
pub use points_command::PointsCommand;

use std::str::FromStr;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::errors::{RoiError, RoiResult};

/// One CLI mode, ready to run against its stack and ROI set
pub trait Command {
    /// Load the inputs, run the operation and report the result
    fn execute(&self) -> RoiResult<()>;
}

/// Picks the mode requested on the command line
pub trait CommandFactory<'a> {
    /// Build the command for `args`; it reports through `logger`
    ///
    /// Fails when a required path is missing or a numeric option does not
    /// parse.
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> RoiResult<Box<dyn Command + 'a>>;
}

/// Locations of the stack and ROI set a command works on
#[derive(Debug, Clone)]
pub struct InputPaths {
    /// Image file or directory of plane images
    pub stack: String,
    /// TOML ROI description
    pub rois: String,
}

/// Fetch a required string argument
pub(crate) fn required_path(args: &ArgMatches, name: &str) -> RoiResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| RoiError::GenericError(format!("Missing required argument --{}", name)))
}

/// Parse an optional argument into `T`
pub(crate) fn parse_arg<T: FromStr>(args: &ArgMatches, name: &str) -> RoiResult<Option<T>> {
    match args.get_one::<String>(name) {
        None => Ok(None),
        Some(raw) => raw.parse::<T>()
            .map(Some)
            .map_err(|_| RoiError::GenericError(format!("Invalid value for --{}: {}", name, raw))),
    }
}

/// Dispatches on the `--crop`, `--slices` and `--points` flags; limits is
/// the default mode
pub struct RoistackCommandFactory;

impl RoistackCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RoistackCommandFactory
    }
}

impl Default for RoistackCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for RoistackCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> RoiResult<Box<dyn Command + 'a>> {
        if args.get_flag("crop") {
            Ok(Box::new(CropCommand::new(args, logger)?))
        } else if args.get_flag("slices") {
            Ok(Box::new(SlicesCommand::new(args, logger)?))
        } else if args.get_flag("points") {
            Ok(Box::new(PointsCommand::new(args, logger)?))
        } else {
            // Default to the limits command
            Ok(Box::new(LimitsCommand::new(args, logger)?))
        }
    }
}
