use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use roistack::utils::logger::Logger;
use roistack::commands::{CommandFactory, RoistackCommandFactory};

fn main() {
    let matches = ClapCommand::new("roistack")
        .version("0.1")
        .about("Bound and crop image stacks to their regions of interest")
        .arg(
            Arg::new("stack")
                .short('s')
                .long("stack")
                .help("Image file or directory of plane images")
                .value_name("PATH")
                .required(false),
        )
        .arg(
            Arg::new("rois")
                .short('r')
                .long("rois")
                .help("TOML file describing the ROIs")
                .value_name("FILE")
                .required(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write the log to this file instead of stderr")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("limits")
                .long("limits")
                .help("Print the bounding box of the ROIs (default)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("slices")
                .long("slices")
                .help("List the ROIs active on each slice")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("crop")
                .short('c')
                .long("crop")
                .help("Crop the stack to the ROIs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("points")
                .long("points")
                .help("Print calibrated coordinates of point ROIs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory for cropped planes")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .help("File name prefix for cropped planes")
                .value_name("PREFIX")
                .default_value("crop")
                .required(false),
        )
        .arg(
            Arg::new("fill-background")
                .long("fill-background")
                .help("Set pixels outside the ROIs to the fill value")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("fill-value")
                .long("fill-value")
                .help("Value for background and padding pixels")
                .value_name("VALUE")
                .default_value("0")
                .required(false),
        )
        .arg(
            Arg::new("padding")
                .long("padding")
                .help("Empty pixels added to each face of the cropped stack")
                .value_name("PIXELS")
                .default_value("0")
                .required(false),
        )
        .arg(
            Arg::new("pixel-width")
                .long("pixel-width")
                .help("Calibrated width of a pixel")
                .value_name("SIZE")
                .required(false),
        )
        .arg(
            Arg::new("pixel-height")
                .long("pixel-height")
                .help("Calibrated height of a pixel")
                .value_name("SIZE")
                .required(false),
        )
        .arg(
            Arg::new("pixel-depth")
                .long("pixel-depth")
                .help("Calibrated distance between slices")
                .value_name("SIZE")
                .required(false),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };

    // With --log-file the reports share the global log file; otherwise
    // they get their own roistack.log next to the stderr log
    let logger = match matches.get_one::<String>("log-file") {
        Some(path) => {
            if let Err(e) = Logger::init_global_logger(path, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
            Logger::forwarding()
        }
        None => {
            // RUST_LOG, when set, overrides the --verbose level
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
            match Logger::new("roistack.log") {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    let factory = RoistackCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
