//! Custom error types for ROI and stack processing

use std::fmt;
use std::io;

/// Errors raised by the I/O, configuration and cropping layers
///
/// The selection and bounds operations never fail: malformed regions are
/// dropped and an empty result is reported instead.
#[derive(Debug)]
pub enum RoiError {
    /// I/O error
    IoError(io::Error),
    /// Image decoding or encoding error
    ImageError(image::ImageError),
    /// Malformed ROI description file
    ConfigError(String),
    /// Planes of a stack disagree on their dimensions, or a plane is empty
    InvalidStack(String),
    /// No region contributes a usable extent to the bounding box
    NoValidRois,
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for RoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoiError::IoError(e) => write!(f, "I/O error: {}", e),
            RoiError::ImageError(e) => write!(f, "Image error: {}", e),
            RoiError::ConfigError(msg) => write!(f, "Invalid ROI description: {}", msg),
            RoiError::InvalidStack(msg) => write!(f, "Invalid image stack: {}", msg),
            RoiError::NoValidRois => write!(f, "No valid ROIs: cannot determine stack limits"),
            RoiError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for RoiError {}

impl From<io::Error> for RoiError {
    fn from(error: io::Error) -> Self {
        RoiError::IoError(error)
    }
}

impl From<image::ImageError> for RoiError {
    fn from(error: image::ImageError) -> Self {
        RoiError::ImageError(error)
    }
}

impl From<toml::de::Error> for RoiError {
    fn from(error: toml::de::Error) -> Self {
        RoiError::ConfigError(error.to_string())
    }
}

/// Result type for ROI operations
pub type RoiResult<T> = Result<T, RoiError>;

