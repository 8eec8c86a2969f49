//! Utility modules for common functionality
//!
//! This module provides logging and progress reporting used by the
//! commands and the library facade.

pub mod logger;
pub(crate) mod progress;
