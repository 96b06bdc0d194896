//! i2a library crate.
//!
//! Converts raster images into ASCII art for terminal preview. The binary is
//! a thin wrapper; everything it does is exposed here for integration testing.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod terminal;

pub use convert::{convert_file, ConversionConfig};
pub use error::{I2aError, Result};
