//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use super::enums::CharacterSet;
use crate::config::{Config, DEFAULT_BLUR};
use crate::convert::{blur_applies, ConversionConfig, MIN_BLUR_SIGMA};
use crate::error::I2aError;
use crate::terminal::TermSize;

/// One-line usage, printed on argument errors.
pub const USAGE: &str = "usage: i2a [options] <image>\n";

/// Parse and validate a sampling bound (positive integer)
pub fn parse_dimension(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid size", s))?;
    if value == 0 {
        return Err("size must be greater than 0".to_string());
    }
    Ok(value)
}

/// Parse and validate the terminal width multiplier (positive number)
pub fn parse_multiplier(s: &str) -> Result<f64, String> {
    parse_positive(s, "multiplier")
}

/// Parse and validate the resize blur (positive number)
pub fn parse_blur(s: &str) -> Result<f64, String> {
    parse_positive(s, "blur")
}

fn parse_positive(s: &str, what: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{} must be greater than 0, got {}", what, s));
    }
    Ok(value)
}

/// Convert an image to ASCII art
#[derive(Parser, Debug)]
#[command(name = "i2a")]
#[command(about = "Convert an image to ASCII art", long_about = None)]
#[command(override_usage = "i2a [options] <image>")]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Image file to convert
    pub image: Option<PathBuf>,

    /// Maximum sampling width
    #[arg(short = 'x', long, value_name = "INT", value_parser = parse_dimension)]
    pub max_width: Option<u32>,

    /// Maximum sampling height
    #[arg(short = 'y', long, value_name = "INT", value_parser = parse_dimension)]
    pub max_height: Option<u32>,

    /// Terminal width multiplier [default: 1.8]
    #[arg(short = 'm', long, value_name = "DOUBLE", value_parser = parse_multiplier)]
    pub multiplier: Option<f64>,

    /// Use the terminal size as maximum width and height (overrides -x/-y)
    #[arg(short = 't', long)]
    pub terminal: bool,

    /// Resize blur [default: 0.01]
    #[arg(short = 'b', long, value_name = "DOUBLE", value_parser = parse_blur)]
    pub blur: Option<f64>,

    /// Invert colors
    #[arg(short = 'i', long)]
    pub invert: bool,

    /// Remove whitespace from the right
    #[arg(short = 'o', long)]
    pub optimize: bool,

    /// Print size and character count after the output
    #[arg(short = 'I', long)]
    pub info: bool,

    /// Character set for the built-in renderer [default: standard]
    #[arg(short = 'c', long)]
    pub charset: Option<CharacterSet>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'V', long = "version")]
    pub print_version: bool,
}

impl Args {
    /// Merge arguments over file configuration into a [`ConversionConfig`].
    ///
    /// Flags win over file values. A terminal size, when given, replaces the
    /// width and height bounds from both.
    ///
    /// # Errors
    /// Returns [`I2aError::Argument`] if no image path was given.
    pub fn to_conversion(
        &self,
        config: &Config,
        term: Option<TermSize>,
    ) -> Result<ConversionConfig, I2aError> {
        let file = self
            .image
            .clone()
            .ok_or_else(|| I2aError::Argument("no image given".to_string()))?;

        let (max_width, max_height) = match term {
            Some(size) => (u32::from(size.cols), u32::from(size.rows)),
            None => (
                self.max_width.unwrap_or(config.limits.max_width),
                self.max_height.unwrap_or(config.limits.max_height),
            ),
        };

        let blur = self.blur.unwrap_or(config.render.blur);
        if blur != DEFAULT_BLUR && !blur_applies(blur) {
            log::warn!(
                "Blur {} is below {} and has no effect",
                blur,
                MIN_BLUR_SIGMA
            );
        }

        Ok(ConversionConfig {
            file,
            invert: self.invert || config.render.invert,
            optimize: self.optimize || config.render.optimize,
            max_width,
            max_height,
            width_multiplier: self.multiplier.unwrap_or(config.render.multiplier),
            blur,
            charset: self.charset.map_or(config.render.charset, Into::into),
        })
    }
}
