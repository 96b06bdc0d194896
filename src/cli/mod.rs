//! Command-line interface definitions and helpers.
//!
//! This module contains argument parsing, value validation and the
//! usage/version text.

mod args;
mod enums;

pub use args::{parse_blur, parse_dimension, parse_multiplier, Args, USAGE};
pub use enums::CharacterSet;

/// Version banner printed by `-V`.
pub fn version_text() -> String {
    format!(
        "i2a v{}\nCopyright (c) 2017 molko <molkoback@gmail.com>\nDistributed under WTFPL v2\n",
        env!("CARGO_PKG_VERSION")
    )
}
