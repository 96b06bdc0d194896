//! Normalized RGBA to grayscale conversion using the luminosity method.

/// Red channel weight.
pub const RED_WEIGHT: f64 = 0.21;
/// Green channel weight. Green dominates perceived brightness.
pub const GREEN_WEIGHT: f64 = 0.72;
/// Blue channel weight.
pub const BLUE_WEIGHT: f64 = 0.07;

/// Convert a normalized RGBA pixel to a grayscale intensity in `[0.0, 1.0]`.
///
/// The formula is: gray = a * (0.21*R + 0.72*G + 0.07*B)
///
/// Alpha is multiplied straight in, so a fully transparent pixel is black
/// rather than ignored. Out-of-range channels are clamped on the result.
pub fn to_gray(r: f64, g: f64, b: f64, a: f64) -> f64 {
    let gray = a * (RED_WEIGHT * r + GREEN_WEIGHT * g + BLUE_WEIGHT * b);
    gray.clamp(0.0, 1.0)
}

/// Convert a normalized RGBA pixel to an AA-color (0-255 intensity).
///
/// The scaled value is truncated, not rounded, so output stays bit-exact with
/// earlier releases. With `invert` set the result is `255 - value`.
///
/// # Example
/// ```
/// use i2a::ascii::to_aa_color;
///
/// assert_eq!(to_aa_color(1.0, 1.0, 1.0, 1.0, false), 255);
/// assert_eq!(to_aa_color(1.0, 1.0, 1.0, 1.0, true), 0);
/// ```
pub fn to_aa_color(r: f64, g: f64, b: f64, a: f64, invert: bool) -> u8 {
    // `to_gray` is clamped, so the product always fits
    let color = (to_gray(r, g, b, a) * 255.0) as u8;
    if invert {
        invert_aa_color(color)
    } else {
        color
    }
}

/// Invert an AA-color.
#[inline]
pub fn invert_aa_color(color: u8) -> u8 {
    255 - color
}

/// Convert an 8-bit RGBA pixel to an AA-color, normalizing each channel by 255.
pub fn pixel_aa_color(rgba: [u8; 4], invert: bool) -> u8 {
    let [r, g, b, a] = rgba.map(|c| f64::from(c) / 255.0);
    to_aa_color(r, g, b, a, invert)
}
