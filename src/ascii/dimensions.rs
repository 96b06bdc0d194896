//! Dimension planning for aspect-correct, terminal-aware sampling.

/// Default terminal width multiplier.
/// Terminal glyph cells are taller than they are wide, so the sampled width is
/// stretched by this factor to keep the printed art proportional.
pub const DEFAULT_WIDTH_MULTIPLIER: f64 = 1.8;

/// Target pixel grid used for sampling, and the size of the resulting text matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeTarget {
    pub width: u32,
    pub height: u32,
}

impl ResizeTarget {
    /// Number of cells in the target grid.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Calculate the sampling grid for an image.
///
/// The image is fitted inside `max_width` x `max_height` while preserving its
/// aspect ratio. A bound of `0` means "unbounded" and falls back to the source
/// dimension, never to a zero-sized output. After fitting, the width is scaled
/// by `width_multiplier` to compensate for tall terminal glyphs.
///
/// The multiplier is applied after the fit, so the final width may exceed
/// `max_width`. The bound describes the sampling width, not the printed column
/// count, and existing output depends on this ordering.
///
/// # Arguments
/// * `source_width` - Width of the decoded image in pixels (must be > 0)
/// * `source_height` - Height of the decoded image in pixels (must be > 0)
/// * `max_width` - Maximum sampling width, `0` for unbounded
/// * `max_height` - Maximum sampling height, `0` for unbounded
/// * `width_multiplier` - Terminal width correction factor (typically ~1.8)
///
/// # Example
/// ```
/// use i2a::ascii::plan_dimensions;
///
/// let target = plan_dimensions(100, 50, 0, 0, 1.8);
/// assert_eq!((target.width, target.height), (180, 50));
/// ```
pub fn plan_dimensions(
    source_width: u32,
    source_height: u32,
    max_width: u32,
    max_height: u32,
    width_multiplier: f64,
) -> ResizeTarget {
    debug_assert!(source_height > 0, "source image must not be empty");

    let mw = if max_width > 0 { max_width } else { source_width };
    let mh = if max_height > 0 { max_height } else { source_height };

    let ratio = f64::from(source_width) / f64::from(source_height);

    let (width, height) = if f64::from(mw) / ratio > f64::from(mh) {
        // Height bound binds
        ((f64::from(mh) * ratio).round(), f64::from(mh))
    } else {
        // Width bound binds
        (f64::from(mw), (f64::from(mw) / ratio).round())
    };

    let width = (width * width_multiplier).round();

    // Extreme aspect ratios can round a side down to nothing
    ResizeTarget {
        width: clamp_dimension(width),
        height: clamp_dimension(height),
    }
}

fn clamp_dimension(value: f64) -> u32 {
    if value < 1.0 {
        1
    } else if value > f64::from(u32::MAX) {
        u32::MAX
    } else {
        value as u32
    }
}
