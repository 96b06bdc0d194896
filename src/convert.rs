//! Image to ASCII conversion pipeline.
//!
//! decode -> plan dimensions -> init renderer -> Lanczos resize to the
//! renderer's canvas -> AA-colors -> render -> text matrix -> optional trim.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use std::path::{Path, PathBuf};

use crate::ascii::{
    pixel_aa_color, plan_dimensions, CharSet, DensityRenderer, GlyphRenderer, RenderInitError,
    ResizeTarget, TextMatrix, DEFAULT_WIDTH_MULTIPLIER,
};
use crate::config::DEFAULT_BLUR;
use crate::error::{I2aError, Result};

/// Blur values below this leave the resampled image untouched.
pub const MIN_BLUR_SIGMA: f64 = 0.1;

/// Settings for one conversion. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    pub file: PathBuf,
    pub invert: bool,
    pub optimize: bool,
    /// Maximum sampling width, `0` for unbounded
    pub max_width: u32,
    /// Maximum sampling height, `0` for unbounded
    pub max_height: u32,
    pub width_multiplier: f64,
    pub blur: f64,
    pub charset: CharSet,
}

impl ConversionConfig {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            invert: false,
            optimize: false,
            max_width: 0,
            max_height: 0,
            width_multiplier: DEFAULT_WIDTH_MULTIPLIER,
            blur: DEFAULT_BLUR,
            charset: CharSet::default(),
        }
    }
}

/// Decode and convert the configured image file.
///
/// # Errors
/// Returns [`I2aError::Decode`] or [`I2aError::EmptyImage`] if the file can't
/// be used, and [`I2aError::RenderInit`] if the renderer rejects the size.
pub fn convert_file(config: &ConversionConfig) -> Result<TextMatrix> {
    let img = load_image(&config.file)?;
    convert_image(&img, config)
}

/// Decode an image file, rejecting images with no pixels.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = image::open(path).map_err(|source| I2aError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    if img.width() == 0 || img.height() == 0 {
        return Err(I2aError::EmptyImage {
            path: path.to_path_buf(),
        });
    }
    log::debug!(
        "Decoded {}: {}x{}",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Convert a decoded image with the built-in [`DensityRenderer`].
pub fn convert_image(img: &DynamicImage, config: &ConversionConfig) -> Result<TextMatrix> {
    convert_with(img, config, |target| {
        DensityRenderer::new(target.width, target.height, config.charset)
    })
}

/// Convert a decoded image with a caller-supplied renderer.
///
/// `init` receives the planned [`ResizeTarget`] and returns a renderer whose
/// text output covers exactly that many columns and rows.
pub fn convert_with<R, F>(
    img: &DynamicImage,
    config: &ConversionConfig,
    init: F,
) -> Result<TextMatrix>
where
    R: GlyphRenderer,
    F: FnOnce(ResizeTarget) -> std::result::Result<R, RenderInitError>,
{
    if img.width() == 0 || img.height() == 0 {
        return Err(I2aError::EmptyImage {
            path: config.file.clone(),
        });
    }

    let target = plan_dimensions(
        img.width(),
        img.height(),
        config.max_width,
        config.max_height,
        config.width_multiplier,
    );
    log::debug!(
        "Planned {}x{} -> {}x{} (multiplier {})",
        img.width(),
        img.height(),
        target.width,
        target.height,
        config.width_multiplier
    );

    let mut renderer = init(target)?;
    debug_assert_eq!(renderer.text_size(), (target.width, target.height));
    write_image(&mut renderer, img, config);

    let glyphs = renderer.render();
    let mut matrix = TextMatrix::from_glyphs(target.width as usize, target.height as usize, glyphs);

    if config.optimize {
        matrix.optimize();
    }
    Ok(matrix)
}

/// Resample the image to the renderer's canvas and feed it one AA-color per pixel.
fn write_image<R: GlyphRenderer>(renderer: &mut R, img: &DynamicImage, config: &ConversionConfig) {
    let (vwidth, vheight) = renderer.image_size();
    let scaled = resample(img, vwidth, vheight, config.blur);
    log::debug!("Resampled to {}x{} (blur {})", vwidth, vheight, config.blur);

    // Per-pixel 8-bit reads, no full-canvas float copy
    for (x, y, px) in scaled.pixels() {
        renderer.put_pixel(x, y, pixel_aa_color(px.0, config.invert));
    }
}

/// Whether a blur value softens the resampled image at all.
pub fn blur_applies(blur: f64) -> bool {
    blur >= MIN_BLUR_SIGMA
}

/// Lanczos resize to exactly `width` x `height`, then soften by `blur`.
pub fn resample(img: &DynamicImage, width: u32, height: u32, blur: f64) -> DynamicImage {
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);
    if blur_applies(blur) {
        resized.blur(blur as f32)
    } else {
        resized
    }
}

/// Diagnostic footer printed with `-I`.
pub fn info_footer(matrix: &TextMatrix) -> String {
    format!(
        "size: {}x{}\nchars: {}\n",
        matrix.width(),
        matrix.height(),
        matrix.char_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid(width: u32, height: u32, px: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(px)))
    }

    fn config() -> ConversionConfig {
        let mut config = ConversionConfig::new("test.png");
        config.width_multiplier = 1.0;
        config
    }

    #[test]
    fn test_matrix_matches_planned_size() {
        let img = solid(20, 10, [255, 255, 255, 255]);
        let mut config = config();
        config.width_multiplier = 1.8;
        let matrix = convert_image(&img, &config).unwrap();
        assert_eq!(matrix.width(), 36);
        assert_eq!(matrix.height(), 10);
    }

    #[test]
    fn test_white_renders_brightest_glyph() {
        let img = solid(4, 4, [255, 255, 255, 255]);
        let matrix = convert_image(&img, &config()).unwrap();
        assert!(matrix.lines().all(|l| l == "@@@@"));
    }

    #[test]
    fn test_invert_white_renders_blank() {
        let img = solid(4, 4, [255, 255, 255, 255]);
        let mut config = config();
        config.invert = true;
        config.optimize = true;
        let matrix = convert_image(&img, &config).unwrap();
        assert_eq!(matrix.char_count(), 0);
    }

    #[test]
    fn test_transparent_renders_dark() {
        let img = solid(3, 3, [255, 255, 255, 0]);
        let matrix = convert_image(&img, &config()).unwrap();
        assert!(matrix.lines().all(|l| l == "   "));
    }

    #[test]
    fn test_render_init_error_propagates() {
        let img = solid(4, 4, [0, 0, 0, 255]);
        let err = convert_with(&img, &config(), |t| {
            Err::<DensityRenderer, _>(RenderInitError {
                width: t.width,
                height: t.height,
                reason: "refused",
            })
        })
        .unwrap_err();
        assert!(matches!(err, I2aError::RenderInit(_)));
    }

    #[test]
    fn test_empty_image_rejected() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
        let err = convert_image(&img, &config()).unwrap_err();
        assert!(matches!(err, I2aError::EmptyImage { .. }));
    }

    #[test]
    fn test_resample_exact_size() {
        let img = solid(17, 5, [10, 20, 30, 255]);
        let scaled = resample(&img, 8, 3, 0.5);
        assert_eq!((scaled.width(), scaled.height()), (8, 3));
    }

    #[test]
    fn test_blur_threshold() {
        assert!(!blur_applies(DEFAULT_BLUR));
        assert!(!blur_applies(0.05));
        assert!(blur_applies(MIN_BLUR_SIGMA));
        assert!(blur_applies(2.0));
    }

    #[test]
    fn test_gray_source_streams_through_rgba() {
        let img = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(4, 4, image::Luma([255])));
        let matrix = convert_image(&img, &config()).unwrap();
        assert!(matrix.lines().all(|l| l == "@@@@"));
    }

    #[test]
    fn test_info_footer() {
        let mut matrix = TextMatrix::from_glyphs(3, 1, &['a', ' ', ' ']);
        matrix.optimize();
        assert_eq!(info_footer(&matrix), "size: 3x1\nchars: 1\n");
    }
}
