//! Glyph rendering: turning an AA-color canvas into printable characters.
//!
//! The conversion pipeline only talks to [`GlyphRenderer`]. It asks the
//! renderer for its virtual canvas size, resamples the image to exactly that
//! size, feeds one AA-color per pixel, then copies the rendered text out.

use super::charset::CharSet;

/// Width and height of the pixel block behind each glyph.
pub const CELL_SIZE: u32 = 2;

/// Error returned when a renderer cannot be set up for a text size.
#[derive(Debug, thiserror::Error)]
#[error("couldn't initialize renderer for {width}x{height}: {reason}")]
pub struct RenderInitError {
    pub width: u32,
    pub height: u32,
    pub reason: &'static str,
}

/// A backend that turns a grid of AA-colors into text.
pub trait GlyphRenderer {
    /// Virtual canvas size `(vwidth, vheight)` in pixels.
    fn image_size(&self) -> (u32, u32);

    /// Text size `(columns, rows)` of the rendered output.
    fn text_size(&self) -> (u32, u32);

    /// Store an AA-color at a canvas position. Writes outside the canvas are ignored.
    fn put_pixel(&mut self, x: u32, y: u32, color: u8);

    /// Render the canvas and return `columns * rows` glyphs in row-major
    /// order, with no row separators.
    fn render(&mut self) -> &[char];
}

/// Built-in renderer that averages each 2x2 pixel cell and maps the mean
/// through a density ramp.
#[derive(Debug)]
pub struct DensityRenderer {
    columns: u32,
    rows: u32,
    charset: CharSet,
    canvas: Vec<u8>,
    text: Vec<char>,
}

impl DensityRenderer {
    /// Create a renderer producing `columns` x `rows` glyphs.
    ///
    /// # Errors
    /// Returns [`RenderInitError`] if either dimension is zero, the canvas size
    /// overflows `usize`, or the canvas and text buffers can't be allocated.
    pub fn new(columns: u32, rows: u32, charset: CharSet) -> Result<Self, RenderInitError> {
        let err = |reason| RenderInitError {
            width: columns,
            height: rows,
            reason,
        };

        if columns == 0 || rows == 0 {
            return Err(err("text size must be non-zero"));
        }

        let pixels = (columns as usize)
            .checked_mul(CELL_SIZE as usize)
            .and_then(|w| w.checked_mul(rows as usize))
            .and_then(|p| p.checked_mul(CELL_SIZE as usize))
            .ok_or_else(|| err("canvas too large"))?;
        let cells = columns as usize * rows as usize;

        let mut canvas = Vec::new();
        canvas
            .try_reserve_exact(pixels)
            .map_err(|_| err("couldn't allocate canvas"))?;
        canvas.resize(pixels, 0);

        let mut text = Vec::new();
        text.try_reserve_exact(cells)
            .map_err(|_| err("couldn't allocate text buffer"))?;

        log::debug!(
            "Renderer initialized: {}x{} glyphs, {} canvas pixels",
            columns,
            rows,
            pixels
        );

        Ok(Self {
            columns,
            rows,
            charset,
            canvas,
            text,
        })
    }

    fn vwidth(&self) -> u32 {
        self.columns * CELL_SIZE
    }

    fn cell_mean(&self, cx: u32, cy: u32) -> u8 {
        let vwidth = self.vwidth() as usize;
        let mut sum = 0u32;
        for dy in 0..CELL_SIZE {
            let row = (cy * CELL_SIZE + dy) as usize * vwidth;
            for dx in 0..CELL_SIZE {
                sum += u32::from(self.canvas[row + (cx * CELL_SIZE + dx) as usize]);
            }
        }
        (sum / (CELL_SIZE * CELL_SIZE)) as u8
    }
}

impl GlyphRenderer for DensityRenderer {
    fn image_size(&self) -> (u32, u32) {
        (self.columns * CELL_SIZE, self.rows * CELL_SIZE)
    }

    fn text_size(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: u8) {
        let (vwidth, vheight) = self.image_size();
        if x < vwidth && y < vheight {
            self.canvas[y as usize * vwidth as usize + x as usize] = color;
        }
    }

    fn render(&mut self) -> &[char] {
        self.text.clear();
        for cy in 0..self.rows {
            for cx in 0..self.columns {
                let glyph = self.charset.glyph(self.cell_mean(cx, cy));
                self.text.push(glyph);
            }
        }
        &self.text
    }
}

impl Drop for DensityRenderer {
    fn drop(&mut self) {
        log::trace!("Renderer released ({}x{})", self.columns, self.rows);
    }
}
