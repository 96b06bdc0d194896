//! Image-to-text core.
//!
//! 1. **Dimension planning** - aspect-correct sampling grid with terminal width correction
//! 2. **Grayscale conversion** - normalized RGBA to AA-color via the luminosity method
//! 3. **Glyph rendering** - AA-color canvas to printable characters
//! 4. **Text matrix** - the rendered rows, with right-trim and counting

mod charset;
mod dimensions;
mod grayscale;
mod matrix;
mod renderer;

pub use charset::{CharSet, MINIMAL_CHARSET, STANDARD_CHARSET};
pub use dimensions::{plan_dimensions, ResizeTarget, DEFAULT_WIDTH_MULTIPLIER};
pub use grayscale::{invert_aa_color, pixel_aa_color, to_aa_color, to_gray};
pub use matrix::TextMatrix;
pub use renderer::{DensityRenderer, GlyphRenderer, RenderInitError, CELL_SIZE};
