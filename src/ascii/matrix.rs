//! Text matrix holding the rendered ASCII art.

use std::io::{self, Write};

/// A `width` x `height` grid of characters with a per-row end marker.
///
/// Cells are stored row-major in one buffer. Each row keeps a length (its end
/// marker); content past it is never printed or counted. A new matrix has
/// every row empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatrix {
    width: usize,
    height: usize,
    cells: Vec<char>,
    ends: Vec<usize>,
}

impl TextMatrix {
    /// Allocate an empty matrix with room for `width` x `height` characters.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
            ends: vec![0; height],
        }
    }

    /// Build a matrix from a flat row-major glyph buffer, inserting a row
    /// boundary every `width` characters.
    ///
    /// Missing trailing glyphs leave the remaining cells empty; extra glyphs
    /// are ignored.
    pub fn from_glyphs(width: usize, height: usize, glyphs: &[char]) -> Self {
        let mut matrix = Self::new(width, height);
        if width == 0 {
            return matrix;
        }
        for (i, &ch) in glyphs.iter().take(width * height).enumerate() {
            matrix.set(i / width, i % width, ch);
        }
        matrix
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Write one cell. The row's end marker moves past `col` if needed.
    ///
    /// # Panics
    /// Panics if `row >= height` or `col >= width`.
    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} matrix",
            self.width,
            self.height
        );
        self.cells[row * self.width + col] = ch;
        if self.ends[row] <= col {
            self.ends[row] = col + 1;
        }
    }

    /// Content of `row` up to its end marker.
    pub fn row(&self, row: usize) -> &[char] {
        let start = row * self.width;
        &self.cells[start..start + self.ends[row]]
    }

    /// Remove trailing spaces from every row.
    ///
    /// A row of only spaces becomes empty. Idempotent.
    pub fn optimize(&mut self) {
        for y in 0..self.height {
            let end = self
                .row(y)
                .iter()
                .rposition(|&c| c != ' ')
                .map_or(0, |last| last + 1);
            self.ends[y] = end;
        }
    }

    /// Number of characters before each row's end marker, summed over all rows.
    pub fn char_count(&self) -> usize {
        self.ends.iter().sum()
    }

    /// Iterate over rows as owned strings.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(move |y| self.row(y).iter().collect())
    }

    /// Write every row as a newline-terminated line.
    ///
    /// # Errors
    /// Returns any I/O error from the writer.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Print every row to stdout.
    ///
    /// # Errors
    /// Returns any I/O error from stdout.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        self.write_to(&mut out)?;
        out.flush()
    }
}
