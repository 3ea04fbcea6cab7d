#![forbid(unsafe_code)]

//! Pixel buffer grid storage.
//!
//! The [`PixelBuffer`] owns the single writable frame: a row-major grid
//! of [`Cell`]s addressed by `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. A write outside `[0, width) × [0, height)` is a silent no-op —
//!    this is the clipping policy every drawing algorithm relies on,
//!    not an error condition
//! 4. A freshly created or cleared buffer holds the blank cell in every
//!    position
//!
//! Reads are bounds-checked and fail with [`Error::OutOfRange`]; unlike
//! writes, a bad read has no meaningful silent behavior to fall back on.

use charpix_core::Error;

use crate::cell::{Cell, Color};

/// A fixed-size 2D grid of display cells.
///
/// # Example
///
/// ```
/// use charpix_render::buffer::PixelBuffer;
/// use charpix_render::cell::Color;
///
/// let mut buffer = PixelBuffer::new(80, 24);
/// buffer.write(0, 0, 'H', Color::WHITE);
/// buffer.write(1, 0, 'i', Color::WHITE);
/// assert_eq!(buffer.read(0, 0), Ok('H'));
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u16,
    height: u16,
    blank: Cell,
    cells: Vec<Cell>,
}

impl PixelBuffer {
    /// Create a buffer filled with the default blank cell
    /// (space, black-on-black).
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_blank(width, height, Cell::BLANK)
    }

    /// Create a buffer with a caller-chosen blank cell.
    ///
    /// The blank cell is what [`clear`](Self::clear) and
    /// [`clear_cell`](Self::clear_cell) restore, fixed for the buffer's
    /// lifetime.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn with_blank(width: u16, height: u16, blank: Cell) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");

        let size = width as usize * height as usize;
        Self {
            width,
            height,
            blank,
            cells: vec![blank; size],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The configured blank cell.
    #[inline]
    pub const fn blank(&self) -> Cell {
        self.blank
    }

    /// Convert signed coordinates to a linear index.
    ///
    /// Returns `None` outside the grid; this single gate implements the
    /// clipping policy.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < i32::from(self.width) && y >= 0 && y < i32::from(self.height) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Overwrite the cell at (x, y); silent no-op outside the grid.
    #[inline]
    pub fn write(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell::new(glyph, color);
        }
    }

    /// Overwrite the cell at (x, y) with a prebuilt cell; silent no-op
    /// outside the grid.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset one cell to the blank cell; silent no-op outside the grid.
    #[inline]
    pub fn clear_cell(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = self.blank;
        }
    }

    /// The glyph at (x, y).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] outside the grid.
    #[inline]
    pub fn read(&self, x: i32, y: i32) -> Result<char, Error> {
        self.cell_at(x, y).map(|c| c.glyph)
    }

    /// The full cell at (x, y).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] outside the grid.
    #[inline]
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, Error> {
        self.index(x, y)
            .map(|i| self.cells[i])
            .ok_or(Error::OutOfRange { x, y })
    }

    /// Overwrite every cell with the given glyph and color.
    pub fn fill_all(&mut self, glyph: char, color: Color) {
        self.cells.fill(Cell::new(glyph, color));
    }

    /// Reset every cell to the blank cell.
    pub fn clear(&mut self) {
        self.cells.fill(self.blank);
    }

    /// Raw row-major access to the cell slice, for display sinks.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows as cell slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width as usize)
    }
}
