#![forbid(unsafe_code)]

//! The engine: one buffer, one tracker, one backend.
//!
//! [`Engine`] composes the pixel buffer, the input state tracker, and a
//! backend into the per-tick surface an application drives:
//!
//! ```text
//! loop {
//!     engine.process_input()?;   // raw sample -> edge states
//!     // ... draw with the engine's rasterizer methods ...
//!     engine.present()?;         // hand the frame to the sink
//! }
//! ```
//!
//! The engine exclusively owns its buffer and tracker for its entire
//! lifetime; ticks never overlap and nothing here is shared across
//! threads.

use std::io;

use charpix_core::{Error, Point};
use charpix_input::{InputStateTracker, KeyState};
use charpix_render::{Brush, Cell, Color, PixelBuffer, Raster};

use crate::backend::{DisplaySink, InputSource};

/// Immediate-mode character-grid engine, generic over its backend.
#[derive(Debug)]
pub struct Engine<B> {
    buffer: PixelBuffer,
    tracker: InputStateTracker,
    backend: B,
}

impl<B: InputSource + DisplaySink> Engine<B> {
    /// Create an engine with the default blank cell (space on black).
    pub fn new(width: u16, height: u16, backend: B) -> Self {
        Self::with_blank(width, height, Cell::BLANK, backend)
    }

    /// Create an engine with a caller-chosen blank cell.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn with_blank(width: u16, height: u16, blank: Cell, backend: B) -> Self {
        tracing::debug!(width, height, "engine created");
        Self {
            buffer: PixelBuffer::with_blank(width, height, blank),
            tracker: InputStateTracker::new(),
            backend,
        }
    }

    // ---- per-tick input ----

    /// Poll the input source and derive this tick's edge states.
    ///
    /// # Errors
    ///
    /// Propagates backend I/O failures.
    pub fn process_input(&mut self) -> io::Result<()> {
        let sample = self.backend.poll_input()?;
        tracing::trace!(keys = sample.keys_down.len(), "tick");
        self.tracker.tick(&sample);
        Ok(())
    }

    /// Edge state of a key code.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCode`] for codes outside the supported space.
    pub fn key(&self, code: u16) -> Result<KeyState, Error> {
        self.tracker.key(code)
    }

    /// Edge state of a pointer button (0-4).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCode`] for indices outside the button space.
    pub fn button(&self, index: u16) -> Result<KeyState, Error> {
        self.tracker.button(index)
    }

    /// Last observed pointer column.
    pub const fn pointer_x(&self) -> i32 {
        self.tracker.pointer_x()
    }

    /// Last observed pointer row.
    pub const fn pointer_y(&self) -> i32 {
        self.tracker.pointer_y()
    }

    // ---- frame hand-off ----

    /// Hand the current frame to the display sink.
    ///
    /// # Errors
    ///
    /// Propagates backend I/O failures.
    pub fn present(&mut self) -> io::Result<()> {
        tracing::trace!("present");
        self.backend.present(&self.buffer)
    }

    // ---- drawing surface ----

    /// Overwrite one cell; silent no-op outside the grid.
    pub fn write(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        self.buffer.write(x, y, glyph, color);
    }

    /// Reset one cell to the blank cell; silent no-op outside the grid.
    pub fn clear_cell(&mut self, x: i32, y: i32) {
        self.buffer.clear_cell(x, y);
    }

    /// The glyph at (x, y).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] outside the grid.
    pub fn read(&self, x: i32, y: i32) -> Result<char, Error> {
        self.buffer.read(x, y)
    }

    /// Reset every cell to the blank cell.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Overwrite every cell.
    pub fn fill_all(&mut self, glyph: char, color: Color) {
        self.buffer.fill_all(glyph, color);
    }

    /// Fill the closed rectangle spanned by the two corners.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, brush: Brush) {
        self.buffer.fill_rect(x1, y1, x2, y2, brush);
    }

    /// Draw the outermost ring of the buffer.
    pub fn draw_border(&mut self, brush: Brush) {
        self.buffer.draw_border(brush);
    }

    /// Draw a line between two points.
    pub fn draw_line(&mut self, a: Point, b: Point, brush: Brush) {
        self.buffer.draw_line(a, b, brush);
    }

    /// Draw a circle outline.
    pub fn draw_circle(&mut self, center: Point, radius: i32, brush: Brush) {
        self.buffer.draw_circle(center, radius, brush);
    }

    /// Draw a triangle outline.
    pub fn draw_triangle(&mut self, a: Point, b: Point, c: Point, brush: Brush) {
        self.buffer.draw_triangle(a, b, c, brush);
    }

    /// Fill a triangle.
    pub fn fill_triangle(&mut self, a: Point, b: Point, c: Point, brush: Brush) {
        self.buffer.fill_triangle(a, b, c, brush);
    }

    /// Draw a regular polygon.
    ///
    /// # Errors
    ///
    /// [`Error::TooFewSides`] if `sides < 3`.
    pub fn draw_polygon(
        &mut self,
        center: Point,
        sides: u32,
        radius: i32,
        offset_deg: f64,
        brush: Brush,
    ) -> Result<(), Error> {
        self.buffer.draw_polygon(center, sides, radius, offset_deg, brush)
    }

    /// Write a string one cell per character along +x.
    pub fn print_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.buffer.print_text(x, y, text, color);
    }

    /// Write a string with transparent spaces.
    pub fn print_text_transparent(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.buffer.print_text_transparent(x, y, text, color);
    }

    // ---- accessors ----

    /// Buffer width in cells.
    pub const fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Buffer height in cells.
    pub const fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// The frame buffer.
    pub const fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Mutable access to the frame buffer, for direct `Raster` calls.
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// The backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
