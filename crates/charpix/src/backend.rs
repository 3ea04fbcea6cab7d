#![forbid(unsafe_code)]

//! Collaborator capabilities the engine consumes.
//!
//! The core is host-agnostic: it asks an [`InputSource`] for one raw
//! sample per tick and hands each finished frame to a [`DisplaySink`].
//! [`TerminalBackend`](crate::terminal::TerminalBackend) implements
//! both against a real terminal; [`TestBackend`] implements both
//! headlessly for tests and simulations.

use std::collections::VecDeque;
use std::io;

use charpix_core::InputSample;
use charpix_render::PixelBuffer;

/// Supplies one raw input sample per tick.
///
/// The call must not block: it drains whatever arrived since the last
/// tick. When several pointer or button observations arrived, the most
/// recent one wins.
pub trait InputSource {
    fn poll_input(&mut self) -> io::Result<InputSample>;
}

/// Accepts a finished frame for physical presentation.
///
/// The contract is the grid shape only: `width × height` cells,
/// row-major, each carrying a glyph and a packed attribute byte
/// (low nibble foreground, high nibble background).
pub trait DisplaySink {
    fn present(&mut self, buffer: &PixelBuffer) -> io::Result<()>;
}

/// Headless backend: scripted input, captured frames.
///
/// Samples are served in queue order; once the queue runs dry every
/// tick observes an empty sample (all keys up). Presented frames are
/// captured as newline-joined glyph grids for assertions.
#[derive(Debug, Default)]
pub struct TestBackend {
    samples: VecDeque<InputSample>,
    frames: Vec<String>,
}

impl TestBackend {
    /// An empty backend: no scripted input, no captured frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to the input script.
    pub fn queue_sample(&mut self, sample: InputSample) {
        self.samples.push_back(sample);
    }

    /// Every captured frame, in presentation order.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The most recently presented frame, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    fn render(buffer: &PixelBuffer) -> String {
        let mut out = String::with_capacity(
            (buffer.width() as usize + 1) * buffer.height() as usize,
        );
        for (i, row) in buffer.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|cell| cell.glyph));
        }
        out
    }
}

impl InputSource for TestBackend {
    fn poll_input(&mut self) -> io::Result<InputSample> {
        Ok(self.samples.pop_front().unwrap_or_default())
    }
}

impl DisplaySink for TestBackend {
    fn present(&mut self, buffer: &PixelBuffer) -> io::Result<()> {
        self.frames.push(Self::render(buffer));
        Ok(())
    }
}
