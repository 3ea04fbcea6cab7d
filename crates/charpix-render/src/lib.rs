#![forbid(unsafe_code)]

//! Cell grid and rasterization for charpix.
//!
//! The [`buffer::PixelBuffer`] is the single writable frame: a fixed-size
//! row-major grid of [`cell::Cell`]s. Every drawing algorithm lives in the
//! [`raster::Raster`] extension trait and reduces to a sequence of clipped
//! [`buffer::PixelBuffer::write`] calls, so no shape — however degenerate —
//! can corrupt the grid.

pub mod buffer;
pub mod cell;
pub mod raster;

pub use buffer::PixelBuffer;
pub use cell::{Cell, Color};
pub use raster::{Brush, Raster, glyphs};
