#![forbid(unsafe_code)]

//! charpix public facade.
//!
//! The engine renders 2-D shapes onto a fixed-size grid of
//! glyph-plus-attribute cells and reports edge-triggered keyboard and
//! pointer state to the application, once per tick:
//!
//! ```no_run
//! use charpix::prelude::*;
//!
//! fn main() -> std::io::Result<()> {
//!     let backend = TerminalBackend::new(TerminalOptions::default())?;
//!     let mut engine = Engine::new(80, 30, backend);
//!
//!     loop {
//!         engine.process_input()?;
//!         if engine.key(codes::ESCAPE.into()).unwrap().pressed {
//!             break;
//!         }
//!
//!         engine.clear();
//!         engine.draw_border(Brush::default().with_color(Color::DARK_GREY));
//!         engine.draw_circle(
//!             Point::new(engine.pointer_x(), engine.pointer_y()),
//!             5,
//!             Brush::default().with_color(Color::CYAN),
//!         );
//!         engine.present()?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The work splits across the member crates: `charpix-render` owns the
//! buffer and the rasterization algorithms, `charpix-input` owns the
//! press/release/held state machine, `charpix-core` owns the shared
//! leaf types, and this crate composes them behind [`engine::Engine`]
//! plus the two backends.

pub mod backend;
pub mod engine;
pub mod terminal;

// --- Core re-exports -------------------------------------------------------

pub use charpix_core::event::codes;
pub use charpix_core::{ButtonMask, Error, InputSample, Point};

// --- Render re-exports -----------------------------------------------------

pub use charpix_render::{Brush, Cell, Color, PixelBuffer, Raster, glyphs};

// --- Input re-exports ------------------------------------------------------

pub use charpix_input::{InputStateTracker, KeyState};

// --- Engine and backends ---------------------------------------------------

pub use backend::{DisplaySink, InputSource, TestBackend};
pub use engine::Engine;
pub use terminal::{TerminalBackend, TerminalOptions};

/// Everything an application typically needs.
pub mod prelude {
    pub use crate::backend::{DisplaySink, InputSource, TestBackend};
    pub use crate::engine::Engine;
    pub use crate::terminal::{TerminalBackend, TerminalOptions};
    pub use charpix_core::event::codes;
    pub use charpix_core::{ButtonMask, Error, InputSample, Point};
    pub use charpix_input::KeyState;
    pub use charpix_render::{Brush, Cell, Color, PixelBuffer, Raster, glyphs};
}
