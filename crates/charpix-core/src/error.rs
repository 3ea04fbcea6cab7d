#![forbid(unsafe_code)]

//! Workspace error type.
//!
//! Drawing never fails under caller-supplied geometry; out-of-range
//! writes clip silently. The only fallible operations are the checked
//! read path, input-state queries with an unsupported code, and polygon
//! construction with too few sides. Terminal I/O errors travel as
//! `std::io::Error` and are not wrapped here.

/// Errors reported by the charpix core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A read addressed a cell outside the buffer grid.
    OutOfRange { x: i32, y: i32 },
    /// An input-state query used a code outside the supported space.
    InvalidCode { code: u16 },
    /// A polygon was requested with fewer than three sides.
    TooFewSides { sides: u32 },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { x, y } => {
                write!(f, "cell ({x}, {y}) is outside the buffer")
            }
            Self::InvalidCode { code } => {
                write!(f, "input code {code} is outside the supported range")
            }
            Self::TooFewSides { sides } => {
                write!(f, "a polygon needs at least 3 sides, got {sides}")
            }
        }
    }
}

impl std::error::Error for Error {}
