#![forbid(unsafe_code)]

//! Raw input sample types.
//!
//! An [`InputSample`] is what an input source hands the state tracker
//! once per tick: the set of key codes currently down, plus the most
//! recent pointer-move and button-state observations, if any arrived
//! this tick. Pointer and button fields are opportunistic — `None`
//! means "no event observed, retain the previous value", never "reset".
//!
//! # Design Notes
//!
//! - Key codes occupy a fixed 256-entry space; the [`codes`] module
//!   names the commonly used entries.
//! - Button state travels as a bitmask because the host delivers all
//!   five buttons in one word on every button transition.

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::geometry::Point;

/// Number of key codes in the input space.
pub const KEY_COUNT: usize = 256;

/// Number of pointer buttons tracked.
pub const BUTTON_COUNT: usize = 5;

bitflags! {
    /// Currently-down pointer buttons, bit `i` = button `i`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ButtonMask: u8 {
        /// Left button (button 0).
        const LEFT   = 0b0000_0001;
        /// Right button (button 1).
        const RIGHT  = 0b0000_0010;
        /// Middle button (button 2).
        const MIDDLE = 0b0000_0100;
        /// First extra button (button 3).
        const X1     = 0b0000_1000;
        /// Second extra button (button 4).
        const X2     = 0b0001_0000;
    }
}

impl ButtonMask {
    /// Check whether the button with the given index (0-4) is down.
    #[inline]
    pub const fn is_down(self, index: usize) -> bool {
        index < BUTTON_COUNT && self.bits() & (1 << index) != 0
    }
}

/// One tick's worth of raw input, as supplied by an input source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSample {
    /// Key codes currently down. Codes absent here are up.
    pub keys_down: SmallVec<[u8; 16]>,
    /// Most recent pointer position, if a move was observed this tick.
    pub pointer: Option<Point>,
    /// Full button state, if a button transition was observed this tick.
    pub buttons: Option<ButtonMask>,
}

impl InputSample {
    /// An empty sample: every key up, no pointer or button observations.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a down key code.
    #[must_use]
    pub fn with_key(mut self, code: u8) -> Self {
        self.keys_down.push(code);
        self
    }

    /// Record a pointer-move observation.
    #[must_use]
    pub fn with_pointer(mut self, x: i32, y: i32) -> Self {
        self.pointer = Some(Point::new(x, y));
        self
    }

    /// Record a button-state observation.
    #[must_use]
    pub fn with_buttons(mut self, buttons: ButtonMask) -> Self {
        self.buttons = Some(buttons);
        self
    }
}

/// Named entries of the 256-code key space.
///
/// The numbering follows the classic virtual-key table so that
/// application code written against a desktop host ports unchanged:
/// letters at `0x41..=0x5A`, digits at `0x30..=0x39`, arrows at
/// `0x25..=0x28`.
pub mod codes {
    pub const BACKSPACE: u8 = 0x08;
    pub const TAB: u8 = 0x09;
    pub const ENTER: u8 = 0x0D;
    pub const SHIFT: u8 = 0x10;
    pub const CONTROL: u8 = 0x11;
    pub const ESCAPE: u8 = 0x1B;
    pub const SPACE: u8 = 0x20;
    pub const PAGE_UP: u8 = 0x21;
    pub const PAGE_DOWN: u8 = 0x22;
    pub const END: u8 = 0x23;
    pub const HOME: u8 = 0x24;
    pub const LEFT: u8 = 0x25;
    pub const UP: u8 = 0x26;
    pub const RIGHT: u8 = 0x27;
    pub const DOWN: u8 = 0x28;
    pub const INSERT: u8 = 0x2D;
    pub const DELETE: u8 = 0x2E;
    pub const F1: u8 = 0x70;
    pub const F2: u8 = 0x71;
    pub const F3: u8 = 0x72;
    pub const F4: u8 = 0x73;
    pub const F5: u8 = 0x74;
    pub const F6: u8 = 0x75;
    pub const F7: u8 = 0x76;
    pub const F8: u8 = 0x77;
    pub const F9: u8 = 0x78;
    pub const F10: u8 = 0x79;
    pub const F11: u8 = 0x7A;
    pub const F12: u8 = 0x7B;

    /// Code for an ASCII letter or digit; other characters map to the
    /// fallthrough code 0.
    #[must_use]
    pub fn from_char(c: char) -> u8 {
        match c {
            'a'..='z' => c as u8 - b'a' + 0x41,
            'A'..='Z' => c as u8 - b'A' + 0x41,
            '0'..='9' => c as u8,
            ' ' => SPACE,
            _ => 0,
        }
    }
}
