#![forbid(unsafe_code)]

//! The press/release/held state machine.
//!
//! Per input code, the transition table compares this tick's raw down
//! signal against last tick's:
//!
//! | prev | curr | pressed | released | held |
//! |------|------|---------|----------|------|
//! | up   | up   | no      | no       | no   |
//! | up   | down | yes     | no       | yes  |
//! | down | down | no      | no       | yes  |
//! | down | up   | no      | yes      | no   |
//!
//! `pressed` and `released` are edge-triggered — true for exactly the
//! one tick the transition happens on. `held` is the level signal.
//!
//! Keys are a full resample every tick: a code absent from the sample
//! is up. Buttons and the pointer are observation-driven: a tick
//! without a button-state event retains the previous raw button state,
//! and a tick without a move retains the previous coordinates.

use charpix_core::event::{BUTTON_COUNT, KEY_COUNT};
use charpix_core::{Error, InputSample, Point};

/// One input code's transition state for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    /// The code went down this tick.
    pub pressed: bool,
    /// The code went up this tick.
    pub released: bool,
    /// The code is currently down.
    pub held: bool,
}

impl KeyState {
    const IDLE: Self = Self {
        pressed: false,
        released: false,
        held: false,
    };

    #[inline]
    fn derive(prev: bool, curr: bool) -> Self {
        Self {
            pressed: curr && !prev,
            released: prev && !curr,
            held: curr,
        }
    }
}

/// Double-buffered raw input state plus the per-tick derived tables.
///
/// Owns a fixed 256-entry key space and a 5-entry button space. All
/// raw state starts "up" and the pointer starts at the origin; nothing
/// here is global — the tracker lives inside the engine that drives it.
#[derive(Debug)]
pub struct InputStateTracker {
    prev_keys: [bool; KEY_COUNT],
    curr_keys: [bool; KEY_COUNT],
    prev_buttons: [bool; BUTTON_COUNT],
    curr_buttons: [bool; BUTTON_COUNT],
    keys: [KeyState; KEY_COUNT],
    buttons: [KeyState; BUTTON_COUNT],
    pointer: Point,
}

impl Default for InputStateTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl InputStateTracker {
    /// A tracker with every code up and the pointer at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prev_keys: [false; KEY_COUNT],
            curr_keys: [false; KEY_COUNT],
            prev_buttons: [false; BUTTON_COUNT],
            curr_buttons: [false; BUTTON_COUNT],
            keys: [KeyState::IDLE; KEY_COUNT],
            buttons: [KeyState::IDLE; BUTTON_COUNT],
            pointer: Point::ORIGIN,
        }
    }

    /// Ingest one tick's raw sample and derive every code's state.
    ///
    /// Call exactly once per tick; [`key`](Self::key) and
    /// [`button`](Self::button) are pure lookups in between.
    pub fn tick(&mut self, sample: &InputSample) {
        // keys: full resample, absent codes are up
        self.prev_keys = self.curr_keys;
        self.curr_keys = [false; KEY_COUNT];
        for &code in &sample.keys_down {
            self.curr_keys[code as usize] = true;
        }

        // buttons: a state event replaces all five atomically,
        // otherwise the raw state carries over
        self.prev_buttons = self.curr_buttons;
        if let Some(mask) = sample.buttons {
            for (i, slot) in self.curr_buttons.iter_mut().enumerate() {
                *slot = mask.is_down(i);
            }
        }

        if let Some(p) = sample.pointer {
            self.pointer = p;
        }

        for i in 0..KEY_COUNT {
            self.keys[i] = KeyState::derive(self.prev_keys[i], self.curr_keys[i]);
        }
        for i in 0..BUTTON_COUNT {
            self.buttons[i] = KeyState::derive(self.prev_buttons[i], self.curr_buttons[i]);
        }
    }

    /// The derived state of a key code.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCode`] for codes outside the 256-entry space.
    pub fn key(&self, code: u16) -> Result<KeyState, Error> {
        self.keys
            .get(code as usize)
            .copied()
            .ok_or(Error::InvalidCode { code })
    }

    /// The derived state of a pointer button (0-4).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCode`] for indices outside the 5-button space.
    pub fn button(&self, index: u16) -> Result<KeyState, Error> {
        self.buttons
            .get(index as usize)
            .copied()
            .ok_or(Error::InvalidCode { code: index })
    }

    /// Last observed pointer column.
    #[inline]
    pub const fn pointer_x(&self) -> i32 {
        self.pointer.x
    }

    /// Last observed pointer row.
    #[inline]
    pub const fn pointer_y(&self) -> i32 {
        self.pointer.y
    }
}
