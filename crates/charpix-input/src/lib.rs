#![forbid(unsafe_code)]

//! Edge-triggered input state tracking.
//!
//! The [`InputStateTracker`] turns raw per-tick "is this code down"
//! snapshots into pressed/released/held answers. It keeps two
//! generations of raw state — previous tick and current tick — and
//! derives a [`KeyState`] for every code once per
//! [`tick`](InputStateTracker::tick).

pub mod tracker;

pub use tracker::{InputStateTracker, KeyState};
