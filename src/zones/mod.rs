//! Slot zones.
//!
//! Each side owns a fixed row of `SLOT_COUNT` battle slots holding at most
//! one creature each. Slot `i` on one side faces slot `i` on the other.

mod battlefield;

pub use battlefield::{Battlefield, Slots};
