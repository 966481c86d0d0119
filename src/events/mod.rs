//! Notifications for presentation layers and pacing schedulers.
//!
//! ## Design Philosophy
//!
//! The engine is synchronous and delay-agnostic. Instead of sleeping between
//! combat exchanges it reports each step to an `EventSink`; whoever is
//! drawing the game decides how long each step should take on screen.
//! Sessions without a presentation layer use `NullSink`.

mod event;
mod sink;

pub use event::GameEvent;
pub use sink::{EventLog, EventSink, NullSink};
