//! Event sinks.

use super::event::GameEvent;

/// Receiver for engine events.
///
/// Called synchronously, in order, while the engine mutates state. An
/// implementation may queue animations but must not call back into the
/// session.
pub trait EventSink {
    fn notify(&mut self, event: &GameEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Records events in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Hand over everything recorded so far and start fresh.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event);
    }
}
