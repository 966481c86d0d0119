//! Deferred removal of dead creatures.
//!
//! Combat never clears a slot itself. A creature that dies is deactivated
//! and a `(side, slot)` token is queued here; the creature stays visible in
//! its slot until the queue is drained. That gap is the window a
//! presentation layer uses to show the death before the card disappears.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Side, SLOT_COUNT};
use crate::events::{EventSink, GameEvent};
use crate::zones::Battlefield;

/// A dead creature waiting to be cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingRemoval {
    pub side: Side,
    pub slot: usize,
}

/// Ordered buffer of removal tokens, each consumed exactly once.
///
/// SmallVec covers a full wipe of both sides without touching the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalQueue {
    pending: SmallVec<[PendingRemoval; 2 * SLOT_COUNT]>,
}

impl RemovalQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a slot for clearing.
    ///
    /// Returns `false` if the slot is already queued.
    pub fn mark(&mut self, side: Side, slot: usize) -> bool {
        let token = PendingRemoval { side, slot };
        if self.pending.contains(&token) {
            return false;
        }
        self.pending.push(token);
        true
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    #[must_use]
    pub fn pending(&self) -> &[PendingRemoval] {
        &self.pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Clear every queued slot that still holds a dead creature, then empty
    /// the queue.
    ///
    /// A living occupant is left alone: the token is stale. Returns the
    /// tokens whose slot was actually cleared, in queue order.
    pub fn drain<K: EventSink + ?Sized>(
        &mut self,
        field: &mut Battlefield,
        sink: &mut K,
    ) -> Vec<PendingRemoval> {
        let mut removed = Vec::with_capacity(self.pending.len());

        for token in self.pending.drain(..) {
            let dead = field
                .creature(token.side, token.slot)
                .is_some_and(|creature| !creature.is_alive());
            if !dead {
                continue;
            }

            if let Some(creature) = field.take(token.side, token.slot) {
                debug!(
                    "removed {} from {} slot {}",
                    creature.card.name, token.side, token.slot
                );
                sink.notify(&GameEvent::CreatureRemoved {
                    side: token.side,
                    slot: token.slot,
                });
                removed.push(token);
            }
        }

        removed
    }
}
