//=========================================================================
// Input Mailbox
//
// Per-tick staging area for decoded network inputs, keyed by entity.
// Acts as a transient aggregator between the command channel and the
// per-entity tick update.
//
// Responsibilities:
// - Store inputs received for the current tick
// - Merge repeated deliveries for the same entity (OR, never overwrite)
// - Hand each entity its input exactly once via `EntityInput`
//
// Notes:
// The mailbox only lives for one tick and is cleared afterwards. Inputs
// that must survive across ticks are buffered by the consumer (the
// scheduler's intent flag), not here.
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;

//=== Internal Modules ====================================================

use super::{EntityId, TickInput, TickInputSource};

//=== InputMailbox ========================================================

pub struct InputMailbox {
    pending: HashMap<EntityId, TickInput>,
}

impl InputMailbox {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates for a typical lobby so steady-state ticks do not
    // reallocate.
    //
    pub fn new() -> Self {
        const ENTITY_BASE: usize = 16;

        Self {
            pending: HashMap::with_capacity(ENTITY_BASE),
        }
    }

    //--- Delivery ---------------------------------------------------------
    //
    // Stores an input for `entity`, merging with anything already
    // delivered this tick.
    //
    pub fn deliver(&mut self, entity: EntityId, input: TickInput) {
        self.pending
            .entry(entity)
            .and_modify(|existing| *existing = existing.merge(input))
            .or_insert(input);
    }

    //--- Consumption ------------------------------------------------------

    /// Removes and returns the input staged for `entity`.
    pub fn take(&mut self, entity: EntityId) -> Option<TickInput> {
        self.pending.remove(&entity)
    }

    /// Per-entity view implementing [`TickInputSource`].
    pub fn for_entity(&mut self, entity: EntityId) -> EntityInput<'_> {
        EntityInput {
            mailbox: self,
            entity,
        }
    }

    //--- Utilities --------------------------------------------------------
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for InputMailbox {
    fn default() -> Self {
        Self::new()
    }
}

//=== EntityInput =========================================================

/// Borrowed view of one entity's slot in the [`InputMailbox`].
pub struct EntityInput<'a> {
    mailbox: &'a mut InputMailbox,
    entity: EntityId,
}

impl TickInputSource for EntityInput<'_> {
    fn try_get_tick_input(&mut self) -> Option<TickInput> {
        self.mailbox.take(self.entity)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const A: EntityId = EntityId(1);
    const B: EntityId = EntityId(2);

    #[test]
    fn repeated_delivery_merges() {
        let mut mailbox = InputMailbox::new();
        mailbox.deliver(A, TickInput::DODGE);
        mailbox.deliver(A, TickInput::default());

        assert_eq!(mailbox.len(), 1);
        assert_eq!(mailbox.take(A), Some(TickInput::DODGE), "Later idle input must not erase a dodge");
    }

    #[test]
    fn entities_are_isolated() {
        let mut mailbox = InputMailbox::new();
        mailbox.deliver(A, TickInput::DODGE);

        assert_eq!(mailbox.take(B), None);
        assert_eq!(mailbox.take(A), Some(TickInput::DODGE));
        assert!(mailbox.is_empty());
    }

    #[test]
    fn entity_view_consumes_once() {
        let mut mailbox = InputMailbox::new();
        mailbox.deliver(A, TickInput::DODGE);

        let mut view = mailbox.for_entity(A);
        assert_eq!(view.try_get_tick_input(), Some(TickInput::DODGE));
        assert_eq!(view.try_get_tick_input(), None);
    }

    #[test]
    fn clear_does_not_deallocate() {
        let mut mailbox = InputMailbox::new();
        for id in 0..64 {
            mailbox.deliver(EntityId(id), TickInput::DODGE);
        }
        let capacity_before = mailbox.pending.capacity();

        mailbox.clear();

        assert!(mailbox.is_empty());
        assert_eq!(mailbox.pending.capacity(), capacity_before);
    }
}
