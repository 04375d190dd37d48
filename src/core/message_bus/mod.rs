//=========================================================================
// Event Bus
//=========================================================================
//
// Per-tick, type-keyed event queues for simulation observers.
//
// Architecture:
//   Systems → publish<E>() → HashMap<TypeId, Vec<E>>
//                                   ↓
//   Observers ← read<E>() (shared, any number of readers)
//                                   ↓
//   World ─────────→ reset() at the start of every tick
//
// Events describe what happened during the latest tick only.
//
//=========================================================================

//=== Submodules ==========================================================

mod event_queue;

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use event_queue::EventQueue;

//=== Event ===============================================================

/// Marker for types that can travel on the [`EventBus`].
pub trait Event: Send + 'static {}

impl<T: Send + 'static> Event for T {}

//=== EventBus ============================================================

#[derive(Default)]
pub struct EventBus {
    queues: HashMap<TypeId, Box<dyn EventQueue>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `event` for observers of this tick.
    pub fn publish<E: Event>(&mut self, event: E) {
        if let Some(queue) = self.queue_mut::<E>() {
            queue.push(event);
        }
    }

    /// Events of type `E` published since the last reset.
    pub fn read<E: Event>(&self) -> &[E] {
        self.queues
            .get(&TypeId::of::<E>())
            .and_then(|queue| queue.as_any().downcast_ref::<Vec<E>>())
            .map(|queue| queue.as_slice())
            .unwrap_or(&[])
    }

    pub fn count<E: Event>(&self) -> usize {
        self.read::<E>().len()
    }

    /// Total number of queued events across all types.
    pub fn total(&self) -> usize {
        self.queues.values().map(|queue| queue.len()).sum()
    }

    /// Clears every queue, keeping allocations for reuse.
    pub fn reset(&mut self) {
        for queue in self.queues.values_mut() {
            queue.reset();
        }
    }

    fn queue_mut<E: Event>(&mut self) -> Option<&mut Vec<E>> {
        self.queues
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(Vec::<E>::new()))
            .as_any_mut()
            .downcast_mut::<Vec<E>>()
    }
}

//=========================================================================
// Tests
//=========================================================================
