//=========================================================================
// Event Queue Trait
//=========================================================================
//
// Type-erased view over a `Vec<E>` so the bus can hold queues of many
// event types in one map and still reset them without knowing `E`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::Event;

//=========================================================================

pub(super) trait EventQueue: Send {
    /// Drops queued events, keeping the allocation for the next tick.
    fn reset(&mut self);

    fn len(&self) -> usize;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<E: Event> EventQueue for Vec<E> {
    fn reset(&mut self) {
        self.clear();
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_capacity() {
        let mut queue: Vec<u32> = Vec::with_capacity(64);
        queue.extend(0..32);
        let capacity = queue.capacity();

        let erased: &mut dyn EventQueue = &mut queue;
        erased.reset();
        assert_eq!(erased.len(), 0);

        assert_eq!(queue.capacity(), capacity);
    }

    #[test]
    fn downcast_recovers_concrete_queue() {
        let mut queue: Vec<u32> = vec![7];
        let erased: &mut dyn EventQueue = &mut queue;

        let concrete = erased.as_any_mut().downcast_mut::<Vec<u32>>();
        assert_eq!(concrete.map(|q| q.pop()), Some(Some(7)));
        assert!(erased.as_any().downcast_ref::<Vec<i64>>().is_none());
    }
}
