//=========================================================================
// Network Input & Authority
//
// Narrow contracts between the simulation and the networking layer.
// Transport and serialization live outside this crate; the simulation
// only relies on decoded inputs and authority flags being available
// per tick.
//
// Responsibilities:
// - Identify networked entities (`EntityId`)
// - Represent one tick of decoded player intent (`TickInput`)
// - Poll per-tick input (`TickInputSource`), absence is not an error
// - Answer "does this replica own the canonical state?" (`AuthorityQuery`)
//
//=========================================================================

//=== Submodules ==========================================================

mod mailbox;

//=== Standard Library Imports ============================================

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

//=== Public API ==========================================================

pub use mailbox::{EntityInput, InputMailbox};

//=== EntityId ============================================================

/// Identifier of a networked entity, shared by every replica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

//=== TickInput ===========================================================

/// Decoded input snapshot for a single simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    /// The player asked to dodge on this tick.
    pub dodge_requested: bool,
}

impl TickInput {
    /// Input carrying a dodge request.
    pub const DODGE: TickInput = TickInput {
        dodge_requested: true,
    };

    /// Combines two snapshots delivered for the same tick.
    ///
    /// Button intents are OR-ed, never overwritten.
    #[inline]
    pub fn merge(self, other: TickInput) -> TickInput {
        TickInput {
            dodge_requested: self.dodge_requested || other.dodge_requested,
        }
    }
}

//=== TickInputSource =====================================================

/// Per-tick input provider, polled once per fixed tick.
pub trait TickInputSource {
    /// Returns this tick's input, or `None` if nothing arrived.
    fn try_get_tick_input(&mut self) -> Option<TickInput>;
}

impl TickInputSource for Option<TickInput> {
    fn try_get_tick_input(&mut self) -> Option<TickInput> {
        self.take()
    }
}

//=== AuthorityQuery ======================================================

/// Answers whether the local replica holds state authority over an entity.
///
/// Authority is assumed stable for the duration of one dodge run.
pub trait AuthorityQuery: Send {
    fn has_authority(&self) -> bool;
}

/// Fixed authority role of a replica.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authority {
    /// This replica owns the canonical state.
    State,

    /// This replica mirrors state owned elsewhere.
    Replica,
}

impl AuthorityQuery for Authority {
    fn has_authority(&self) -> bool {
        matches!(self, Authority::State)
    }
}

/// Authority flag shared with the networking layer, which may flip it
/// between runs (e.g. on host migration).
#[derive(Debug, Clone, Default)]
pub struct SharedAuthority(Arc<AtomicBool>);

impl SharedAuthority {
    pub fn new(has_authority: bool) -> Self {
        Self(Arc::new(AtomicBool::new(has_authority)))
    }

    pub fn set(&self, has_authority: bool) {
        self.0.store(has_authority, Ordering::Release);
    }
}

impl AuthorityQuery for SharedAuthority {
    fn has_authority(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_sticky_for_dodge() {
        let idle = TickInput::default();
        assert_eq!(TickInput::DODGE.merge(idle), TickInput::DODGE);
        assert_eq!(idle.merge(TickInput::DODGE), TickInput::DODGE);
        assert_eq!(idle.merge(idle), idle);
    }

    #[test]
    fn option_source_yields_once() {
        let mut source = Some(TickInput::DODGE);
        assert_eq!(source.try_get_tick_input(), Some(TickInput::DODGE));
        assert_eq!(source.try_get_tick_input(), None);
    }

    #[test]
    fn authority_roles() {
        assert!(Authority::State.has_authority());
        assert!(!Authority::Replica.has_authority());
    }

    #[test]
    fn shared_authority_observes_updates() {
        let authority = SharedAuthority::new(false);
        let network_side = authority.clone();
        assert!(!authority.has_authority());

        network_side.set(true);
        assert!(authority.has_authority());
    }

    #[test]
    fn entity_id_display() {
        assert_eq!(EntityId(7).to_string(), "entity#7");
    }
}
