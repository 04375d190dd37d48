//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_dodge::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Simulation, SimulationBuilder, SimulationHandle};
pub use crate::error::SimulationError;

// Simulation world
pub use crate::core::time::{SimClock, SimTime};
pub use crate::core::world::World;
pub use crate::core::SimulationCommand;

// Network input and authority
pub use crate::core::network::{
    Authority, AuthorityQuery, EntityId, SharedAuthority, TickInput, TickInputSource,
};

// Dodge action
pub use crate::core::dodge::{
    ActionScheduler, Decision, DodgeAbility, DodgeConfig, DodgeEvent, DodgeEventKind,
    DodgePhase, DodgeTargets, DropReason, PhaseTimeline,
};

// Effect contracts and components
pub use crate::core::components::{Hitbox, InputLock, SfxChannel, SpriteTint};
pub use crate::core::effects::{
    HitDetectionToggle, InputLockTarget, SfxEvent, SoundBroadcaster, Tint, VisualEffectTarget,
};

// Event bus
pub use crate::core::message_bus::EventBus;
