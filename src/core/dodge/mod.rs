//=========================================================================
// Dodge
//=========================================================================
//
// Cooldown-gated, three-phase evasive action.
//
// Architecture:
//   DodgeAbility (per entity)
//     ├─ ActionScheduler   sticky intent + cooldown deadline
//     │    └─ PhaseTimeline   WindUp → Active → Recovery → Idle
//     └─ DodgeTargets      injected collaborators + authority query
//
// Timeline (defaults):
//   0.0  WindUp    lock input for 0.7
//   0.1  Active    hit detection off, gray tint 0.5, "Dodge" sfx (authority only)
//   0.6  Recovery  hit detection on
//   1.0  cooldown expires (next start needs now > 1.0)
//
//=========================================================================

//=== Module Declarations =================================================

mod ability;
mod config;
mod phase;
mod scheduler;
mod targets;
mod timeline;

//=== Public API ==========================================================

pub use ability::{DodgeAbility, DodgeEvent, DodgeEventKind, DropReason};
pub use config::{DodgeConfig, DodgeConfigBuilder};
pub use phase::{DodgePhase, PhaseEffect, PhaseSpec};
pub use scheduler::{ActionScheduler, Decision, TickReport};
pub use targets::DodgeTargets;
pub use timeline::{PhaseTimeline, PhaseTransition};
