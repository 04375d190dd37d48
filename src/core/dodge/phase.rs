//=========================================================================
// Phase Descriptors
//=========================================================================
//
// Data describing one time-delimited segment of a dodge.
//
//   PhaseSpec { phase, duration, effects: [PhaseEffect, ...] }
//
// Effects are applied in list order when the phase is entered. The
// phase then lasts `duration` before the next one is entered.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::effects::{SfxEvent, Tint};

//=== DodgePhase ==========================================================

/// Where an entity currently is in its dodge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DodgePhase {
    /// No run in progress.
    #[default]
    Idle,

    /// Input is locked, the entity is still hittable.
    WindUp,

    /// Invulnerable window.
    Active,

    /// Hit detection restored; ends immediately.
    Recovery,
}

impl fmt::Display for DodgePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DodgePhase::Idle => "idle",
            DodgePhase::WindUp => "wind-up",
            DodgePhase::Active => "active",
            DodgePhase::Recovery => "recovery",
        };
        f.write_str(name)
    }
}

//=== PhaseEffect =========================================================

/// A side effect fired on phase entry.
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseEffect {
    /// Lock player input for `duration`, independently of phase bounds.
    SuppressInput { duration: Duration },

    /// Enable or disable hit detection.
    SetHitDetection(bool),

    /// Tint the sprite for `duration`.
    Tint { duration: Duration, color: Tint },

    /// Broadcast a sound event, only from the state authority.
    BroadcastSfx(SfxEvent),
}

//=== PhaseSpec ===========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSpec {
    pub phase: DodgePhase,
    pub duration: Duration,
    pub effects: Vec<PhaseEffect>,
}

impl PhaseSpec {
    pub fn new(phase: DodgePhase, duration: Duration) -> Self {
        Self {
            phase,
            duration,
            effects: Vec::new(),
        }
    }

    /// Appends an entry effect.
    pub fn with_effect(mut self, effect: PhaseEffect) -> Self {
        self.effects.push(effect);
        self
    }
}
