//=========================================================================
// Effect Collaborators
//=========================================================================
//
// Contracts for the external systems a dodge run drives, and the weak
// handle used to inject them at construction time.
//
// Architecture:
//   DodgeTargets ──Collaborator<dyn Trait>──> Weak<Mutex<impl Trait>>
//                                                  │ upgrade() fails
//                                                  └─> effect is a no-op
//
// Collaborators are referenced, never owned. A target that was never
// bound, has been dropped, or whose lock is poisoned simply skips the
// effect; the dodge timeline keeps running on schedule.
//
//=========================================================================

//=== Submodules ==========================================================

mod collaborator;

//=== External Dependencies ===============================================

use std::fmt;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::time::SimTime;

//=== Public API ==========================================================

pub use collaborator::Collaborator;

//=== Contracts ===========================================================

/// Suppresses externally driven input and movement for a window of time.
///
/// Calling again before expiry replaces the expiry (last call wins).
pub trait InputLockTarget {
    fn suppress_input_for(&mut self, now: SimTime, duration: Duration);
}

/// Gates whether the entity can be struck. `false` means invulnerable.
pub trait HitDetectionToggle {
    fn set_hit_detection_enabled(&mut self, enabled: bool);
}

/// Applies a colour tint that expires on its own.
pub trait VisualEffectTarget {
    fn apply_temporary_tint(&mut self, now: SimTime, duration: Duration, color: Tint);
}

/// Fan-out sink delivering a named sound event to every participant.
pub trait SoundBroadcaster {
    fn broadcast_event(&mut self, event: &str);
}

//=== Tint ================================================================

/// Linear RGBA colour used for sprite tinting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Tint {
    pub const WHITE: Tint = Tint::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Tint = Tint::rgb(0.5, 0.5, 0.5);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::WHITE
    }
}

//=== SfxEvent ============================================================

/// Sound effects a character action can trigger.
///
/// The display form is the wire name understood by every participant's
/// audio layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SfxEvent {
    Dodge,
    Jump,
    Attack,
    Hurt,
}

impl SfxEvent {
    pub const fn name(self) -> &'static str {
        match self {
            SfxEvent::Dodge => "Dodge",
            SfxEvent::Jump => "Jump",
            SfxEvent::Attack => "Attack",
            SfxEvent::Hurt => "Hurt",
        }
    }
}

impl fmt::Display for SfxEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
