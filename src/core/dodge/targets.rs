//=========================================================================
// Dodge Targets
//=========================================================================
//
// The collaborators one entity's dodge acts upon, injected at
// construction. Translates `PhaseEffect`s into collaborator calls.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Arc, Mutex};

use log::debug;

//=== Internal Dependencies ===============================================

use super::phase::PhaseEffect;
use crate::core::effects::{
    Collaborator, HitDetectionToggle, InputLockTarget, SoundBroadcaster, VisualEffectTarget,
};
use crate::core::network::{Authority, AuthorityQuery};
use crate::core::time::SimTime;

//=== DodgeTargets ========================================================

/// Injected collaborators for one entity.
///
/// Every handle is optional; missing ones turn their effect into a no-op.
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use aetheric_dodge::prelude::*;
///
/// let hitbox = Arc::new(Mutex::new(Hitbox::new()));
/// let targets = DodgeTargets::new(Authority::State).with_hit_detection(&hitbox);
///
/// assert!(targets.has_authority());
/// ```
pub struct DodgeTargets {
    authority: Box<dyn AuthorityQuery>,
    input_lock: Collaborator<dyn InputLockTarget + Send>,
    hit_detection: Collaborator<dyn HitDetectionToggle + Send>,
    visual: Collaborator<dyn VisualEffectTarget + Send>,
    sound: Collaborator<dyn SoundBroadcaster + Send>,
}

impl DodgeTargets {
    /// Creates a target set with no collaborators bound.
    pub fn new(authority: impl AuthorityQuery + 'static) -> Self {
        Self {
            authority: Box::new(authority),
            input_lock: Collaborator::unbound(),
            hit_detection: Collaborator::unbound(),
            visual: Collaborator::unbound(),
            sound: Collaborator::unbound(),
        }
    }

    //--- Binding ----------------------------------------------------------

    pub fn with_input_lock<T>(mut self, target: &Arc<Mutex<T>>) -> Self
    where
        T: InputLockTarget + Send + 'static,
    {
        let shared: Arc<Mutex<dyn InputLockTarget + Send>> = target.clone();
        self.input_lock = Collaborator::bind(Arc::downgrade(&shared));
        self
    }

    pub fn with_hit_detection<T>(mut self, target: &Arc<Mutex<T>>) -> Self
    where
        T: HitDetectionToggle + Send + 'static,
    {
        let shared: Arc<Mutex<dyn HitDetectionToggle + Send>> = target.clone();
        self.hit_detection = Collaborator::bind(Arc::downgrade(&shared));
        self
    }

    pub fn with_visual<T>(mut self, target: &Arc<Mutex<T>>) -> Self
    where
        T: VisualEffectTarget + Send + 'static,
    {
        let shared: Arc<Mutex<dyn VisualEffectTarget + Send>> = target.clone();
        self.visual = Collaborator::bind(Arc::downgrade(&shared));
        self
    }

    pub fn with_sound<T>(mut self, target: &Arc<Mutex<T>>) -> Self
    where
        T: SoundBroadcaster + Send + 'static,
    {
        let shared: Arc<Mutex<dyn SoundBroadcaster + Send>> = target.clone();
        self.sound = Collaborator::bind(Arc::downgrade(&shared));
        self
    }

    //--- Queries ----------------------------------------------------------

    pub fn has_authority(&self) -> bool {
        self.authority.has_authority()
    }

    //--- Application ------------------------------------------------------

    /// Applies one entry effect for a phase entered at `entered_at`.
    ///
    /// The sound broadcast only happens with state authority; an
    /// unreachable collaborator skips its effect.
    pub fn apply(&self, effect: &PhaseEffect, entered_at: SimTime) {
        let applied = match *effect {
            PhaseEffect::SuppressInput { duration } => self
                .input_lock
                .with(|lock| lock.suppress_input_for(entered_at, duration)),
            PhaseEffect::SetHitDetection(enabled) => self
                .hit_detection
                .with(|hitbox| hitbox.set_hit_detection_enabled(enabled)),
            PhaseEffect::Tint { duration, color } => self
                .visual
                .with(|sprite| sprite.apply_temporary_tint(entered_at, duration, color)),
            PhaseEffect::BroadcastSfx(sfx) => {
                if !self.authority.has_authority() {
                    debug!("No state authority at {}, not broadcasting {}", entered_at, sfx);
                    return;
                }
                self.sound.with(|sink| sink.broadcast_event(sfx.name()))
            }
        };

        if applied.is_none() {
            debug!("Collaborator unavailable, skipping {:?}", effect);
        }
    }
}

impl Default for DodgeTargets {
    fn default() -> Self {
        Self::new(Authority::Replica)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
