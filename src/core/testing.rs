//=========================================================================
// Test Support
//=========================================================================
//
// Recording collaborators and a fixture wiring them to `DodgeTargets`.
//
//=========================================================================

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::core::components::{Hitbox, InputLock, SpriteTint};
use crate::core::dodge::DodgeTargets;
use crate::core::effects::{
    HitDetectionToggle, InputLockTarget, SoundBroadcaster, Tint, VisualEffectTarget,
};
use crate::core::network::AuthorityQuery;
use crate::core::time::SimTime;

//=== Call ================================================================

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    SuppressInput { at: SimTime, duration: Duration },
    HitDetection(bool),
    Tint { at: SimTime, duration: Duration, color: Tint },
    Sfx(String),
}

/// Single sink implementing every contract, preserving global call order.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn sfx_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Sfx(_))).count()
    }

    pub fn tints(&self) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Tint { .. }))
            .cloned()
            .collect()
    }
}

impl InputLockTarget for Recorder {
    fn suppress_input_for(&mut self, now: SimTime, duration: Duration) {
        self.calls.push(Call::SuppressInput { at: now, duration });
    }
}

impl HitDetectionToggle for Recorder {
    fn set_hit_detection_enabled(&mut self, enabled: bool) {
        self.calls.push(Call::HitDetection(enabled));
    }
}

impl VisualEffectTarget for Recorder {
    fn apply_temporary_tint(&mut self, now: SimTime, duration: Duration, color: Tint) {
        self.calls.push(Call::Tint {
            at: now,
            duration,
            color,
        });
    }
}

impl SoundBroadcaster for Recorder {
    fn broadcast_event(&mut self, event: &str) {
        self.calls.push(Call::Sfx(event.to_owned()));
    }
}

//=== Fixture =============================================================

/// Live collaborators for one entity. Dropping a field simulates the
/// collaborator being destroyed.
pub(crate) struct Fixture {
    pub recorder: Arc<Mutex<Recorder>>,
    pub hitbox: Arc<Mutex<Hitbox>>,
    pub lock: Arc<Mutex<InputLock>>,
    pub sprite: Arc<Mutex<SpriteTint>>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            recorder: Arc::new(Mutex::new(Recorder::default())),
            hitbox: Arc::new(Mutex::new(Hitbox::new())),
            lock: Arc::new(Mutex::new(InputLock::new())),
            sprite: Arc::new(Mutex::new(SpriteTint::default())),
        }
    }

    /// Targets routing every effect into the recorder.
    pub fn recording_targets(&self, authority: impl AuthorityQuery + 'static) -> DodgeTargets {
        DodgeTargets::new(authority)
            .with_input_lock(&self.recorder)
            .with_hit_detection(&self.recorder)
            .with_visual(&self.recorder)
            .with_sound(&self.recorder)
    }

    /// Targets using the real components, with sound still recorded.
    pub fn component_targets(&self, authority: impl AuthorityQuery + 'static) -> DodgeTargets {
        DodgeTargets::new(authority)
            .with_input_lock(&self.lock)
            .with_hit_detection(&self.hitbox)
            .with_visual(&self.sprite)
            .with_sound(&self.recorder)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.recorder.lock().unwrap().calls.clone()
    }

    pub fn sfx_count(&self) -> usize {
        self.recorder.lock().unwrap().sfx_count()
    }

    pub fn hit_enabled(&self) -> bool {
        self.hitbox.lock().unwrap().is_enabled()
    }
}

pub(crate) fn ms(millis: u64) -> SimTime {
    SimTime::from_millis(millis)
}
