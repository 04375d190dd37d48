//=========================================================================
// Reference Components
//=========================================================================
//
// Concrete, engine-side implementations of the effect contracts.
//
// Each component owns its own timing: a dodge run fires the effect and
// moves on, the component decides when it expires by comparing against
// the simulation time it is queried with.
//
//   InputLock   ── InputLockTarget      (movement/input suppression)
//   Hitbox      ── HitDetectionToggle   (invulnerability gate)
//   SpriteTint  ── VisualEffectTarget   (timed colour overlay)
//   SfxChannel  ── SoundBroadcaster     (fan-out to participants)
//
//=========================================================================

//=== Module Declarations =================================================

mod hitbox;
mod input_lock;
mod sfx_channel;
mod sprite_tint;

//=== Public API ==========================================================

pub use hitbox::Hitbox;
pub use input_lock::InputLock;
pub use sfx_channel::SfxChannel;
pub use sprite_tint::SpriteTint;
