//=========================================================================
// Sprite Tint
//
// Timed colour overlay for an entity's sprite. The renderer samples
// `current(now)` each frame; the overlay falls back to the base colour
// once it expires.
//
//=========================================================================

use std::time::Duration;

use crate::core::effects::{Tint, VisualEffectTarget};
use crate::core::time::SimTime;

//=== SpriteTint ==========================================================

#[derive(Debug)]
pub struct SpriteTint {
    base: Tint,
    overlay: Option<(Tint, SimTime)>,
}

impl SpriteTint {
    pub fn new(base: Tint) -> Self {
        Self {
            base,
            overlay: None,
        }
    }

    /// Colour to render at `now`.
    pub fn current(&self, now: SimTime) -> Tint {
        match self.overlay {
            Some((color, until)) if now < until => color,
            _ => self.base,
        }
    }

    pub fn is_tinted(&self, now: SimTime) -> bool {
        self.overlay.is_some_and(|(_, until)| now < until)
    }
}

impl Default for SpriteTint {
    fn default() -> Self {
        Self::new(Tint::WHITE)
    }
}

impl VisualEffectTarget for SpriteTint {
    fn apply_temporary_tint(&mut self, now: SimTime, duration: Duration, color: Tint) {
        self.overlay = Some((color, now + duration));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_expires_back_to_base() {
        let mut sprite = SpriteTint::default();
        sprite.apply_temporary_tint(SimTime::from_millis(100), Duration::from_millis(500), Tint::GRAY);

        assert_eq!(sprite.current(SimTime::from_millis(50)), Tint::WHITE);
        assert_eq!(sprite.current(SimTime::from_millis(100)), Tint::GRAY);
        assert_eq!(sprite.current(SimTime::from_millis(599)), Tint::GRAY);
        assert_eq!(sprite.current(SimTime::from_millis(600)), Tint::WHITE);
        assert!(!sprite.is_tinted(SimTime::from_millis(600)));
    }
}
