//=========================================================================
// Hitbox
//
// Boolean gate consulted by hit resolution. Disabled = invulnerable.
//
//=========================================================================

use log::debug;

use crate::core::effects::HitDetectionToggle;

//=== Hitbox ==============================================================

#[derive(Debug)]
pub struct Hitbox {
    enabled: bool,
    toggles: u32,
}

impl Hitbox {
    /// Creates an enabled hitbox.
    pub fn new() -> Self {
        Self {
            enabled: true,
            toggles: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of calls that actually changed the flag.
    pub fn toggles(&self) -> u32 {
        self.toggles
    }
}

impl Default for Hitbox {
    fn default() -> Self {
        Self::new()
    }
}

impl HitDetectionToggle for Hitbox {
    fn set_hit_detection_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            debug!("Hitbox {}", if enabled { "back" } else { "down" });
            self.enabled = enabled;
            self.toggles += 1;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
