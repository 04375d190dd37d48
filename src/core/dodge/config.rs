//=========================================================================
// Dodge Configuration
//=========================================================================
//
// Tunables for the dodge and the phase sequence derived from them.
//
//   DodgeConfig::builder() ──with_*()──> build() ──> DodgeConfig
//                                                       │
//                                                   phases() → [WindUp, Active, Recovery]
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::warn;

//=== Internal Dependencies ===============================================

use super::phase::{DodgePhase, PhaseEffect, PhaseSpec};
use crate::core::effects::{SfxEvent, Tint};

//=== DodgeConfig =========================================================

/// Timing and presentation parameters of a dodge.
///
/// # Default Values
///
/// - **Cooldown**: 1.0s between run starts
/// - **Wind-up**: 0.1s
/// - **Active**: 0.5s (invulnerable)
/// - **Input lock**: 0.7s from run start
/// - **Tint**: gray for 0.5s from the start of the active phase
/// - **Sound**: [`SfxEvent::Dodge`]
#[derive(Debug, Clone, PartialEq)]
pub struct DodgeConfig {
    pub(crate) cooldown: Duration,
    pub(crate) wind_up: Duration,
    pub(crate) active: Duration,
    pub(crate) input_lock: Duration,
    pub(crate) tint_duration: Duration,
    pub(crate) tint_color: Tint,
    pub(crate) sfx: SfxEvent,
}

impl DodgeConfig {
    pub fn builder() -> DodgeConfigBuilder {
        DodgeConfigBuilder::new()
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Length of a full run, from wind-up entry to recovery.
    pub fn total_duration(&self) -> Duration {
        self.wind_up + self.active
    }

    /// The ordered phase sequence of one run.
    pub fn phases(&self) -> Vec<PhaseSpec> {
        vec![
            PhaseSpec::new(DodgePhase::WindUp, self.wind_up).with_effect(PhaseEffect::SuppressInput {
                duration: self.input_lock,
            }),
            PhaseSpec::new(DodgePhase::Active, self.active)
                .with_effect(PhaseEffect::SetHitDetection(false))
                .with_effect(PhaseEffect::Tint {
                    duration: self.tint_duration,
                    color: self.tint_color,
                })
                .with_effect(PhaseEffect::BroadcastSfx(self.sfx)),
            PhaseSpec::new(DodgePhase::Recovery, Duration::ZERO)
                .with_effect(PhaseEffect::SetHitDetection(true)),
        ]
    }
}

impl Default for DodgeConfig {
    fn default() -> Self {
        DodgeConfigBuilder::new().build()
    }
}

//=== DodgeConfigBuilder ==================================================

/// Fluent builder for [`DodgeConfig`].
///
/// ```
/// use std::time::Duration;
/// use aetheric_dodge::prelude::*;
///
/// let config = DodgeConfig::builder()
///     .with_cooldown(Duration::from_millis(800))
///     .with_tint(Duration::from_millis(300), Tint::rgb(0.2, 0.4, 1.0))
///     .build();
///
/// assert_eq!(config.cooldown(), Duration::from_millis(800));
/// ```
#[derive(Debug, Clone)]
pub struct DodgeConfigBuilder {
    config: DodgeConfig,
}

impl DodgeConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: DodgeConfig {
                cooldown: Duration::from_secs(1),
                wind_up: Duration::from_millis(100),
                active: Duration::from_millis(500),
                input_lock: Duration::from_millis(700),
                tint_duration: Duration::from_millis(500),
                tint_color: Tint::GRAY,
                sfx: SfxEvent::Dodge,
            },
        }
    }

    /// Sets the minimum time between two run starts.
    ///
    /// # Panics
    ///
    /// Panics if `cooldown` is zero.
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        assert!(!cooldown.is_zero(), "Cooldown must be positive");
        self.config.cooldown = cooldown;
        self
    }

    pub fn with_wind_up(mut self, wind_up: Duration) -> Self {
        self.config.wind_up = wind_up;
        self
    }

    pub fn with_active(mut self, active: Duration) -> Self {
        self.config.active = active;
        self
    }

    /// Sets how long player input stays locked after a run starts.
    pub fn with_input_lock(mut self, input_lock: Duration) -> Self {
        self.config.input_lock = input_lock;
        self
    }

    pub fn with_tint(mut self, duration: Duration, color: Tint) -> Self {
        self.config.tint_duration = duration;
        self.config.tint_color = color;
        self
    }

    pub fn with_sfx(mut self, sfx: SfxEvent) -> Self {
        self.config.sfx = sfx;
        self
    }

    /// Finalizes the configuration.
    ///
    /// A cooldown shorter than the phase sequence is accepted, but requests
    /// arriving while a run is still executing are dropped.
    pub fn build(self) -> DodgeConfig {
        let config = self.config;
        if config.cooldown < config.total_duration() {
            warn!(
                "Dodge cooldown ({:?}) is shorter than its phases ({:?}); \
                 requests during a running dodge will be dropped",
                config.cooldown,
                config.total_duration()
            );
        }
        config
    }
}

impl Default for DodgeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
