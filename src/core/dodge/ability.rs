//=========================================================================
// Dodge Ability
//=========================================================================
//
// Per-entity dodge component: scheduler, timeline, and the collaborators
// it drives, updated once per fixed tick by the world.
//
//   World::step() ──fixed_update()──> ActionScheduler ──> PhaseTimeline
//                                          │                  │
//                                          └── DodgeEvent ────┴──> EventBus
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::config::DodgeConfig;
use super::phase::DodgePhase;
use super::scheduler::{ActionScheduler, Decision};
use super::targets::DodgeTargets;
use crate::core::message_bus::EventBus;
use crate::core::network::{EntityId, TickInputSource};
use crate::core::time::SimTime;

//=== DodgeEvent ==========================================================

/// Why a dodge request did not start a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Cooldown,
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DodgeEventKind {
    Started,
    PhaseEntered(DodgePhase),
    Finished,
    Dropped(DropReason),
}

/// Dodge lifecycle notification published on the [`EventBus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DodgeEvent {
    pub entity: EntityId,
    pub kind: DodgeEventKind,
    pub at: SimTime,
}

//=== DodgeAbility ========================================================

pub struct DodgeAbility {
    entity: EntityId,
    scheduler: ActionScheduler,
    targets: DodgeTargets,
}

impl DodgeAbility {
    pub fn new(entity: EntityId, config: &DodgeConfig, targets: DodgeTargets) -> Self {
        Self {
            entity,
            scheduler: ActionScheduler::new(config),
            targets,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn phase(&self) -> DodgePhase {
        self.scheduler.phase()
    }

    pub fn is_dodging(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn cooldown_deadline(&self) -> Option<SimTime> {
        self.scheduler.cooldown_deadline()
    }

    pub fn targets(&self) -> &DodgeTargets {
        &self.targets
    }

    //--- Tick -------------------------------------------------------------

    /// Runs this entity's dodge logic for the tick at `now`.
    pub fn fixed_update(
        &mut self,
        now: SimTime,
        input: &mut dyn TickInputSource,
        bus: &mut EventBus,
    ) -> Decision {
        let report = self
            .scheduler
            .on_simulation_tick(now, input.try_get_tick_input(), &self.targets);

        let entity = self.entity;
        let mut publish = |kind, at| bus.publish(DodgeEvent { entity, kind, at });

        for transition in &report.transitions {
            match transition.phase {
                DodgePhase::Idle => publish(DodgeEventKind::Finished, transition.at),
                phase => {
                    if phase == DodgePhase::WindUp {
                        publish(DodgeEventKind::Started, transition.at);
                    }
                    publish(DodgeEventKind::PhaseEntered(phase), transition.at);
                }
            }
        }

        match report.decision {
            Decision::OnCooldown { .. } => publish(DodgeEventKind::Dropped(DropReason::Cooldown), now),
            Decision::Busy => publish(DodgeEventKind::Dropped(DropReason::Busy), now),
            Decision::Started | Decision::NoIntent => {}
        }

        report.decision
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
