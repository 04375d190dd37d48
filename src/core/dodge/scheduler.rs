//=========================================================================
// Action Scheduler
//=========================================================================
//
// Per-tick driver deciding when a dodge run starts.
//
// Each tick:
//   1. Resume the running timeline (phases whose time has come)
//   2. OR this tick's dodge bit into the sticky intent flag
//   3. If intent is set: consume it, then start a run when the cooldown
//      has strictly elapsed and no run is still executing
//
// Intent is consumed exactly once per evaluation. A request that cannot
// start is dropped, never deferred to a later tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use super::config::DodgeConfig;
use super::phase::DodgePhase;
use super::targets::DodgeTargets;
use super::timeline::{PhaseTimeline, PhaseTransition};
use crate::core::network::TickInput;
use crate::core::time::SimTime;

//=== Decision ============================================================

/// Outcome of one scheduler evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No dodge intent was pending.
    NoIntent,

    /// A new run started this tick.
    Started,

    /// Intent dropped: the cooldown deadline has not passed.
    OnCooldown { ready_after: SimTime },

    /// Intent dropped: the previous run is still executing.
    Busy,
}

//=== TickReport ==========================================================

/// Everything the scheduler did during one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub decision: Decision,

    /// Phases entered this tick, in order.
    pub transitions: Vec<PhaseTransition>,
}

//=== ActionScheduler =====================================================

#[derive(Debug)]
pub struct ActionScheduler {
    intent: bool,
    cooldown: Duration,
    cooldown_deadline: Option<SimTime>,
    timeline: PhaseTimeline,
}

impl ActionScheduler {
    pub fn new(config: &DodgeConfig) -> Self {
        Self {
            intent: false,
            cooldown: config.cooldown(),
            cooldown_deadline: None,
            timeline: PhaseTimeline::new(config.phases()),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Time after which the next run may start; `None` before the first run.
    pub fn cooldown_deadline(&self) -> Option<SimTime> {
        self.cooldown_deadline
    }

    pub fn phase(&self) -> DodgePhase {
        self.timeline.phase()
    }

    pub fn is_running(&self) -> bool {
        self.timeline.is_running()
    }

    /// Whether a request evaluated at `now` would pass the cooldown gate.
    pub fn is_ready(&self, now: SimTime) -> bool {
        self.cooldown_deadline.map_or(true, |deadline| now > deadline)
    }

    //--- Tick -------------------------------------------------------------

    /// Runs one fixed simulation tick at `now`.
    ///
    /// `tick_input` is `None` when no input arrived for this tick.
    pub fn on_simulation_tick(
        &mut self,
        now: SimTime,
        tick_input: Option<TickInput>,
        targets: &DodgeTargets,
    ) -> TickReport {
        let mut transitions = self.timeline.advance(now, targets);

        if let Some(input) = tick_input {
            self.intent |= input.dodge_requested;
        }

        if !self.intent {
            return TickReport {
                decision: Decision::NoIntent,
                transitions,
            };
        }
        self.intent = false;

        let decision = if let Some(deadline) = self.cooldown_deadline.filter(|&d| now <= d) {
            debug!("Dodge on cooldown at {} (ready after {})", now, deadline);
            Decision::OnCooldown {
                ready_after: deadline,
            }
        } else if self.timeline.is_running() {
            debug!("Dodge requested at {} while previous run is executing", now);
            Decision::Busy
        } else {
            // Deadline is set before any entry effect fires.
            self.cooldown_deadline = Some(now + self.cooldown);
            transitions.extend(self.timeline.start(now, targets));
            Decision::Started
        };

        TickReport {
            decision,
            transitions,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::network::Authority;
    use crate::core::testing::{ms, Fixture};

    fn scheduler() -> ActionScheduler {
        ActionScheduler::new(&DodgeConfig::default())
    }

    fn dodge() -> Option<TickInput> {
        Some(TickInput::DODGE)
    }

    //=====================================================================
    // Cooldown Gating
    //=====================================================================

    #[test]
    fn first_request_at_time_zero_starts() {
        let fixture = Fixture::new();
        let targets = fixture.recording_targets(Authority::State);
        let mut scheduler = scheduler();

        assert!(scheduler.is_ready(ms(0)));
        let report = scheduler.on_simulation_tick(ms(0), dodge(), &targets);

        assert_eq!(report.decision, Decision::Started);
        assert_eq!(report.transitions[0].phase, DodgePhase::WindUp);
        assert_eq!(scheduler.cooldown_deadline(), Some(ms(1000)));
    }

    #[test]
    fn request_within_cooldown_is_dropped() {
        let fixture = Fixture::new();
        let targets = fixture.recording_targets(Authority::State);
        let mut scheduler = scheduler();

        scheduler.on_simulation_tick(ms(0), dodge(), &targets);
        let report = scheduler.on_simulation_tick(ms(500), dodge(), &targets);

        assert_eq!(
            report.decision,
            Decision::OnCooldown {
                ready_after: ms(1000)
            }
        );
        assert_eq!(scheduler.cooldown_deadline(), Some(ms(1000)));
    }

    #[test]
    fn deadline_itself_is_not_eligible() {
        let fixture = Fixture::new();
        let targets = fixture.recording_targets(Authority::State);
        let mut scheduler = scheduler();

        scheduler.on_simulation_tick(ms(0), dodge(), &targets);
        let at_deadline = scheduler.on_simulation_tick(ms(1000), dodge(), &targets);
        let after = scheduler.on_simulation_tick(ms(1010), dodge(), &targets);

        assert!(matches!(at_deadline.decision, Decision::OnCooldown { .. }));
        assert_eq!(after.decision, Decision::Started);
        assert_eq!(scheduler.cooldown_deadline(), Some(ms(2010)));
    }

    //=====================================================================
    // Intent Aggregation
    //=====================================================================

    #[test]
    fn no_input_means_no_intent() {
        let targets = DodgeTargets::default();
        let mut scheduler = scheduler();

        let report = scheduler.on_simulation_tick(ms(0), None, &targets);
        assert_eq!(report.decision, Decision::NoIntent);

        let report = scheduler.on_simulation_tick(ms(10), Some(TickInput::default()), &targets);
        assert_eq!(report.decision, Decision::NoIntent);
        assert_eq!(scheduler.cooldown_deadline(), None);
    }

    #[test]
    fn dropped_intent_is_not_replayed_later() {
        let fixture = Fixture::new();
        let targets = fixture.recording_targets(Authority::State);
        let mut scheduler = scheduler();

        scheduler.on_simulation_tick(ms(0), dodge(), &targets);
        scheduler.on_simulation_tick(ms(900), dodge(), &targets);

        for t in (910..=2000).step_by(10) {
            let report = scheduler.on_simulation_tick(ms(t), None, &targets);
            assert_ne!(report.decision, Decision::Started, "Stale intent started a run at {}ms", t);
        }
        assert_eq!(fixture.sfx_count(), 1);
    }

    #[test]
    fn absent_input_tick_keeps_previous_false_intent() {
        let targets = DodgeTargets::default();
        let mut scheduler = scheduler();

        scheduler.on_simulation_tick(ms(0), Some(TickInput::default()), &targets);
        let report = scheduler.on_simulation_tick(ms(10), None, &targets);
        assert_eq!(report.decision, Decision::NoIntent);
    }

    //=====================================================================
    // Run Overlap
    //=====================================================================

    #[test]
    fn short_cooldown_rejects_overlapping_run() {
        let fixture = Fixture::new();
        let targets = fixture.recording_targets(Authority::State);
        let config = DodgeConfig::builder()
            .with_cooldown(Duration::from_millis(200))
            .build();
        let mut scheduler = ActionScheduler::new(&config);

        scheduler.on_simulation_tick(ms(0), dodge(), &targets);
        let report = scheduler.on_simulation_tick(ms(300), dodge(), &targets);

        assert_eq!(report.decision, Decision::Busy);
        assert_eq!(scheduler.cooldown_deadline(), Some(ms(200)), "Busy must not move the deadline");
        assert_eq!(fixture.sfx_count(), 1);
    }

    #[test]
    fn run_finishing_this_tick_allows_new_start() {
        let fixture = Fixture::new();
        let targets = fixture.recording_targets(Authority::State);
        let config = DodgeConfig::builder()
            .with_cooldown(Duration::from_millis(200))
            .build();
        let mut scheduler = ActionScheduler::new(&config);

        scheduler.on_simulation_tick(ms(0), dodge(), &targets);
        let report = scheduler.on_simulation_tick(ms(600), dodge(), &targets);

        assert_eq!(report.decision, Decision::Started);
        let phases: Vec<_> = report.transitions.iter().map(|t| t.phase).collect();
        assert_eq!(
            phases,
            vec![
                DodgePhase::Active,
                DodgePhase::Recovery,
                DodgePhase::Idle,
                DodgePhase::WindUp
            ]
        );
    }

    //=====================================================================
    // Properties
    //=====================================================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn starts_are_separated_by_more_than_cooldown(
                requests in proptest::collection::vec(any::<bool>(), 1..400),
                cooldown_ms in 50u64..1500,
            ) {
                let targets = DodgeTargets::default();
                let config = DodgeConfig::builder()
                    .with_cooldown(Duration::from_millis(cooldown_ms))
                    .build();
                let mut scheduler = ActionScheduler::new(&config);
                let mut last_start: Option<u64> = None;

                for (i, &requested) in requests.iter().enumerate() {
                    let t = i as u64 * 10;
                    let report = scheduler.on_simulation_tick(ms(t), requested.then_some(TickInput::DODGE), &targets);

                    match report.decision {
                        Decision::Started => {
                            prop_assert!(requested);
                            if let Some(prev) = last_start {
                                prop_assert!(t - prev > cooldown_ms, "Starts at {}ms and {}ms", prev, t);
                            }
                            last_start = Some(t);
                        }
                        Decision::NoIntent => {
                            prop_assert!(!requested);
                        }
                        Decision::OnCooldown { .. } | Decision::Busy => {
                            prop_assert!(requested);
                        }
                    }
                }
            }
        }
    }
}
