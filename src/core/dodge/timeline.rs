//=========================================================================
// Phase Timeline
//=========================================================================
//
// Explicit state machine executing a dodge's phase sequence.
//
// Architecture:
//   start(now) ──> enter phase 0 ──> settle(now)
//   advance(now) ─────────────────> settle(now)
//
//   settle(): while the current phase's scheduled end <= now
//               → enter the next phase at its *scheduled* start
//             after the last phase → Idle
//
// Entry times are derived from the schedule, not from the tick that
// observed them, so a coarse tick rate delays effects by at most one
// tick but never shifts the phases that follow. Zero-length phases
// are entered and left within the same call.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::phase::{DodgePhase, PhaseSpec};
use super::targets::DodgeTargets;
use crate::core::time::SimTime;

//=== PhaseTransition =====================================================

/// A phase entered during a `start` or `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub phase: DodgePhase,

    /// Scheduled entry time of `phase`.
    pub at: SimTime,
}

//=== RunCursor ===========================================================

#[derive(Debug, Clone, Copy)]
struct RunCursor {
    index: usize,
    entered_at: SimTime,
    started_at: SimTime,
}

//=== PhaseTimeline =======================================================

#[derive(Debug)]
pub struct PhaseTimeline {
    phases: Vec<PhaseSpec>,
    cursor: Option<RunCursor>,
}

impl PhaseTimeline {
    pub fn new(phases: Vec<PhaseSpec>) -> Self {
        Self {
            phases,
            cursor: None,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Current phase, `Idle` when no run is in progress.
    pub fn phase(&self) -> DodgePhase {
        self.cursor
            .map_or(DodgePhase::Idle, |cursor| self.phases[cursor.index].phase)
    }

    pub fn is_running(&self) -> bool {
        self.cursor.is_some()
    }

    /// Start time of the run in progress.
    pub fn run_started_at(&self) -> Option<SimTime> {
        self.cursor.map(|cursor| cursor.started_at)
    }

    //--- Execution --------------------------------------------------------

    /// Begins a run at `now`, entering the first phase immediately.
    ///
    /// A start while a run is in progress is ignored; callers gate starts
    /// through cooldown and run state.
    pub fn start(&mut self, now: SimTime, targets: &DodgeTargets) -> Vec<PhaseTransition> {
        let mut transitions = Vec::new();

        if self.is_running() {
            warn!("Phase timeline already running, ignoring start at {}", now);
            return transitions;
        }
        if self.phases.is_empty() {
            return transitions;
        }

        transitions.reserve(self.phases.len() + 1);
        self.cursor = Some(RunCursor {
            index: 0,
            entered_at: now,
            started_at: now,
        });
        self.enter(0, now, targets, &mut transitions);
        self.settle(now, targets, &mut transitions);

        transitions
    }

    /// Resumes the run in progress up to `now`.
    pub fn advance(&mut self, now: SimTime, targets: &DodgeTargets) -> Vec<PhaseTransition> {
        let mut transitions = Vec::new();
        self.settle(now, targets, &mut transitions);
        transitions
    }

    //--- Internals --------------------------------------------------------

    fn settle(&mut self, now: SimTime, targets: &DodgeTargets, transitions: &mut Vec<PhaseTransition>) {
        while let Some(cursor) = self.cursor {
            let duration = self.phases[cursor.index].duration;
            if now.saturating_since(cursor.entered_at) < duration {
                break;
            }

            let next_at = cursor.entered_at + duration;
            let next = cursor.index + 1;

            if next == self.phases.len() {
                debug!("Dodge run from {} finished at {}", cursor.started_at, next_at);
                self.cursor = None;
                transitions.push(PhaseTransition {
                    phase: DodgePhase::Idle,
                    at: next_at,
                });
                break;
            }

            self.cursor = Some(RunCursor {
                index: next,
                entered_at: next_at,
                ..cursor
            });
            self.enter(next, next_at, targets, transitions);
        }
    }

    fn enter(
        &self,
        index: usize,
        at: SimTime,
        targets: &DodgeTargets,
        transitions: &mut Vec<PhaseTransition>,
    ) {
        let spec = &self.phases[index];
        debug!("Entering dodge phase {} at {}", spec.phase, at);

        for effect in &spec.effects {
            targets.apply(effect, at);
        }

        transitions.push(PhaseTransition {
            phase: spec.phase,
            at,
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
