//=========================================================================
// Simulation Time
//=========================================================================
//
// Deterministic time base shared by every tick-driven system.
//
// Architecture:
//   SimClock ──advance()──> SimTime (tick * step)
//                              │
//   PhaseTimeline / ActionScheduler compare SimTime against Durations
//
// SimTime wraps an integer `Duration` so phase arithmetic never drifts,
// regardless of how many ticks have elapsed.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::ops::Add;
use std::time::Duration;

//=== SimTime =============================================================

/// Absolute simulation time, measured from the first tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SimTime(Duration);

impl SimTime {
    /// The instant of the first simulation tick.
    pub const ZERO: SimTime = SimTime(Duration::ZERO);

    #[inline]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0.as_secs_f64()
    }

    /// Time elapsed since `earlier`, or zero if `earlier` lies in the future.
    #[inline]
    pub fn saturating_since(self, earlier: SimTime) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<Duration> for SimTime {
    type Output = SimTime;

    fn add(self, rhs: Duration) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.as_secs_f64())
    }
}

//=== SimClock ============================================================

/// Fixed-step simulation clock.
///
/// Tick `n` is evaluated at `n * step`. The clock never reads wall time;
/// the logic thread only uses wall time for pacing.
#[derive(Debug, Clone)]
pub struct SimClock {
    now: SimTime,
    tick: u64,
    step: Duration,
}

impl SimClock {
    /// Creates a clock advancing by `step` each tick.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn new(step: Duration) -> Self {
        assert!(!step.is_zero(), "Tick step must be positive");
        Self {
            now: SimTime::ZERO,
            tick: 0,
            step,
        }
    }

    /// Creates a clock from a target tick rate.
    ///
    /// The step is rounded to the nearest nanosecond.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0` or is not finite.
    pub fn from_tps(tps: f64) -> Self {
        assert!(tps.is_finite() && tps > 0.0, "TPS must be positive, got {}", tps);
        let nanos = (1_000_000_000.0 / tps).round() as u64;
        Self::new(Duration::from_nanos(nanos.max(1)))
    }

    /// Simulation time of the current tick.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Index of the current tick.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Moves to the next tick and returns its simulation time.
    pub fn advance(&mut self) -> SimTime {
        self.tick += 1;
        self.now = self.now + self.step;
        self.now
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
