//=========================================================================
// Input Lock
//
// Suppresses player-driven movement for a window of simulation time.
// Movement systems query `is_suppressed(now)` before applying input.
//
//=========================================================================

use std::time::Duration;

use log::debug;

use crate::core::effects::InputLockTarget;
use crate::core::time::SimTime;

//=== InputLock ===========================================================

#[derive(Debug, Default)]
pub struct InputLock {
    locked_until: Option<SimTime>,
}

impl InputLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a suppression window covers `now`.
    pub fn is_suppressed(&self, now: SimTime) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    /// End of the current suppression window, if any was ever set.
    pub fn locked_until(&self) -> Option<SimTime> {
        self.locked_until
    }
}

impl InputLockTarget for InputLock {
    // Last call wins: the expiry is always `now + duration` of the most
    // recent request.
    fn suppress_input_for(&mut self, now: SimTime, duration: Duration) {
        let until = now + duration;
        debug!("Input suppressed until {}", until);
        self.locked_until = Some(until);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> SimTime {
        SimTime::from_millis(millis)
    }

    #[test]
    fn fresh_lock_is_open() {
        let lock = InputLock::new();
        assert!(!lock.is_suppressed(SimTime::ZERO));
        assert_eq!(lock.locked_until(), None);
    }

    #[test]
    fn suppression_window_is_half_open() {
        let mut lock = InputLock::new();
        lock.suppress_input_for(ms(0), Duration::from_millis(700));

        assert!(lock.is_suppressed(ms(0)));
        assert!(lock.is_suppressed(ms(690)));
        assert!(!lock.is_suppressed(ms(700)));
    }

    #[test]
    fn later_call_sets_expiry() {
        let mut lock = InputLock::new();
        lock.suppress_input_for(ms(0), Duration::from_millis(700));
        lock.suppress_input_for(ms(500), Duration::from_millis(700));

        assert_eq!(lock.locked_until(), Some(ms(1200)));
        assert!(lock.is_suppressed(ms(1000)));
    }

    #[test]
    fn overlapping_calls_never_end_before_later_expiry() {
        let mut lock = InputLock::new();
        lock.suppress_input_for(ms(100), Duration::from_millis(700));
        lock.suppress_input_for(ms(300), Duration::from_millis(200));

        let later_expiry = ms(500);
        assert!(lock.locked_until() >= Some(later_expiry));
        assert!(lock.is_suppressed(ms(499)));
    }
}
