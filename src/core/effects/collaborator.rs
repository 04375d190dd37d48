//=========================================================================
// Collaborator Handle
//=========================================================================
//
// Weak, optionally-bound reference to an external system.
//
// Pattern: bind(Weak) → with(|target| ...) → Some(result) | None
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::sync::{Mutex, Weak};

//=== Collaborator ========================================================

/// Injected reference to a collaborator the component does not own.
///
/// Resolution happens on every call, so a target destroyed mid-run turns
/// subsequent effects into no-ops instead of errors.
pub struct Collaborator<T: ?Sized> {
    target: Option<Weak<Mutex<T>>>,
}

impl<T: ?Sized> Collaborator<T> {
    /// A handle with nothing bound yet.
    pub const fn unbound() -> Self {
        Self { target: None }
    }

    /// Binds the handle to `target`.
    pub fn bind(target: Weak<Mutex<T>>) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Runs `f` against the target if it is still alive.
    ///
    /// Returns `None` when the target is unbound, dropped, or poisoned.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let target = self.target.as_ref()?.upgrade()?;
        let mut guard = target.lock().ok()?;
        Some(f(&mut *guard))
    }

    /// Returns `true` if the target can currently be reached.
    pub fn is_available(&self) -> bool {
        self.target
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }
}

impl<T: ?Sized> Default for Collaborator<T> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<T: ?Sized> fmt::Debug for Collaborator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.target {
            None => "unbound",
            Some(_) if self.is_available() => "bound",
            Some(_) => "dropped",
        };
        f.debug_tuple("Collaborator").field(&state).finish()
    }
}

//=========================================================================
// Tests
//=========================================================================
