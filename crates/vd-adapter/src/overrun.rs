//! Re-entrancy guard for the fixed-step `step()` call.
//!
//! The intended deployment runs `step()` from a periodic timer or scheduler
//! tick. If a step overruns its period the next tick must not re-enter the
//! model. The guard is an `Idle | Stepping` state machine updated with a
//! compare-and-swap; it serializes `step()` only, not signal or parameter
//! access.

use std::sync::atomic::{AtomicU8, Ordering};

const IDLE: u8 = 0;
const STEPPING: u8 = 1;

/// Step state of a model instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Idle,
    Stepping,
}

#[derive(Debug)]
pub struct OverrunGuard {
    state: AtomicU8,
}

impl Default for OverrunGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl OverrunGuard {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(IDLE),
        }
    }

    /// Mark a step in flight. Returns `None` if one already is.
    ///
    /// The flag clears when the returned token is dropped.
    pub fn try_enter(&self) -> Option<StepToken<'_>> {
        self.state
            .compare_exchange(IDLE, STEPPING, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| StepToken { guard: self })
    }

    pub fn state(&self) -> StepState {
        match self.state.load(Ordering::Acquire) {
            IDLE => StepState::Idle,
            _ => StepState::Stepping,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.state() == StepState::Stepping
    }
}

/// Proof that a step is in flight; clears the flag on drop.
#[derive(Debug)]
pub struct StepToken<'a> {
    guard: &'a OverrunGuard,
}

impl Drop for StepToken<'_> {
    fn drop(&mut self) {
        self.guard.state.store(IDLE, Ordering::Release);
    }
}
