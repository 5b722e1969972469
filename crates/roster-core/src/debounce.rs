//! Debounced search input.
//!
//! Two states: `Idle` (no pending commit) and `Pending` (a commit is
//! scheduled). Every keystroke supersedes the previous deadline, so a
//! burst of typing collapses into a single commit of the final value
//! once the quiet interval elapses. Time is injected as `Instant`s so
//! callers (and tests) own the clock.

use std::time::{Duration, Instant};

enum DebounceState {
    Idle,
    Pending { value: String, deadline: Instant },
}

pub struct Debouncer {
    interval: Duration,
    state: DebounceState,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: DebounceState::Idle,
        }
    }

    /// Record a keystroke, superseding any pending commit.
    pub fn input(&mut self, value: impl Into<String>, now: Instant) {
        self.state = DebounceState::Pending {
            value: value.into(),
            deadline: now + self.interval,
        };
    }

    /// Commit the latest value if the quiet interval has elapsed.
    ///
    /// Returns `None` while idle or while a commit is still pending.
    /// After a commit the machine is idle again, so a given keystroke
    /// burst commits at most once.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = matches!(&self.state, DebounceState::Pending { deadline, .. } if now >= *deadline);
        if !due {
            return None;
        }
        match std::mem::replace(&mut self.state, DebounceState::Idle) {
            DebounceState::Pending { value, .. } => Some(value),
            DebounceState::Idle => None,
        }
    }

    /// Discard any pending commit (component teardown).
    pub fn cancel(&mut self) {
        self.state = DebounceState::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
