//! Reusable rate-limiting wrappers: debounce and throttle.
//!
//! Both wrap a callback and preserve its payload signature. Time is always
//! supplied by the caller, never read from a global clock, so behavior is
//! deterministic under test and the wrappers work in any host loop.
//!
//! [`Debounce`] is trailing-edge: a burst of calls fires the callback once,
//! after `wait` of quiet, with the burst's final payload. [`Throttle`] is
//! leading-edge: the first call in a window fires immediately and later
//! calls inside the window are dropped.

use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Trailing-edge debounce wrapper.
pub struct Debounce<T, F: FnMut(T)> {
    callback: F,
    wait: Duration,
    pending: Option<(Instant, T)>,
}

impl<T, F: FnMut(T)> Debounce<T, F> {
    /// Wrap `callback`, deferring each invocation until `wait` has elapsed
    /// with no further call.
    #[must_use]
    pub fn new(wait: Duration, callback: F) -> Self {
        Self {
            callback,
            wait,
            pending: None,
        }
    }

    /// Record a call, restarting the quiet timer and replacing any pending
    /// payload with this one.
    pub fn call(&mut self, now: Instant, payload: T) {
        self.pending = Some((now + self.wait, payload));
    }

    /// Fire the callback if the quiet timer has elapsed.
    ///
    /// Returns whether the callback ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = matches!(&self.pending, Some((deadline, _)) if *deadline <= now);
        if due {
            if let Some((_, payload)) = self.pending.take() {
                (self.callback)(payload);
            }
        }
        due
    }

    /// True when a call is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending call without firing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Leading-edge throttle wrapper.
pub struct Throttle<T, F: FnMut(T)> {
    callback: F,
    limit: Duration,
    open_at: Option<Instant>,
    _marker: PhantomData<fn(T)>,
}

impl<T, F: FnMut(T)> Throttle<T, F> {
    /// Wrap `callback`, allowing at most one invocation per `limit` window.
    #[must_use]
    pub fn new(limit: Duration, callback: F) -> Self {
        Self {
            callback,
            limit,
            open_at: None,
            _marker: PhantomData,
        }
    }

    /// Invoke the callback unless inside the cooldown window.
    ///
    /// Suppressed calls are dropped, not queued. Returns whether the
    /// callback ran.
    pub fn call(&mut self, now: Instant, payload: T) -> bool {
        if self.open_at.is_some_and(|open| now < open) {
            return false;
        }
        (self.callback)(payload);
        self.open_at = Some(now + self.limit);
        true
    }

    /// True when a call right now would be suppressed.
    #[must_use]
    pub fn in_cooldown(&self, now: Instant) -> bool {
        self.open_at.is_some_and(|open| now < open)
    }
}
