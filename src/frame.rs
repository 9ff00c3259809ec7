//! Frame gate: per-frame coalescing of scroll notifications.
//!
//! Raw scroll events can fire many times per rendering frame. The gate is an
//! explicit two-state machine `{Idle, Scheduled}`: arming it while idle
//! requests one frame callback; arming it again before that callback runs is
//! absorbed. The transition back to idle happens exactly when the frame
//! callback executes, so within one frame at most one recomputation occurs
//! regardless of how many raw events fired.

/// Gate state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    /// No recomputation pending.
    #[default]
    Idle,
    /// A recomputation is scheduled for the next frame.
    Scheduled,
}

/// The single throttling primitive of the engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    state: GateState,
}

impl FrameGate {
    /// Create an idle gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    /// True when a recomputation is already scheduled.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.state == GateState::Scheduled
    }

    /// Arm the gate.
    ///
    /// Returns `true` on the Idle→Scheduled transition, meaning the caller
    /// must request a frame callback. Returns `false` when already scheduled
    /// (the raw event is coalesced into the pending frame).
    pub fn arm(&mut self) -> bool {
        match self.state {
            GateState::Idle => {
                self.state = GateState::Scheduled;
                true
            }
            GateState::Scheduled => false,
        }
    }

    /// Consume the scheduled state at frame-callback time.
    ///
    /// Returns `true` when a recomputation should run now. The
    /// Scheduled→Idle transition happens here and only here.
    pub fn take(&mut self) -> bool {
        match self.state {
            GateState::Scheduled => {
                self.state = GateState::Idle;
                true
            }
            GateState::Idle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_transitions_once() {
        let mut gate = FrameGate::new();
        assert_eq!(gate.state(), GateState::Idle);
        assert!(gate.arm());
        assert_eq!(gate.state(), GateState::Scheduled);
        // Further events within the same frame coalesce.
        assert!(!gate.arm());
        assert!(!gate.arm());
    }

    #[test]
    fn test_take_clears_exactly_at_frame() {
        let mut gate = FrameGate::new();
        gate.arm();
        assert!(gate.take());
        assert_eq!(gate.state(), GateState::Idle);
        // Nothing pending: the frame runs no recomputation.
        assert!(!gate.take());
    }

    #[test]
    fn test_n_events_one_recompute_per_frame() {
        let mut gate = FrameGate::new();
        let mut recomputes = 0;
        for _ in 0..10 {
            gate.arm();
        }
        if gate.take() {
            recomputes += 1;
        }
        assert_eq!(recomputes, 1);

        // Next frame with no events runs nothing.
        assert!(!gate.take());
    }
}
