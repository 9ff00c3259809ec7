//! Smooth scrolling toward anchor targets.
//!
//! [`SmoothScroll`] eases the scroll offset toward a target with exponential
//! decay per frame, snapping once within half a pixel so the animation
//! settles in finite frames. Anchor resolution maps a fragment id to its
//! scroll target: the bottom anchor goes to the document bottom, ordinary
//! sections to their top minus the fixed navbar height.

use crate::geometry::{ScrollMetrics, SectionMap};

/// Exponential ease-out scroll animator.
///
/// The animator holds only the target and easing parameters; the current
/// offset is fed in each tick, so the host (or coordinator) stays the owner
/// of scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScroll {
    target: f64,
    /// Fraction of the remaining distance covered per tick.
    speed: f64,
    /// Distance below which the offset snaps to the target.
    snap: f64,
}

impl SmoothScroll {
    /// Default per-tick easing factor.
    pub const DEFAULT_SPEED: f64 = 0.2;
    /// Default snap distance in pixels.
    pub const DEFAULT_SNAP: f64 = 0.5;

    /// Animate toward `target` with default easing.
    #[must_use]
    pub fn to(target: f64) -> Self {
        Self::with_speed(target, Self::DEFAULT_SPEED)
    }

    /// Animate toward `target` covering `speed` of the remaining distance
    /// per tick. The factor is clamped to a sane range.
    #[must_use]
    pub fn with_speed(target: f64, speed: f64) -> Self {
        Self {
            target: target.max(0.0),
            speed: speed.clamp(0.05, 0.95),
            snap: Self::DEFAULT_SNAP,
        }
    }

    /// Target offset.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advance one frame from `current`, returning the new offset.
    #[must_use]
    pub fn tick(&self, current: f64) -> f64 {
        let next = current + (self.target - current) * self.speed;
        if (self.target - next).abs() < self.snap {
            self.target
        } else {
            next
        }
    }

    /// True when `current` has reached the target.
    #[must_use]
    pub fn is_settled(&self, current: f64) -> bool {
        current == self.target
    }
}

/// Resolve an anchor fragment to a scroll target.
///
/// The bottom anchor resolves to the maximum scroll offset. Any other known
/// section resolves to its top minus `navbar_height`, clamped at zero so the
/// fixed navbar never covers the section heading. Unknown anchors resolve to
/// `None` and the activation degrades to a no-op.
#[must_use]
pub fn resolve_anchor(
    target: &str,
    sections: &SectionMap,
    metrics: &ScrollMetrics,
    navbar_height: f64,
    bottom_anchor: &str,
) -> Option<f64> {
    if target == bottom_anchor {
        return Some(metrics.max_scroll());
    }
    sections
        .get(target)
        .map(|section| (section.top() - navbar_height).max(0.0))
}
