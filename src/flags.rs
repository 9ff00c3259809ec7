//! Pure derivation of per-tick UI flags from scroll metrics.
//!
//! [`UiFlags`] is a pure function of [`ScrollMetrics`] and the static
//! [`SectionMap`] geometry at the time of computation, with no hidden
//! accumulation across ticks. The effectful application of a computed value
//! lives in the coordinator; everything here is testable without a page.
//!
//! # Semantics
//!
//! - The active section is the *last* section (document order) whose top,
//!   minus a lookahead margin, is at or above the scroll offset. Within a
//!   margin of the document bottom, the configured bottom anchor wins
//!   unconditionally instead. A short final section therefore cannot
//!   lose to the section above it once the user has scrolled past the true
//!   end of content.
//! - Chrome thresholds are strict: at exactly the threshold the flag is off.

use crate::error::{Error, Result};
use crate::geometry::{ScrollMetrics, SectionMap};

/// Threshold configuration for flag derivation.
///
/// Defaults reproduce the reference page: navbar swap past 50 px, scroll-top
/// control past 500 px, 200 px section lookahead, 100 px bottom margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Scroll offset beyond which the navbar is "scrolled".
    pub navbar: f64,
    /// Scroll offset beyond which the scroll-to-top control shows.
    pub scroll_top: f64,
    /// Lookahead subtracted from section tops during the scan.
    pub lookahead: f64,
    /// Distance from the document bottom where the bottom anchor wins.
    pub bottom_margin: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            navbar: 50.0,
            scroll_top: 500.0,
            lookahead: 200.0,
            bottom_margin: 100.0,
        }
    }
}

impl Thresholds {
    /// Validate that every value is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("thresholds.navbar", self.navbar),
            ("thresholds.scroll_top", self.scroll_top),
            ("thresholds.lookahead", self.lookahead),
            ("thresholds.bottom_margin", self.bottom_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidOption { name, value });
            }
        }
        Ok(())
    }
}

/// Derived per-tick UI state. Recomputed every tick, never stored across
/// ticks by the computation itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiFlags {
    /// Navbar past its scroll threshold.
    pub navbar_scrolled: bool,
    /// Scroll-to-top control visible.
    pub scroll_top_visible: bool,
    /// Section id the nav should highlight, if any.
    pub active_section: Option<String>,
}

impl UiFlags {
    /// Compute all three facts from the current metrics.
    #[must_use]
    pub fn compute(
        metrics: &ScrollMetrics,
        sections: &SectionMap,
        thresholds: Thresholds,
        bottom_anchor: &str,
    ) -> Self {
        Self {
            navbar_scrolled: navbar_scrolled(metrics.scroll_y(), thresholds.navbar),
            scroll_top_visible: scroll_top_visible(metrics.scroll_y(), thresholds.scroll_top),
            active_section: active_section(metrics, sections, thresholds, bottom_anchor)
                .map(str::to_string),
        }
    }
}

/// True iff the offset is strictly past the navbar threshold.
#[must_use]
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// True iff the offset is strictly past the scroll-to-top threshold.
#[must_use]
pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Section id the nav should highlight at the current offset.
///
/// Within `thresholds.bottom_margin` of the document bottom the bottom
/// anchor is returned unconditionally; otherwise the last section whose
/// `top - lookahead <= scroll_y` wins. `None` when no section qualifies.
#[must_use]
pub fn active_section<'a>(
    metrics: &ScrollMetrics,
    sections: &'a SectionMap,
    thresholds: Thresholds,
    bottom_anchor: &'a str,
) -> Option<&'a str> {
    if metrics.near_bottom(thresholds.bottom_margin) {
        return Some(bottom_anchor);
    }
    sections
        .last_reached(metrics.scroll_y(), thresholds.lookahead)
        .map(super::geometry::Section::id)
}
