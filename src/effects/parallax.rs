//! Parallax translation of the hero layer.

use crate::geometry::ScrollMetrics;
use crate::page::Page;

/// Scroll-proportional vertical translation.
///
/// The reference page moves the hero content at half the scroll speed in the
/// opposite direction, so the hero appears to recede as the user scrolls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    rate: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Self { rate: -0.5 }
    }
}

impl Parallax {
    /// Create a parallax effect with the given rate.
    ///
    /// Negative rates move against the scroll direction.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Translation rate per scrolled pixel.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Translation offset for the given scroll position.
    #[must_use]
    pub fn offset(&self, scroll_y: f64) -> f64 {
        scroll_y * self.rate
    }

    /// Write the translation to the node's inline style.
    ///
    /// A missing node is a no-op; returns whether the style was written.
    pub fn apply(&self, page: &mut Page, id: &str, metrics: &ScrollMetrics) -> bool {
        let offset = self.offset(metrics.scroll_y());
        page.update_style(id, |style| style.translate_y = Some(offset))
    }
}
