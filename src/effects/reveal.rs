//! Reveal-on-scroll: intersection-driven fade-in with stagger delays.
//!
//! Content blocks are registered once; each gets the `FADE_IN` class and a
//! stagger transition delay. On every update with fresh metrics, any
//! observed element whose intersection ratio with the (bottom-shrunk)
//! viewport reaches the threshold latches `VISIBLE` permanently and is
//! unobserved. Lazy assets ride the same observer: their first intersection
//! swaps the pending source in instead of fading.

use crate::class::ClassSet;
use crate::geometry::ScrollMetrics;
use crate::page::{NodeRole, Page};
use std::time::Duration;

/// Reveal configuration.
///
/// Defaults reproduce the reference page: 5% visibility threshold, 20 px
/// bottom root margin, 50 ms stagger step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must intersect the viewport.
    pub threshold: f64,
    /// Pixels shaved off the viewport bottom before intersecting.
    pub root_margin_bottom: f64,
    /// Transition delay added per registered element.
    pub stagger_step: Duration,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.05,
            root_margin_bottom: 20.0,
            stagger_step: Duration::from_millis(50),
        }
    }
}

/// Fraction of an element intersecting the viewport root.
///
/// The root spans from the scroll offset to the viewport bottom minus
/// `root_margin_bottom`. Zero-height elements count as fully intersecting
/// when their top lies inside the root.
#[must_use]
pub fn intersection_ratio(
    top: f64,
    height: f64,
    metrics: &ScrollMetrics,
    root_margin_bottom: f64,
) -> f64 {
    let root_top = metrics.scroll_y();
    let root_bottom = root_top + metrics.viewport_height() - root_margin_bottom;
    let overlap = (top + height).min(root_bottom) - top.max(root_top);
    if height <= 0.0 {
        return if overlap >= 0.0 { 1.0 } else { 0.0 };
    }
    (overlap / height).clamp(0.0, 1.0)
}

/// One-way reveal latch over a set of observed page nodes.
#[derive(Clone, Debug, Default)]
pub struct RevealObserver {
    options: RevealOptions,
    observed: Vec<String>,
}

impl RevealObserver {
    /// Create an observer with the given options.
    #[must_use]
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            observed: Vec::new(),
        }
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> RevealOptions {
        self.options
    }

    /// Number of elements still awaiting their first intersection.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    /// Register nodes for reveal, in the order given.
    ///
    /// Non-asset nodes get `FADE_IN` and a `index * stagger_step` transition
    /// delay. Asset nodes are observed as-is (the latch swaps their source
    /// instead of fading them). Ids without a node are skipped.
    pub fn observe<I, S>(&mut self, page: &mut Page, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stagger_index = 0u32;
        for id in ids {
            let id = id.as_ref();
            let Some(node) = page.get(id) else { continue };
            if node.role() != NodeRole::Asset {
                let delay = self.options.stagger_step * stagger_index;
                page.add_class(id, ClassSet::FADE_IN);
                page.update_style(id, |style| style.transition_delay = Some(delay));
                stagger_index += 1;
            }
            self.observed.push(id.to_string());
        }
    }

    /// Latch every observed element now intersecting the viewport.
    ///
    /// Latched elements gain `VISIBLE` (assets swap their source) and are
    /// unobserved; the latch is one-way by construction. Returns how many
    /// elements latched this update.
    pub fn update(&mut self, page: &mut Page, metrics: &ScrollMetrics) -> usize {
        let options = self.options;
        let mut latched = 0;
        self.observed.retain(|id| {
            let Some(node) = page.get(id) else {
                // Node disappeared from the page: stop observing it.
                return false;
            };
            let ratio = intersection_ratio(
                node.top(),
                node.height(),
                metrics,
                options.root_margin_bottom,
            );
            if ratio < options.threshold {
                return true;
            }
            if node.role() == NodeRole::Asset {
                page.resolve_source(id);
            } else {
                page.add_class(id, ClassSet::VISIBLE);
            }
            latched += 1;
            false
        });
        latched
    }
}
