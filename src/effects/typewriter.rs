//! Typing-effect text reveal.
//!
//! Reveals a fixed text one grapheme cluster per step after an initial
//! delay. Stepping by cluster, not by `char`, keeps combining marks, emoji
//! ZWJ sequences, and regional-indicator pairs intact mid-animation.

use std::time::{Duration, Instant};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Progressive text reveal driven by host-supplied time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    /// Byte offset past each cluster, so `cluster_ends[i]` ends cluster `i`.
    cluster_ends: Vec<usize>,
    start_delay: Duration,
    interval: Duration,
    started_at: Option<Instant>,
    visible: usize,
}

impl Typewriter {
    /// Default per-step interval for the hero heading.
    pub const HERO_INTERVAL: Duration = Duration::from_millis(150);
    /// Default per-step interval for generic text.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);
    /// Default delay before the first cluster appears.
    pub const DEFAULT_START_DELAY: Duration = Duration::from_secs(1);

    /// Create a typewriter for `text` with the given per-step interval and
    /// the default start delay.
    #[must_use]
    pub fn new(text: impl Into<String>, interval: Duration) -> Self {
        let text = text.into();
        let cluster_ends = text
            .grapheme_indices(true)
            .map(|(i, g)| i + g.len())
            .collect();
        Self {
            text,
            cluster_ends,
            start_delay: Self::DEFAULT_START_DELAY,
            interval,
            started_at: None,
            visible: 0,
        }
    }

    /// Replace the start delay.
    #[must_use]
    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Begin the animation at `now`. Restarting resets to the empty prefix.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.visible = 0;
    }

    /// True once `start` has been called.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// True when every cluster is visible.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.visible == self.cluster_ends.len()
    }

    /// Total cluster count of the full text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cluster_ends.len()
    }

    /// True when the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cluster_ends.is_empty()
    }

    /// Advance to `now` and return the currently visible prefix.
    ///
    /// The first cluster appears when the start delay elapses; each interval
    /// after that reveals one more. The visible count never decreases, even
    /// if the host hands in a non-monotonic clock.
    pub fn tick(&mut self, now: Instant) -> &str {
        if let Some(started) = self.started_at {
            if !self.is_done() {
                if let Some(since_delay) = now
                    .checked_duration_since(started)
                    .and_then(|e| e.checked_sub(self.start_delay))
                {
                    let steps = if self.interval.is_zero() {
                        self.cluster_ends.len()
                    } else {
                        usize::try_from(since_delay.as_nanos() / self.interval.as_nanos())
                            .unwrap_or(usize::MAX)
                            .saturating_add(1)
                    };
                    self.visible = self.visible.max(steps.min(self.cluster_ends.len()));
                }
            }
        }
        self.visible_text()
    }

    /// The currently visible prefix without advancing time.
    #[must_use]
    pub fn visible_text(&self) -> &str {
        match self.visible.checked_sub(1) {
            Some(last) => &self.text[..self.cluster_ends[last]],
            None => "",
        }
    }

    /// Display-column width of the visible prefix.
    #[must_use]
    pub fn typed_width(&self) -> usize {
        self.visible_text().width()
    }
}
