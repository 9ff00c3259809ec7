//! Class flags and inline style properties applied to page nodes.
//!
//! Visual meaning lives in the host's style sheet; the engine only toggles
//! membership. [`ClassSet`] is the bitflag form of the class list, and
//! [`InlineStyle`] carries the sparse per-node style properties the effects
//! write (transforms, delays, fill widths).

use bitflags::bitflags;
use std::time::Duration;

bitflags! {
    /// Class list of a page node.
    ///
    /// Flags can be combined with bitwise OR. Each flag corresponds to a
    /// style-sheet class name (see [`ClassSet::css_names`]).
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct ClassSet: u16 {
        /// Nav link marked as corresponding to the section in view.
        const ACTIVE  = 0x01;
        /// Navbar past its scroll threshold (background swap).
        const SCROLLED = 0x02;
        /// Reveal latch: element has entered the viewport once.
        const VISIBLE = 0x04;
        /// Element registered for reveal-on-scroll animation.
        const FADE_IN = 0x08;
        /// Mobile menu (and its hamburger) expanded.
        const OPEN    = 0x10;
        /// Body after the load event.
        const LOADED  = 0x20;
        /// Form group containing a focused or filled field.
        const FOCUSED = 0x40;
        /// Lazy asset placeholder not yet swapped in.
        const HIDDEN  = 0x80;
    }
}

impl ClassSet {
    /// Style-sheet class names for the set flags, in flag order.
    #[must_use]
    pub fn css_names(self) -> Vec<&'static str> {
        const NAMES: [(ClassSet, &str); 8] = [
            (ClassSet::ACTIVE, "active"),
            (ClassSet::SCROLLED, "scrolled"),
            (ClassSet::VISIBLE, "visible"),
            (ClassSet::FADE_IN, "fade-in"),
            (ClassSet::OPEN, "open"),
            (ClassSet::LOADED, "loaded"),
            (ClassSet::FOCUSED, "focused"),
            (ClassSet::HIDDEN, "lazy"),
        ];
        NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }

    /// Set or clear a flag, returning whether membership changed.
    pub fn apply(&mut self, flag: ClassSet, on: bool) -> bool {
        let before = *self;
        self.set(flag, on);
        *self != before
    }
}

/// Sparse inline style properties written by the effects.
///
/// `None` means "not set"; the host leaves the style-sheet value in place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InlineStyle {
    /// Vertical translation in pixels (parallax).
    pub translate_y: Option<f64>,
    /// Uniform scale factor (hover effects).
    pub scale: Option<f32>,
    /// Opacity override.
    pub opacity: Option<f32>,
    /// Transition delay (reveal stagger).
    pub transition_delay: Option<Duration>,
    /// Animation delay (grid / floating-icon stagger).
    pub animation_delay: Option<Duration>,
    /// Animation duration (floating icons).
    pub animation_duration: Option<Duration>,
    /// Fill width as a percentage (progress bars).
    pub fill_percent: Option<f32>,
}

impl InlineStyle {
    /// Style with nothing set.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// True when no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Return the style with a vertical translation.
    #[must_use]
    pub fn with_translate_y(mut self, px: f64) -> Self {
        self.translate_y = Some(px);
        self
    }

    /// Return the style with a scale factor.
    #[must_use]
    pub fn with_scale(mut self, factor: f32) -> Self {
        self.scale = Some(factor);
        self
    }

    /// Return the style with a transition delay.
    #[must_use]
    pub fn with_transition_delay(mut self, delay: Duration) -> Self {
        self.transition_delay = Some(delay);
        self
    }

    /// Return the style with an animation delay.
    #[must_use]
    pub fn with_animation_delay(mut self, delay: Duration) -> Self {
        self.animation_delay = Some(delay);
        self
    }
}
