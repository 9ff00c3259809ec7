//! Scroll state coordinator.
//!
//! [`Coordinator`] is the engine's entry point. Hosts feed it
//! [`PageEvent`]s and a per-frame tick; it derives [`UiFlags`] from the
//! current scroll metrics and section geometry, applies them to the page as
//! idempotent class toggles, and drives the time-based effects (smooth
//! scroll, typewriter) and scroll-based effects (reveal, parallax).
//!
//! # Architecture
//!
//! Raw scroll events never recompute synchronously. They update the cached
//! metrics and arm the [`FrameGate`]; the gate guarantees at most one
//! recomputation per frame no matter how many events fired. The pure
//! decision step ([`UiFlags::compute`]) is separated from the apply step,
//! which diffs the computed flags against what was last applied and emits
//! diagnostics events on transitions.
//!
//! # Examples
//!
//! ```
//! use pagefx::{
//!     Coordinator, CoordinatorOptions, Node, NodeRole, Page, PageEvent, ScrollMetrics,
//!     Section, SectionMap,
//! };
//! use std::time::Instant;
//!
//! let sections = SectionMap::new(vec![
//!     Section::new("home", 0.0, 800.0),
//!     Section::new("about", 800.0, 1200.0),
//!     Section::new("contact", 2000.0, 500.0),
//! ])?;
//! let metrics = ScrollMetrics::new(0.0, 800.0, 2500.0)?;
//! let mut coordinator = Coordinator::new(sections, metrics, CoordinatorOptions::default())?;
//!
//! let mut page = Page::new();
//! page.insert(Node::new("navbar", NodeRole::Navbar));
//! page.insert(Node::new("nav-about", NodeRole::NavLink).with_target("about"));
//!
//! let now = Instant::now();
//! let needs_frame = coordinator.handle_event(&mut page, &PageEvent::Scroll { y: 750.0 }, now);
//! assert!(needs_frame);
//! let report = coordinator.frame(&mut page, now);
//! assert!(report.recomputed);
//! assert_eq!(coordinator.applied_flags().unwrap().active_section.as_deref(), Some("about"));
//! # Ok::<(), pagefx::Error>(())
//! ```

use crate::chrome::{self, MobileMenu};
use crate::class::ClassSet;
use crate::effects::{Parallax, RevealObserver, RevealOptions, Typewriter};
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_event, emit_flag, emit_log};
use crate::flags::{Thresholds, UiFlags};
use crate::frame::FrameGate;
use crate::geometry::{ScrollMetrics, SectionMap};
use crate::input::PageEvent;
use crate::motion::{SmoothScroll, resolve_anchor};
use crate::page::{NodeRole, Page};
use std::time::Instant;

/// Node ids the coordinator touches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeIds {
    /// Fixed navigation bar.
    pub navbar: String,
    /// Document body.
    pub body: String,
    /// Hamburger control.
    pub hamburger: String,
    /// Mobile navigation menu.
    pub nav_menu: String,
    /// Scroll-to-top control.
    pub scroll_top: String,
    /// Hero layer moved by parallax.
    pub hero_content: String,
    /// Hero heading revealed by the typewriter.
    pub hero_name: String,
}

impl Default for NodeIds {
    fn default() -> Self {
        Self {
            navbar: "navbar".to_string(),
            body: "body".to_string(),
            hamburger: "hamburger".to_string(),
            nav_menu: "nav-menu".to_string(),
            scroll_top: "scroll-to-top".to_string(),
            hero_content: "hero-content".to_string(),
            hero_name: "hero-name".to_string(),
        }
    }
}

/// Coordinator configuration.
///
/// Defaults reproduce the reference page: 50/500 px chrome thresholds,
/// 200 px lookahead, 100 px bottom margin, `"contact"` bottom anchor, 70 px
/// navbar offset for anchor scrolling, -0.5 parallax rate.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinatorOptions {
    /// Flag derivation thresholds.
    pub thresholds: Thresholds,
    /// Section highlighted unconditionally near the document bottom, and
    /// the anchor that scrolls to the document bottom.
    pub bottom_anchor: String,
    /// Fixed navbar height subtracted from anchor scroll targets.
    pub navbar_height: f64,
    /// Parallax rate for the hero layer.
    pub parallax_rate: f64,
    /// Smooth-scroll easing factor (fraction of remaining distance per
    /// frame).
    pub scroll_speed: f64,
    /// Reveal-on-scroll configuration.
    pub reveal: RevealOptions,
    /// Ids of the chrome nodes.
    pub ids: NodeIds,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            bottom_anchor: "contact".to_string(),
            navbar_height: 70.0,
            parallax_rate: -0.5,
            scroll_speed: SmoothScroll::DEFAULT_SPEED,
            reveal: RevealOptions::default(),
            ids: NodeIds::default(),
        }
    }
}

impl CoordinatorOptions {
    /// Validate option values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;
        if !self.navbar_height.is_finite() || self.navbar_height < 0.0 {
            return Err(Error::InvalidOption {
                name: "navbar_height",
                value: self.navbar_height,
            });
        }
        if !self.parallax_rate.is_finite() {
            return Err(Error::InvalidOption {
                name: "parallax_rate",
                value: self.parallax_rate,
            });
        }
        if !self.scroll_speed.is_finite() || self.scroll_speed <= 0.0 || self.scroll_speed > 1.0 {
            return Err(Error::InvalidOption {
                name: "scroll_speed",
                value: self.scroll_speed,
            });
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(Error::InvalidOption {
                name: "reveal.threshold",
                value: self.reveal.threshold,
            });
        }
        if !self.reveal.root_margin_bottom.is_finite() {
            return Err(Error::InvalidOption {
                name: "reveal.root_margin_bottom",
                value: self.reveal.root_margin_bottom,
            });
        }
        Ok(())
    }
}

/// Per-session coordinator statistics.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickStats {
    /// Raw scroll events received.
    pub raw_scroll_events: u64,
    /// Scroll events absorbed by an already-armed gate.
    pub coalesced_events: u64,
    /// Frame ticks run.
    pub frames: u64,
    /// Flag recomputations performed.
    pub recomputes: u64,
    /// Recomputations whose result differed from the applied state.
    pub flag_changes: u64,
}

/// Outcome of one frame tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// A flag recomputation ran this frame.
    pub recomputed: bool,
    /// The recomputation changed the applied state.
    pub flags_changed: bool,
    /// New scroll offset the host should move the real viewport to.
    pub scroll_to: Option<f64>,
    /// Elements newly revealed this frame.
    pub newly_visible: usize,
    /// Another frame should be scheduled (an animation is still running).
    pub more: bool,
}

/// The scroll state coordinator.
pub struct Coordinator {
    options: CoordinatorOptions,
    sections: SectionMap,
    metrics: ScrollMetrics,
    gate: FrameGate,
    applied: Option<UiFlags>,
    parallax: Parallax,
    reveal: RevealObserver,
    typewriter: Option<Typewriter>,
    motion: Option<SmoothScroll>,
    menu: MobileMenu,
    stats: TickStats,
}

impl Coordinator {
    /// Create a coordinator over the given section geometry and initial
    /// metrics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] when option validation fails.
    pub fn new(
        sections: SectionMap,
        metrics: ScrollMetrics,
        options: CoordinatorOptions,
    ) -> Result<Self> {
        options.validate()?;
        let menu = MobileMenu::new(options.ids.hamburger.clone(), options.ids.nav_menu.clone());
        let parallax = Parallax::new(options.parallax_rate);
        let reveal = RevealObserver::new(options.reveal);
        Ok(Self {
            options,
            sections,
            metrics,
            gate: FrameGate::new(),
            applied: None,
            parallax,
            reveal,
            typewriter: None,
            motion: None,
            menu,
            stats: TickStats::default(),
        })
    }

    /// Current scroll metrics.
    #[must_use]
    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    /// Section geometry.
    #[must_use]
    pub fn sections(&self) -> &SectionMap {
        &self.sections
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &CoordinatorOptions {
        &self.options
    }

    /// Session statistics.
    #[must_use]
    pub fn stats(&self) -> TickStats {
        self.stats
    }

    /// Flags as last applied to the page, if any recomputation ran yet.
    #[must_use]
    pub fn applied_flags(&self) -> Option<&UiFlags> {
        self.applied.as_ref()
    }

    /// Mobile menu state machine.
    #[must_use]
    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    /// True while a smooth scroll or typewriter animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
            || self
                .typewriter
                .as_ref()
                .is_some_and(|tw| tw.is_started() && !tw.is_done())
    }

    /// Replace the section geometry after a relayout.
    pub fn set_sections(&mut self, sections: SectionMap) {
        self.sections = sections;
    }

    /// Register content blocks (and lazy assets) for reveal-on-scroll.
    pub fn observe_reveals<I, S>(&mut self, page: &mut Page, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reveal.observe(page, ids);
    }

    /// Install the hero typewriter. It starts on the next `Ready` event.
    pub fn set_typewriter(&mut self, typewriter: Typewriter) {
        self.typewriter = Some(typewriter);
    }

    /// Ingest a page event.
    ///
    /// Returns `true` when the host must schedule a frame tick (the gate
    /// armed, or an animation started).
    pub fn handle_event(&mut self, page: &mut Page, event: &PageEvent, now: Instant) -> bool {
        match event {
            PageEvent::Scroll { y } => {
                self.metrics.set_scroll(*y);
                self.stats.raw_scroll_events += 1;
                if self.gate.arm() {
                    true
                } else {
                    self.stats.coalesced_events += 1;
                    false
                }
            }
            PageEvent::Resize {
                viewport_height,
                document_height,
            } => {
                self.metrics.set_heights(*viewport_height, *document_height);
                self.gate.arm()
            }
            PageEvent::Ready => {
                emit_log(LogLevel::Info, "page ready");
                let typing = match &mut self.typewriter {
                    Some(tw) => {
                        tw.start(now);
                        !tw.is_done()
                    }
                    None => false,
                };
                // Initial state must be computed even before any scrolling.
                self.gate.arm() || typing
            }
            PageEvent::Load => {
                chrome::mark_loaded(page, &self.options.ids.body);
                false
            }
            PageEvent::Anchor(anchor) => {
                if anchor.nav_link {
                    self.menu.close(page);
                }
                match resolve_anchor(
                    &anchor.target,
                    &self.sections,
                    &self.metrics,
                    self.options.navbar_height,
                    &self.options.bottom_anchor,
                ) {
                    Some(target) => {
                        emit_event("scroll:anchor", &anchor.target);
                        self.motion =
                            Some(SmoothScroll::with_speed(target, self.options.scroll_speed));
                        true
                    }
                    None => false,
                }
            }
            PageEvent::MenuToggle => {
                self.menu.toggle(page);
                false
            }
            PageEvent::ScrollTopClick => {
                self.motion = Some(SmoothScroll::with_speed(0.0, self.options.scroll_speed));
                true
            }
            PageEvent::PointerEnter { id } => {
                if *id == self.options.ids.scroll_top {
                    chrome::apply_hover_scale(page, id, true);
                }
                false
            }
            PageEvent::PointerLeave { id } => {
                if *id == self.options.ids.scroll_top {
                    chrome::apply_hover_scale(page, id, false);
                }
                false
            }
            PageEvent::FocusGained { id } => {
                chrome::field_focused(page, id);
                false
            }
            PageEvent::FocusLost { id } => {
                chrome::field_blurred(page, id);
                false
            }
        }
    }

    /// Run one frame tick.
    ///
    /// Advances any running smooth scroll, consumes the gate, recomputes and
    /// applies flags when due, updates reveal and parallax, and advances the
    /// typewriter. The report tells the host whether to move the real
    /// viewport and whether to keep ticking.
    pub fn frame(&mut self, page: &mut Page, now: Instant) -> FrameReport {
        self.stats.frames += 1;

        let mut scroll_to = None;
        let mut motion_active = false;
        if let Some(anim) = self.motion {
            let next = anim.tick(self.metrics.scroll_y());
            self.metrics.set_scroll(next);
            scroll_to = Some(next);
            if anim.is_settled(next) {
                self.motion = None;
            } else {
                motion_active = true;
            }
        }

        // Animated scrolling moves the offset too, so it recomputes even
        // when no raw event armed the gate this frame.
        let recomputed = self.gate.take() || scroll_to.is_some();
        let mut flags_changed = false;
        let mut newly_visible = 0;
        if recomputed {
            self.stats.recomputes += 1;
            let flags = UiFlags::compute(
                &self.metrics,
                &self.sections,
                self.options.thresholds,
                &self.options.bottom_anchor,
            );
            flags_changed = self.apply_flags(page, flags);
            if flags_changed {
                self.stats.flag_changes += 1;
            }
            newly_visible = self.reveal.update(page, &self.metrics);
            self.parallax
                .apply(page, &self.options.ids.hero_content, &self.metrics);
        }

        let mut typing = false;
        if let Some(tw) = &mut self.typewriter {
            if tw.is_started() {
                let text = tw.tick(now);
                page.set_text(&self.options.ids.hero_name, text);
                typing = !tw.is_done();
            }
        }

        FrameReport {
            recomputed,
            flags_changed,
            scroll_to,
            newly_visible,
            more: motion_active || typing,
        }
    }

    /// Apply computed flags to the page, diffing against the last applied
    /// value and emitting diagnostics events on transitions.
    ///
    /// Idempotent: reapplying equal flags changes nothing and leaves exactly
    /// one link active.
    fn apply_flags(&mut self, page: &mut Page, flags: UiFlags) -> bool {
        let ids = &self.options.ids;
        page.set_class(&ids.navbar, ClassSet::SCROLLED, flags.navbar_scrolled);
        page.set_class(&ids.scroll_top, ClassSet::VISIBLE, flags.scroll_top_visible);

        let links: Vec<(String, bool)> = page
            .with_role(NodeRole::NavLink)
            .map(|link| {
                let matches = match (link.target(), flags.active_section.as_deref()) {
                    (Some(target), Some(active)) => target == active,
                    _ => false,
                };
                (link.id().to_string(), matches)
            })
            .collect();
        for (id, active) in links {
            page.set_class(&id, ClassSet::ACTIVE, active);
        }

        let old = self.applied.as_ref();
        let changed = old != Some(&flags);
        if changed {
            if old.map(|o| o.navbar_scrolled) != Some(flags.navbar_scrolled) {
                emit_flag("navbar:scrolled", flags.navbar_scrolled);
            }
            if old.map(|o| o.scroll_top_visible) != Some(flags.scroll_top_visible) {
                emit_flag("scroll-top:visible", flags.scroll_top_visible);
            }
            if old.map(|o| o.active_section.as_deref()) != Some(flags.active_section.as_deref()) {
                emit_event("section:active", flags.active_section.as_deref().unwrap_or(""));
            }
        }
        self.applied = Some(flags);
        changed
    }
}
