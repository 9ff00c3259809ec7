//! Shared portfolio-page fixture for integration and E2E tests.
//!
//! Reproduces the reference layout the specification's scenarios use:
//! sections home@0, about@800, contact@2000 in a 2500 px document viewed
//! through an 800 px viewport.

use pagefx::{
    Coordinator, CoordinatorOptions, Node, NodeRole, Page, PageEvent, ScrollMetrics, Section,
    SectionMap,
};
use std::sync::Once;
use std::time::Instant;

/// Install a test-friendly tracing subscriber once per binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Section geometry from the specification's end-to-end scenarios.
pub fn portfolio_sections() -> SectionMap {
    SectionMap::new(vec![
        Section::new("home", 0.0, 800.0),
        Section::new("about", 800.0, 1200.0),
        Section::new("contact", 2000.0, 500.0),
    ])
    .expect("fixture sections are ordered and unique")
}

/// Initial metrics: top of a 2500 px document, 800 px viewport.
pub fn portfolio_metrics() -> ScrollMetrics {
    ScrollMetrics::new(0.0, 800.0, 2500.0).expect("fixture metrics are valid")
}

/// Full chrome + nav + content page matching the fixture sections.
pub fn portfolio_page() -> Page {
    let mut page = Page::new();
    page.insert(Node::new("body", NodeRole::Body));
    page.insert(Node::new("navbar", NodeRole::Navbar).with_geometry(0.0, 70.0));
    page.insert(Node::new("hamburger", NodeRole::Widget));
    page.insert(Node::new("nav-menu", NodeRole::Widget));
    page.insert(Node::new("scroll-to-top", NodeRole::Widget));
    page.insert(Node::new("hero-content", NodeRole::Hero).with_geometry(0.0, 800.0));
    page.insert(Node::new("hero-name", NodeRole::Content).with_geometry(200.0, 60.0));
    for (link, target) in [
        ("nav-home", "home"),
        ("nav-about", "about"),
        ("nav-contact", "contact"),
    ] {
        page.insert(Node::new(link, NodeRole::NavLink).with_target(target));
    }
    page.insert(Node::new("section-header", NodeRole::Content).with_geometry(850.0, 120.0));
    page.insert(Node::new("skills-grid", NodeRole::Content).with_geometry(1400.0, 400.0));
    page.insert(Node::new("project-card", NodeRole::Content).with_geometry(2050.0, 300.0));
    page
}

/// A page, its coordinator, and a fixed time origin.
pub struct Session {
    pub page: Page,
    pub coordinator: Coordinator,
    pub t0: Instant,
}

impl Session {
    /// Fresh session over the portfolio fixture with default options.
    pub fn new() -> Self {
        Self::with_options(CoordinatorOptions::default())
    }

    /// Fresh session with custom options.
    pub fn with_options(options: CoordinatorOptions) -> Self {
        let coordinator = Coordinator::new(portfolio_sections(), portfolio_metrics(), options)
            .expect("fixture options are valid");
        Self {
            page: portfolio_page(),
            coordinator,
            t0: Instant::now(),
        }
    }

    /// Dispatch one event at the time origin.
    pub fn dispatch(&mut self, event: &PageEvent) -> bool {
        self.coordinator.handle_event(&mut self.page, event, self.t0)
    }

    /// Scroll to an offset and run one frame, like a settled scroll step.
    pub fn scroll_and_frame(&mut self, y: f64) {
        self.dispatch(&PageEvent::Scroll { y });
        self.coordinator.frame(&mut self.page, self.t0);
    }

    /// Tick frames until no more are requested, with a runaway guard.
    pub fn run_to_settled(&mut self) -> usize {
        let mut frames = 0;
        loop {
            let report = self.coordinator.frame(&mut self.page, self.t0);
            frames += 1;
            assert!(frames < 500, "session failed to settle");
            if !report.more {
                return frames;
            }
        }
    }
}
