//! E2E tests for the scroll cycle: event ingestion through frame-coalesced
//! recomputation to applied page state.
//!
//! Walks the specification's end-to-end scenarios over the portfolio
//! fixture: geometric section scan, bottom-anchor special case, chrome
//! threshold flips, and one-recompute-per-frame coalescing.

mod common;

use common::fixture::{self, Session};
use pagefx::{ClassSet, Node, NodeRole, PageEvent};
use tracing::info;

/// Scenario 1: offset 750 resolves "about" through the geometric scan.
#[test]
fn test_e2e_geometric_scan_selects_about() {
    fixture::init_tracing();
    let mut session = Session::new();

    info!("scroll to 750 and run one frame");
    session.scroll_and_frame(750.0);

    let flags = session.coordinator.applied_flags().unwrap();
    assert_eq!(flags.active_section.as_deref(), Some("about"));

    let active: Vec<_> = session
        .page
        .with_role(NodeRole::NavLink)
        .filter(|n| n.has_class(ClassSet::ACTIVE))
        .map(Node::id)
        .collect();
    assert_eq!(active, vec!["nav-about"]);
}

/// Scenario 2: offset 2450 is within 100 px of the document bottom, so the
/// bottom anchor wins even though "contact" starts at 2000.
#[test]
fn test_e2e_bottom_anchor_special_case() {
    fixture::init_tracing();
    let mut session = Session::new();

    session.scroll_and_frame(2450.0);

    let flags = session.coordinator.applied_flags().unwrap();
    assert_eq!(flags.active_section.as_deref(), Some("contact"));
    assert!(
        session
            .page
            .get("nav-contact")
            .unwrap()
            .has_class(ClassSet::ACTIVE)
    );
}

/// Scenario 3: chrome flags at offsets 30 and 600.
#[test]
fn test_e2e_chrome_threshold_flips() {
    fixture::init_tracing();
    let mut session = Session::new();

    session.scroll_and_frame(30.0);
    let flags = session.coordinator.applied_flags().unwrap().clone();
    assert!(!flags.navbar_scrolled);
    assert!(!flags.scroll_top_visible);
    assert!(!session.page.get("navbar").unwrap().has_class(ClassSet::SCROLLED));

    session.scroll_and_frame(600.0);
    let flags = session.coordinator.applied_flags().unwrap().clone();
    assert!(flags.navbar_scrolled);
    assert!(flags.scroll_top_visible);
    assert!(session.page.get("navbar").unwrap().has_class(ClassSet::SCROLLED));
    assert!(
        session
            .page
            .get("scroll-to-top")
            .unwrap()
            .has_class(ClassSet::VISIBLE)
    );
}

/// N raw scroll events inside one frame produce exactly one recomputation,
/// and the last offset wins.
#[test]
fn test_e2e_frame_coalescing() {
    fixture::init_tracing();
    let mut session = Session::new();

    // First event arms the gate and requests a frame.
    assert!(session.dispatch(&PageEvent::Scroll { y: 100.0 }));
    // The rest of the burst coalesces.
    for y in [150.0, 220.0, 310.0, 480.0, 750.0] {
        assert!(!session.dispatch(&PageEvent::Scroll { y }));
    }

    let report = session.coordinator.frame(&mut session.page, session.t0);
    assert!(report.recomputed);

    let stats = session.coordinator.stats();
    info!(?stats, "after burst");
    assert_eq!(stats.raw_scroll_events, 6);
    assert_eq!(stats.coalesced_events, 5);
    assert_eq!(stats.recomputes, 1);
    assert_eq!(
        session
            .coordinator
            .applied_flags()
            .unwrap()
            .active_section
            .as_deref(),
        Some("about")
    );

    // A quiet frame runs no recomputation.
    let report = session.coordinator.frame(&mut session.page, session.t0);
    assert!(!report.recomputed);
    assert_eq!(session.coordinator.stats().recomputes, 1);
}

/// Scrolling through the whole document walks the active link forward
/// without ever skipping backwards.
#[test]
fn test_e2e_active_link_walkthrough() {
    fixture::init_tracing();
    let mut session = Session::new();
    let order = ["home", "about", "contact"];

    let mut last_index = 0;
    let mut y = 0.0;
    while y <= 1700.0 {
        session.scroll_and_frame(y);
        let active = session
            .coordinator
            .applied_flags()
            .unwrap()
            .active_section
            .clone()
            .unwrap();
        let index = order.iter().position(|s| *s == active).unwrap();
        assert!(index >= last_index, "active link moved backwards at {y}");
        last_index = index;
        y += 50.0;
    }
    assert_eq!(last_index, 2);
}

/// A page missing its chrome nodes degrades to silent no-ops.
#[test]
fn test_e2e_missing_widgets_degrade_gracefully() {
    fixture::init_tracing();
    let mut session = Session::new();
    // Strip the page down to just the nav links.
    let mut page = pagefx::Page::new();
    for (link, target) in [("nav-home", "home"), ("nav-about", "about")] {
        page.insert(Node::new(link, NodeRole::NavLink).with_target(target));
    }
    session.page = page;

    session.scroll_and_frame(750.0);
    assert!(
        session
            .page
            .get("nav-about")
            .unwrap()
            .has_class(ClassSet::ACTIVE)
    );
    // No navbar, scroll-top, or hero nodes: nothing to assert, nothing panicked.
}
