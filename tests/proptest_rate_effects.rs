//! Property-based tests for the rate limiters and time-driven effects.

use pagefx::{Debounce, SmoothScroll, Throttle, Typewriter};
use proptest::prelude::*;
use std::cell::RefCell;
use std::time::{Duration, Instant};

// ============================================================================
// Rate limiter properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// A burst of debounced calls fires exactly once, with the last payload.
    #[test]
    fn prop_debounce_fires_once_per_burst(
        gaps in prop::collection::vec(0u64..99, 1..20),
    ) {
        let seen = RefCell::new(Vec::new());
        let t0 = Instant::now();
        let mut debounced = Debounce::new(Duration::from_millis(100), |v: usize| {
            seen.borrow_mut().push(v);
        });

        // Gaps are all shorter than the wait, so the burst never fires early.
        let mut t = t0;
        let mut last = 0;
        for (i, gap) in gaps.iter().enumerate() {
            t += Duration::from_millis(*gap);
            debounced.call(t, i);
            prop_assert!(!debounced.poll(t));
            last = i;
        }

        prop_assert!(debounced.poll(t + Duration::from_millis(100)));
        let seen = seen.borrow();
        prop_assert_eq!(seen.as_slice(), &[last]);
    }

    /// Throttle admits at most one call per window and always the first.
    #[test]
    fn prop_throttle_one_per_window(
        offsets in prop::collection::vec(0u64..1000, 1..40),
    ) {
        let mut offsets = offsets;
        offsets.sort_unstable();

        let fired = RefCell::new(Vec::new());
        let t0 = Instant::now();
        let limit = Duration::from_millis(100);
        let mut throttled = Throttle::new(limit, |at: u64| {
            fired.borrow_mut().push(at);
        });

        for at in &offsets {
            throttled.call(t0 + Duration::from_millis(*at), *at);
        }

        let fired = fired.borrow();
        // Admitted calls are at least one window apart.
        for pair in fired.windows(2) {
            prop_assert!(pair[1] - pair[0] >= 100);
        }
        // The first call of the sequence is always admitted.
        prop_assert_eq!(fired.first(), offsets.first());
    }
}

// ============================================================================
// Typewriter properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every visible prefix is a valid grapheme-cluster boundary cut, and
    /// prefixes grow monotonically.
    #[test]
    fn prop_typewriter_prefixes_are_cluster_safe(
        text in "\\PC{0,24}",
        steps in prop::collection::vec(0u64..400, 1..20),
    ) {
        use unicode_segmentation::UnicodeSegmentation;

        let mut tw = Typewriter::new(text.clone(), Duration::from_millis(50))
            .with_start_delay(Duration::ZERO);
        let t0 = Instant::now();
        tw.start(t0);

        let boundaries: Vec<usize> = std::iter::once(0)
            .chain(text.grapheme_indices(true).map(|(i, g)| i + g.len()))
            .collect();

        let mut elapsed = 0;
        let mut prev_len = 0;
        for step in steps {
            elapsed += step;
            let visible = tw.tick(t0 + Duration::from_millis(elapsed)).to_string();
            prop_assert!(text.starts_with(&visible));
            prop_assert!(boundaries.contains(&visible.len()));
            prop_assert!(visible.len() >= prev_len);
            prev_len = visible.len();
        }
    }

    /// The typewriter finishes after delay + (clusters - 1) * interval.
    #[test]
    fn prop_typewriter_completes_on_schedule(text in "\\PC{1,16}") {
        use unicode_segmentation::UnicodeSegmentation;

        let interval = Duration::from_millis(100);
        let mut tw = Typewriter::new(text.clone(), interval);
        let t0 = Instant::now();
        tw.start(t0);

        let clusters = text.graphemes(true).count() as u32;
        let finish = Duration::from_secs(1) + interval * (clusters - 1);
        tw.tick(t0 + finish);
        prop_assert!(tw.is_done());
        prop_assert_eq!(tw.visible_text(), text.as_str());
    }
}

// ============================================================================
// Smooth scroll properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// The animator settles exactly on its target in bounded ticks, moving
    /// monotonically toward it.
    #[test]
    fn prop_smooth_scroll_settles_exactly(
        start in 0.0f64..20_000.0,
        target in 0.0f64..20_000.0,
        speed in 0.05f64..0.95,
    ) {
        let anim = SmoothScroll::with_speed(target, speed);
        let mut offset = start;
        let mut ticks = 0;
        while !anim.is_settled(offset) {
            let next = anim.tick(offset);
            // Monotonic approach: distance to target never grows.
            prop_assert!((anim.target() - next).abs() <= (anim.target() - offset).abs());
            offset = next;
            ticks += 1;
            prop_assert!(ticks < 1000, "did not settle");
        }
        prop_assert_eq!(offset, anim.target());
    }
}
