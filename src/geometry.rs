//! Page geometry: sections and per-tick scroll metrics.
//!
//! [`Section`] records the static vertical placement of a named content
//! region. [`SectionMap`] holds sections in document order and answers the
//! scan queries the coordinator needs. [`ScrollMetrics`] is the per-tick
//! snapshot of scroll offset, viewport height, and document height; it is
//! read fresh each tick and never cached across ticks.

use crate::error::{Error, Result};

/// A named, vertically-positioned content region used for scroll-based
/// navigation highlighting.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    id: String,
    top: f64,
    height: f64,
}

impl Section {
    /// Create a section from its id and layout geometry.
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height: height.max(0.0),
        }
    }

    /// Section identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Top offset in pixels from the document origin.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Section height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Bottom edge offset.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Sections in document order.
///
/// Construction validates that ids are unique and tops are non-decreasing,
/// so scan results are well defined.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    /// Build a map from sections already in document order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSection`] for repeated ids and
    /// [`Error::OutOfOrderSection`] when a top offset precedes its
    /// predecessor's.
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        let mut prev_top = f64::NEG_INFINITY;
        for (i, section) in sections.iter().enumerate() {
            if !section.top.is_finite() {
                return Err(Error::InvalidOption {
                    name: "section.top",
                    value: section.top,
                });
            }
            if section.top < prev_top {
                return Err(Error::OutOfOrderSection {
                    id: section.id.clone(),
                    top: section.top,
                    prev_top,
                });
            }
            prev_top = section.top;
            if sections[..i].iter().any(|s| s.id == section.id) {
                return Err(Error::DuplicateSection(section.id.clone()));
            }
        }
        Ok(Self { sections })
    }

    /// Empty map; every scan returns `None`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when the map holds no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate sections in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Look up a section by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Last section (in document order) whose `top - lookahead` is at or
    /// above the given scroll offset.
    ///
    /// The *last* match wins, so adjacent or overlapping sections resolve to
    /// the lower one.
    #[must_use]
    pub fn last_reached(&self, scroll_y: f64, lookahead: f64) -> Option<&Section> {
        self.sections
            .iter()
            .filter(|s| s.top - lookahead <= scroll_y)
            .next_back()
    }
}

impl<'a> IntoIterator for &'a SectionMap {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

/// Per-tick scroll snapshot: offset, viewport height, document height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    scroll_y: f64,
    viewport_height: f64,
    document_height: f64,
}

impl ScrollMetrics {
    /// Create metrics from host-reported values.
    ///
    /// Negative scroll offsets (rubber-band overscroll) are clamped to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMetrics`] when heights are non-finite or the
    /// viewport height is not positive.
    pub fn new(scroll_y: f64, viewport_height: f64, document_height: f64) -> Result<Self> {
        if !viewport_height.is_finite()
            || !document_height.is_finite()
            || viewport_height <= 0.0
            || document_height < 0.0
        {
            return Err(Error::InvalidMetrics {
                viewport_height,
                document_height,
            });
        }
        Ok(Self {
            scroll_y: if scroll_y.is_finite() { scroll_y.max(0.0) } else { 0.0 },
            viewport_height,
            document_height,
        })
    }

    /// Current vertical scroll offset.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Viewport height in pixels.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Full document height in pixels.
    #[must_use]
    pub fn document_height(&self) -> f64 {
        self.document_height
    }

    /// Replace the scroll offset, clamping negatives to zero.
    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = if scroll_y.is_finite() { scroll_y.max(0.0) } else { self.scroll_y };
    }

    /// Replace viewport and document heights after a resize or relayout.
    /// Unusable values are ignored.
    pub fn set_heights(&mut self, viewport_height: f64, document_height: f64) {
        if viewport_height.is_finite() && viewport_height > 0.0 {
            self.viewport_height = viewport_height;
        }
        if document_height.is_finite() && document_height >= 0.0 {
            self.document_height = document_height;
        }
    }

    /// Maximum meaningful scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// True when the viewport bottom is within `margin` pixels of the
    /// document bottom.
    #[must_use]
    pub fn near_bottom(&self, margin: f64) -> bool {
        self.scroll_y + self.viewport_height >= self.document_height - margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> SectionMap {
        SectionMap::new(vec![
            Section::new("home", 0.0, 800.0),
            Section::new("about", 800.0, 1200.0),
            Section::new("contact", 2000.0, 500.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = SectionMap::new(vec![
            Section::new("home", 0.0, 100.0),
            Section::new("home", 200.0, 100.0),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateSection(id) if id == "home"));
    }

    #[test]
    fn test_rejects_out_of_order_tops() {
        let err = SectionMap::new(vec![
            Section::new("about", 800.0, 100.0),
            Section::new("home", 0.0, 100.0),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::OutOfOrderSection { .. }));
    }

    #[test]
    fn test_equal_tops_allowed() {
        let map = SectionMap::new(vec![
            Section::new("a", 100.0, 50.0),
            Section::new("b", 100.0, 50.0),
        ])
        .unwrap();
        // Last match wins for overlapping sections.
        assert_eq!(map.last_reached(100.0, 0.0).unwrap().id(), "b");
    }

    #[test]
    fn test_last_reached_scan() {
        let map = portfolio();
        assert_eq!(map.last_reached(0.0, 200.0).unwrap().id(), "home");
        // about's top minus lookahead is 600: not reached at 599.
        assert_eq!(map.last_reached(599.0, 200.0).unwrap().id(), "home");
        assert_eq!(map.last_reached(600.0, 200.0).unwrap().id(), "about");
        assert_eq!(map.last_reached(1800.0, 200.0).unwrap().id(), "contact");
    }

    #[test]
    fn test_last_reached_none_before_first() {
        let map = SectionMap::new(vec![Section::new("late", 1000.0, 100.0)]).unwrap();
        assert!(map.last_reached(0.0, 200.0).is_none());
        assert!(map.last_reached(799.0, 200.0).is_none());
        assert_eq!(map.last_reached(800.0, 200.0).unwrap().id(), "late");
    }

    #[test]
    fn test_metrics_validation() {
        assert!(ScrollMetrics::new(0.0, 0.0, 2500.0).is_err());
        assert!(ScrollMetrics::new(0.0, f64::NAN, 2500.0).is_err());
        assert!(ScrollMetrics::new(0.0, 800.0, -1.0).is_err());

        let m = ScrollMetrics::new(-30.0, 800.0, 2500.0).unwrap();
        assert_eq!(m.scroll_y(), 0.0);
    }

    #[test]
    fn test_near_bottom() {
        let mut m = ScrollMetrics::new(0.0, 800.0, 2500.0).unwrap();
        assert!(!m.near_bottom(100.0));
        m.set_scroll(1599.0);
        assert!(!m.near_bottom(100.0));
        m.set_scroll(1600.0);
        assert!(m.near_bottom(100.0));
    }

    #[test]
    fn test_max_scroll_short_document() {
        let m = ScrollMetrics::new(0.0, 800.0, 500.0).unwrap();
        assert_eq!(m.max_scroll(), 0.0);
        // A document shorter than the viewport is always near its bottom.
        assert!(m.near_bottom(100.0));
    }
}
