//! Page event types.
//!
//! Hosts translate their native notifications (browser events, terminal
//! input, test scripts) into [`PageEvent`] values and feed them to the
//! coordinator. All delivery is single-threaded and callback-driven; events
//! carry data, never references into the page.

/// A page event delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    /// The viewport scrolled to a new offset.
    Scroll { y: f64 },
    /// Viewport or document geometry changed.
    Resize {
        viewport_height: f64,
        document_height: f64,
    },
    /// Document parsed; initial wiring may run.
    Ready,
    /// All assets finished loading.
    Load,
    /// An in-page anchor was activated.
    Anchor(AnchorEvent),
    /// The hamburger control was activated.
    MenuToggle,
    /// The scroll-to-top control was activated.
    ScrollTopClick,
    /// Pointer entered the node with the given id.
    PointerEnter { id: String },
    /// Pointer left the node with the given id.
    PointerLeave { id: String },
    /// A form field gained focus.
    FocusGained { id: String },
    /// A form field lost focus.
    FocusLost { id: String },
}

impl PageEvent {
    /// Check if this is a scroll event.
    #[must_use]
    pub fn is_scroll(&self) -> bool {
        matches!(self, Self::Scroll { .. })
    }

    /// Check if this is a resize event.
    #[must_use]
    pub fn is_resize(&self) -> bool {
        matches!(self, Self::Resize { .. })
    }

    /// Get the anchor event if this is one.
    #[must_use]
    pub fn anchor(&self) -> Option<&AnchorEvent> {
        match self {
            Self::Anchor(e) => Some(e),
            _ => None,
        }
    }

    /// Get the scroll offset if this is a scroll event.
    #[must_use]
    pub fn scroll_y(&self) -> Option<f64> {
        match self {
            Self::Scroll { y } => Some(*y),
            _ => None,
        }
    }
}

impl From<AnchorEvent> for PageEvent {
    fn from(e: AnchorEvent) -> Self {
        Self::Anchor(e)
    }
}

/// Activation of an in-page anchor link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorEvent {
    /// Target section id (the fragment without `#`).
    pub target: String,
    /// Whether the anchor is a nav-menu link (closes the mobile menu).
    pub nav_link: bool,
}

impl AnchorEvent {
    /// Anchor activated from the navigation menu.
    #[must_use]
    pub fn nav(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            nav_link: true,
        }
    }

    /// Anchor activated from page content.
    #[must_use]
    pub fn content(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            nav_link: false,
        }
    }
}
