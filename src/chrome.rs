//! Navigation chrome: mobile menu, scroll-to-top hover, load latch, form
//! focus highlighting, and stagger helpers.
//!
//! Everything here is a thin, idempotent mutation of the page model; the
//! decisions that depend on scroll position live in [`crate::flags`].

use crate::class::ClassSet;
use crate::event::{LogLevel, emit_flag, emit_log};
use crate::page::Page;
use std::time::Duration;

/// Mobile menu state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Hamburger-driven mobile navigation menu.
///
/// Toggling flips the `OPEN` class on both the hamburger and the menu node;
/// activating any nav link closes both. Missing nodes degrade silently, but
/// the machine still tracks its logical state.
#[derive(Clone, Debug)]
pub struct MobileMenu {
    state: MenuState,
    hamburger_id: String,
    menu_id: String,
}

impl MobileMenu {
    /// Create a menu bound to the given hamburger and menu node ids.
    #[must_use]
    pub fn new(hamburger_id: impl Into<String>, menu_id: impl Into<String>) -> Self {
        Self {
            state: MenuState::Closed,
            hamburger_id: hamburger_id.into(),
            menu_id: menu_id.into(),
        }
    }

    /// Current logical state.
    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// True when the menu is expanded.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Flip the menu and mirror the state onto the page.
    pub fn toggle(&mut self, page: &mut Page) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.sync(page);
        emit_flag("menu:open", self.is_open());
    }

    /// Close the menu (nav-link activation path). No-op when already closed.
    pub fn close(&mut self, page: &mut Page) {
        if self.state == MenuState::Closed {
            return;
        }
        self.state = MenuState::Closed;
        self.sync(page);
        emit_flag("menu:open", false);
    }

    fn sync(&self, page: &mut Page) {
        let open = self.is_open();
        page.set_class(&self.hamburger_id, ClassSet::OPEN, open);
        page.set_class(&self.menu_id, ClassSet::OPEN, open);
    }
}

/// Hover scale applied to the scroll-to-top control.
pub fn apply_hover_scale(page: &mut Page, id: &str, hovering: bool) {
    let factor = if hovering { 1.1 } else { 1.0 };
    page.update_style(id, |style| style.scale = Some(factor));
}

/// Latch the body's loaded class once all assets are in.
pub fn mark_loaded(page: &mut Page, body_id: &str) {
    if page.add_class(body_id, ClassSet::LOADED) {
        emit_log(LogLevel::Info, "page loaded");
    }
}

/// Mark a field's enclosing group focused.
pub fn field_focused(page: &mut Page, field_id: &str) {
    let Some(group) = page.get(field_id).and_then(|n| n.group().map(str::to_string)) else {
        return;
    };
    page.add_class(&group, ClassSet::FOCUSED);
}

/// Handle a field losing focus: the group stays highlighted while the field
/// holds a value.
pub fn field_blurred(page: &mut Page, field_id: &str) {
    let Some(node) = page.get(field_id) else { return };
    if !node.value().is_empty() {
        return;
    }
    let Some(group) = node.group().map(str::to_string) else {
        return;
    };
    page.remove_class(&group, ClassSet::FOCUSED);
}

/// Spread animation delays across grid items: `index * step`.
pub fn stagger_animation<I, S>(page: &mut Page, ids: I, step: Duration)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (index, id) in ids.into_iter().enumerate() {
        let delay = step * u32::try_from(index).unwrap_or(u32::MAX);
        page.update_style(id.as_ref(), |style| style.animation_delay = Some(delay));
    }
}

/// Stagger floating icons: delay `index * 0.5 s`, duration `3 + index * 0.5 s`.
pub fn stagger_floating_icons<I, S>(page: &mut Page, ids: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (index, id) in ids.into_iter().enumerate() {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        page.update_style(id.as_ref(), |style| {
            style.animation_delay = Some(Duration::from_millis(500) * index);
            style.animation_duration = Some(Duration::from_secs(3) + Duration::from_millis(500) * index);
        });
    }
}

/// Copy each node's declared progress percentage into its fill width.
pub fn fill_progress_bars<I, S>(page: &mut Page, ids: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for id in ids {
        let id = id.as_ref();
        let Some(percent) = page.get(id).and_then(crate::page::Node::progress) else {
            continue;
        };
        page.update_style(id, |style| style.fill_percent = Some(percent));
    }
}
