//! Retained page model.
//!
//! [`Page`] holds the nodes the engine mutates: sections, nav links, chrome
//! widgets, content blocks, form fields, and lazy assets. Nodes are addressed
//! by string id; operations on a missing id are silent no-ops so an absent
//! widget degrades functionality instead of failing.
//!
//! The model is deliberately thin. It carries exactly what the engine
//! reads (geometry, targets, declared progress) and what it writes (class
//! flags, inline style, visible text, swapped sources); painting is the
//! host's problem.

use crate::class::{ClassSet, InlineStyle};
use std::collections::HashMap;

/// Role of a page node, deciding which coordinator operations touch it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// Document body (receives the `LOADED` latch).
    Body,
    /// Fixed navigation bar (receives the `SCROLLED` flag).
    Navbar,
    /// Navigation entry targeting a section.
    NavLink,
    /// Named content region used for scroll highlighting.
    Section,
    /// Hero layer moved by the parallax effect.
    Hero,
    /// Chrome widget (hamburger, mobile menu, scroll-to-top control).
    Widget,
    /// Content block eligible for reveal-on-scroll.
    Content,
    /// Form field participating in focus highlighting.
    Field,
    /// Lazily-loaded asset with a pending source.
    Asset,
}

/// A single page node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: String,
    role: NodeRole,
    top: f64,
    height: f64,
    classes: ClassSet,
    style: InlineStyle,
    text: String,
    /// Section id a nav link or anchor points at.
    target: Option<String>,
    /// Id of the enclosing group node (form fields).
    group: Option<String>,
    /// Current field value or asset source.
    value: String,
    /// Source swapped in on first intersection (lazy assets).
    pending_source: Option<String>,
    /// Declared fill percentage (progress bars).
    progress: Option<f32>,
}

impl Node {
    /// Create a node with empty classes and no geometry.
    #[must_use]
    pub fn new(id: impl Into<String>, role: NodeRole) -> Self {
        Self {
            id: id.into(),
            role,
            top: 0.0,
            height: 0.0,
            classes: ClassSet::empty(),
            style: InlineStyle::none(),
            text: String::new(),
            target: None,
            group: None,
            value: String::new(),
            pending_source: None,
            progress: None,
        }
    }

    /// Set layout geometry (top offset and height).
    #[must_use]
    pub fn with_geometry(mut self, top: f64, height: f64) -> Self {
        self.top = top;
        self.height = height.max(0.0);
        self
    }

    /// Set the section this node targets (nav links).
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the enclosing group id (form fields).
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set initial classes.
    #[must_use]
    pub fn with_classes(mut self, classes: ClassSet) -> Self {
        self.classes = classes;
        self
    }

    /// Set a pending lazy source (assets).
    #[must_use]
    pub fn with_pending_source(mut self, source: impl Into<String>) -> Self {
        self.pending_source = Some(source.into());
        self.classes.insert(ClassSet::HIDDEN);
        self
    }

    /// Set a declared progress percentage (progress bars).
    #[must_use]
    pub fn with_progress(mut self, percent: f32) -> Self {
        self.progress = Some(percent.clamp(0.0, 100.0));
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn role(&self) -> NodeRole {
        self.role
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Current class list.
    #[must_use]
    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    /// Current inline style.
    #[must_use]
    pub fn style(&self) -> InlineStyle {
        self.style
    }

    /// Visible text content (typewriter output).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Field value or resolved asset source.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn pending_source(&self) -> Option<&str> {
        self.pending_source.as_deref()
    }

    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        self.progress
    }

    /// True when the class list contains `flag`.
    #[must_use]
    pub fn has_class(&self, flag: ClassSet) -> bool {
        self.classes.contains(flag)
    }
}

/// Page node tree with id lookup.
#[derive(Clone, Debug, Default)]
pub struct Page {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl Page {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any existing node with the same id.
    pub fn insert(&mut self, node: Node) {
        if let Some(&i) = self.index.get(node.id()) {
            self.nodes[i] = node;
        } else {
            self.index.insert(node.id().to_string(), self.nodes.len());
            self.nodes.push(node);
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the page holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        let i = *self.index.get(id)?;
        Some(&mut self.nodes[i])
    }

    /// Iterate all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate nodes with the given role, in insertion order.
    pub fn with_role(&self, role: NodeRole) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.role == role)
    }

    /// Set or clear a class flag on a node.
    ///
    /// Returns whether membership changed; a missing id is a no-op returning
    /// `false`.
    pub fn set_class(&mut self, id: &str, flag: ClassSet, on: bool) -> bool {
        self.get_mut(id)
            .is_some_and(|node| node.classes.apply(flag, on))
    }

    /// Add a class flag. Missing ids are no-ops.
    pub fn add_class(&mut self, id: &str, flag: ClassSet) -> bool {
        self.set_class(id, flag, true)
    }

    /// Remove a class flag. Missing ids are no-ops.
    pub fn remove_class(&mut self, id: &str, flag: ClassSet) -> bool {
        self.set_class(id, flag, false)
    }

    /// Clear a class flag from every node carrying it, returning how many
    /// nodes changed.
    pub fn clear_class_all(&mut self, flag: ClassSet) -> usize {
        let mut cleared = 0;
        for node in &mut self.nodes {
            if node.classes.apply(flag, false) {
                cleared += 1;
            }
        }
        cleared
    }

    /// Mutate a node's inline style in place. Missing ids are no-ops.
    pub fn update_style(&mut self, id: &str, f: impl FnOnce(&mut InlineStyle)) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                f(&mut node.style);
                true
            }
            None => false,
        }
    }

    /// Replace a node's visible text. Missing ids are no-ops.
    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                if node.text != text {
                    node.text.clear();
                    node.text.push_str(text);
                }
                true
            }
            None => false,
        }
    }

    /// Replace a field value. Missing ids are no-ops.
    pub fn set_value(&mut self, id: &str, value: &str) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.value.clear();
                node.value.push_str(value);
                true
            }
            None => false,
        }
    }

    /// Swap a pending lazy source into place and drop the placeholder class.
    ///
    /// Returns whether a swap happened.
    pub fn resolve_source(&mut self, id: &str) -> bool {
        match self.get_mut(id) {
            Some(node) => match node.pending_source.take() {
                Some(source) => {
                    node.value = source;
                    node.classes.remove(ClassSet::HIDDEN);
                    true
                }
                None => false,
            },
            None => false,
        }
    }
}
