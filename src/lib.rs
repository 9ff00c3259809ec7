//! `pagefx` - Scroll-reactive page interactivity engine
//!
//! A headless, deterministic engine for single-page interactivity: it
//! consumes page geometry and a stream of UI events (scroll, resize, load,
//! pointer, focus, anchor activation) and derives the view state a renderer
//! must apply - active navigation link, chrome visibility flags, reveal
//! animations, typing-effect text, parallax offsets, and smooth-scroll
//! motion. Decision logic is pure; application is an explicit idempotent
//! diff against a lightweight page model.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(dead_code)] // Public API functions not yet used internally
#![allow(clippy::cast_precision_loss)] // Intentional for pixel math
#![allow(clippy::module_name_repetitions)] // Allow ClassSet in class, etc.
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::float_cmp)] // Exact pixel values are asserted in tests

pub mod chrome;
pub mod class;
pub mod coordinator;
pub mod effects;
pub mod error;
pub mod event;
pub mod flags;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod motion;
pub mod page;
pub mod rate;

// Re-export core types at crate root
pub use class::{ClassSet, InlineStyle};
pub use coordinator::{Coordinator, CoordinatorOptions, FrameReport, NodeIds, TickStats};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_flag, emit_log, set_event_callback, set_log_callback};
pub use flags::{Thresholds, UiFlags};
pub use frame::{FrameGate, GateState};
pub use geometry::{ScrollMetrics, Section, SectionMap};
pub use page::{Node, NodeRole, Page};

// Re-export input types
pub use input::{AnchorEvent, PageEvent};

// Re-export effects and motion
pub use effects::{Parallax, RevealObserver, RevealOptions, Typewriter};
pub use motion::{SmoothScroll, resolve_anchor};

// Re-export rate limiters
pub use rate::{Debounce, Throttle};
