//! Time- and scroll-driven visual effects.
//!
//! Each effect is a small self-contained state machine the coordinator ticks:
//!
//! - [`Typewriter`]: grapheme-accurate progressive reveal of the hero text
//! - [`RevealObserver`]: intersection-driven fade-in with stagger delays
//! - [`Parallax`]: scroll-proportional translation of the hero layer
//!
//! Effects compute; the page model absorbs their output as class and inline
//! style mutations.

mod parallax;
mod reveal;
mod typewriter;

pub use parallax::Parallax;
pub use reveal::{RevealObserver, RevealOptions, intersection_ratio};
pub use typewriter::Typewriter;
