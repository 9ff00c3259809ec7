//! Error types for pagefx.
//!
//! Errors occur only at construction time (invalid geometry or option
//! values). Runtime paths never fail: a missing page node is a silent no-op,
//! matching the best-effort nature of visual enhancements.

use std::fmt;

/// Result type alias for pagefx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for pagefx operations.
#[derive(Debug)]
pub enum Error {
    /// Viewport or document dimensions are unusable (non-finite, or a
    /// non-positive viewport height).
    InvalidMetrics {
        viewport_height: f64,
        document_height: f64,
    },
    /// Two sections share the same identifier.
    DuplicateSection(String),
    /// A section's top offset precedes the previous section's, violating
    /// document order.
    OutOfOrderSection {
        id: String,
        top: f64,
        prev_top: f64,
    },
    /// An option value is out of range (negative or non-finite threshold,
    /// margin, or rate parameter).
    InvalidOption { name: &'static str, value: f64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMetrics {
                viewport_height,
                document_height,
            } => write!(
                f,
                "invalid scroll metrics: viewport {viewport_height}, document {document_height}"
            ),
            Self::DuplicateSection(id) => write!(f, "duplicate section id: {id}"),
            Self::OutOfOrderSection { id, top, prev_top } => write!(
                f,
                "section {id} at {top} precedes previous section top {prev_top}"
            ),
            Self::InvalidOption { name, value } => {
                write!(f, "invalid option {name}: {value}")
            }
        }
    }
}

impl std::error::Error for Error {}
