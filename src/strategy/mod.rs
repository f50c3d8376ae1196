//! Recoloring strategies.
//!
//! Two interchangeable implementations of the same contract exist:
//!
//! - [`TreeRecolorer`] parses the markup as XML and rewrites attributes on
//!   matched elements. Immune to formatting artifacts and attribute
//!   ordering; the preferred strategy for untrusted input.
//! - [`PatternRecolorer`] rewrites the raw text with regular expressions,
//!   never building a structural representation. Cheaper, but carries
//!   documented assumptions about the shape of the input markup.
//!
//! Both produce the same visible result (same elements colored the same
//! way) for well-formed input. They share no state, only the [`Recolorer`]
//! contract.

pub mod pattern;
pub mod tree;

pub use pattern::PatternRecolorer;
pub use tree::TreeRecolorer;

use std::path::Path;

use crate::error::RecolorError;
use crate::palette::{ClassToken, ColorAssignment};
use crate::source::SvgSource;

// ============================================================================
// Recolorer Trait
// ============================================================================

/// The recoloring contract shared by both strategies.
///
/// A recolorer owns exactly one document, created at construction. When
/// construction fails (unreadable path, malformed markup) the recolorer is
/// permanently *empty*: every later call is a harmless no-op and the failure
/// reason is available from [`error`](Self::error). Nothing panics across
/// this boundary.
pub trait Recolorer {
    /// Sets the `fill` attribute to `color` on every element whose `class`
    /// attribute equals `class` exactly.
    ///
    /// No-op on an empty document and when no element matches.
    fn set_fill_by_class(&mut self, class: ClassToken, color: &str);

    /// Serializes the current document to SVG text.
    ///
    /// Returns `None` if the document is empty.
    fn to_svg_string(&self) -> Option<String>;

    /// Writes the serialized document to `path`.
    ///
    /// Fails with [`RecolorError::MissingOutputPath`] when `path` is `None`.
    /// Silently succeeds without writing when the document is empty (the
    /// construction failure is already recorded on the instance).
    fn write_to_file(&self, path: Option<&Path>) -> Result<(), RecolorError>;

    /// The reason construction failed, if it did.
    fn error(&self) -> Option<&RecolorError>;

    /// Returns true if this recolorer holds no document.
    fn is_empty(&self) -> bool {
        self.error().is_some()
    }

    /// Applies an ordered [`ColorAssignment`], pair by pair.
    fn apply(&mut self, assignment: &ColorAssignment) {
        for (class, color) in assignment.iter() {
            self.set_fill_by_class(class, color);
        }
    }
}

// ============================================================================
// Strategy Selection
// ============================================================================

/// Caller-selectable recoloring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Tree-based rewriting via [`TreeRecolorer`]. The default.
    #[default]
    Structured,
    /// Text-based rewriting via [`PatternRecolorer`].
    Pattern,
}

impl Strategy {
    /// Constructs a recolorer of this strategy from the given source.
    pub fn open(self, source: &SvgSource) -> Box<dyn Recolorer> {
        match self {
            Self::Structured => Box::new(TreeRecolorer::from_source(source)),
            Self::Pattern => Box::new(PatternRecolorer::from_source(source)),
        }
    }
}
