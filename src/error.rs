//! Error taxonomy for icon recoloring.
//!
//! Construction failures never escape as panics; they are absorbed into an
//! "empty" recolorer that records the reason here. Callers inspect the stored
//! error through [`Recolorer::error`](crate::Recolorer::error) to tell an
//! unreadable source apart from a class token that simply matched nothing
//! (which is not an error at all).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a recoloring operation can fail.
#[derive(Debug, Error)]
pub enum RecolorError {
    /// The source path does not exist or could not be read.
    #[error("failed to read SVG source {path:?}: {source}")]
    SourceUnreadable {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// The source text is not well-formed XML.
    ///
    /// Only the structured strategy detects this; the pattern strategy
    /// operates on raw text and accepts any input.
    #[error("SVG source is not well-formed XML: {detail}")]
    MalformedMarkup {
        /// Parser message describing the first syntax error encountered.
        detail: String,
    },

    /// A file write was requested without a destination path.
    #[error("no output path set for SVG write")]
    MissingOutputPath,

    /// Serialized output could not be written to the destination path.
    #[error("failed to write SVG output to {path:?}: {source}")]
    WriteFailed {
        /// The destination that could not be written.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}

impl RecolorError {
    /// Returns true if this error was caused by an unreadable source path.
    pub fn is_source_unreadable(&self) -> bool {
        matches!(self, Self::SourceUnreadable { .. })
    }

    /// Returns true if this error was caused by malformed markup.
    pub fn is_malformed_markup(&self) -> bool {
        matches!(self, Self::MalformedMarkup { .. })
    }
}
