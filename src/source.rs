//! SVG input sources.
//!
//! Recolorers accept markup either from a file on disk or from an in-memory
//! string. [`SvgSource`] makes the two interchangeable at construction time;
//! resolution happens exactly once, when a recolorer is built, and the
//! resulting text is owned by that recolorer alone.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RecolorError;

/// A source of SVG markup.
///
/// # Example
///
/// ```
/// use svg_recolor::SvgSource;
///
/// // From raw markup
/// let raw = SvgSource::from_markup("<svg>...</svg>");
///
/// // From a file path (read when a recolorer is constructed)
/// let file = SvgSource::from_path("icons/folder.svg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgSource {
    /// Raw SVG markup held in memory.
    Markup(String),

    /// A filesystem path to an SVG file, read at construction time.
    Path(PathBuf),
}

impl SvgSource {
    /// Creates a source from raw SVG markup.
    pub fn from_markup(markup: impl Into<String>) -> Self {
        Self::Markup(markup.into())
    }

    /// Creates a source from a filesystem path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Returns `true` if this source is raw in-memory markup.
    pub fn is_markup(&self) -> bool {
        matches!(self, Self::Markup(_))
    }

    /// Returns `true` if this source is a filesystem path.
    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }

    /// Resolves this source to owned markup text.
    ///
    /// `Markup` sources are returned as-is; `Path` sources are read from
    /// disk. A read either completes or fails immediately with
    /// [`RecolorError::SourceUnreadable`].
    pub fn resolve(&self) -> Result<String, RecolorError> {
        match self {
            Self::Markup(markup) => Ok(markup.clone()),
            Self::Path(path) => {
                fs::read_to_string(path).map_err(|source| RecolorError::SourceUnreadable {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

impl From<&str> for SvgSource {
    fn from(markup: &str) -> Self {
        Self::Markup(markup.to_string())
    }
}

impl From<String> for SvgSource {
    fn from(markup: String) -> Self {
        Self::Markup(markup)
    }
}

impl From<&Path> for SvgSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for SvgSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}
