//! Text-based recoloring using regular expressions.
//!
//! The document is held as a raw string buffer and never parsed. Each
//! recoloring call runs a single non-overlapping substitution pass:
//!
//! 1. Skip entirely when `class="<name>"` does not occur in the buffer.
//! 2. When a tag carries the class attribute and a `fill="..."` later in
//!    the same tag, rewrite the fill value in place.
//! 3. Otherwise insert `fill="<color>"` directly after the class attribute.
//! 4. Strip any `fill="none"` sharing a tag with the class attribute, on
//!    either side of it, so a pre-existing no-fill override cannot shadow
//!    the injected fill.
//!
//! # Input shape constraints
//!
//! This strategy trades robustness for not building a tree, and the
//! following are accepted limitations of the text approach rather than
//! bugs:
//!
//! - Class attributes are matched as exact full strings; a multi-token
//!   `class="a primary b"` is never matched.
//! - One rewrite shape is chosen per call: if any matching tag already has
//!   a trailing `fill`, tags without one are left alone in that pass.
//! - A `fill` placed *before* the class attribute is not found by step 2,
//!   so step 3 inserts a second `fill` into that tag (the `fill="none"`
//!   case is covered by step 4). Sources known to order `fill` first
//!   should use [`TreeRecolorer`](crate::TreeRecolorer) instead.

use std::fs;
use std::path::Path;

use regex::{Captures, Regex};

use crate::error::RecolorError;
use crate::palette::ClassToken;
use crate::source::SvgSource;
use crate::strategy::Recolorer;

/// Recolors SVG markup with string pattern rewriting, without a DOM.
///
/// Accepts any text at construction; only unreadable paths make it empty.
///
/// # Example
///
/// ```
/// use svg_recolor::{ClassToken, PatternRecolorer, Recolorer};
///
/// let mut icon = PatternRecolorer::from_markup(r#"<svg><path class="primary"/></svg>"#);
/// icon.set_fill_by_class(ClassToken::Primary, "#fafafa");
/// let out = icon.to_svg_string().unwrap();
/// assert!(out.contains(r##"class="primary" fill="#fafafa""##));
/// ```
pub struct PatternRecolorer {
    state: Result<String, RecolorError>,
}

impl PatternRecolorer {
    /// Constructs a recolorer from any [`SvgSource`].
    pub fn from_source(source: &SvgSource) -> Self {
        Self {
            state: source.resolve(),
        }
    }

    /// Constructs a recolorer from in-memory markup.
    pub fn from_markup(markup: impl Into<String>) -> Self {
        Self {
            state: Ok(markup.into()),
        }
    }

    /// Constructs a recolorer by reading the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::from_source(&SvgSource::Path(path.as_ref().to_path_buf()))
    }
}

impl Recolorer for PatternRecolorer {
    fn set_fill_by_class(&mut self, class: ClassToken, color: &str) {
        let Ok(buffer) = &self.state else {
            return;
        };
        self.state = Ok(apply_class_color(buffer, class.as_str(), color));
    }

    fn to_svg_string(&self) -> Option<String> {
        self.state.as_ref().ok().cloned()
    }

    fn write_to_file(&self, path: Option<&Path>) -> Result<(), RecolorError> {
        let path = path.ok_or(RecolorError::MissingOutputPath)?;
        let Ok(buffer) = &self.state else {
            return Ok(());
        };
        fs::write(path, buffer).map_err(|source| RecolorError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    fn error(&self) -> Option<&RecolorError> {
        self.state.as_ref().err()
    }
}

/// One full recoloring pass for a single class token.
fn apply_class_color(buffer: &str, class: &str, color: &str) -> String {
    let class_attr = format!(r#"class="{class}""#);
    if !buffer.contains(&class_attr) {
        return buffer.to_string();
    }
    let class_pat = regex::escape(&class_attr);

    // Rewrite an existing fill later in the same tag, or inject one right
    // after the class attribute when there is none.
    let rewrite = Regex::new(&format!(r#"({class_pat}[^>]*?fill=")[^"]*""#)).unwrap();
    let mut out = if rewrite.is_match(buffer) {
        rewrite
            .replace_all(buffer, |caps: &Captures| format!(r#"{}{}""#, &caps[1], color))
            .into_owned()
    } else {
        buffer.replace(&class_attr, &format!(r#"{class_attr} fill="{color}""#))
    };

    // Drop any leftover fill="none" sharing a tag with the class attribute.
    let trailing_none = Regex::new(&format!(r#"({class_pat}[^>]*?)\s*fill="none""#)).unwrap();
    out = trailing_none.replace_all(&out, "$1").into_owned();
    let leading_none = Regex::new(&format!(r#"fill="none"\s*([^>]*?{class_pat})"#)).unwrap();
    leading_none.replace_all(&out, "$1").into_owned()
}
