//! svg-recolor: Theme-adapted SVG icon recoloring
//!
//! This crate rewrites the `fill` attribute of SVG elements tagged with the
//! semantic class markers `primary`, `secondary`, and `tertiary`, producing
//! theme-adapted icon variants from a single source asset. Colors are opaque
//! strings copied into the markup verbatim; nothing is rendered, and no SVG
//! semantics are validated.
//!
//! # Example
//!
//! ```
//! use svg_recolor::{colorize_icon, IconColors, Strategy, SvgSource};
//!
//! let source = SvgSource::from_markup(
//!     r##"<svg><path class="primary" fill="#000"/><path class="secondary"/></svg>"##,
//! );
//! let colors = IconColors::new("#fafafa").with_secondary("#44DEB0");
//!
//! let markup = colorize_icon(Strategy::Structured, &source, &colors).unwrap();
//! assert!(markup.contains(r##"fill="#fafafa""##));
//! assert!(markup.contains(r##"fill="#44DEB0""##));
//! ```
//!
//! # Strategies
//!
//! Two interchangeable implementations of the [`Recolorer`] contract exist:
//! [`TreeRecolorer`] rewrites a parsed XML event stream and is the robust
//! default; [`PatternRecolorer`] rewrites the raw text with regular
//! expressions and documents its assumptions about input shape. Both color
//! the same elements the same way on well-formed input.
//!
//! # Failure model
//!
//! Construction failures (unreadable path, malformed markup) never panic
//! and never escape the recoloring API: the recolorer comes back empty,
//! every later call is a no-op, and the reason is available from
//! [`Recolorer::error`].

mod colorize;
mod error;
mod palette;
mod source;
mod strategy;

pub use colorize::{colorize_icon, colorize_icon_with};
pub use error::RecolorError;
pub use palette::{ClassToken, ColorAssignment, IconColors};
pub use source::SvgSource;
pub use strategy::{PatternRecolorer, Recolorer, Strategy, TreeRecolorer};
