//! Color-application orchestration.
//!
//! The single required call sequence: apply the primary color, then the
//! secondary and tertiary colors only when present, then serialize. Each
//! class selection is independent at the element level, so the order never
//! affects the result across disjoint classes.

use crate::palette::IconColors;
use crate::source::SvgSource;
use crate::strategy::{Recolorer, Strategy};

/// Colorizes an icon with the given palette and returns the markup.
///
/// Constructs a fresh document from `source` with the chosen strategy,
/// applies `colors.primary` to `class="primary"`, then the optional
/// secondary and tertiary colors, and serializes. Returns `None` when the
/// source could not be read or parsed.
///
/// # Example
///
/// ```
/// use svg_recolor::{colorize_icon, IconColors, Strategy, SvgSource};
///
/// let source = SvgSource::from_markup(r#"<svg><path class="primary"/></svg>"#);
/// let colors = IconColors::new("#fafafa").with_secondary("#44DEB0");
///
/// let markup = colorize_icon(Strategy::Structured, &source, &colors).unwrap();
/// assert!(markup.contains(r##"fill="#fafafa""##));
/// ```
pub fn colorize_icon(strategy: Strategy, source: &SvgSource, colors: &IconColors) -> Option<String> {
    let mut recolorer = strategy.open(source);
    recolorer.apply(&colors.to_assignment());
    recolorer.to_svg_string()
}

/// Positional convenience over [`colorize_icon`].
///
/// Mirrors the classic call shape where only the primary color is
/// mandatory; pass `None` to leave a class untouched.
pub fn colorize_icon_with(
    strategy: Strategy,
    source: &SvgSource,
    primary: &str,
    secondary: Option<&str>,
    tertiary: Option<&str>,
) -> Option<String> {
    let mut colors = IconColors::new(primary);
    colors.secondary = secondary.map(str::to_string);
    colors.tertiary = tertiary.map(str::to_string);
    colorize_icon(strategy, source, &colors)
}
