//! Class tokens and theme color palettes.
//!
//! Icons carry semantic class markers (`primary`, `secondary`, `tertiary`)
//! on the elements that should follow the theme. A palette pairs those
//! markers with opaque color strings; the engine copies the strings into the
//! markup verbatim and never parses or validates them.
//!
//! [`IconColors`] is the serializable form, suitable for storing theme
//! palettes as JSON:
//!
//! ```
//! use svg_recolor::IconColors;
//!
//! let colors = IconColors::new("#fafafa")
//!     .with_secondary("#44DEB0")
//!     .with_tertiary("#ff0000");
//!
//! let json = colors.to_json().unwrap();
//! let restored = IconColors::from_json(&json).unwrap();
//! assert_eq!(restored.primary, "#fafafa");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// ClassToken
// ============================================================================

/// The fixed vocabulary of semantic class markers recognized by the engine.
///
/// These are exact-match attribute values (`class="primary"`), unrelated to
/// any styling framework's class mechanism. Multi-token class attributes
/// such as `class="a primary"` are never matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassToken {
    /// Elements carrying `class="primary"`.
    Primary,
    /// Elements carrying `class="secondary"`.
    Secondary,
    /// Elements carrying `class="tertiary"`.
    Tertiary,
}

impl ClassToken {
    /// All recognized tokens, in application order.
    pub const ALL: [ClassToken; 3] = [Self::Primary, Self::Secondary, Self::Tertiary];

    /// The attribute value this token matches in markup.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }
}

impl std::fmt::Display for ClassToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ColorAssignment
// ============================================================================

/// An ordered list of `(class, color)` pairs to apply to a document.
///
/// Order is preserved: pairs are applied first to last. Colors are opaque
/// strings copied verbatim into the output markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAssignment {
    pairs: Vec<(ClassToken, String)>,
}

impl ColorAssignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `(class, color)` pair, returning self for chaining.
    pub fn with(mut self, class: ClassToken, color: impl Into<String>) -> Self {
        self.pairs.push((class, color.into()));
        self
    }

    /// Appends a `(class, color)` pair.
    pub fn push(&mut self, class: ClassToken, color: impl Into<String>) {
        self.pairs.push((class, color.into()));
    }

    /// Returns true if no pairs have been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates the pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (ClassToken, &str)> {
        self.pairs.iter().map(|(class, color)| (*class, color.as_str()))
    }
}

// ============================================================================
// IconColors
// ============================================================================

/// A serializable theme palette for a single icon.
///
/// `primary` is mandatory; `secondary` and `tertiary` are optional and, when
/// absent, leave elements tagged with those classes untouched. Serializes to
/// a flat camelCase JSON object:
///
/// ```json
/// { "primary": "#fafafa", "secondary": "#44DEB0" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconColors {
    /// Color applied to elements with `class="primary"`.
    pub primary: String,

    /// Color applied to elements with `class="secondary"`, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,

    /// Color applied to elements with `class="tertiary"`, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<String>,
}

impl IconColors {
    /// Creates a palette with only the primary color set.
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: None,
            tertiary: None,
        }
    }

    /// Sets the secondary color.
    pub fn with_secondary(mut self, color: impl Into<String>) -> Self {
        self.secondary = Some(color.into());
        self
    }

    /// Sets the tertiary color.
    pub fn with_tertiary(mut self, color: impl Into<String>) -> Self {
        self.tertiary = Some(color.into());
        self
    }

    /// Serializes to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Converts the palette to an ordered [`ColorAssignment`].
    ///
    /// Primary always comes first; secondary and tertiary follow only when
    /// present.
    pub fn to_assignment(&self) -> ColorAssignment {
        let mut assignment = ColorAssignment::new().with(ClassToken::Primary, &self.primary);
        if let Some(secondary) = &self.secondary {
            assignment.push(ClassToken::Secondary, secondary);
        }
        if let Some(tertiary) = &self.tertiary {
            assignment.push(ClassToken::Tertiary, tertiary);
        }
        assignment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn class_token_strings() {
        assert_eq!(ClassToken::Primary.as_str(), "primary");
        assert_eq!(ClassToken::Secondary.as_str(), "secondary");
        assert_eq!(ClassToken::Tertiary.as_str(), "tertiary");
    }

    #[test]
    fn assignment_preserves_order() {
        let assignment = ColorAssignment::new()
            .with(ClassToken::Tertiary, "#333")
            .with(ClassToken::Primary, "#111");

        let pairs: Vec<_> = assignment.iter().collect();
        assert_eq!(
            pairs,
            vec![(ClassToken::Tertiary, "#333"), (ClassToken::Primary, "#111")]
        );
    }

    #[test]
    fn palette_json_round_trip() {
        let colors = IconColors::new("#fafafa").with_secondary("#44DEB0");
        let json = colors.to_json().unwrap();
        assert_eq!(json, r##"{"primary":"#fafafa","secondary":"#44DEB0"}"##);

        let restored = IconColors::from_json(&json).unwrap();
        assert_eq!(restored, colors);
    }

    #[test]
    fn palette_without_optionals_omits_fields() {
        let json = IconColors::new("#fff").to_json().unwrap();
        assert!(!json.contains("secondary"));
        assert!(!json.contains("tertiary"));
    }

    #[test]
    fn palette_to_assignment_skips_missing_colors() {
        let assignment = IconColors::new("#fff").to_assignment();
        let pairs: Vec<_> = assignment.iter().collect();
        assert_eq!(pairs, vec![(ClassToken::Primary, "#fff")]);

        let full = IconColors::new("#111")
            .with_secondary("#222")
            .with_tertiary("#333")
            .to_assignment();
        assert_eq!(full.iter().count(), 3);
    }
}
