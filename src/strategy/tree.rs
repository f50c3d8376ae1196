//! Tree-based recoloring using quick-xml.
//!
//! The source markup is validated as XML at construction and rewritten one
//! event at a time on each recoloring call: events for matched elements are
//! rebuilt with the new `fill` attribute, everything else is copied through
//! untouched. Elements that already carry the requested fill value are
//! passed through byte-identically, so recoloring to a color the document
//! already has leaves the markup byte-for-byte unchanged.
//!
//! Selection is namespace-correct: when the source declares the SVG
//! namespace, only elements resolved into it are matched; sources without a
//! namespace declaration match on the bare element names.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{QName, ResolveResult};
use quick_xml::reader::NsReader;
use quick_xml::writer::Writer;

use crate::error::RecolorError;
use crate::palette::ClassToken;
use crate::source::SvgSource;
use crate::strategy::Recolorer;

const SVG_NAMESPACE: &[u8] = b"http://www.w3.org/2000/svg";

/// Recolors SVG markup by rewriting attributes on the parsed element tree.
///
/// The preferred strategy: immune to attribute ordering, stray whitespace,
/// and other formatting artifacts that trip up text-level rewriting.
///
/// # Example
///
/// ```
/// use svg_recolor::{ClassToken, Recolorer, TreeRecolorer};
///
/// let mut icon = TreeRecolorer::from_markup(r#"<svg><path class="primary"/></svg>"#);
/// icon.set_fill_by_class(ClassToken::Primary, "#fafafa");
/// let out = icon.to_svg_string().unwrap();
/// assert!(out.contains(r##"fill="#fafafa""##));
/// ```
pub struct TreeRecolorer {
    state: Result<String, RecolorError>,
}

impl TreeRecolorer {
    /// Constructs a recolorer from any [`SvgSource`].
    ///
    /// Failure to read or parse the source never escapes: the recolorer
    /// comes back empty with the reason stored on it.
    pub fn from_source(source: &SvgSource) -> Self {
        let state = source.resolve().and_then(validate_markup);
        Self { state }
    }

    /// Constructs a recolorer from in-memory markup.
    pub fn from_markup(markup: impl Into<String>) -> Self {
        Self::from_source(&SvgSource::Markup(markup.into()))
    }

    /// Constructs a recolorer by reading the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::from_source(&SvgSource::Path(path.as_ref().to_path_buf()))
    }
}

impl Recolorer for TreeRecolorer {
    fn set_fill_by_class(&mut self, class: ClassToken, color: &str) {
        let Ok(markup) = &self.state else {
            return;
        };
        // The markup was validated at construction, so the rewrite pass can
        // only fail on input mutated out from under us; keep the document
        // unchanged in that case.
        if let Ok(rewritten) = rewrite_fill(markup, class.as_str(), color) {
            self.state = Ok(rewritten);
        }
    }

    fn to_svg_string(&self) -> Option<String> {
        self.state.as_ref().ok().cloned()
    }

    fn write_to_file(&self, path: Option<&Path>) -> Result<(), RecolorError> {
        let path = path.ok_or(RecolorError::MissingOutputPath)?;
        let Ok(markup) = &self.state else {
            return Ok(());
        };
        fs::write(path, markup).map_err(|source| RecolorError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    fn error(&self) -> Option<&RecolorError> {
        self.state.as_ref().err()
    }
}

/// Streams every event in `markup` to prove it is well-formed XML.
fn validate_markup(markup: String) -> Result<String, RecolorError> {
    let mut reader = NsReader::from_str(&markup);
    loop {
        match reader.read_resolved_event() {
            Ok((_, Event::Eof)) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(RecolorError::MalformedMarkup {
                    detail: err.to_string(),
                });
            }
        }
    }
    Ok(markup)
}

/// Single reader-to-writer pass setting `fill` on elements matching `class`.
fn rewrite_fill(markup: &str, class: &str, color: &str) -> Result<String, quick_xml::Error> {
    let mut reader = NsReader::from_str(markup);
    let mut writer = Writer::new(Vec::new());

    loop {
        let (resolve, event) = reader.read_resolved_event()?;
        let in_namespace = in_svg_namespace(&resolve);
        match event {
            Event::Start(elem) => {
                let elem = recolor_element(elem, in_namespace, class, color)?;
                writer.write_event(Event::Start(elem))?;
            }
            Event::Empty(elem) => {
                let elem = recolor_element(elem, in_namespace, class, color)?;
                writer.write_event(Event::Empty(elem))?;
            }
            Event::Eof => break,
            other => writer.write_event(other)?,
        }
    }

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Accepts elements bound to the SVG namespace, plus unbound elements for
/// sources that declare no namespace at all.
fn in_svg_namespace(resolve: &ResolveResult<'_>) -> bool {
    match resolve {
        ResolveResult::Bound(ns) => ns.0 == SVG_NAMESPACE,
        ResolveResult::Unbound => true,
        ResolveResult::Unknown(_) => false,
    }
}

/// Rebuilds `elem` with `fill` set to `color` when its `class` attribute
/// equals `class` exactly; otherwise returns it untouched.
fn recolor_element<'a>(
    elem: BytesStart<'a>,
    in_namespace: bool,
    class: &str,
    color: &str,
) -> Result<BytesStart<'a>, quick_xml::Error> {
    if !in_namespace || !has_class(&elem, class)? {
        return Ok(elem);
    }

    let escaped = escape(color);
    let target = escaped.as_bytes();

    // Already at the requested color: pass the original bytes through so a
    // no-op recolor stays byte-for-byte stable.
    let mut current_fill = None;
    for attr in elem.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"fill" {
            current_fill = Some(attr.value.into_owned());
        }
    }
    if current_fill.as_deref() == Some(target) {
        return Ok(elem);
    }

    let name = String::from_utf8_lossy(elem.name().as_ref()).into_owned();
    let mut rebuilt = BytesStart::new(name);
    let mut replaced = false;
    for attr in elem.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"fill" {
            rebuilt.push_attribute(Attribute {
                key: QName(b"fill"),
                value: Cow::Owned(target.to_vec()),
            });
            replaced = true;
        } else {
            rebuilt.push_attribute(attr);
        }
    }
    if !replaced {
        rebuilt.push_attribute(("fill", color));
    }
    Ok(rebuilt)
}

fn has_class(elem: &BytesStart<'_>, class: &str) -> Result<bool, quick_xml::Error> {
    for attr in elem.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"class" && attr.value.as_ref() == class.as_bytes() {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fill_of<'a>(doc: &'a roxmltree::Document, class: &str) -> Option<&'a str> {
        doc.descendants()
            .find(|n| n.attribute("class") == Some(class))
            .and_then(|n| n.attribute("fill"))
    }

    #[test]
    fn sets_fill_on_matching_class() {
        let mut icon = TreeRecolorer::from_markup(
            r##"<svg><path class="primary" fill="#000"/><path class="secondary"/></svg>"##,
        );
        icon.set_fill_by_class(ClassToken::Primary, "#fafafa");
        icon.set_fill_by_class(ClassToken::Secondary, "#44DEB0");

        let out = icon.to_svg_string().unwrap();
        let doc = roxmltree::Document::parse(&out).unwrap();
        assert_eq!(fill_of(&doc, "primary"), Some("#fafafa"));
        assert_eq!(fill_of(&doc, "secondary"), Some("#44DEB0"));
    }

    #[test]
    fn noop_recolor_is_byte_stable() {
        let markup = r##"<svg><path class="primary" fill="#fafafa"/><circle r="4"/></svg>"##;
        let mut icon = TreeRecolorer::from_markup(markup);
        icon.set_fill_by_class(ClassToken::Primary, "#fafafa");
        assert_eq!(icon.to_svg_string().unwrap(), markup);
    }

    #[test]
    fn recoloring_is_idempotent() {
        let mut icon = TreeRecolorer::from_markup(
            r##"<svg><path class="primary"/><path class="secondary" fill="none"/></svg>"##,
        );
        icon.set_fill_by_class(ClassToken::Primary, "#111");
        icon.set_fill_by_class(ClassToken::Secondary, "#222");
        let first = icon.to_svg_string().unwrap();

        icon.set_fill_by_class(ClassToken::Primary, "#111");
        icon.set_fill_by_class(ClassToken::Secondary, "#222");
        assert_eq!(icon.to_svg_string().unwrap(), first);
    }

    #[test]
    fn other_classes_are_untouched() {
        let markup = r##"<svg><path class="primary" fill="#000"/><path class="tertiary" fill="#333"/></svg>"##;
        let mut icon = TreeRecolorer::from_markup(markup);
        icon.set_fill_by_class(ClassToken::Secondary, "#fff");

        let out = icon.to_svg_string().unwrap();
        let doc = roxmltree::Document::parse(&out).unwrap();
        assert_eq!(fill_of(&doc, "primary"), Some("#000"));
        assert_eq!(fill_of(&doc, "tertiary"), Some("#333"));
    }

    #[test]
    fn matches_nested_elements() {
        let mut icon = TreeRecolorer::from_markup(
            r##"<svg><g><g><path class="primary"/></g></g></svg>"##,
        );
        icon.set_fill_by_class(ClassToken::Primary, "#abc");

        let out = icon.to_svg_string().unwrap();
        let doc = roxmltree::Document::parse(&out).unwrap();
        assert_eq!(fill_of(&doc, "primary"), Some("#abc"));
    }

    #[test]
    fn matches_elements_in_svg_namespace() {
        let mut icon = TreeRecolorer::from_markup(
            r##"<svg xmlns="http://www.w3.org/2000/svg"><path class="primary"/></svg>"##,
        );
        icon.set_fill_by_class(ClassToken::Primary, "#fafafa");

        let out = icon.to_svg_string().unwrap();
        assert!(out.contains(r##"fill="#fafafa""##));
    }

    #[test]
    fn skips_elements_in_foreign_namespace() {
        let markup = concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:x="urn:other">"#,
            r#"<x:path class="primary"/></svg>"#
        );
        let mut icon = TreeRecolorer::from_markup(markup);
        icon.set_fill_by_class(ClassToken::Primary, "#fafafa");

        let out = icon.to_svg_string().unwrap();
        assert!(!out.contains("fill"));
    }

    #[test]
    fn exact_class_match_only() {
        let markup = r##"<svg><path class="primary extra"/></svg>"##;
        let mut icon = TreeRecolorer::from_markup(markup);
        icon.set_fill_by_class(ClassToken::Primary, "#fafafa");
        assert_eq!(icon.to_svg_string().unwrap(), markup);
    }

    #[test]
    fn malformed_markup_yields_empty_recolorer() {
        let mut icon = TreeRecolorer::from_markup("<svg><path></svg>");
        assert!(icon.is_empty());
        assert!(icon.error().unwrap().is_malformed_markup());

        // Later calls are harmless no-ops.
        icon.set_fill_by_class(ClassToken::Primary, "#fff");
        assert_eq!(icon.to_svg_string(), None);
    }

    #[test]
    fn missing_path_yields_empty_recolorer() {
        let mut icon = TreeRecolorer::from_path("/nonexistent/icon.svg");
        assert!(icon.is_empty());
        assert!(icon.error().unwrap().is_source_unreadable());

        icon.set_fill_by_class(ClassToken::Primary, "#fff");
        assert_eq!(icon.to_svg_string(), None);
        assert!(icon.write_to_file(None).is_err());
    }

    #[test]
    fn write_to_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");

        let mut icon = TreeRecolorer::from_markup(r##"<svg><path class="primary"/></svg>"##);
        icon.set_fill_by_class(ClassToken::Primary, "#123456");
        icon.write_to_file(Some(&path)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, icon.to_svg_string().unwrap());
    }

    #[test]
    fn write_without_path_is_missing_output_path() {
        let icon = TreeRecolorer::from_markup("<svg/>");
        let err = icon.write_to_file(None).unwrap_err();
        assert!(matches!(err, RecolorError::MissingOutputPath));
    }

    #[test]
    fn empty_document_write_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");

        let icon = TreeRecolorer::from_markup("not xml <<<");
        icon.write_to_file(Some(&path)).unwrap();
        assert!(!path.exists());
    }
}
