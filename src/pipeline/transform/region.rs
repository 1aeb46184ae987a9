//! Region click handlers for `<path>` and `<polygon>` elements.
//!
//! Every element that carries an `id` gets an `onClick` attribute calling
//! `handleRegionClick` with that id. Everything else in the element, its
//! attributes, content and closing form, is copied through verbatim.
//!
//! # Element Span
//!
//! ```text
//! <path id="A" d="…"/>                   self-closing
//! <polygon id="B" points="…">…</polygon> open, content, first matching close
//! ```
//!
//! Scanning resumes after each element, so siblings are never merged and
//! nested content is not rescanned.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::debug;
use crate::error::MarkupError;
use crate::pipeline::Transform;

/// Handler invoked by the generated `onClick` attribute.
pub const REGION_HANDLER: &str = "handleRegionClick";

/// Opening tag up to (not including) its terminating `>`, or a bare kind at end of input.
static RE_OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(path|polygon)(\s[^>]*|$)").unwrap());

static RE_ID_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)id="([^"]+)""#).unwrap());

static RE_ONCLICK_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)onClick=").unwrap());

// =============================================================================
// ElementKind
// =============================================================================

/// Element kinds that receive click handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Path,
    Polygon,
}

impl ElementKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Polygon => "polygon",
        }
    }

    /// Closing tag, e.g. `</path>`.
    fn closing_tag(self) -> &'static str {
        match self {
            Self::Path => "</path>",
            Self::Polygon => "</polygon>",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ElementMatch
// =============================================================================

/// One matched element span, borrowed from the document.
#[derive(Debug, PartialEq, Eq)]
struct ElementMatch<'a> {
    kind: ElementKind,
    /// Attribute text, including its leading whitespace.
    attributes: &'a str,
    /// `/>` or `>content</kind>`.
    closing: &'a str,
    /// Byte range of the whole element in the document.
    start: usize,
    end: usize,
}

impl ElementMatch<'_> {
    fn region_id(&self) -> Option<&str> {
        RE_ID_ATTR
            .captures(self.attributes)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn has_click_handler(&self) -> bool {
        RE_ONCLICK_ATTR.is_match(self.attributes)
    }

    /// Element with the handler attribute appended after the original attributes.
    fn with_handler(&self, region_id: &str) -> String {
        format!(
            "<{}{} onClick={{() => {}('{}')}}{}",
            self.kind,
            self.attributes,
            REGION_HANDLER,
            escape_region_id(region_id),
            self.closing
        )
    }
}

/// Escape single quotes for the handler's string literal.
///
/// Backslashes and other characters are passed through unchanged.
pub fn escape_region_id(id: &str) -> String {
    id.replace('\'', r"\'")
}

// =============================================================================
// Scanner
// =============================================================================

enum Scan<'a> {
    Element(ElementMatch<'a>),
    /// Opening tag has no matching close; resume after the tag.
    Unclosed { resume: usize },
}

/// Find the next element span starting at or after `from`.
fn next_element(doc: &str, from: usize) -> Result<Option<Scan<'_>>, MarkupError> {
    let Some(caps) = RE_OPEN_TAG.captures_at(doc, from) else {
        return Ok(None);
    };
    // every group participates in a match of RE_OPEN_TAG
    let whole = caps.get_match();
    let attrs = caps.get(2).map_or("", |m| m.as_str());
    let kind = match &caps[1] {
        "path" => ElementKind::Path,
        _ => ElementKind::Polygon,
    };

    // `[^>]*` only stops at `>` or end of input
    let tag_end = whole.end();
    if !doc[tag_end..].starts_with('>') {
        return Err(MarkupError::UnterminatedTag {
            kind,
            offset: whole.start(),
        });
    }

    if let Some(attributes) = attrs.strip_suffix('/') {
        return Ok(Some(Scan::Element(ElementMatch {
            kind,
            attributes,
            closing: &doc[tag_end - 1..tag_end + 1],
            start: whole.start(),
            end: tag_end + 1,
        })));
    }

    let close = kind.closing_tag();
    match doc[tag_end..].find(close) {
        Some(pos) => {
            let end = tag_end + pos + close.len();
            Ok(Some(Scan::Element(ElementMatch {
                kind,
                attributes: attrs,
                closing: &doc[tag_end..end],
                start: whole.start(),
                end,
            })))
        }
        None => Ok(Some(Scan::Unclosed {
            resume: tag_end + 1,
        })),
    }
}

// =============================================================================
// Transform
// =============================================================================

/// Appends `onClick` region handlers to identified `<path>`/`<polygon>` elements
pub struct RegionClickTransform;

impl Transform for RegionClickTransform {
    const NAME: &'static str = "region";

    fn transform(&self, doc: String) -> Result<String, MarkupError> {
        let mut out = String::with_capacity(doc.len() + doc.len() / 8);
        let mut copied = 0;
        let mut cursor = 0;
        let mut bound = 0usize;
        let mut skipped = 0usize;

        while let Some(scan) = next_element(&doc, cursor)? {
            let element = match scan {
                Scan::Element(element) => element,
                Scan::Unclosed { resume } => {
                    debug!(Self::NAME; "no closing tag after byte {}, left as is", resume);
                    cursor = resume;
                    continue;
                }
            };
            cursor = element.end;

            let region_id = match element.region_id() {
                Some(id) if !element.has_click_handler() => id,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            out.push_str(&doc[copied..element.start]);
            out.push_str(&element.with_handler(region_id));
            copied = element.end;
            bound += 1;
        }

        if bound == 0 {
            debug!(Self::NAME; "no region elements bound ({} skipped)", skipped);
            return Ok(doc);
        }

        out.push_str(&doc[copied..]);
        debug!(Self::NAME; "bound {} region elements ({} skipped)", bound, skipped);
        Ok(out)
    }
}
