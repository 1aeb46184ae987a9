//! Root style rewrite.
//!
//! Illustrator exports carry `style="enable-background:new 0 0 W H"` on the
//! root `<svg>`. Only the first occurrence is replaced with an inline style
//! object that lets the map scale with its container.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::debug;
use crate::error::MarkupError;
use crate::pipeline::Transform;

/// Inline style replacing the fixed viewport declaration.
pub const RESPONSIVE_STYLE: &str = "style={{ width: '100%', height: 'auto' }}";

static RE_ENABLE_BACKGROUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"style="enable-background:new 0 0 \d+\.?\d* \d+\.?\d*";""#).unwrap()
});

/// Replaces the first `enable-background` style declaration
pub struct RootStyleTransform;

impl Transform for RootStyleTransform {
    const NAME: &'static str = "root";

    fn transform(&self, doc: String) -> Result<String, MarkupError> {
        let Some(found) = RE_ENABLE_BACKGROUND.find(&doc) else {
            debug!(Self::NAME; "no enable-background style found");
            return Ok(doc);
        };

        debug!(Self::NAME; "replacing `{}`", found.as_str());
        Ok(RE_ENABLE_BACKGROUND
            .replacen(&doc, 1, NoExpand(RESPONSIVE_STYLE))
            .into_owned())
    }
}
