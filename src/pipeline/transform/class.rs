//! `class` to `className` renaming for the exported style classes.

use crate::debug;
use crate::error::MarkupError;
use crate::pipeline::Transform;

/// Style classes emitted by the map export.
const RENAMED_CLASSES: [&str; 2] = ["st0", "st1"];

/// Renames literal `class="st0"` / `class="st1"` attributes
pub struct ClassNameTransform;

impl Transform for ClassNameTransform {
    const NAME: &'static str = "class";

    fn transform(&self, mut doc: String) -> Result<String, MarkupError> {
        for class in RENAMED_CLASSES {
            let from = format!(r#"class="{class}""#);
            let count = doc.matches(&from).count();
            if count == 0 {
                continue;
            }
            debug!(Self::NAME; "renamed {} `{}`", count, from);
            doc = doc.replace(&from, &format!(r#"className="{class}""#));
        }
        Ok(doc)
    }
}
