//! Markup rewrite pipeline.
//!
//! Threads one document string through the rewrite passes, in order.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  RootStyle ─► RegionClick ─► ClassName               │
//! │  (first match)  (every path/polygon)  (literal)      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Each pass sees the output of the previous one. A failing pass aborts
//! the rest of the pipeline.

pub mod transform;

use crate::debug;
use crate::error::MarkupError;

pub use transform::{ClassNameTransform, ElementKind, RegionClickTransform, RootStyleTransform};

// =============================================================================
// Transform
// =============================================================================

/// A single textual rewrite pass over the whole document.
pub trait Transform {
    /// Short name used in log prefixes.
    const NAME: &'static str;

    fn transform(&self, doc: String) -> Result<String, MarkupError>;
}

/// Owns the document while passes are applied to it.
#[derive(Debug)]
pub struct Pipeline {
    doc: String,
}

impl Pipeline {
    pub fn new(doc: impl Into<String>) -> Self {
        Self { doc: doc.into() }
    }

    /// Apply one pass, consuming the pipeline.
    pub fn pipe<T: Transform>(self, pass: T) -> Result<Self, MarkupError> {
        let before = self.doc.len();
        let doc = pass.transform(self.doc)?;
        debug!(T::NAME; "{} -> {} bytes", before, doc.len());
        Ok(Self { doc })
    }

    pub fn into_inner(self) -> String {
        self.doc
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Run every pass over `input` and return the rewritten markup.
pub fn transform(input: &str) -> Result<String, MarkupError> {
    Ok(Pipeline::new(input)
        .pipe(RootStyleTransform)?
        .pipe(RegionClickTransform)?
        .pipe(ClassNameTransform)?
        .into_inner())
}
