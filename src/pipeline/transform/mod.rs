//! Markup rewrite passes.
//!
//! Each pass is a pure `String -> String` rewrite, composed via Pipeline.
//!
//! # Modules
//!
//! - `root`: Replaces the fixed `enable-background` style with a responsive inline style
//! - `region`: Appends click handlers to `<path>`/`<polygon>` elements that carry an `id`
//! - `class`: Renames `class` to `className` for the known style classes

mod class;
mod region;
mod root;

pub use class::ClassNameTransform;
pub use region::{ElementKind, RegionClickTransform};
pub use root::RootStyleTransform;
