//! Error types for reading, transforming and writing markup.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::cli::InputSource;
use crate::pipeline::ElementKind;

// ============================================================================
// MarkupError
// ============================================================================

/// Failures raised by a transform pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("unterminated <{kind}> tag at byte {offset}")]
    UnterminatedTag { kind: ElementKind, offset: usize },
}

// ============================================================================
// TransformError
// ============================================================================

/// Any failure of a single run, by stage.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to read markup from {0}")]
    Read(InputSource, #[source] io::Error),

    #[error("failed to transform markup")]
    Markup(#[from] MarkupError),

    #[error("failed to write output to `{}`", .0.display())]
    Write(PathBuf, #[source] io::Error),
}
