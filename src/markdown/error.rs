//! Render failures.

use thiserror::Error;

use crate::highlight::HighlightError;

/// Errors that fail a whole document render.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Code block highlighting failed; not retried or caught per block.
    #[error("code block highlighting failed")]
    Highlight(#[from] HighlightError),

    /// Override registered under a tag name outside the supported kinds.
    #[error("unknown element kind: {0}")]
    UnknownElementKind(String),
}
