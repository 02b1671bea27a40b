//! Error types for numask-core.

use thiserror::Error;

/// Errors that can occur while describing or applying an edit.
///
/// Validation itself never fails; only edits that point outside the
/// field's text are reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The selection (or caret) does not fit inside the current text.
    ///
    /// All values are counted in chars.
    #[error("selection {start}+{length} is out of range for text of {text_len} chars")]
    SelectionOutOfRange {
        start: usize,
        length: usize,
        text_len: usize,
    },
}

impl EditError {
    /// Create a selection range error.
    pub fn out_of_range(start: usize, length: usize, text_len: usize) -> Self {
        Self::SelectionOutOfRange {
            start,
            length,
            text_len,
        }
    }
}

/// Result type for edit operations.
pub type Result<T> = std::result::Result<T, EditError>;
