//! Prospective text: what a field would contain after an edit.
//!
//! Hosts usually report an edit before it happens as "insert this text at the
//! caret" or "replace the selection with this text". Validation needs the whole
//! resulting string, so this module splices the edit into the current text
//! without touching the field itself.
//!
//! All positions are counted in chars (Unicode scalar values), not bytes.
//!
//! # Example
//!
//! ```
//! use numask_core::prospective::build_prospective_text;
//!
//! // Caret after "12", nothing selected.
//! assert_eq!(build_prospective_text("1234", 2, 0, "X").unwrap(), "12X34");
//!
//! // "AB" selected: only the selected span is replaced.
//! assert_eq!(build_prospective_text("AB12AB34", 4, 2, "X").unwrap(), "AB12X34");
//! ```

use crate::error::{EditError, Result};

/// One atomic edit: replace the selection (or insert at the caret) with `inserted`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextEdit {
    /// Start of the selection, or the caret position when nothing is selected.
    pub selection_start: usize,
    /// Number of selected chars. Zero means a plain insertion.
    pub selection_length: usize,
    /// The text being typed or pasted.
    pub inserted: String,
}

impl TextEdit {
    /// Create an edit replacing `selection_length` chars at `selection_start`.
    pub fn new(
        selection_start: usize,
        selection_length: usize,
        inserted: impl Into<String>,
    ) -> Self {
        Self {
            selection_start,
            selection_length,
            inserted: inserted.into(),
        }
    }

    /// Create an edit inserting text at the caret.
    pub fn insert(caret: usize, inserted: impl Into<String>) -> Self {
        Self::new(caret, 0, inserted)
    }

    /// Whether this edit replaces a selection.
    pub fn has_selection(&self) -> bool {
        self.selection_length > 0
    }

    /// Caret position once the edit has been applied.
    pub fn caret_after(&self) -> usize {
        self.selection_start
            .saturating_add(self.inserted.chars().count())
    }

    /// Compute the text `current` would contain after this edit.
    ///
    /// Fails if the selection does not fit inside `current`.
    pub fn apply(&self, current: &str) -> Result<String> {
        let (start, end) = self.byte_range(current)?;

        let mut text = String::with_capacity(current.len() - (end - start) + self.inserted.len());
        text.push_str(&current[..start]);
        text.push_str(&self.inserted);
        text.push_str(&current[end..]);

        crate::numask_trace!(
            selection_start = self.selection_start,
            selection_length = self.selection_length,
            prospective = %text,
            "built prospective text"
        );
        Ok(text)
    }

    /// Map the char selection onto byte offsets of `current`.
    fn byte_range(&self, current: &str) -> Result<(usize, usize)> {
        let out_of_range = || {
            EditError::out_of_range(
                self.selection_start,
                self.selection_length,
                current.chars().count(),
            )
        };

        let end_char = self
            .selection_start
            .checked_add(self.selection_length)
            .ok_or_else(out_of_range)?;
        let start = char_to_byte(current, self.selection_start).ok_or_else(out_of_range)?;
        let end = char_to_byte(current, end_char).ok_or_else(out_of_range)?;
        Ok((start, end))
    }
}

/// Byte offset of the char at `pos`; `pos == char count` maps to the end.
fn char_to_byte(text: &str, pos: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(pos)
}

/// Compute the text a field would contain after an edit.
///
/// With `selection_length > 0` the chars `[selection_start, selection_start + selection_length)`
/// are replaced by `inserted`; otherwise `inserted` goes in at the caret `selection_start`.
pub fn build_prospective_text(
    current: &str,
    selection_start: usize,
    selection_length: usize,
    inserted: &str,
) -> Result<String> {
    TextEdit::new(selection_start, selection_length, inserted).apply(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_caret() {
        assert_eq!(build_prospective_text("1234", 2, 0, "X").unwrap(), "12X34");
    }

    #[test]
    fn test_insert_at_edges() {
        assert_eq!(build_prospective_text("12", 0, 0, "-").unwrap(), "-12");
        assert_eq!(build_prospective_text("12", 2, 0, ".").unwrap(), "12.");
        assert_eq!(build_prospective_text("", 0, 0, "5").unwrap(), "5");
    }

    #[test]
    fn test_replace_selection() {
        assert_eq!(build_prospective_text("12AB34", 2, 2, "X").unwrap(), "12X34");
    }

    #[test]
    fn test_replace_selection_with_duplicates_elsewhere() {
        // The first "AB" must survive; only the selected one is replaced.
        assert_eq!(
            build_prospective_text("AB12AB34", 4, 2, "X").unwrap(),
            "AB12X34"
        );
        assert_eq!(build_prospective_text("1.1.", 2, 1, "").unwrap(), "1..");
    }

    #[test]
    fn test_replace_everything() {
        assert_eq!(build_prospective_text("42", 0, 2, "").unwrap(), "");
        assert_eq!(build_prospective_text("42", 0, 2, "-7").unwrap(), "-7");
    }

    #[test]
    fn test_offsets_count_chars_not_bytes() {
        assert_eq!(build_prospective_text("é1ü2", 2, 1, "X").unwrap(), "é1X2");
        assert_eq!(build_prospective_text("€", 1, 0, "5").unwrap(), "€5");
    }

    #[test]
    fn test_out_of_range_selection() {
        let err = build_prospective_text("12", 3, 0, "X").unwrap_err();
        assert_eq!(err, EditError::out_of_range(3, 0, 2));

        assert!(build_prospective_text("12", 1, 2, "X").is_err());
        assert!(build_prospective_text("12", 1, usize::MAX, "X").is_err());
    }

    #[test]
    fn test_text_edit_caret_after() {
        let edit = TextEdit::new(1, 3, "é5");
        assert!(edit.has_selection());
        assert_eq!(edit.caret_after(), 3);
        assert!(!TextEdit::insert(0, "1").has_selection());
    }

    #[test]
    fn test_caret_after_saturates() {
        assert_eq!(TextEdit::new(usize::MAX, 0, "x").caret_after(), usize::MAX);
        assert_eq!(TextEdit::new(usize::MAX - 1, 0, "xyz").caret_after(), usize::MAX);
    }
}
