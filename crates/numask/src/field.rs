//! A text field model with an injected input filter.
//!
//! [`MaskedField`] keeps the text, caret and selection of a single-line field
//! and routes every keystroke and paste through an [`EditGate`]. Hosts that own
//! their own text storage can call the gate directly instead; this type is for
//! hosts that want the field state managed for them (and for testing a filter
//! against realistic editing sequences).
//!
//! # Example
//!
//! ```
//! use numask::field::MaskedField;
//! use numask::filter::NumericFilter;
//!
//! let mut field = MaskedField::new(NumericFilter::double());
//! for key in ["-", ".", "5", ".", "x"] {
//!     field.type_text(key);
//! }
//! assert_eq!(field.text(), "-.5");
//! assert_eq!(field.rejected_count(), 2);
//! ```

use numask_core::logging::targets;
use numask_core::EditError;

use crate::error::Result;
use crate::filter::{InputFilter, NumericFilter};
use crate::gate::{EditDecision, EditGate, FieldState, PastePayload};

/// A single-line text field whose edits are checked by a filter.
///
/// Positions (caret, selection) are char offsets into the text.
#[derive(Debug, Clone)]
pub struct MaskedField<F = NumericFilter> {
    /// Gate holding the injected filter.
    gate: EditGate<F>,

    /// The actual text content.
    text: String,

    /// Caret position.
    caret: usize,

    /// Selection anchor. If set, the selection spans anchor to caret.
    selection_anchor: Option<usize>,

    /// Whether edits are refused outright.
    read_only: bool,

    /// Number of edits the gate suppressed.
    rejected: usize,
}

impl<F: InputFilter> MaskedField<F> {
    /// Create an empty field.
    pub fn new(filter: F) -> Self {
        Self {
            gate: EditGate::new(filter),
            text: String::new(),
            caret: 0,
            selection_anchor: None,
            read_only: false,
            rejected: 0,
        }
    }

    /// Create a field with initial text and the caret at the end.
    ///
    /// The initial text is not filtered.
    pub fn with_text(filter: F, text: impl Into<String>) -> Self {
        let mut field = Self::new(filter);
        field.set_text(text);
        field
    }

    /// Get the filter.
    pub fn filter(&self) -> &F {
        self.gate.filter()
    }

    /// Get the filter mutably, for example to switch modes.
    pub fn filter_mut(&mut self) -> &mut F {
        self.gate.filter_mut()
    }

    // =========================================================================
    // Text Access
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the text length in chars.
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the text without consulting the filter.
    ///
    /// This clears any selection and moves the caret to the end, the way a
    /// host assigns its own content programmatically.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.text_length();
        self.selection_anchor = None;
    }

    /// Clear all text.
    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Check if the field is read-only.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Set read-only mode.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Number of edits rejected so far.
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    // =========================================================================
    // Caret and Selection
    // =========================================================================

    /// Get the caret position.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Move the caret, clearing any selection.
    pub fn set_caret(&mut self, pos: usize) -> Result<()> {
        self.check_range(pos, 0)?;
        self.caret = pos;
        self.selection_anchor = None;
        Ok(())
    }

    /// Select `length` chars starting at `start`; the caret ends up after them.
    pub fn select(&mut self, start: usize, length: usize) -> Result<()> {
        self.check_range(start, length)?;
        self.selection_anchor = Some(start);
        self.caret = start + length;
        Ok(())
    }

    /// Select all text.
    pub fn select_all(&mut self) {
        if !self.text.is_empty() {
            self.selection_anchor = Some(0);
            self.caret = self.text_length();
        }
    }

    /// Clear the selection without deleting text.
    pub fn deselect(&mut self) {
        self.selection_anchor = None;
    }

    /// Check if there is a non-empty selection.
    pub fn has_selection(&self) -> bool {
        self.selection_anchor.is_some_and(|anchor| anchor != self.caret)
    }

    /// Get the selection as `(start, length)`.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection_anchor
            .filter(|&anchor| anchor != self.caret)
            .map(|anchor| {
                let start = anchor.min(self.caret);
                (start, anchor.max(self.caret) - start)
            })
    }

    /// Get the selected text.
    pub fn selected_text(&self) -> &str {
        match self.selection() {
            Some((start, length)) => {
                &self.text[self.byte_offset(start)..self.byte_offset(start + length)]
            }
            None => "",
        }
    }

    /// The state the gate sees for the next edit.
    pub fn state(&self) -> FieldState<'_> {
        match self.selection() {
            Some((start, length)) => FieldState::new(&self.text, start, length),
            None => FieldState::with_caret(&self.text, self.caret),
        }
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Type text at the caret, replacing the selection if any.
    ///
    /// Returns the gate's decision; on reject the field is left unchanged.
    pub fn type_text(&mut self, inserted: &str) -> EditDecision {
        if self.read_only {
            return self.reject();
        }
        let decision = self.gate.before_text_change(&self.state(), inserted);
        self.commit(inserted, decision)
    }

    /// Paste clipboard content at the caret, replacing the selection if any.
    ///
    /// Non-text payloads are accepted but leave the text unchanged.
    pub fn paste(&mut self, payload: &PastePayload) -> EditDecision {
        if self.read_only {
            return self.reject();
        }
        let decision = self.gate.before_paste(&self.state(), payload);
        match payload.as_text() {
            Some(text) => self.commit(text, decision),
            None => decision,
        }
    }

    fn commit(&mut self, inserted: &str, decision: EditDecision) -> EditDecision {
        if !decision.is_accepted() {
            return self.reject();
        }

        let edit = self.state().edit(inserted);
        match edit.apply(&self.text) {
            Ok(text) => {
                self.text = text;
                self.caret = edit.caret_after();
                self.selection_anchor = None;
                EditDecision::Accept
            }
            Err(err) => {
                tracing::warn!(target: targets::FIELD, %err, "accepted edit could not be applied");
                self.reject()
            }
        }
    }

    fn reject(&mut self) -> EditDecision {
        self.rejected += 1;
        tracing::debug!(
            target: targets::FIELD,
            text = %self.text,
            rejected = self.rejected,
            "field kept its text"
        );
        EditDecision::Reject
    }

    fn check_range(&self, start: usize, length: usize) -> numask_core::Result<()> {
        let text_len = self.text_length();
        match start.checked_add(length) {
            Some(end) if end <= text_len => Ok(()),
            _ => Err(EditError::out_of_range(start, length, text_len)),
        }
    }

    /// Byte offset of a char position already known to be in range.
    fn byte_offset(&self, pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(pos)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

static_assertions::assert_impl_all!(MaskedField: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_field_creation() {
        let field = MaskedField::new(NumericFilter::integer());
        assert_eq!(field.text(), "");
        assert_eq!(field.caret(), 0);
        assert!(!field.has_selection());
        assert!(!field.is_read_only());
    }

    #[test]
    fn test_with_text() {
        let field = MaskedField::with_text(NumericFilter::double(), "1.5");
        assert_eq!(field.text(), "1.5");
        assert_eq!(field.caret(), 3);
    }

    #[test]
    fn test_typing_moves_caret() {
        let mut field = MaskedField::new(NumericFilter::integer());
        assert!(field.type_text("4").is_accepted());
        assert!(field.type_text("2").is_accepted());
        field.set_caret(0).unwrap();
        assert!(field.type_text("-").is_accepted());
        assert_eq!(field.text(), "-42");
        assert_eq!(field.caret(), 1);
    }

    #[test]
    fn test_rejected_typing_keeps_state() {
        let mut field = MaskedField::with_text(NumericFilter::integer(), "42");
        field.set_caret(1).unwrap();
        assert_eq!(field.type_text("x"), EditDecision::Reject);
        assert_eq!(field.text(), "42");
        assert_eq!(field.caret(), 1);
        assert_eq!(field.rejected_count(), 1);
    }

    #[test]
    fn test_selection() {
        let mut field = MaskedField::with_text(NumericFilter::double(), "12.5");
        field.select(1, 2).unwrap();
        assert!(field.has_selection());
        assert_eq!(field.selection(), Some((1, 2)));
        assert_eq!(field.selected_text(), "2.");

        field.deselect();
        assert!(!field.has_selection());
        assert_eq!(field.selected_text(), "");
    }

    #[test]
    fn test_typing_replaces_selection() {
        let mut field = MaskedField::with_text(NumericFilter::double(), "12.5");
        field.select(1, 2).unwrap();
        assert!(field.type_text("0").is_accepted());
        assert_eq!(field.text(), "105");
        assert_eq!(field.caret(), 2);
        assert!(!field.has_selection());
    }

    #[test]
    fn test_select_all_and_delete() {
        let mut field = MaskedField::with_text(NumericFilter::integer(), "123");
        field.select_all();
        assert_eq!(field.selected_text(), "123");
        assert!(field.type_text("").is_accepted());
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_out_of_range_positions() {
        let mut field = MaskedField::with_text(NumericFilter::integer(), "12");
        assert!(matches!(
            field.set_caret(3),
            Err(Error::Edit(EditError::SelectionOutOfRange { start: 3, length: 0, text_len: 2 }))
        ));
        let err = field.select(1, 2).unwrap_err();
        assert_eq!(err.to_string(), "selection 1+2 is out of range for text of 2 chars");
        assert!(field.select(2, usize::MAX).is_err());
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn test_paste() {
        let mut field = MaskedField::with_text(NumericFilter::double(), "1");
        assert!(field.paste(&PastePayload::text(".25")).is_accepted());
        assert_eq!(field.text(), "1.25");
        assert_eq!(field.caret(), 4);

        assert_eq!(field.paste(&PastePayload::text(".5")), EditDecision::Reject);
        assert_eq!(field.text(), "1.25");

        assert!(field.paste(&PastePayload::NonText).is_accepted());
        assert_eq!(field.text(), "1.25");
    }

    #[test]
    fn test_read_only_rejects_edits() {
        let mut field = MaskedField::with_text(NumericFilter::integer(), "7");
        field.set_read_only(true);
        assert_eq!(field.type_text("1"), EditDecision::Reject);
        assert_eq!(field.paste(&PastePayload::text("1")), EditDecision::Reject);
        assert_eq!(field.text(), "7");
    }

    #[test]
    fn test_switching_mode() {
        let mut field = MaskedField::with_text(NumericFilter::double(), "3");
        assert!(field.type_text(".").is_accepted());
        field.clear();
        field.filter_mut().set_mode(crate::filter::InputMode::Integer);
        assert_eq!(field.type_text("."), EditDecision::Reject);
    }

    #[test]
    fn test_multibyte_text() {
        let mut field = MaskedField::with_text(NumericFilter::double(), "é1");
        field.select(1, 1).unwrap();
        assert_eq!(field.selected_text(), "1");
    }
}
