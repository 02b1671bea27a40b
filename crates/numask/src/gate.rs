//! Edit gating: the hooks a host text field calls before changing its text.
//!
//! The host reports every pending edit through one of two hooks:
//!
//! - [`EditGate::before_text_change`] for typed text (keystrokes, IME commits)
//! - [`EditGate::before_paste`] for clipboard pastes
//!
//! Each hook builds the prospective text of the field and asks the filter about
//! it. On [`EditDecision::Reject`] the host must drop the edit and leave the
//! field unchanged; on [`EditDecision::Accept`] it applies the edit as usual.
//!
//! # Example
//!
//! ```
//! use numask::filter::NumericFilter;
//! use numask::gate::{EditDecision, EditGate, FieldState};
//!
//! let gate = EditGate::new(NumericFilter::double());
//! let field = FieldState::with_caret("1.5", 3);
//!
//! assert_eq!(gate.before_text_change(&field, "0"), EditDecision::Accept);
//! assert_eq!(gate.before_text_change(&field, "."), EditDecision::Reject);
//! ```

use std::fmt;

use numask_core::logging::targets;
use numask_core::TextEdit;

use crate::filter::InputFilter;

/// Text and selection of a field at the moment an edit is proposed.
///
/// Positions are counted in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState<'a> {
    /// Current text of the field.
    pub text: &'a str,
    /// Selection start, or the caret position when nothing is selected.
    pub selection_start: usize,
    /// Number of selected chars.
    pub selection_length: usize,
}

impl<'a> FieldState<'a> {
    /// Create a field state with a selection.
    pub fn new(text: &'a str, selection_start: usize, selection_length: usize) -> Self {
        Self {
            text,
            selection_start,
            selection_length,
        }
    }

    /// Create a field state with only a caret.
    pub fn with_caret(text: &'a str, caret: usize) -> Self {
        Self::new(text, caret, 0)
    }

    /// The edit that replaces the current selection with `inserted`.
    pub fn edit(&self, inserted: &str) -> TextEdit {
        TextEdit::new(self.selection_start, self.selection_length, inserted)
    }
}

/// Content of a paste request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PastePayload {
    /// Plain text from the clipboard.
    Text(String),
    /// Clipboard data without a text representation (images, files, ...).
    NonText,
}

impl PastePayload {
    /// Create a text payload.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// The pasted text, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::NonText => None,
        }
    }
}

/// What the host should do with a proposed edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditDecision {
    /// Apply the edit.
    Accept,
    /// Drop the edit; the field keeps its text.
    Reject,
}

impl EditDecision {
    /// Returns `true` for [`EditDecision::Accept`].
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accept)
    }

    fn from_accepted(accepted: bool) -> Self {
        if accepted { Self::Accept } else { Self::Reject }
    }
}

impl fmt::Display for EditDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditDecision::Accept => write!(f, "accept"),
            EditDecision::Reject => write!(f, "reject"),
        }
    }
}

/// Where an edit came from; only used for logging.
#[derive(Debug, Clone, Copy)]
enum EditSource {
    Typing,
    Paste,
}

/// Applies an [`InputFilter`] to pending edits.
#[derive(Debug, Clone, Default)]
pub struct EditGate<F> {
    filter: F,
}

impl<F: InputFilter> EditGate<F> {
    /// Create a gate around a filter.
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Get the filter.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Get the filter mutably.
    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }

    /// Hook for typed text, called before the field's text changes.
    ///
    /// Empty input (for example a delete key producing no text) is accepted
    /// as long as the selection lies within the text.
    pub fn before_text_change(&self, field: &FieldState<'_>, inserted: &str) -> EditDecision {
        self.evaluate(field, inserted, EditSource::Typing)
    }

    /// Hook for clipboard pastes, called before the paste is committed.
    ///
    /// Payloads without text are not this filter's business and pass through.
    pub fn before_paste(&self, field: &FieldState<'_>, payload: &PastePayload) -> EditDecision {
        match payload.as_text() {
            Some(text) => self.evaluate(field, text, EditSource::Paste),
            None => {
                tracing::trace!(target: targets::GATE, "non-text paste passed through");
                EditDecision::Accept
            }
        }
    }

    fn evaluate(&self, field: &FieldState<'_>, inserted: &str, source: EditSource) -> EditDecision {
        // Offsets are checked even for empty input; a delete past the end is malformed too.
        let prospective = match field.edit(inserted).apply(field.text) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    target: targets::GATE,
                    ?source,
                    %err,
                    "rejected edit with malformed selection"
                );
                return EditDecision::Reject;
            }
        };

        if inserted.is_empty() {
            return EditDecision::Accept;
        }

        let decision = EditDecision::from_accepted(self.filter.should_accept(&prospective));
        if decision.is_accepted() {
            tracing::trace!(target: targets::GATE, ?source, %prospective, "edit accepted");
        } else {
            tracing::debug!(
                target: targets::GATE,
                ?source,
                inserted,
                %prospective,
                "edit rejected"
            );
        }
        decision
    }
}
